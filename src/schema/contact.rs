//! Contact record types.
//!
//! Three shapes of the same entity:
//! - [`Contact`]: a persisted record, id included, as served over HTTP
//! - [`ContactInput`]: a request payload; every field optional so that a
//!   missing required field surfaces as a validation message rather than a
//!   deserialization failure
//! - [`ContactFields`]: the validated field set a store persists

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted contact record.
///
/// Serialized with camelCase keys to match the HTTP contract:
/// `{ id, firstName, lastName, email, favoriteColor?, birthday? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Backend-assigned identifier, immutable for the record's lifetime.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
    /// ISO calendar date (`YYYY-MM-DD`) in JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl Contact {
    /// Assemble a record from validated fields and an assigned id.
    pub fn from_fields(id: impl Into<String>, fields: ContactFields) -> Self {
        Self {
            id: id.into(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            favorite_color: fields.favorite_color,
            birthday: fields.birthday,
        }
    }
}

/// An incoming contact payload, full or partial.
///
/// Unknown extra fields in the body are ignored, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub favorite_color: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl ContactInput {
    /// Overlay this patch onto an existing record.
    ///
    /// Fields present in the patch win; omitted fields keep their stored
    /// values. The result is a full candidate document that update paths
    /// re-validate against every rule.
    pub fn merged_with(self, existing: &Contact) -> ContactInput {
        ContactInput {
            first_name: self.first_name.or_else(|| Some(existing.first_name.clone())),
            last_name: self.last_name.or_else(|| Some(existing.last_name.clone())),
            email: self.email.or_else(|| Some(existing.email.clone())),
            favorite_color: self
                .favorite_color
                .or_else(|| existing.favorite_color.clone()),
            birthday: self.birthday.or(existing.birthday),
        }
    }
}

/// The validated, normalized field set of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: Option<String>,
    pub birthday: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_contact() -> Contact {
        Contact {
            id: "65a114efb7d2a33b5c8f0e21".to_string(),
            first_name: "Benny".to_string(),
            last_name: "Jay".to_string(),
            email: "benny@example.com".to_string(),
            favorite_color: Some("Blue".to_string()),
            birthday: NaiveDate::from_ymd_opt(1995, 5, 15),
        }
    }

    #[test]
    fn test_contact_json_shape() {
        let contact = stored_contact();
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(json["id"], "65a114efb7d2a33b5c8f0e21");
        assert_eq!(json["firstName"], "Benny");
        assert_eq!(json["lastName"], "Jay");
        assert_eq!(json["email"], "benny@example.com");
        assert_eq!(json["favoriteColor"], "Blue");
        assert_eq!(json["birthday"], "1995-05-15");
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let mut contact = stored_contact();
        contact.favorite_color = None;
        contact.birthday = None;

        let json = serde_json::to_value(&contact).unwrap();
        assert!(json.get("favoriteColor").is_none());
        assert!(json.get("birthday").is_none());
    }

    #[test]
    fn test_input_ignores_unknown_fields() {
        let input: ContactInput = serde_json::from_value(serde_json::json!({
            "firstName": "Benny",
            "nickname": "B",
            "age": 30
        }))
        .unwrap();

        assert_eq!(input.first_name.as_deref(), Some("Benny"));
        assert!(input.last_name.is_none());
    }

    #[test]
    fn test_merge_patch_fields_win() {
        let existing = stored_contact();
        let patch = ContactInput {
            email: Some("benny.jay@example.com".to_string()),
            ..Default::default()
        };

        let merged = patch.merged_with(&existing);
        assert_eq!(merged.first_name.as_deref(), Some("Benny"));
        assert_eq!(merged.last_name.as_deref(), Some("Jay"));
        assert_eq!(merged.email.as_deref(), Some("benny.jay@example.com"));
        assert_eq!(merged.favorite_color.as_deref(), Some("Blue"));
        assert_eq!(merged.birthday, NaiveDate::from_ymd_opt(1995, 5, 15));
    }

    #[test]
    fn test_merge_keeps_stored_optionals() {
        let existing = stored_contact();
        let merged = ContactInput::default().merged_with(&existing);

        assert_eq!(merged.favorite_color.as_deref(), Some("Blue"));
        assert_eq!(merged.birthday, NaiveDate::from_ymd_opt(1995, 5, 15));
    }
}
