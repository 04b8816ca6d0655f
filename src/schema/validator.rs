//! Document validation for the contacts collection.
//!
//! Rules enforced on every write (inserts and merged updates alike):
//! - `firstName`: required, at least 2 characters
//! - `lastName`: required, at least 2 characters
//! - `email`: required, must match `\S+@\S+\.\S+`
//! - `favoriteColor`, `birthday`: optional, no further rules
//!
//! Each violated field contributes exactly one message: the required check
//! shadows the format/length check for that field. Validation never mutates
//! its input and is deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

use super::contact::{ContactFields, ContactInput};
use super::errors::ValidationErrors;

/// Loose email shape check: non-whitespace, `@`, non-whitespace, `.`,
/// non-whitespace. Intentionally permissive; the mailbox is never verified.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Minimum length for name fields, in characters.
const NAME_MIN_LEN: usize = 2;

/// Validate a candidate document against the collection rules.
///
/// Returns the normalized field set on success, or a [`ValidationErrors`]
/// listing every violated rule in field declaration order. An empty string
/// counts as a missing value for required fields.
pub fn validate(input: &ContactInput) -> Result<ContactFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let first_name = required_name(
        input.first_name.as_deref(),
        "First name is required",
        "First name must be at least 2 characters",
        &mut errors,
    );

    let last_name = required_name(
        input.last_name.as_deref(),
        "Last name is required",
        "Last name must be at least 2 characters",
        &mut errors,
    );

    let email = match input.email.as_deref() {
        None | Some("") => {
            errors.push("Email is required");
            None
        }
        Some(value) if !EMAIL_PATTERN.is_match(value) => {
            errors.push("Please provide a valid email address");
            None
        }
        Some(value) => Some(value.to_string()),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // All three are Some here: a None always pushes a message above.
    Ok(ContactFields {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        favorite_color: input.favorite_color.clone(),
        birthday: input.birthday,
    })
}

/// Check a required name field, recording at most one message.
fn required_name(
    value: Option<&str>,
    required_msg: &str,
    length_msg: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None | Some("") => {
            errors.push(required_msg);
            None
        }
        Some(value) if value.chars().count() < NAME_MIN_LEN => {
            errors.push(length_msg);
            None
        }
        Some(value) => Some(value.to_string()),
    }
}
