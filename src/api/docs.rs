//! Machine-readable API description.
//!
//! An OpenAPI 3.0 document is assembled once, on first request, from the
//! static table of route descriptors below. The descriptor table is the
//! single source for the served description.

use axum::{routing::get, Json, Router};
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

/// Path under which the description is served.
pub const DOCS_PATH: &str = "/api-docs";

/// Route descriptor: one HTTP operation on the contacts surface.
struct EndpointDoc {
    method: &'static str,
    path: &'static str,
    summary: &'static str,
    /// Whether the operation takes a Contact request body.
    has_body: bool,
    /// (status, description, response body schema reference or inline).
    responses: &'static [(u16, &'static str, ResponseBody)],
}

/// Response body shape of an operation.
enum ResponseBody {
    None,
    Contact,
    ContactList,
    ValidationErrors,
    Message,
}

const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "get",
        path: "/contacts",
        summary: "Get all contacts",
        has_body: false,
        responses: &[(200, "A list of contacts", ResponseBody::ContactList)],
    },
    EndpointDoc {
        method: "post",
        path: "/contacts",
        summary: "Create a new contact",
        has_body: true,
        responses: &[
            (201, "Contact created", ResponseBody::Contact),
            (400, "Validation error", ResponseBody::ValidationErrors),
        ],
    },
    EndpointDoc {
        method: "get",
        path: "/contacts/{id}",
        summary: "Get a contact by ID",
        has_body: false,
        responses: &[
            (200, "Contact found", ResponseBody::Contact),
            (404, "Contact not found", ResponseBody::Message),
        ],
    },
    EndpointDoc {
        method: "put",
        path: "/contacts/{id}",
        summary: "Update a contact",
        has_body: true,
        responses: &[
            (200, "Contact updated", ResponseBody::Contact),
            (400, "Validation error", ResponseBody::ValidationErrors),
            (404, "Contact not found", ResponseBody::Message),
        ],
    },
    EndpointDoc {
        method: "delete",
        path: "/contacts/{id}",
        summary: "Delete a contact",
        has_body: false,
        responses: &[
            (204, "Contact deleted successfully", ResponseBody::None),
            (404, "Contact not found", ResponseBody::Message),
        ],
    },
];

static DOCUMENT: Lazy<Value> = Lazy::new(build_document);

/// Routes serving the API description.
pub fn docs_routes() -> Router {
    Router::new().route(DOCS_PATH, get(api_docs_handler))
}

async fn api_docs_handler() -> Json<Value> {
    Json(DOCUMENT.clone())
}

/// Assemble the OpenAPI document from the descriptor table.
fn build_document() -> Value {
    let mut paths = Map::new();
    for endpoint in ENDPOINTS {
        let operation = build_operation(endpoint);
        let item = paths
            .entry(endpoint.path.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(item) = item.as_object_mut() {
            item.insert(endpoint.method.to_string(), operation);
        }
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Contacts API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A REST API to manage contacts backed by MongoDB",
        },
        "paths": Value::Object(paths),
        "components": {
            "schemas": {
                "Contact": contact_schema(),
            },
        },
    })
}

fn build_operation(endpoint: &EndpointDoc) -> Value {
    let mut operation = Map::new();
    operation.insert("summary".into(), json!(endpoint.summary));
    operation.insert("tags".into(), json!(["Contacts"]));

    if endpoint.path.contains("{id}") {
        operation.insert(
            "parameters".into(),
            json!([{
                "in": "path",
                "name": "id",
                "required": true,
                "schema": { "type": "string" },
                "description": "The contact ID",
            }]),
        );
    }

    if endpoint.has_body {
        operation.insert(
            "requestBody".into(),
            json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/Contact" },
                    },
                },
            }),
        );
    }

    let mut responses = Map::new();
    for (status, description, body) in endpoint.responses {
        let mut response = Map::new();
        response.insert("description".into(), json!(description));
        if let Some(schema) = response_schema(body) {
            response.insert(
                "content".into(),
                json!({ "application/json": { "schema": schema } }),
            );
        }
        responses.insert(status.to_string(), Value::Object(response));
    }
    operation.insert("responses".into(), Value::Object(responses));

    Value::Object(operation)
}

fn response_schema(body: &ResponseBody) -> Option<Value> {
    match body {
        ResponseBody::None => None,
        ResponseBody::Contact => Some(json!({ "$ref": "#/components/schemas/Contact" })),
        ResponseBody::ContactList => Some(json!({
            "type": "array",
            "items": { "$ref": "#/components/schemas/Contact" },
        })),
        ResponseBody::ValidationErrors => Some(json!({
            "type": "object",
            "properties": {
                "errors": { "type": "array", "items": { "type": "string" } },
            },
        })),
        ResponseBody::Message => Some(json!({
            "type": "object",
            "properties": { "message": { "type": "string" } },
        })),
    }
}

fn contact_schema() -> Value {
    json!({
        "type": "object",
        "required": ["firstName", "lastName", "email"],
        "properties": {
            "id": {
                "type": "string",
                "description": "System-generated identifier",
                "readOnly": true,
            },
            "firstName": {
                "type": "string",
                "description": "The contact's first name",
                "example": "Benny",
            },
            "lastName": {
                "type": "string",
                "description": "The contact's last name",
                "example": "Jay",
            },
            "email": {
                "type": "string",
                "description": "The contact's email address",
                "example": "benny@example.com",
            },
            "favoriteColor": {
                "type": "string",
                "description": "The contact's favorite color",
                "example": "Blue",
            },
            "birthday": {
                "type": "string",
                "format": "date",
                "description": "The contact's birthday",
                "example": "1995-05-15",
            },
        },
    })
}
