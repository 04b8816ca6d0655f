//! Contact record definition and validation.
//!
//! The validator enforces the collection's field rules and reports every
//! violated rule as a human-readable message, in field declaration order.

pub mod contact;
pub mod errors;
pub mod validator;

pub use contact::{Contact, ContactFields, ContactInput};
pub use errors::ValidationErrors;
pub use validator::validate;
