//! `categorydesk-core` — domain foundation building blocks.
//!
//! Identifiers and the error model shared by every other crate. No storage,
//! no HTTP.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, FieldViolation, ValidationErrors};
pub use id::{RecordId, UserId};
