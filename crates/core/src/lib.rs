//! `stockdesk-core` — shared domain building blocks.
//!
//! Pure primitives only: the error model, entity/value-object traits and
//! evaluation identifiers. No IO, no HTTP.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EvaluationId;
pub use value_object::ValueObject;
