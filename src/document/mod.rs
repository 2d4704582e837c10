//! Journal rows and their on-disk formats.
//!
//! A journal table is a sequence of schema-less [`Document`]s whose fields are
//! [`FieldValue`]s. The [`converter`] module reads them from JSON Lines files.

pub mod converter;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
