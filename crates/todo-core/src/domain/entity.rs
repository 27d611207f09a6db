//! Domain Layer - Core Entity Trait
//!
//! Contract shared by every record the list screens manage.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::validation::FieldErrors;

/// Which form a set of fields is submitted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Core trait for entities managed through a remote collection
pub trait Entity: Clone + fmt::Debug + DeserializeOwned + 'static {
    /// Raw form values, exactly as typed into the inputs
    type Fields: Clone + Default + PartialEq + fmt::Debug + 'static;
    /// Validated request body sent on create/update
    type Input: Serialize + Clone + fmt::Debug + 'static;

    /// Collection name, used both as URL segment and in notices ("todo")
    const KIND: &'static str;
    /// Capitalized display name ("Todo")
    const LABEL: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> &str;

    /// Fields the free-text filter looks at
    fn search_fields(&self) -> [&str; 3];

    /// Pre-fill values for the edit form
    fn to_fields(&self) -> Self::Fields;

    /// Validate raw form values into a request body
    fn validate(fields: &Self::Fields, mode: FormMode) -> Result<Self::Input, FieldErrors>;

    /// Case-insensitive substring match; `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}
