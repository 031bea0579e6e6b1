//! Business logic for each engine operation, one module per operation.
//! Everything here operates on a [`DiaryStore`](crate::store::DiaryStore)
//! and returns plain domain types; no I/O assumptions.

use crate::error::{DiaryError, Result};
use crate::model::MAX_TOPIC_LEN;

pub mod append;
pub mod create;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod remove;

pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DiaryError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Shared by append and edit: topic and body must be present, and topic stays
/// within the bound the form widget advertises.
pub(crate) fn validate_card_fields(topic: &str, body: &str) -> Result<()> {
    require("topic", topic)?;
    require("body", body)?;
    if topic.chars().count() > MAX_TOPIC_LEN {
        return Err(DiaryError::Validation(format!(
            "topic must be at most {} characters",
            MAX_TOPIC_LEN
        )));
    }
    Ok(())
}
