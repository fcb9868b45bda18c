//! Typed domain errors for task records.
//!
//! Command handlers and the store propagate failures through `anyhow`, but
//! validation and enum parsing produce these structured errors so callers
//! (the CSV importer in particular) can report precise reasons per record.

use thiserror::Error;

/// Maximum title length accepted by [`crate::libs::task::Task::validate`].
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum description length accepted by [`crate::libs::task::Task::validate`].
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title cannot exceed {max} characters", max = TITLE_MAX_LEN)]
    TitleTooLong,
    #[error("Description cannot exceed {max} characters", max = DESCRIPTION_MAX_LEN)]
    DescriptionTooLong,
    #[error("{0} cannot contain special characters")]
    InvalidCharacters(&'static str),
    #[error("Unknown priority '{0}', expected Low, Normal or High")]
    UnknownPriority(String),
    #[error("Unknown status '{0}', expected Pending, Hold or Completed")]
    UnknownStatus(String),
}
