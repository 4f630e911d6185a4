//! Error taxonomy for record operations.
//!
//! Every variant is a local validation failure: the operation that produced it
//! made no change, and the failure has already been logged at `error` level.

use std::path::PathBuf;
use thiserror::Error;

use crate::subject::{GRADE_RANGE, TEST_RESULT_RANGE};

#[derive(Debug, Error)]
pub enum RecordError {
    /// A name did not start with an uppercase letter of the alphabet or
    /// contained something other than letters and whitespace.
    #[error("name '{value}' must start with an uppercase letter and contain only {alphabet} letters")]
    InvalidName { value: String, alphabet: String },

    #[error(
        "grade {0} is out of range ({min}..={max})",
        min = GRADE_RANGE.start(),
        max = GRADE_RANGE.end()
    )]
    GradeOutOfRange(i64),

    #[error(
        "test result {0} is out of range ({min}..={max})",
        min = TEST_RESULT_RANGE.start(),
        max = TEST_RESULT_RANGE.end()
    )]
    TestResultOutOfRange(i64),

    #[error("subject '{0}' is not in the system")]
    UnknownSubject(String),

    #[error("subject catalog contains no subjects")]
    EmptyCatalog,

    #[error("failed to read subject catalog from {}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RecordError>;
