//! Error types for agenda operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("termination date {termination} is before the start date {start}")]
    TerminationBeforeStart {
        start: NaiveDate,
        termination: NaiveDate,
    },

    #[error("occurrence count must be non-negative, got {0}")]
    NegativeOccurrenceCount(i64),

    #[error("free-slot checks are only defined for single-occurrence events")]
    NotASimpleEvent,
}

pub type Result<T> = std::result::Result<T, AgendaError>;
