//! Error types for day-layout operations.

use std::fmt;

use thiserror::Error;

/// An input event rejected by strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEvent {
    /// Position of the event in the caller's input.
    pub index: usize,
    pub start: i64,
    pub end: i64,
}

impl fmt::Display for InvalidEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event #{} (start {}, end {})",
            self.index, self.start, self.end
        )
    }
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid events, start must be before end: {}", join_invalid(.0))]
    InvalidEvents(Vec<InvalidEvent>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid scale: {0} pixels per minute")]
    InvalidScale(f64),
}

fn join_invalid(events: &[InvalidEvent]) -> String {
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LayoutError>;
