//! Calendar events as minute offsets from the start of the day.
//!
//! An [`Event`] is a half-open interval `[start, end)` measured in whole
//! minutes from a fixed day origin. The layout pipeline never mutates events;
//! everything it derives lives in separate records.
//!
//! # Input format
//!
//! Events are read from JSON arrays such as
//! `[{"start": 30, "end": 150}, {"start": 540, "end": 600}]`. Integral floats
//! (`30.0`) are accepted; fractional, non-finite, or non-numeric offsets are
//! rejected. Extra fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A single calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// Minutes from the day origin at which the event begins.
    pub start: i64,
    /// Minutes from the day origin at which the event ends.
    pub end: i64,
}

impl Event {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Whether two events intersect as open intervals.
    ///
    /// Events that merely touch (`a.end == b.start`) do not overlap.
    ///
    /// ```
    /// use day_layout::Event;
    ///
    /// let a = Event::new(540, 600);
    /// assert!(a.overlaps(&Event::new(560, 620)));
    /// assert!(!a.overlaps(&Event::new(600, 660)));
    /// ```
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Length of the event in minutes. Negative for reversed events;
    /// saturates at the `i64` bounds.
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// True when the event has zero or negative length.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

/// Parse a JSON array of events.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidInput`] if the text is not a JSON array of
/// objects with numeric `start` and `end` fields.
pub fn parse_events(json: &str) -> Result<Vec<Event>, LayoutError> {
    serde_json::from_str(json).map_err(|e| LayoutError::InvalidInput(e.to_string()))
}

// ── Deserialization helpers ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawEvent {
    start: Minutes,
    end: Minutes,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Minutes {
    Whole(i64),
    Float(f64),
}

impl Minutes {
    fn into_whole(self, field: &str) -> Result<i64, String> {
        match self {
            Minutes::Whole(n) => Ok(n),
            Minutes::Float(f) => {
                // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
                {
                    Ok(f as i64)
                } else {
                    Err(format!("{field} must be a whole number of minutes, got {f}"))
                }
            }
        }
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Ok(Event {
            start: raw.start.into_whole("start")?,
            end: raw.end.into_whole("end")?,
        })
    }
}
