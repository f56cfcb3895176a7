//! Top-level day layout.
//!
//! [`lay_out_day`] runs the full pipeline: sort, group, assign columns,
//! resolve geometry, emit placements. Every call builds its own working
//! state and drops it on return, so concurrent calls on independent event
//! lists never share anything.

use log::debug;

use crate::columns::assign_columns;
use crate::error::{InvalidEvent, LayoutError};
use crate::event::Event;
use crate::grouper::assign_groups;
use crate::placement::{emit, Placement};
use crate::resolver::resolve;
use crate::sorter::sort_events;

/// How input events are checked before layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Events are taken at face value; zero- and negative-length events are
    /// laid out with the same overlap test as any other.
    #[default]
    Permissive,
    /// Any event with `start >= end` rejects the whole input.
    Strict,
}

/// Options for [`lay_out_day_with_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub validation: Validation,
    /// Display units per minute for `top` and `height`.
    pub pixels_per_minute: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            validation: Validation::Permissive,
            pixels_per_minute: 1.0,
        }
    }
}

/// Lay out a day's events with default options.
///
/// Never fails: malformed events are laid out as they are.
///
/// ```
/// use day_layout::{lay_out_day, Event};
///
/// let events = [Event::new(540, 600), Event::new(560, 620), Event::new(610, 670)];
/// let placements = lay_out_day(&events);
/// assert_eq!(placements.len(), 3);
/// assert!(placements.iter().all(|p| p.width == 50.0));
/// ```
pub fn lay_out_day(events: &[Event]) -> Vec<Placement<'_>> {
    run_pipeline(events, LayoutOptions::default().pixels_per_minute)
}

/// Lay out a day's events.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidScale`] if `pixels_per_minute` is not a
/// positive finite number, and [`LayoutError::InvalidEvents`] under
/// [`Validation::Strict`] when any event has `start >= end`. Both checks run
/// before any layout work.
pub fn lay_out_day_with_options<'a>(
    events: &'a [Event],
    options: &LayoutOptions,
) -> Result<Vec<Placement<'a>>, LayoutError> {
    let scale = options.pixels_per_minute;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(LayoutError::InvalidScale(scale));
    }
    if options.validation == Validation::Strict {
        validate_events(events)?;
    }
    Ok(run_pipeline(events, scale))
}

/// Check that every event has `start < end`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidEvents`] naming every offending event by its
/// input position.
pub fn validate_events(events: &[Event]) -> Result<(), LayoutError> {
    let invalid: Vec<InvalidEvent> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.is_degenerate())
        .map(|(index, event)| InvalidEvent {
            index,
            start: event.start,
            end: event.end,
        })
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        debug!(invalid = invalid.len(); "Rejected events");
        Err(LayoutError::InvalidEvents(invalid))
    }
}

fn run_pipeline(events: &[Event], pixels_per_minute: f64) -> Vec<Placement<'_>> {
    if events.is_empty() {
        return Vec::new();
    }

    let sorted = sort_events(events);
    let grouped = assign_groups(sorted);
    let table = assign_columns(grouped);
    let resolved = resolve(table, pixels_per_minute);
    let (groups, columns) = (resolved.group_count(), resolved.column_count());
    let placements = emit(resolved);

    debug!(events = placements.len(), groups, columns; "Laid out day");
    placements
}
