//! # day-layout
//!
//! Deterministic day-view layout for calendar events.
//!
//! Given events as minute offsets from the start of a day, the engine assigns
//! each one a column and a width so that no two overlapping events share
//! horizontal space, and every event in a connected overlap group has the
//! same width: the widest that keeps the group's columns apart.
//!
//! ## Pipeline
//!
//! - [`sorter`] — order events by start, stable on ties
//! - [`grouper`] — split sorted events into maximal overlap groups
//! - [`columns`] — greedy leftmost-fit column packing, per-group column counts
//! - [`resolver`] — per-group width, left offset, top and height
//! - [`placement`] — output records and the [`RenderAdapter`] hand-off
//! - [`layout`] — [`lay_out_day`] and its options
//! - [`event`] — the [`Event`] input type and JSON parsing
//! - [`error`] — Error types

pub mod columns;
pub mod error;
pub mod event;
pub mod grouper;
pub mod layout;
pub mod placement;
pub mod resolver;
pub mod sorter;

pub use error::{InvalidEvent, LayoutError};
pub use event::{parse_events, Event};
pub use layout::{
    lay_out_day, lay_out_day_with_options, validate_events, LayoutOptions, Validation,
};
pub use placement::{render_placements, summarize, LayoutStats, Placement, RenderAdapter};
