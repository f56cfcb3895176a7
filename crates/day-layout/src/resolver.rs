//! Turning column assignments into concrete geometry.

use log::trace;

use crate::columns::{Column, ColumnTable, SlottedEvent};

/// Share of the display width, in percent, divided among a group's columns.
pub const TOTAL_PERCENT: f64 = 100.0;

/// Position and size of one event on the day view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Percent of the container width.
    pub width: f64,
    /// Percent of the container width from the left edge.
    pub left_offset: f64,
    /// Vertical position in display units.
    pub top: f64,
    /// Vertical extent in display units.
    pub height: f64,
}

/// Every slotted event with its geometry, ordered by column then insertion.
#[derive(Debug, Clone)]
pub struct ResolvedLayout<'a> {
    entries: Vec<(SlottedEvent<'a>, Geometry)>,
    column_count: usize,
    group_count: usize,
}

impl<'a> ResolvedLayout<'a> {
    pub fn entries(&self) -> &[(SlottedEvent<'a>, Geometry)] {
        &self.entries
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub(crate) fn into_entries(self) -> Vec<(SlottedEvent<'a>, Geometry)> {
        self.entries
    }
}

/// Compute width, offset, top and height for every event.
///
/// Every event in a group gets `100 / k`, where `k` is the number of columns
/// the group uses, and is shifted right by its column index times that width.
/// Vertical values are minutes scaled by `pixels_per_minute`.
pub fn resolve(table: ColumnTable<'_>, pixels_per_minute: f64) -> ResolvedLayout<'_> {
    let group_count = table.group_count();
    let (columns, group_columns) = table.into_columns();
    let column_count = columns.len();

    let entries: Vec<_> = columns
        .into_iter()
        .flat_map(Column::into_occupants)
        .map(|slot| {
            let width = TOTAL_PERCENT / group_columns[slot.group] as f64;
            let geometry = Geometry {
                width,
                left_offset: slot.column as f64 * width,
                top: slot.event.start as f64 * pixels_per_minute,
                // Subtract in f64 so extreme offsets cannot overflow.
                height: (slot.event.end as f64 - slot.event.start as f64) * pixels_per_minute,
            };
            (slot, geometry)
        })
        .collect();

    trace!(events = entries.len(); "Resolved geometry");
    ResolvedLayout {
        entries,
        column_count,
        group_count,
    }
}
