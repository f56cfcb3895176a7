//! Greedy column packing.
//!
//! Each event, in start order, goes into the leftmost column where it
//! overlaps none of the column's occupants; if no column accepts it a new one
//! is opened. Columns are shared by every group, but each group remembers how
//! many columns its own events reached, and that count alone sets the group's
//! width.

use log::trace;

use crate::event::Event;
use crate::grouper::GroupedEvents;

/// An event with both its group and its column decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlottedEvent<'a> {
    pub index: usize,
    pub event: &'a Event,
    pub group: usize,
    pub column: usize,
}

/// A horizontal lane of mutually non-overlapping events.
#[derive(Debug, Clone, Default)]
pub struct Column<'a> {
    occupants: Vec<SlottedEvent<'a>>,
}

impl<'a> Column<'a> {
    /// Occupants in insertion order.
    pub fn occupants(&self) -> &[SlottedEvent<'a>] {
        &self.occupants
    }

    /// Whether `event` overlaps any occupant, not only the most recent one.
    pub fn collides(&self, event: &Event) -> bool {
        self.occupants.iter().any(|slot| event.overlaps(slot.event))
    }

    pub(crate) fn into_occupants(self) -> Vec<SlottedEvent<'a>> {
        self.occupants
    }
}

/// Result of column assignment: the columns plus per-group column counts.
#[derive(Debug, Clone)]
pub struct ColumnTable<'a> {
    columns: Vec<Column<'a>>,
    group_columns: Vec<usize>,
}

impl<'a> ColumnTable<'a> {
    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    /// Number of columns used by the events of `group`.
    ///
    /// # Panics
    ///
    /// Panics if `group` is not a group index produced by the grouper.
    pub fn group_columns(&self, group: usize) -> usize {
        self.group_columns[group]
    }

    pub fn group_count(&self) -> usize {
        self.group_columns.len()
    }

    pub(crate) fn into_columns(self) -> (Vec<Column<'a>>, Vec<usize>) {
        (self.columns, self.group_columns)
    }
}

/// Place every grouped event into a column.
pub fn assign_columns(grouped: GroupedEvents<'_>) -> ColumnTable<'_> {
    let (entries, group_count) = grouped.into_parts();
    let mut columns: Vec<Column<'_>> = Vec::new();
    let mut group_columns = vec![0usize; group_count];

    for entry in entries {
        let column = columns
            .iter()
            .position(|column| !column.collides(entry.event))
            .unwrap_or_else(|| {
                columns.push(Column::default());
                columns.len() - 1
            });

        columns[column].occupants.push(SlottedEvent {
            index: entry.index,
            event: entry.event,
            group: entry.group,
            column,
        });

        let count = &mut group_columns[entry.group];
        *count = (*count).max(column + 1);
    }

    trace!(columns = columns.len(), groups = group_columns.len(); "Assigned columns");
    ColumnTable {
        columns,
        group_columns,
    }
}
