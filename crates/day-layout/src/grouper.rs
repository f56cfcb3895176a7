//! Partitioning sorted events into overlap groups.
//!
//! A group is a maximal set of events connected by a chain of pairwise
//! overlaps. Because the input is sorted by start, a single running "group
//! end" watermark finds these components in one pass: an event that starts
//! before the watermark overlaps something already in the current group, and
//! an event that starts at or after it cannot overlap anything placed so far.

use log::trace;

use crate::event::Event;
use crate::sorter::SortedEvents;

/// An event tagged with its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedEvent<'a> {
    pub index: usize,
    pub event: &'a Event,
    pub group: usize,
}

/// Sorted events with group indices assigned.
#[derive(Debug, Clone)]
pub struct GroupedEvents<'a> {
    entries: Vec<GroupedEvent<'a>>,
    group_count: usize,
}

impl<'a> GroupedEvents<'a> {
    pub fn entries(&self) -> &[GroupedEvent<'a>] {
        &self.entries
    }

    /// Number of distinct groups. Group indices run `0..group_count`.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub(crate) fn into_parts(self) -> (Vec<GroupedEvent<'a>>, usize) {
        (self.entries, self.group_count)
    }
}

/// Assign every sorted event to an overlap group.
pub fn assign_groups(sorted: SortedEvents<'_>) -> GroupedEvents<'_> {
    let mut entries = Vec::with_capacity(sorted.len());
    let mut watermark: Option<i64> = None;
    let mut group_count = 0;

    for entry in sorted.into_entries() {
        let event = entry.event;
        match watermark {
            Some(end) if event.start < end => {
                watermark = Some(end.max(event.end));
            }
            _ => {
                group_count += 1;
                watermark = Some(event.end);
            }
        }
        entries.push(GroupedEvent {
            index: entry.index,
            event,
            group: group_count - 1,
        });
    }

    trace!(events = entries.len(), groups = group_count; "Assigned overlap groups");
    GroupedEvents {
        entries,
        group_count,
    }
}
