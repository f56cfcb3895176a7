//! Start-time ordering of the input events.

use log::trace;

use crate::event::Event;

/// An event paired with its position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed<'a> {
    pub index: usize,
    pub event: &'a Event,
}

/// The input events in ascending start order.
#[derive(Debug, Clone)]
pub struct SortedEvents<'a> {
    entries: Vec<Indexed<'a>>,
}

impl<'a> SortedEvents<'a> {
    pub fn entries(&self) -> &[Indexed<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<Indexed<'a>> {
        self.entries
    }
}

/// Order events by ascending `start`, keeping input order among equal starts.
pub fn sort_events(events: &[Event]) -> SortedEvents<'_> {
    let mut entries: Vec<Indexed<'_>> = events
        .iter()
        .enumerate()
        .map(|(index, event)| Indexed { index, event })
        .collect();
    // `sort_by_key` is stable.
    entries.sort_by_key(|entry| entry.event.start);
    trace!(events = entries.len(); "Sorted events by start");
    SortedEvents { entries }
}
