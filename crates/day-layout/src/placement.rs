//! Placement records and the hand-off to a rendering adapter.
//!
//! A [`Placement`] is the whole output contract of the layout core: geometry
//! plus a reference to the event it positions. What happens next (HTML,
//! SVG, a canvas) belongs to a [`RenderAdapter`] implementation.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::event::Event;
use crate::resolver::ResolvedLayout;

/// Final position of one event on the day view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement<'a> {
    /// Position of the event in the caller's input.
    pub index: usize,
    /// Overlap group the event belongs to.
    pub group: usize,
    /// Column the event occupies.
    pub column: usize,
    /// Percent of the container width, in `(0, 100]`.
    pub width: f64,
    /// Percent of the container width from the left edge, in `[0, 100)`.
    pub left_offset: f64,
    /// Vertical position in display units.
    pub top: f64,
    /// Vertical extent in display units.
    pub height: f64,
    /// The event being placed.
    pub source_event: &'a Event,
}

/// Package resolved geometry into placement records, keeping column order.
pub fn emit(layout: ResolvedLayout<'_>) -> Vec<Placement<'_>> {
    layout
        .into_entries()
        .into_iter()
        .map(|(slot, geometry)| Placement {
            index: slot.index,
            group: slot.group,
            column: slot.column,
            width: geometry.width,
            left_offset: geometry.left_offset,
            top: geometry.top,
            height: geometry.height,
            source_event: slot.event,
        })
        .collect()
}

// ── Rendering adapter ───────────────────────────────────────────────────────

/// A sink that draws placements.
///
/// The layout core makes no assumptions about the rendering technology.
/// Implementations own their drawing surface and any previous visual state.
pub trait RenderAdapter {
    type Error;

    /// Discard whatever a previous layout drew.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw one placement as a positioned rectangle.
    fn render(&mut self, placement: &Placement<'_>) -> Result<(), Self::Error>;

    /// Called once after the last placement.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Drive `adapter` over `placements` in order.
///
/// An empty slice leaves the adapter untouched. Otherwise the adapter is
/// cleared once, receives every placement, and is finished. The first
/// adapter error stops the pass.
pub fn render_placements<A: RenderAdapter>(
    placements: &[Placement<'_>],
    adapter: &mut A,
) -> Result<(), A::Error> {
    if placements.is_empty() {
        return Ok(());
    }
    adapter.clear()?;
    for placement in placements {
        adapter.render(placement)?;
    }
    adapter.finish()
}

// ── Summary ─────────────────────────────────────────────────────────────────

/// Counts describing a finished layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LayoutStats {
    pub events: usize,
    pub groups: usize,
    pub columns: usize,
}

/// Summarize a placement list.
pub fn summarize(placements: &[Placement<'_>]) -> LayoutStats {
    let groups: BTreeSet<usize> = placements.iter().map(|p| p.group).collect();
    LayoutStats {
        events: placements.len(),
        groups: groups.len(),
        columns: placements
            .iter()
            .map(|p| p.column + 1)
            .max()
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(event: &Event, index: usize, group: usize, column: usize) -> Placement<'_> {
        Placement {
            index,
            group,
            column,
            width: 50.0,
            left_offset: column as f64 * 50.0,
            top: event.start as f64,
            height: event.duration() as f64,
            source_event: event,
        }
    }

    /// Records every adapter call.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        fail_on: Option<usize>,
    }

    impl RenderAdapter for Recorder {
        type Error = String;

        fn clear(&mut self) -> Result<(), String> {
            self.calls.push("clear".to_string());
            Ok(())
        }

        fn render(&mut self, placement: &Placement<'_>) -> Result<(), String> {
            if self.fail_on == Some(placement.index) {
                return Err(format!("cannot draw #{}", placement.index));
            }
            self.calls.push(format!("render #{}", placement.index));
            Ok(())
        }

        fn finish(&mut self) -> Result<(), String> {
            self.calls.push("finish".to_string());
            Ok(())
        }
    }

    // ── render_placements ───────────────────────────────────────────────

    #[test]
    fn test_render_empty_never_touches_adapter() {
        let mut recorder = Recorder::default();
        render_placements(&[], &mut recorder).unwrap();
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_render_clears_then_draws_in_order() {
        let a = Event::new(540, 600);
        let b = Event::new(560, 620);
        let placements = vec![placement(&a, 1, 0, 0), placement(&b, 0, 0, 1)];
        let mut recorder = Recorder::default();
        render_placements(&placements, &mut recorder).unwrap();
        assert_eq!(
            recorder.calls,
            vec!["clear", "render #1", "render #0", "finish"]
        );
    }

    #[test]
    fn test_render_stops_at_first_error() {
        let a = Event::new(0, 60);
        let b = Event::new(30, 90);
        let placements = vec![placement(&a, 0, 0, 0), placement(&b, 1, 0, 1)];
        let mut recorder = Recorder {
            fail_on: Some(0),
            ..Recorder::default()
        };
        let err = render_placements(&placements, &mut recorder).unwrap_err();
        assert_eq!(err, "cannot draw #0");
        assert_eq!(recorder.calls, vec!["clear"]);
    }

    // ── serialization ───────────────────────────────────────────────────

    #[test]
    fn test_placement_serializes_camel_case() {
        let event = Event::new(560, 620);
        let json = serde_json::to_value(placement(&event, 2, 1, 1)).unwrap();
        assert_eq!(json["leftOffset"], 50.0);
        assert_eq!(json["width"], 50.0);
        assert_eq!(json["top"], 560.0);
        assert_eq!(json["height"], 60.0);
        assert_eq!(json["sourceEvent"]["start"], 560);
        assert_eq!(json["sourceEvent"]["end"], 620);
        assert_eq!(json["index"], 2);
    }

    // ── summarize ───────────────────────────────────────────────────────

    #[test]
    fn test_summarize_counts() {
        let a = Event::new(30, 150);
        let b = Event::new(540, 600);
        let c = Event::new(560, 620);
        let placements = vec![
            placement(&a, 0, 0, 0),
            placement(&b, 1, 1, 0),
            placement(&c, 2, 1, 1),
        ];
        assert_eq!(
            summarize(&placements),
            LayoutStats {
                events: 3,
                groups: 2,
                columns: 2,
            }
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), LayoutStats::default());
    }
}
