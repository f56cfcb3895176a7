//! HTML day view.
//!
//! [`HtmlRenderer`] is a [`RenderAdapter`] that draws each placement as an
//! absolutely positioned `calendarSlot` div inside a fixed-width container,
//! next to a time gutter labelled from the configured day start.

use std::fmt::{self, Write};

use chrono::{Duration, NaiveTime, Timelike};

use day_layout::{Placement, RenderAdapter};

use crate::config::RenderConfig;

/// Width of the time gutter in pixels.
const GUTTER_WIDTH: u32 = 80;

/// Horizontal padding around the slot container, in pixels.
const CONTAINER_PADDING: u32 = 10;

const STYLE: &str = "\
body { margin: 0; padding: 20px; background: #ececec; font-family: Helvetica, Arial, sans-serif; }
.day { position: relative; display: flex; }
.timeline { position: relative; text-align: right; font-size: 12px; color: #666; }
.timeline .label { position: absolute; right: 8px; transform: translateY(-50%); white-space: nowrap; }
.timeline .label.hour { font-weight: bold; font-size: 13px; color: #333; }
.calendarContainer { position: relative; background: #fff; box-sizing: content-box; }
.calendarSlot { position: absolute; box-sizing: border-box; overflow: hidden; background: #fff; border: 1px solid #ccc; border-left: 4px solid #4b6ea9; padding: 0 8px; }
.calendarSlot h2 { margin: 4px 0 0; font-size: 13px; color: #4b6ea9; }
.calendarSlot h3 { margin: 2px 0 0; font-size: 11px; font-weight: normal; color: #333; }
";

/// Renders placements into an HTML document.
#[derive(Debug)]
pub struct HtmlRenderer<'c> {
    config: &'c RenderConfig,
    slots: String,
    rendered: usize,
}

impl<'c> HtmlRenderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            slots: String::new(),
            rendered: 0,
        }
    }

    /// Number of slots currently drawn.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Wrap the drawn slots in a complete document.
    pub fn into_document(self) -> Result<String, fmt::Error> {
        let config = self.config;
        let height = config.day_length() as f64 * config.pixels_per_minute();

        let mut doc = String::new();
        writeln!(doc, "<!DOCTYPE html>")?;
        writeln!(doc, "<html>")?;
        writeln!(doc, "<head>")?;
        writeln!(doc, "<meta charset=\"utf-8\">")?;
        writeln!(doc, "<title>Day view</title>")?;
        writeln!(doc, "<style>\n{STYLE}</style>")?;
        writeln!(doc, "</head>")?;
        writeln!(doc, "<body>")?;
        writeln!(doc, "<div class=\"day\">")?;
        writeln!(
            doc,
            "<div class=\"timeline\" style=\"width: {GUTTER_WIDTH}px; height: {height}px\">"
        )?;
        for (minute, label) in time_labels(
            config.day_start(),
            config.day_length(),
            config.label_interval(),
        ) {
            let class = if label.on_the_hour {
                "label hour"
            } else {
                "label"
            };
            writeln!(
                doc,
                "<div class=\"{class}\" style=\"top: {}px\">{}</div>",
                minute as f64 * config.pixels_per_minute(),
                label.text
            )?;
        }
        writeln!(doc, "</div>")?;
        writeln!(
            doc,
            "<div class=\"calendarContainer\" style=\"width: {}px; height: {height}px; padding: 0 {CONTAINER_PADDING}px\">",
            config.width()
        )?;
        doc.push_str(&self.slots);
        writeln!(doc, "</div>")?;
        writeln!(doc, "</div>")?;
        writeln!(doc, "</body>")?;
        writeln!(doc, "</html>")?;
        Ok(doc)
    }
}

impl RenderAdapter for HtmlRenderer<'_> {
    type Error = fmt::Error;

    fn clear(&mut self) -> Result<(), fmt::Error> {
        self.slots.clear();
        self.rendered = 0;
        Ok(())
    }

    fn render(&mut self, placement: &Placement<'_>) -> Result<(), fmt::Error> {
        let config = self.config;
        write!(
            self.slots,
            "<div class=\"calendarSlot\" style=\"width: {}%; height: {}px; top: {}px; left: {}%\">",
            placement.width, placement.height, placement.top, placement.left_offset
        )?;
        write!(self.slots, "<h2>{}</h2>", escape(config.title()))?;
        if placement.height >= config.compact_height() {
            write!(self.slots, "<h3>{}</h3>", escape(config.location()))?;
        }
        writeln!(self.slots, "</div>")?;
        self.rendered += 1;
        Ok(())
    }
}

// ── Time gutter ─────────────────────────────────────────────────────────────

/// One label in the time gutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabel {
    pub text: String,
    pub on_the_hour: bool,
}

/// Labels every `interval` minutes from minute 0 through `day_length`.
///
/// Stops early at offsets too large for a `chrono` duration.
pub fn time_labels(start: NaiveTime, day_length: i64, interval: i64) -> Vec<(i64, TimeLabel)> {
    if interval <= 0 || day_length < 0 {
        return Vec::new();
    }
    (0..=day_length)
        .step_by(interval as usize)
        .map_while(|minute| {
            // Wraps past midnight.
            let time = start + Duration::try_minutes(minute)?;
            let on_the_hour = time.minute() == 0;
            let text = time.format("%-I:%M %p").to_string();
            Some((minute, TimeLabel { text, on_the_hour }))
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use day_layout::{lay_out_day, render_placements, Event};

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    // ── time_labels ─────────────────────────────────────────────────────

    #[test]
    fn test_labels_every_half_hour() {
        let labels = time_labels(nine_am(), 720, 30);
        assert_eq!(labels.len(), 25);
        assert_eq!(labels[0].0, 0);
        assert_eq!(labels[0].1.text, "9:00 AM");
        assert!(labels[0].1.on_the_hour);
        assert_eq!(labels[1].1.text, "9:30 AM");
        assert!(!labels[1].1.on_the_hour);
        assert_eq!(labels[6].1.text, "12:00 PM");
        assert_eq!(labels[24].0, 720);
        assert_eq!(labels[24].1.text, "9:00 PM");
    }

    #[test]
    fn test_labels_wrap_past_midnight() {
        let start = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let labels = time_labels(start, 120, 60);
        let texts: Vec<&str> = labels.iter().map(|(_, l)| l.text.as_str()).collect();
        assert_eq!(texts, vec!["11:00 PM", "12:00 AM", "1:00 AM"]);
    }

    #[test]
    fn test_labels_stop_at_unrepresentable_offset() {
        let labels = time_labels(nine_am(), i64::MAX, i64::MAX / 2);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].1.text, "9:00 AM");
    }

    #[test]
    fn test_labels_zero_interval_is_empty() {
        assert!(time_labels(nine_am(), 720, 0).is_empty());
    }

    // ── HtmlRenderer ────────────────────────────────────────────────────

    #[test]
    fn test_render_slot_geometry() {
        let config = RenderConfig::default();
        let events = [Event::new(540, 600), Event::new(560, 620)];
        let placements = lay_out_day(&events);
        let mut renderer = HtmlRenderer::new(&config);
        render_placements(&placements, &mut renderer).unwrap();
        assert_eq!(renderer.rendered(), 2);

        let doc = renderer.into_document().unwrap();
        assert!(doc.contains("width: 50%; height: 60px; top: 540px; left: 0%"));
        assert!(doc.contains("width: 50%; height: 60px; top: 560px; left: 50%"));
        assert_eq!(doc.matches("class=\"calendarSlot\"").count(), 2);
    }

    #[test]
    fn test_render_short_slot_omits_location() {
        let config = RenderConfig::default();
        let events = [Event::new(0, 30), Event::new(100, 145)];
        let placements = lay_out_day(&events);
        let mut renderer = HtmlRenderer::new(&config);
        render_placements(&placements, &mut renderer).unwrap();
        let doc = renderer.into_document().unwrap();
        assert_eq!(doc.matches("<h2>Sample Event</h2>").count(), 2);
        assert_eq!(doc.matches("<h3>Sample Location</h3>").count(), 1);
    }

    #[test]
    fn test_clear_discards_previous_layout() {
        let config = RenderConfig::default();
        let first = [Event::new(0, 60), Event::new(30, 90)];
        let second = [Event::new(200, 260)];
        let mut renderer = HtmlRenderer::new(&config);
        render_placements(&lay_out_day(&first), &mut renderer).unwrap();
        render_placements(&lay_out_day(&second), &mut renderer).unwrap();
        assert_eq!(renderer.rendered(), 1);
        let doc = renderer.into_document().unwrap();
        assert_eq!(doc.matches("class=\"calendarSlot\"").count(), 1);
        assert!(doc.contains("top: 200px"));
    }

    #[test]
    fn test_empty_document_has_container_and_gutter() {
        let config = RenderConfig::default();
        let doc = HtmlRenderer::new(&config).into_document().unwrap();
        assert!(doc.contains("class=\"calendarContainer\" style=\"width: 600px; height: 720px"));
        assert!(doc.contains(">9:00 AM</div>"));
        assert!(!doc.contains("calendarSlot\""));
    }

    #[test]
    fn test_render_escapes_configured_text() {
        let config = parse_config("[render]\ntitle = \"R&D <sync>\"\n").unwrap();
        let events = [Event::new(0, 60)];
        let mut renderer = HtmlRenderer::new(config.render());
        render_placements(&lay_out_day(&events), &mut renderer).unwrap();
        let doc = renderer.into_document().unwrap();
        assert!(doc.contains("<h2>R&amp;D &lt;sync&gt;</h2>"));
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Sample Event"), "Sample Event");
    }
}
