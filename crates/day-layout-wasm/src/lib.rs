//! WASM bindings for `day-layout`.
//!
//! Events cross the boundary as JSON text, the same shape the CLI reads:
//! `[{"start": 30, "end": 150}, ...]`. The result is the placement list as
//! JSON with camelCase keys (`width`, `leftOffset`, `top`, `height`,
//! `sourceEvent`, ...).

use wasm_bindgen::prelude::*;

use day_layout::{
    lay_out_day_with_options, parse_events, LayoutError, LayoutOptions, Validation,
};

/// Lay out a day's events, taking malformed events at face value.
#[wasm_bindgen(js_name = layOutDay)]
pub fn lay_out_day(events_json: &str) -> Result<String, JsError> {
    layout_json(events_json, Validation::Permissive).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a day's events, rejecting any event whose start is not before its end.
#[wasm_bindgen(js_name = layOutDayStrict)]
pub fn lay_out_day_strict(events_json: &str) -> Result<String, JsError> {
    layout_json(events_json, Validation::Strict).map_err(|e| JsError::new(&e.to_string()))
}

fn layout_json(events_json: &str, validation: Validation) -> Result<String, LayoutError> {
    let events = parse_events(events_json)?;
    let options = LayoutOptions {
        validation,
        ..LayoutOptions::default()
    };
    let placements = lay_out_day_with_options(&events, &options)?;
    serde_json::to_string(&placements).map_err(|e| LayoutError::InvalidInput(e.to_string()))
}
