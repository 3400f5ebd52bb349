//! Decoding abcjs timing events

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::models::{NoteGroup, PlaybackEvent};

fn field(obj: &JsValue, key: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn number(obj: &JsValue, key: &str) -> Option<f64> {
    field(obj, key).as_f64()
}

fn note_group(value: JsValue) -> NoteGroup<Element> {
    if Array::is_array(&value) {
        Array::from(&value)
            .iter()
            .filter_map(|el| el.dyn_into::<Element>().ok())
            .collect()
    } else {
        value.dyn_into::<Element>().into_iter().collect()
    }
}

/// Convert the object abcjs passes to `onEvent`.
///
/// Missing numbers read as 0, except `left` which stays unset. Entries
/// that are not elements are skipped.
pub fn decode_event(value: &JsValue) -> PlaybackEvent<Element> {
    let elements = field(value, "elements");
    let elements = if Array::is_array(&elements) {
        Array::from(&elements).iter().map(note_group).collect()
    } else {
        Vec::new()
    };

    PlaybackEvent {
        milliseconds: number(value, "milliseconds").unwrap_or(0.0),
        left: number(value, "left"),
        top: number(value, "top").unwrap_or(0.0),
        width: number(value, "width").unwrap_or(0.0),
        height: number(value, "height").unwrap_or(0.0),
        measure_start: field(value, "measureStart").is_truthy(),
        elements,
    }
}
