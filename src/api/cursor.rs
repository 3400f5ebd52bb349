//! `CursorControl` class exposed to JavaScript
//!
//! An instance is what abcjs expects as the `cursorControl` argument of
//! `SynthController.load` and `TimingCallbacks`: an object with `onStart`,
//! `onEvent` and `onFinished` methods.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::abcjs::decode_event;
use crate::cursor::{CursorController, PlaybackListener};
use crate::models::CursorStyle;
use crate::scene::DomScene;

#[wasm_bindgen]
pub struct CursorControl {
    inner: CursorController<DomScene>,
}

#[wasm_bindgen]
impl CursorControl {
    /// `root_selector` is the selector the tune was rendered with, e.g. `"#paper"`.
    /// `style` may override `cursorClass`, `highlightClass` and `xOffset`.
    #[wasm_bindgen(constructor)]
    pub fn new(root_selector: &str, style: JsValue) -> Result<CursorControl, JsValue> {
        let style: CursorStyle = deserialize_or_default(style, "Failed to deserialize cursor style")?;
        let scene = DomScene::from_window().map_err(to_js_error)?;
        Ok(Self::from_controller(
            CursorController::new(scene, root_selector).with_style(style),
        ))
    }

    #[wasm_bindgen(js_name = onStart)]
    pub fn on_start(&mut self) -> Result<(), JsValue> {
        self.inner.on_start().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, event: JsValue) -> Result<(), JsValue> {
        let event = decode_event(&event);
        self.inner.on_event(&event).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = onFinished)]
    pub fn on_finished(&mut self) -> Result<(), JsValue> {
        self.inner.on_finished().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = removeSelection)]
    pub fn remove_selection(&mut self) -> Result<(), JsValue> {
        self.inner.remove_selection().map_err(to_js_error)
    }

    #[wasm_bindgen(getter, js_name = rootSelector)]
    pub fn root_selector(&self) -> String {
        self.inner.root_selector().to_string()
    }

    #[wasm_bindgen(js_name = cursorStyle)]
    pub fn cursor_style(&self) -> Result<JsValue, JsValue> {
        serialize(self.inner.style(), "Failed to serialize cursor style")
    }
}

impl CursorControl {
    pub(crate) fn from_controller(inner: CursorController<DomScene>) -> Self {
        Self { inner }
    }
}
