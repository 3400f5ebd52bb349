//! abcjs-backed audio engine
//!
//! Expects the abcjs bundle to be loaded on the page so that `ABCJS.synth`
//! is a global.

pub mod bindings;
pub mod event;

pub use event::decode_event;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::api::CursorControl;
use crate::cursor::CursorController;
use crate::models::{ControlOptions, MidiOptions};
use crate::scene::{DomScene, SceneError};
use crate::synth::{AudioEngine, EngineError, Synth, SynthController};

fn engine_error(err: JsValue) -> EngineError {
    EngineError(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, EngineError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| EngineError(e.to_string()))
}

/// `ABCJS.synth` as an `AudioEngine`. The tune is the visual object
/// returned by `ABCJS.renderAbc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbcjsEngine;

impl AudioEngine for AbcjsEngine {
    type Tune = JsValue;
    type Scene = DomScene;
    type Controller = AbcjsController;
    type Synth = AbcjsSynth;

    fn supports_audio(&self) -> bool {
        bindings::supports_audio()
    }

    fn scene(&self) -> Result<DomScene, SceneError> {
        DomScene::from_window()
    }

    fn synth_controller(&self) -> Result<AbcjsController, EngineError> {
        bindings::SynthController::new()
            .map(|inner| AbcjsController { inner })
            .map_err(engine_error)
    }

    fn create_synth(&self) -> Result<AbcjsSynth, EngineError> {
        bindings::CreateSynth::new()
            .map(|inner| AbcjsSynth { inner })
            .map_err(engine_error)
    }

    fn midi_file(&self, tune: &JsValue, options: &MidiOptions) -> Result<String, EngineError> {
        let midi = bindings::get_midi_file(tune, &to_js(options)?).map_err(engine_error)?;
        midi.as_string()
            .ok_or_else(|| EngineError::new("getMidiFile did not return a string"))
    }
}

pub struct AbcjsController {
    inner: bindings::SynthController,
}

impl SynthController for AbcjsController {
    type Tune = JsValue;
    type Scene = DomScene;

    fn load(
        &mut self,
        audio_selector: &str,
        cursor: CursorController<DomScene>,
        options: &ControlOptions,
    ) -> Result<(), EngineError> {
        // abcjs keeps the JS wrapper alive for as long as the widget exists
        let cursor_control = JsValue::from(CursorControl::from_controller(cursor));
        self.inner
            .load(audio_selector, &cursor_control, &to_js(options)?)
            .map_err(engine_error)
    }

    fn disable(&mut self, disabled: bool) {
        self.inner.disable(disabled);
    }

    async fn set_tune(&mut self, tune: &JsValue, user_action: bool) -> Result<(), EngineError> {
        JsFuture::from(self.inner.set_tune(tune, user_action))
            .await
            .map(|_| ())
            .map_err(engine_error)
    }
}

pub struct AbcjsSynth {
    inner: bindings::CreateSynth,
}

impl Synth for AbcjsSynth {
    type Tune = JsValue;

    async fn init(&mut self, tune: &JsValue) -> Result<(), EngineError> {
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("visualObj"), tune).map_err(engine_error)?;
        JsFuture::from(self.inner.init(&options))
            .await
            .map(|_| ())
            .map_err(engine_error)
    }
}
