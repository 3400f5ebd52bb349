//! Raw imports from the global `ABCJS.synth` namespace

use js_sys::Promise;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ABCJS", "synth"], js_name = supportsAudio)]
    pub fn supports_audio() -> bool;

    #[wasm_bindgen(js_namespace = ["ABCJS", "synth"], js_name = getMidiFile, catch)]
    pub fn get_midi_file(visual_obj: &JsValue, options: &JsValue) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// Play/restart/progress/warp/clock widget
    #[wasm_bindgen(js_namespace = ["ABCJS", "synth"])]
    pub type SynthController;

    #[wasm_bindgen(constructor, js_namespace = ["ABCJS", "synth"], catch)]
    pub fn new() -> Result<SynthController, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn load(
        this: &SynthController,
        selector: &str,
        cursor_control: &JsValue,
        options: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn disable(this: &SynthController, disabled: bool);

    #[wasm_bindgen(method, js_name = setTune)]
    pub fn set_tune(this: &SynthController, visual_obj: &JsValue, user_action: bool) -> Promise;
}

#[wasm_bindgen]
extern "C" {
    /// Web Audio synthesizer
    #[wasm_bindgen(js_namespace = ["ABCJS", "synth"])]
    pub type CreateSynth;

    #[wasm_bindgen(constructor, js_namespace = ["ABCJS", "synth"], catch)]
    pub fn new() -> Result<CreateSynth, JsValue>;

    /// `options` is `{ visualObj, ... }`
    #[wasm_bindgen(method)]
    pub fn init(this: &CreateSynth, options: &JsValue) -> Promise;
}
