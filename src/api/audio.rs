//! Button handlers for audio activation and MIDI download
//!
//! Both entry points return a JS function meant to be installed as a click
//! handler; nothing happens until it is called.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::helpers::deserialize_or_default;
use crate::abcjs::AbcjsEngine;
use crate::models::{ControlOptions, MidiOptions};
use crate::scene::DomScene;
use crate::synth::{export_midi_link, Activation, AudioActivator, ExportError};

/// Handler that sets up the synth widget for a rendered tune.
///
/// `paper_id` is the id the tune was rendered into, `audio_id` the id of
/// the container for the widget and `visual_obj` the value `renderAbc`
/// returned for the tune. `options` optionally overrides the widget's
/// `display*` flags.
#[wasm_bindgen(js_name = activateAudio)]
pub fn activate_audio(
    paper_id: String,
    audio_id: String,
    visual_obj: JsValue,
    options: JsValue,
) -> Result<js_sys::Function, JsValue> {
    let options: ControlOptions = deserialize_or_default(options, "Failed to deserialize control options")?;
    let activator = AudioActivator::new(AbcjsEngine, paper_id, audio_id, visual_obj).with_options(options);

    let handler = Closure::<dyn Fn()>::new(move || match activator.trigger() {
        Ok(Activation::Unsupported) => {}
        Ok(Activation::Pending(setup)) => spawn_local(async move {
            // Failures are logged by the pipeline
            let _ = setup.await;
        }),
        Err(e) => log::warn!("Audio problem: {}", e),
    });

    Ok(handler.into_js_value().unchecked_into())
}

/// Handler that writes a MIDI download link for `visual_obj` into `#midi_id`
#[wasm_bindgen(js_name = downloadAudio)]
pub fn download_audio(paper_id: String, midi_id: String, visual_obj: JsValue) -> js_sys::Function {
    let handler = Closure::<dyn Fn()>::new(move || {
        log::debug!("exporting MIDI for #{}", paper_id);
        let result = DomScene::from_window()
            .map_err(ExportError::from)
            .and_then(|mut scene| {
                export_midi_link(&AbcjsEngine, &mut scene, &visual_obj, &midi_id, &MidiOptions::default())
            });
        if let Err(e) = result {
            log::warn!("MIDI export failed: {}", e);
        }
    });

    handler.into_js_value().unchecked_into()
}
