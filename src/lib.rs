//! Playback glue for abcjs sheet music
//!
//! Moves a cursor line and highlights the sounding notes while abcjs plays
//! a tune, sets up the synth control widget on demand, and writes MIDI
//! download links. Everything that touches abcjs or the DOM sits behind
//! the `Scene` and `AudioEngine` traits.

pub mod abcjs;
pub mod api;
pub mod cursor;
pub mod models;
pub mod scene;
pub mod synth;

// Re-export commonly used types
pub use cursor::{CursorController, PlaybackListener};
pub use models::{ControlOptions, CursorStyle, MidiOptions, MidiOutputType, NoteGroup, PlaybackEvent};
pub use scene::{MemoryScene, NodeId, Scene, SceneError};
pub use synth::{
    export_midi_link, prepare_audio, Activation, AudioActivator, AudioEngine, AudioSetupError, EngineError,
    ExportError, PreparedAudio, Synth, SynthController,
};

use wasm_bindgen::prelude::*;

// Runs when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("abc playback module initialized");
}
