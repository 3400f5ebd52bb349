//! Audio engine seams
//!
//! abcjs provides audio support detection, the synth control widget, the
//! synthesizer and MIDI file generation. These traits describe just the
//! parts the page glue calls, so the activation and export flows can run
//! against a scripted engine in tests.

pub mod activator;
pub mod export;

pub use activator::{prepare_audio, Activation, AudioActivator, AudioSetupError, PreparedAudio};
pub use export::{export_midi_link, ExportError};

use thiserror::Error;

use crate::cursor::CursorController;
use crate::models::{ControlOptions, MidiOptions};
use crate::scene::{Scene, SceneError};

/// Failure reported by the audio engine, carrying its message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// The play/restart/progress widget
#[allow(async_fn_in_trait)]
pub trait SynthController {
    type Tune;
    type Scene: Scene;

    /// Render the widget into `audio_selector` and attach the cursor to its timer
    fn load(
        &mut self,
        audio_selector: &str,
        cursor: CursorController<Self::Scene>,
        options: &ControlOptions,
    ) -> Result<(), EngineError>;

    fn disable(&mut self, disabled: bool);

    /// Hand the tune to the widget. Playback is possible once this resolves.
    async fn set_tune(&mut self, tune: &Self::Tune, user_action: bool) -> Result<(), EngineError>;
}

/// Sound buffer builder
#[allow(async_fn_in_trait)]
pub trait Synth {
    type Tune;

    async fn init(&mut self, tune: &Self::Tune) -> Result<(), EngineError>;
}

pub trait AudioEngine {
    /// Rendered tune as produced by the notation renderer
    type Tune: Clone;
    type Scene: Scene;
    type Controller: SynthController<Tune = Self::Tune, Scene = Self::Scene>;
    type Synth: Synth<Tune = Self::Tune>;

    fn supports_audio(&self) -> bool;

    /// Scene the cursor draws into
    fn scene(&self) -> Result<Self::Scene, SceneError>;

    fn synth_controller(&self) -> Result<Self::Controller, EngineError>;

    fn create_synth(&self) -> Result<Self::Synth, EngineError>;

    /// MIDI rendering of `tune` in the form `options.midi_output_type` asks for
    fn midi_file(&self, tune: &Self::Tune, options: &MidiOptions) -> Result<String, EngineError>;
}
