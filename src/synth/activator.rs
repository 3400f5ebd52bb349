//! Deferred audio activation
//!
//! Browsers only allow audio after a user gesture, so activation is split
//! in two. `AudioActivator::trigger` runs synchronously from the click
//! handler: it checks support, builds the control widget with its cursor
//! and disables it. The returned future then initializes the synth and
//! loads the tune into the widget.

use std::future::Future;

use thiserror::Error;

use super::{AudioEngine, EngineError, Synth, SynthController};
use crate::cursor::CursorController;
use crate::models::{ControlOptions, CursorStyle};
use crate::scene::SceneError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioSetupError {
    /// The widget or synth could not be constructed or bound
    #[error("audio setup failed: {0}")]
    Setup(EngineError),

    #[error("cursor scene unavailable: {0}")]
    Scene(SceneError),

    #[error("synth initialization failed: {0}")]
    SynthInit(EngineError),

    #[error("tune loading failed: {0}")]
    TuneLoad(EngineError),
}

/// Outcome of the synchronous part of activation
#[derive(Debug)]
pub enum Activation<F> {
    /// No audio on this platform; nothing was built
    Unsupported,
    /// Widget is bound and disabled; `F` finishes setup
    Pending(F),
}

impl<F> Activation<F> {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Activation::Unsupported)
    }
}

/// A synth and widget ready for playback
#[derive(Debug)]
pub struct PreparedAudio<C, S> {
    pub controller: C,
    pub synth: S,
}

/// Initialize `synth` with `tune`, then load `tune` into `controller`.
///
/// The widget is left untouched when either stage fails.
pub async fn prepare_audio<C, S, T>(
    mut synth: S,
    mut controller: C,
    tune: T,
) -> Result<PreparedAudio<C, S>, AudioSetupError>
where
    C: SynthController<Tune = T>,
    S: Synth<Tune = T>,
{
    let outcome = match synth.init(&tune).await {
        Err(e) => Err(AudioSetupError::SynthInit(e)),
        Ok(()) => controller
            .set_tune(&tune, false)
            .await
            .map_err(AudioSetupError::TuneLoad),
    };

    match outcome {
        Ok(()) => {
            log::info!("Audio successfully loaded.");
            Ok(PreparedAudio { controller, synth })
        }
        Err(e) => {
            log::warn!("Audio problem: {}", e);
            Err(e)
        }
    }
}

/// Wires one rendered tune to an audio control container
pub struct AudioActivator<E: AudioEngine> {
    engine: E,
    paper_id: String,
    audio_id: String,
    tune: E::Tune,
    options: ControlOptions,
    style: CursorStyle,
}

impl<E: AudioEngine> AudioActivator<E> {
    /// `paper_id` is the element the tune was rendered into, `audio_id` the
    /// element that receives the control widget. Both are bare ids.
    pub fn new(engine: E, paper_id: impl Into<String>, audio_id: impl Into<String>, tune: E::Tune) -> Self {
        Self {
            engine,
            paper_id: paper_id.into(),
            audio_id: audio_id.into(),
            tune,
            options: ControlOptions::default(),
            style: CursorStyle::default(),
        }
    }

    pub fn with_options(mut self, options: ControlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cursor_style(mut self, style: CursorStyle) -> Self {
        self.style = style;
        self
    }

    /// Build and disable the widget, and return the pending setup.
    ///
    /// Every call builds a fresh widget and synth.
    pub fn trigger(
        &self,
    ) -> Result<
        Activation<impl Future<Output = Result<PreparedAudio<E::Controller, E::Synth>, AudioSetupError>>>,
        AudioSetupError,
    > {
        if !self.engine.supports_audio() {
            log::info!("audio is not supported on this browser");
            return Ok(Activation::Unsupported);
        }

        let scene = self.engine.scene().map_err(AudioSetupError::Scene)?;
        let cursor = CursorController::new(scene, format!("#{}", self.paper_id)).with_style(self.style.clone());

        let mut controller = self.engine.synth_controller().map_err(AudioSetupError::Setup)?;
        controller
            .load(&format!("#{}", self.audio_id), cursor, &self.options)
            .map_err(AudioSetupError::Setup)?;
        controller.disable(true);

        let synth = self.engine.create_synth().map_err(AudioSetupError::Setup)?;
        log::debug!("audio widget bound to #{}, preparing synth", self.audio_id);

        Ok(Activation::Pending(prepare_audio(synth, controller, self.tune.clone())))
    }
}
