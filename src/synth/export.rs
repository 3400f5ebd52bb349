//! MIDI download link

use thiserror::Error;

use super::{AudioEngine, EngineError};
use crate::models::MidiOptions;
use crate::scene::{Scene, SceneError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no element with id '{0}' to receive the MIDI link")]
    TargetNotFound(String),

    #[error("MIDI generation failed: {0}")]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Render `tune` to MIDI and put the engine's output into `#midi_id`.
///
/// With the default options the output is an HTML download link.
pub fn export_midi_link<E: AudioEngine>(
    engine: &E,
    scene: &mut E::Scene,
    tune: &E::Tune,
    midi_id: &str,
    options: &MidiOptions,
) -> Result<(), ExportError> {
    let target = scene
        .element_by_id(midi_id)
        .ok_or_else(|| ExportError::TargetNotFound(midi_id.to_string()))?;

    let midi = engine.midi_file(tune, options)?;
    scene.set_inner_html(&target, &midi)?;

    log::debug!("MIDI link written to #{} ({} bytes)", midi_id, midi.len());
    Ok(())
}
