//! Configuration passed to abcjs and used by the cursor
//!
//! Field names serialize to the camelCase keys abcjs reads.

use serde::{Deserialize, Serialize};

/// Which buttons the synth control widget shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlOptions {
    pub display_restart: bool,
    pub display_play: bool,
    pub display_progress: bool,
    pub display_warp: bool,
    pub display_clock: bool,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            display_restart: true,
            display_play: true,
            display_progress: true,
            display_warp: true,
            display_clock: true,
        }
    }
}

/// Shape of the value `getMidiFile` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidiOutputType {
    /// An `<a download>` HTML fragment
    Link,
    /// A data URL
    Encoded,
    /// Raw bytes
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidiOptions {
    pub chords_off: bool,
    pub midi_output_type: MidiOutputType,
}

impl Default for MidiOptions {
    fn default() -> Self {
        Self {
            chords_off: true,
            midi_output_type: MidiOutputType::Link,
        }
    }
}

/// Class names and geometry of the playback cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorStyle {
    pub cursor_class: String,
    pub highlight_class: String,
    /// How far left of the note the cursor line is drawn
    pub x_offset: f64,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            cursor_class: "abcjs-cursor".to_string(),
            highlight_class: "abcjs-highlight".to_string(),
            x_offset: 2.0,
        }
    }
}
