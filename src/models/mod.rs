//! Models module for the playback glue
//!
//! Plain data shared by the cursor, the activator and the exporter.

pub mod event;
pub mod options;

// Re-export commonly used types
pub use event::{NoteGroup, PlaybackEvent};
pub use options::{ControlOptions, CursorStyle, MidiOptions, MidiOutputType};
