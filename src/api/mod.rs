//! JavaScript-facing API
//!
//! - `helpers`: conversions and error reporting at the JS boundary
//! - `cursor`: the `CursorControl` class abcjs drives during playback
//! - `audio`: `activateAudio` and `downloadAudio` click handlers

pub mod helpers;
pub mod cursor;
pub mod audio;

pub use cursor::CursorControl;
pub use audio::{activate_audio, download_audio};
