//! Playback timing events
//!
//! One event is delivered by the synth controller each time a note or rest
//! is reached. The element type is generic so the same event can carry DOM
//! elements in the browser or scene handles in tests.

/// Visual primitives (head, stem, accidental, ...) that make up one sounding note.
pub type NoteGroup<E> = Vec<E>;

/// A timed point in playback
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent<E> {
    /// Offset from the start of the tune
    pub milliseconds: f64,
    /// Horizontal position of the note; unset for the tail of a tie across a line break
    pub left: Option<f64>,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Set when the event sits at the start of a measure
    pub measure_start: bool,
    pub elements: Vec<NoteGroup<E>>,
}

impl<E> PlaybackEvent<E> {
    /// Event at `(left, top)` spanning `height`, with no notes attached
    pub fn at(left: f64, top: f64, height: f64) -> Self {
        Self {
            milliseconds: 0.0,
            left: Some(left),
            top,
            width: 0.0,
            height,
            measure_start: false,
            elements: Vec::new(),
        }
    }

    /// The second half of a note tied across a measure line
    pub fn tie_continuation() -> Self {
        Self {
            milliseconds: 0.0,
            left: None,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            measure_start: true,
            elements: Vec::new(),
        }
    }

    pub fn with_elements(mut self, elements: Vec<NoteGroup<E>>) -> Self {
        self.elements = elements;
        self
    }

    /// True for events the cursor must ignore entirely.
    ///
    /// abcjs emits these for the second part of a tie that crosses a
    /// measure line; the tied note was already highlighted.
    pub fn is_tie_continuation(&self) -> bool {
        self.measure_start && self.left.is_none()
    }

    /// Total number of visual elements across all note groups
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Vec::len).sum()
    }
}
