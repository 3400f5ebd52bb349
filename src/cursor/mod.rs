//! Playback cursor and note highlighting
//!
//! Two indicators follow the music: a vertical line that is moved to each
//! note, and a class put on the elements of the note currently sounding.

use crate::models::{CursorStyle, PlaybackEvent};
use crate::scene::{Scene, SceneError};

/// Callbacks the synth controller invokes during playback
pub trait PlaybackListener {
    type Element;

    /// Timer started; the notation is rendered by now
    fn on_start(&mut self) -> Result<(), SceneError>;

    /// A note or rest was reached
    fn on_event(&mut self, event: &PlaybackEvent<Self::Element>) -> Result<(), SceneError>;

    /// Playback reached the end of the tune
    fn on_finished(&mut self) -> Result<(), SceneError>;
}

/// Cursor state for one rendered tune
#[derive(Debug)]
pub struct CursorController<S: Scene> {
    scene: S,
    /// Same selector the tune was rendered into, e.g. `#paper`
    root_selector: String,
    style: CursorStyle,
    cursor: Option<S::Element>,
}

impl<S: Scene> CursorController<S> {
    pub fn new(scene: S, root_selector: impl Into<String>) -> Self {
        Self {
            scene,
            root_selector: root_selector.into(),
            style: CursorStyle::default(),
            cursor: None,
        }
    }

    pub fn with_style(mut self, style: CursorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn root_selector(&self) -> &str {
        &self.root_selector
    }

    pub fn style(&self) -> &CursorStyle {
        &self.style
    }

    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<&S::Element> {
        self.cursor.as_ref()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Unhighlight every note under the root
    pub fn remove_selection(&mut self) -> Result<(), SceneError> {
        let selected = self.scene.query_class(&self.root_selector, &self.style.highlight_class);
        for element in &selected {
            self.scene.remove_class(element, &self.style.highlight_class)?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, x: f64, y1: f64, y2: f64) -> Result<(), SceneError> {
        let Some(cursor) = self.cursor.as_ref() else {
            return Ok(());
        };
        let x = x.to_string();
        self.scene.set_attribute(cursor, "x1", &x)?;
        self.scene.set_attribute(cursor, "x2", &x)?;
        self.scene.set_attribute(cursor, "y1", &y1.to_string())?;
        self.scene.set_attribute(cursor, "y2", &y2.to_string())?;
        Ok(())
    }
}

impl<S: Scene> PlaybackListener for CursorController<S> {
    type Element = S::Element;

    fn on_start(&mut self) -> Result<(), SceneError> {
        // Restarts reuse the line created on the first start
        if self.cursor.is_some() {
            return Ok(());
        }

        let svg = self
            .scene
            .surface(&self.root_selector)
            .ok_or_else(|| SceneError::SurfaceNotFound(self.root_selector.clone()))?;

        let line = self.scene.create_svg_element("line")?;
        self.scene.set_attribute(&line, "class", &self.style.cursor_class)?;
        for name in ["x1", "y1", "x2", "y2"] {
            self.scene.set_attribute(&line, name, "0")?;
        }
        // Appended last so it draws above the notes
        self.scene.append_child(&svg, &line)?;

        log::debug!("cursor created under '{}'", self.root_selector);
        self.cursor = Some(line);
        Ok(())
    }

    fn on_event(&mut self, event: &PlaybackEvent<S::Element>) -> Result<(), SceneError> {
        if event.is_tie_continuation() {
            return Ok(());
        }

        self.remove_selection()?;

        log::trace!(
            "highlighting {} elements at {}ms",
            event.element_count(),
            event.milliseconds
        );
        for group in &event.elements {
            for element in group {
                self.scene.add_class(element, &self.style.highlight_class)?;
            }
        }

        match event.left {
            Some(left) => self.move_cursor(left - self.style.x_offset, event.top, event.top + event.height),
            None => {
                log::debug!("event at {}ms has no position, cursor left in place", event.milliseconds);
                Ok(())
            }
        }
    }

    fn on_finished(&mut self) -> Result<(), SceneError> {
        self.remove_selection()?;
        self.move_cursor(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MemoryScene, NodeId};

    fn controller() -> (CursorController<MemoryScene>, NodeId) {
        let mut scene = MemoryScene::new();
        let body = scene.body();
        let paper = scene.add_element_with_id(body, "div", "tune1");
        let svg = scene.add_element(paper, "svg");
        (CursorController::new(scene, "#tune1"), svg)
    }

    fn line_coords(ctl: &CursorController<MemoryScene>) -> [String; 4] {
        let cursor = *ctl.cursor().unwrap();
        ["x1", "y1", "x2", "y2"].map(|name| ctl.scene().attribute(cursor, name).unwrap())
    }

    #[test]
    fn test_start_appends_zeroed_line_to_surface() {
        let (mut ctl, svg) = controller();
        ctl.on_start().unwrap();

        let cursor = *ctl.cursor().unwrap();
        let scene = ctl.scene();
        assert_eq!(scene.tag(cursor), "line");
        assert_eq!(scene.namespace(cursor), Some(crate::scene::SVG_NAMESPACE));
        assert!(scene.has_class(cursor, "abcjs-cursor"));
        assert_eq!(scene.children(svg).last(), Some(&cursor));
        assert_eq!(line_coords(&ctl), ["0", "0", "0", "0"]);
    }

    #[test]
    fn test_start_without_surface_fails() {
        let mut ctl = CursorController::new(MemoryScene::new(), "#nowhere");
        assert_eq!(
            ctl.on_start(),
            Err(SceneError::SurfaceNotFound("#nowhere".to_string()))
        );
        assert!(!ctl.has_cursor());
    }

    #[test]
    fn test_event_without_position_keeps_cursor() {
        let (mut ctl, svg) = controller();
        let note = ctl.scene_mut().add_element(svg, "path");
        ctl.on_start().unwrap();
        ctl.on_event(&PlaybackEvent::at(50.0, 10.0, 20.0)).unwrap();

        let mut ev = PlaybackEvent::tie_continuation().with_elements(vec![vec![note]]);
        ev.measure_start = false;
        ctl.on_event(&ev).unwrap();

        assert!(ctl.scene().has_class(note, "abcjs-highlight"));
        assert_eq!(line_coords(&ctl), ["48", "10", "48", "30"]);
    }

    #[test]
    fn test_custom_style() {
        let (ctl, svg) = controller();
        let mut ctl = ctl.with_style(CursorStyle {
            cursor_class: "cursor".to_string(),
            highlight_class: "playing".to_string(),
            x_offset: 0.5,
        });
        let note = ctl.scene_mut().add_element(svg, "path");
        ctl.on_start().unwrap();
        ctl.on_event(&PlaybackEvent::at(10.0, 1.0, 2.0).with_elements(vec![vec![note]]))
            .unwrap();

        assert!(ctl.scene().has_class(*ctl.cursor().unwrap(), "cursor"));
        assert!(ctl.scene().has_class(note, "playing"));
        assert!(!ctl.scene().has_class(note, "abcjs-highlight"));
        assert_eq!(line_coords(&ctl), ["9.5", "1", "9.5", "3"]);
    }
}
