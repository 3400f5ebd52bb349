//! `Scene` backed by the browser document

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use super::{Scene, SceneError, SVG_NAMESPACE};

/// Live DOM scene. Selectors are passed to `querySelector` as-is.
#[derive(Debug, Clone)]
pub struct DomScene {
    document: Document,
}

impl DomScene {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Scene over `window.document`
    pub fn from_window() -> Result<Self, SceneError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| SceneError::Operation("no window.document available".to_string()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn operation_error(err: JsValue) -> SceneError {
    SceneError::Operation(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl Scene for DomScene {
    type Element = Element;

    fn surface(&self, root_selector: &str) -> Option<Element> {
        self.document
            .query_selector(&format!("{} svg", root_selector))
            .ok()
            .flatten()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_class(&self, root_selector: &str, class: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(&format!("{} .{}", root_selector, class)) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("invalid selector '{} .{}': {:?}", root_selector, class, e);
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn create_svg_element(&mut self, tag: &str) -> Result<Element, SceneError> {
        self.document
            .create_element_ns(Some(SVG_NAMESPACE), tag)
            .map_err(operation_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), SceneError> {
        parent.append_child(child).map(|_| ()).map_err(operation_error)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) -> Result<(), SceneError> {
        element.set_attribute(name, value).map_err(operation_error)
    }

    fn add_class(&mut self, element: &Element, class: &str) -> Result<(), SceneError> {
        element.class_list().add_1(class).map_err(operation_error)
    }

    fn remove_class(&mut self, element: &Element, class: &str) -> Result<(), SceneError> {
        element.class_list().remove_1(class).map_err(operation_error)
    }

    fn set_inner_html(&mut self, element: &Element, html: &str) -> Result<(), SceneError> {
        element.set_inner_html(html);
        Ok(())
    }
}
