//! Scene abstraction over the rendered notation
//!
//! The cursor only needs a handful of operations on the SVG that abcjs
//! draws: find the surface, create and append a line, set attributes and
//! toggle classes. `DomScene` performs them on the live document and
//! `MemoryScene` on an in-memory tree.

pub mod dom;
pub mod memory;

pub use dom::DomScene;
pub use memory::{MemoryScene, NodeId};

use thiserror::Error;

/// Namespace for elements created inside the notation's `<svg>`
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// `<root> svg` matched nothing, usually because the tune is not rendered yet
    #[error("no svg surface under '{0}'")]
    SurfaceNotFound(String),

    #[error("no element with id '{0}'")]
    ElementNotFound(String),

    /// The underlying document rejected the operation
    #[error("scene operation failed: {0}")]
    Operation(String),
}

/// Minimal mutable view of a rendered notation surface
pub trait Scene {
    type Element: Clone;

    /// The `<svg>` rendered under `root_selector`
    fn surface(&self, root_selector: &str) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every descendant of `root_selector` that carries `class`, in document order
    fn query_class(&self, root_selector: &str, class: &str) -> Vec<Self::Element>;

    fn create_svg_element(&mut self, tag: &str) -> Result<Self::Element, SceneError>;

    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element) -> Result<(), SceneError>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str) -> Result<(), SceneError>;

    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<(), SceneError>;

    fn remove_class(&mut self, element: &Self::Element, class: &str) -> Result<(), SceneError>;

    fn set_inner_html(&mut self, element: &Self::Element, html: &str) -> Result<(), SceneError>;
}
