mod graphics_layer;

use crate::domain::{Coordinate, Drawable};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub use graphics_layer::GraphicsLayer;

/// Opaque reference to a drawable held by a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableHandle(u64);

impl DrawableHandle {
    pub fn new(id: u64) -> Self {
        DrawableHandle(id)
    }
}

impl Display for DrawableHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "drawable-{}", self.0)
    }
}

/// The part of the globe toolkit the animations talk to.
pub trait Scene {
    fn add_drawable(&mut self, drawable: Drawable) -> Result<DrawableHandle, SceneError>;

    fn remove_drawable(&mut self, handle: DrawableHandle) -> Result<Drawable, SceneError>;

    fn update_position(&mut self, handle: DrawableHandle, position: Coordinate) -> Result<(), SceneError>;
}

#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("unknown drawable '{0}'")]
    UnknownDrawable(DrawableHandle),
    #[error("drawable '{0}' is not a point and cannot be moved")]
    NotAPoint(DrawableHandle),
}
