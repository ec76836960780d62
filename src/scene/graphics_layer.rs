use crate::domain::{Coordinate, Drawable};
use crate::scene::{DrawableHandle, Scene, SceneError};
use std::collections::HashMap;
use tracing::{debug, trace};

/// In-memory scene layer, the toolkit renders whatever it holds.
#[derive(Debug, Default)]
pub struct GraphicsLayer {
    drawables: HashMap<DrawableHandle, Drawable>,
    next_handle: u64,
}

impl GraphicsLayer {
    pub fn new() -> Self {
        GraphicsLayer::default()
    }

    #[cfg(test)]
    pub fn get(&self, handle: DrawableHandle) -> Option<&Drawable> {
        self.drawables.get(&handle)
    }

    #[cfg(test)]
    pub fn contains(&self, handle: DrawableHandle) -> bool {
        self.drawables.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Number of drawables rendered with the given symbol kind, e.g. `picture-marker`.
    #[cfg(test)]
    pub fn count_of_kind(&self, kind: &str) -> usize {
        self.drawables.values().filter(|drawable| drawable.symbol().kind() == kind).count()
    }
}

impl Scene for GraphicsLayer {
    fn add_drawable(&mut self, drawable: Drawable) -> Result<DrawableHandle, SceneError> {
        let handle = DrawableHandle::new(self.next_handle);
        self.next_handle += 1;

        debug!(handle = %handle, kind = drawable.symbol().kind(), "🌐 Added drawable");
        self.drawables.insert(handle, drawable);
        Ok(handle)
    }

    fn remove_drawable(&mut self, handle: DrawableHandle) -> Result<Drawable, SceneError> {
        let drawable = self.drawables.remove(&handle).ok_or(SceneError::UnknownDrawable(handle))?;
        debug!(handle = %handle, kind = drawable.symbol().kind(), "🌐 Removed drawable");
        Ok(drawable)
    }

    fn update_position(&mut self, handle: DrawableHandle, position: Coordinate) -> Result<(), SceneError> {
        let drawable = self.drawables.get_mut(&handle).ok_or(SceneError::UnknownDrawable(handle))?;
        if !drawable.set_position(position) {
            return Err(SceneError::NotAPoint(handle));
        }

        trace!(handle = %handle, longitude = position.longitude, latitude = position.latitude, "🌐 Moved drawable");
        Ok(())
    }
}
