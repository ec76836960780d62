use crate::globe::GlobeError;
use tracing::info;

/// Overlay listing the selectable basemaps, hidden until toggled.
#[derive(Debug)]
pub struct BasemapGallery {
    basemaps: Vec<String>,
    active: String,
    visible: bool,
}

impl BasemapGallery {
    pub fn new(basemaps: &[String], active: &str) -> Result<Self, GlobeError> {
        let mut gallery = BasemapGallery {
            basemaps: basemaps.to_vec(),
            active: String::new(),
            visible: false,
        };
        gallery.select(active)?;
        Ok(gallery)
    }

    /// Flips the visibility, returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn select(&mut self, basemap: &str) -> Result<(), GlobeError> {
        if !self.basemaps.iter().any(|b| b == basemap) {
            return Err(GlobeError::UnknownBasemap(basemap.to_string()));
        }

        if self.active != basemap {
            info!("🗺️ Selected basemap '{}'", basemap);
            self.active = basemap.to_string();
        }
        Ok(())
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn basemaps(&self) -> &[String] {
        &self.basemaps
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
