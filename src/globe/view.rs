use crate::app_config::View;
use crate::globe::{BasemapGallery, Camera, GlobeError, UiPosition, ViewUi};
use tracing::{debug, info};

pub const BASEMAP_GALLERY: &str = "basemap-gallery";
pub const BASEMAP_TOGGLE: &str = "basemap-toggle";

/// Everything about the globe that is not a drawable: map settings, camera and overlays.
#[derive(Debug)]
pub struct GlobeView {
    ground: String,
    viewpoint: Option<(Camera, f64)>,
    gallery: BasemapGallery,
    ui: ViewUi,
}

impl GlobeView {
    /// The view has no viewpoint until the first camera update is watched.
    pub fn new(view: &View) -> Result<Self, GlobeError> {
        let gallery = BasemapGallery::new(view.basemaps(), view.basemap())?;

        let mut ui = ViewUi::with_defaults();
        for component in ["attribution", "bottom-left", "bottom-right"] {
            ui.remove(component);
        }
        ui.add(BASEMAP_GALLERY, UiPosition::TopRight);
        ui.add(BASEMAP_TOGGLE, UiPosition::Manual);

        debug!(basemap = view.basemap(), ground = view.ground(), "🌍 Created globe view");
        Ok(GlobeView {
            ground: view.ground().to_string(),
            viewpoint: None,
            gallery,
            ui,
        })
    }

    /// Applies a camera update, logs and returns `true` when anything changed.
    pub fn watch_camera(&mut self, camera: Camera, zoom: f64) -> bool {
        if self.viewpoint == Some((camera, zoom)) {
            return false;
        }

        self.viewpoint = Some((camera, zoom));

        let position = camera.position();
        info!(
            zoom,
            tilt = camera.tilt(),
            heading = camera.heading(),
            longitude = position.longitude,
            latitude = position.latitude,
            z = position.altitude,
            "🎥 Camera changed"
        );
        true
    }

    /// What the overlay button does: shows or hides the basemap gallery.
    pub fn toggle_basemap_gallery(&mut self) -> bool {
        let visible = self.gallery.toggle();
        debug!(visible, "🗺️ Toggled basemap gallery");
        visible
    }

    pub fn basemap(&self) -> &str {
        self.gallery.active()
    }

    pub fn ground(&self) -> &str {
        &self.ground
    }

    #[cfg(test)]
    pub fn camera(&self) -> Option<&Camera> {
        self.viewpoint.as_ref().map(|(camera, _)| camera)
    }

    #[cfg(test)]
    pub fn zoom(&self) -> Option<f64> {
        self.viewpoint.map(|(_, zoom)| zoom)
    }

    pub fn gallery(&self) -> &BasemapGallery {
        &self.gallery
    }

    pub fn ui(&self) -> &ViewUi {
        &self.ui
    }
}
