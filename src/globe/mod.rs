mod basemap_gallery;
mod camera;
pub mod route;
mod ui;
mod view;

use thiserror::Error;

pub use basemap_gallery::BasemapGallery;
pub use camera::Camera;
pub use ui::{UiPosition, ViewUi};
pub use view::{BASEMAP_GALLERY, GlobeView};

#[derive(Error, Debug, PartialEq)]
pub enum GlobeError {
    #[error("unknown basemap '{0}'")]
    UnknownBasemap(String),
}
