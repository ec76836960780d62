pub mod color;
mod coordinate;
mod drawable;
mod marker;
mod symbol;

pub use color::Color;
pub use coordinate::{Coordinate, Endpoints};
pub use drawable::Drawable;
#[cfg(test)]
pub use drawable::Geometry;
pub use marker::{AnimatedMarker, MarkerId, TransientMarker};
pub use symbol::Symbol;
