use crate::domain::Coordinate;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Camera {
    position: Coordinate,
    tilt: f64,
    heading: f64,
}

impl Camera {
    #[cfg(test)]
    pub fn new(position: Coordinate, tilt: f64, heading: f64) -> Self {
        Camera { position, tilt, heading }
    }

    /// Camera location, the altitude is the height above the ellipsoid in meters.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Degrees from looking straight down.
    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }
}
