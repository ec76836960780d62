use rand::Rng;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64, // In meters
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
            altitude: 0.0,
        }
    }

    pub const fn with_altitude(self, altitude: f64) -> Self {
        Coordinate { altitude, ..self }
    }

    /// Linear interpolation on every axis, `t = 0` yields `self` and `t = 1` yields `other`.
    pub fn lerp(&self, other: &Coordinate, t: f64) -> Coordinate {
        Coordinate {
            longitude: self.longitude + (other.longitude - self.longitude) * t,
            latitude: self.latitude + (other.latitude - self.latitude) * t,
            altitude: self.altitude + (other.altitude - self.altitude) * t,
        }
    }
}

/// The two fixed ends of the animated route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoints {
    origin: Coordinate,
    destination: Coordinate,
}

impl Endpoints {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Endpoints { origin, destination }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    #[cfg(test)]
    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Returns the point at `progress` along the straight segment from origin to destination.
    pub fn interpolate(&self, progress: f64) -> Coordinate {
        self.origin.lerp(&self.destination, progress)
    }

    /// Samples a uniformly random point inside the bounding box of both endpoints.
    ///
    /// Longitude and latitude are drawn independently, so the result is generally not on the path.
    pub fn sample_bounding_box<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let u: f64 = rng.gen_range(0.0..1.0);
        let v: f64 = rng.gen_range(0.0..1.0);

        Coordinate::new(
            self.origin.longitude + (self.destination.longitude - self.origin.longitude) * u,
            self.origin.latitude + (self.destination.latitude - self.origin.latitude) * v,
        )
    }

    #[cfg(test)]
    pub fn bounding_box_contains(&self, coordinate: &Coordinate) -> bool {
        let (min_lon, max_lon) = min_max(self.origin.longitude, self.destination.longitude);
        let (min_lat, max_lat) = min_max(self.origin.latitude, self.destination.latitude);

        (min_lon..=max_lon).contains(&coordinate.longitude) && (min_lat..=max_lat).contains(&coordinate.latitude)
    }
}

#[cfg(test)]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
