use crate::domain::{Coordinate, Symbol};

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    Polyline(Vec<Coordinate>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    geometry: Geometry,
    symbol: Symbol,
}

impl Drawable {
    pub fn point(position: Coordinate, symbol: Symbol) -> Self {
        Drawable {
            geometry: Geometry::Point(position),
            symbol,
        }
    }

    pub fn polyline(path: Vec<Coordinate>, symbol: Symbol) -> Self {
        Drawable {
            geometry: Geometry::Polyline(path),
            symbol,
        }
    }

    #[cfg(test)]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[cfg(test)]
    pub fn position(&self) -> Option<Coordinate> {
        match self.geometry {
            Geometry::Point(position) => Some(position),
            Geometry::Polyline(_) => None,
        }
    }

    /// Moves a point drawable, returns `false` for geometries that are not a point.
    pub fn set_position(&mut self, position: Coordinate) -> bool {
        match &mut self.geometry {
            Geometry::Point(current) => {
                *current = position;
                true
            }
            Geometry::Polyline(_) => false,
        }
    }
}
