use crate::domain::Coordinate;
use crate::scene::DrawableHandle;
use crate::scheduler::TimerHandle;
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    pub fn new(id: u64) -> Self {
        MarkerId(id)
    }
}

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// A marker that lives for the whole run and is moved every frame.
#[derive(Debug)]
pub struct AnimatedMarker {
    handle: DrawableHandle,
    position: Coordinate,
}

impl AnimatedMarker {
    pub fn new(handle: DrawableHandle, position: Coordinate) -> Self {
        AnimatedMarker { handle, position }
    }

    pub fn handle(&self) -> DrawableHandle {
        self.handle
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }
}

#[derive(Debug)]
pub struct TransientMarker {
    id: MarkerId,
    coordinate: Coordinate,
    handle: DrawableHandle,
    created_at: Duration,
    expiry: TimerHandle,
}

impl TransientMarker {
    pub fn new(id: MarkerId, coordinate: Coordinate, handle: DrawableHandle, created_at: Duration, expiry: TimerHandle) -> Self {
        TransientMarker {
            id,
            coordinate,
            handle,
            created_at,
            expiry,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn handle(&self) -> DrawableHandle {
        self.handle
    }

    /// Scheduler time at which the marker was added to the scene.
    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    pub fn expiry(&self) -> TimerHandle {
        self.expiry
    }
}
