use crate::app_config::Plane;
use crate::domain::{AnimatedMarker, Coordinate, Drawable, Endpoints, Symbol};
use crate::scene::{Scene, SceneError};
use crate::scheduler::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Moves the plane icon from origin to destination, one step per frame, and starts over when it arrives.
pub struct PathAnimator<S: Scene> {
    scene: Rc<RefCell<S>>,
    scheduler: Rc<dyn Scheduler>,
    endpoints: Endpoints,
    marker: AnimatedMarker,
    altitude: f64,
    step: f64,
    progress: f64,
    frame: Option<TimerHandle>,
}

impl<S: Scene + 'static> PathAnimator<S> {
    /// Places the plane at the origin.
    pub fn new(scene: Rc<RefCell<S>>, scheduler: Rc<dyn Scheduler>, endpoints: Endpoints, plane: &Plane) -> Result<Self, SceneError> {
        let position = endpoints.origin().with_altitude(plane.altitude_m());
        let symbol = Symbol::picture(plane.icon_url(), plane.icon_size_px(), 1.0);
        let handle = scene.borrow_mut().add_drawable(Drawable::point(position, symbol))?;

        Ok(PathAnimator {
            scene,
            scheduler,
            endpoints,
            marker: AnimatedMarker::new(handle, position),
            altitude: plane.altitude_m(),
            step: plane.step(),
            progress: 0.0,
            frame: None,
        })
    }

    /// Moves the plane to the current progress and advances it by one step.
    pub fn tick(&mut self) {
        let position = self.endpoints.interpolate(self.progress).with_altitude(self.altitude);
        match self.scene.borrow_mut().update_position(self.marker.handle(), position) {
            Ok(()) => self.marker.set_position(position),
            Err(e) => warn!(handle = %self.marker.handle(), "⚠️ Could not move the plane: {}", e),
        }

        self.progress += self.step;
        if self.progress >= 1.0 {
            debug!("✈️ Plane arrived, starting over");
            self.progress = 0.0;
        }
    }

    #[instrument(skip_all)]
    pub fn start(animator: &Rc<RefCell<Self>>) -> TimerHandle {
        let weak = Rc::downgrade(animator);
        let scheduler = animator.borrow().scheduler.clone();
        if let Some(previous) = animator.borrow_mut().frame.take() {
            scheduler.cancel(previous);
        }
        let handle = scheduler.on_every_frame(Box::new(move || {
            if let Some(animator) = weak.upgrade() {
                animator.borrow_mut().tick();
            }
        }));

        animator.borrow_mut().frame = Some(handle);
        info!(step = animator.borrow().step, "✈️ Started plane animation");
        handle
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel(handle);
            let position = self.marker.position();
            info!(longitude = position.longitude, latitude = position.latitude, "✈️ Stopped plane animation");
        }
    }

    #[cfg(test)]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[cfg(test)]
    pub fn position(&self) -> Coordinate {
        self.marker.position()
    }

    #[cfg(test)]
    pub fn marker(&self) -> &AnimatedMarker {
        &self.marker
    }
}
