use crate::app_config::Clouds;
use crate::domain::{Drawable, Endpoints, MarkerId, Symbol, TransientMarker};
use crate::scene::Scene;
use crate::scheduler::{Scheduler, TimerHandle};
use rand::Rng;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Periodically drops short-lived cloud markers somewhere inside the route's bounding box.
pub struct CloudSpawner<S: Scene, R: Rng> {
    scene: Rc<RefCell<S>>,
    scheduler: Rc<dyn Scheduler>,
    endpoints: Endpoints,
    symbol: Symbol,
    altitude: f64,
    spawn_interval: Duration,
    lifetime: Duration,
    rng: R,
    clouds: HashMap<MarkerId, TransientMarker>,
    next_id: u64,
    interval: Option<TimerHandle>,
}

impl<S: Scene + 'static, R: Rng + 'static> CloudSpawner<S, R> {
    pub fn new(scene: Rc<RefCell<S>>, scheduler: Rc<dyn Scheduler>, endpoints: Endpoints, clouds: &Clouds, rng: R) -> Self {
        CloudSpawner {
            scene,
            scheduler,
            endpoints,
            symbol: Symbol::picture(clouds.icon_url(), clouds.icon_size_px(), clouds.opacity()),
            altitude: clouds.altitude_m(),
            spawn_interval: clouds.spawn_interval(),
            lifetime: clouds.lifetime(),
            rng,
            clouds: HashMap::new(),
            next_id: 0,
            interval: None,
        }
    }

    #[instrument(skip_all)]
    pub fn start(spawner: &Rc<RefCell<Self>>) -> TimerHandle {
        let weak = Rc::downgrade(spawner);
        let (scheduler, spawn_interval) = {
            let mut spawner = spawner.borrow_mut();
            if let Some(previous) = spawner.interval.take() {
                spawner.scheduler.cancel(previous);
            }
            (spawner.scheduler.clone(), spawner.spawn_interval)
        };

        let handle = scheduler.on_interval(
            spawn_interval,
            Box::new(move || {
                if let Some(spawner) = weak.upgrade() {
                    Self::spawn_tick(&spawner);
                }
            }),
        );

        spawner.borrow_mut().interval = Some(handle);
        info!(interval = ?spawn_interval, "☁️ Started cloud spawner");
        handle
    }

    /// Adds one cloud to the scene and schedules its removal, returns `None` if the scene refused it.
    pub fn spawn_tick(spawner: &Rc<RefCell<Self>>) -> Option<MarkerId> {
        let weak = Rc::downgrade(spawner);
        let mut guard = spawner.borrow_mut();
        let this = &mut *guard;

        let coordinate = this.endpoints.sample_bounding_box(&mut this.rng).with_altitude(this.altitude);
        let handle = match this.scene.borrow_mut().add_drawable(Drawable::point(coordinate, this.symbol.clone())) {
            Ok(handle) => handle,
            Err(e) => {
                warn!("⚠️ Could not add a cloud: {}", e);
                return None;
            }
        };

        let id = MarkerId::new(this.next_id);
        this.next_id += 1;

        let expiry = this.scheduler.after(
            this.lifetime,
            Box::new(move || {
                if let Some(spawner) = weak.upgrade() {
                    spawner.borrow_mut().expire(id);
                }
            }),
        );

        let created_at = this.scheduler.now();
        this.clouds.insert(id, TransientMarker::new(id, coordinate, handle, created_at, expiry));
        debug!(
            marker_id = %id,
            longitude = coordinate.longitude,
            latitude = coordinate.latitude,
            "☁️ Spawned cloud, {} alive",
            this.clouds.len()
        );

        Some(id)
    }

    /// Removes a cloud from the scene and the tracking set, returns `false` if it was already gone.
    pub fn expire(&mut self, id: MarkerId) -> bool {
        let Some(cloud) = self.clouds.remove(&id) else {
            return false;
        };

        if let Err(e) = self.scene.borrow_mut().remove_drawable(cloud.handle()) {
            warn!(marker_id = %id, "⚠️ Could not remove cloud from the scene: {}", e);
        }

        debug!(
            marker_id = %cloud.id(),
            longitude = cloud.coordinate().longitude,
            latitude = cloud.coordinate().latitude,
            lived = ?self.scheduler.now().saturating_sub(cloud.created_at()),
            "☁️ Cloud expired, {} alive",
            self.clouds.len()
        );
        true
    }

    /// Stops spawning and clears every cloud that is still alive.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.scheduler.cancel(handle);
        }

        let alive = self.clouds.len();
        for (id, cloud) in self.clouds.drain() {
            self.scheduler.cancel(cloud.expiry());
            if let Err(e) = self.scene.borrow_mut().remove_drawable(cloud.handle()) {
                warn!(marker_id = %id, "⚠️ Could not remove cloud from the scene: {}", e);
            }
        }

        info!("☁️ Stopped cloud spawner, removed {} cloud(s)", alive);
    }

    #[cfg(test)]
    pub fn contains(&self, id: MarkerId) -> bool {
        self.clouds.contains_key(&id)
    }

    #[cfg(test)]
    pub fn get(&self, id: MarkerId) -> Option<&TransientMarker> {
        self.clouds.get(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}
