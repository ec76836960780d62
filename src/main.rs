use crate::animation::{CloudSpawner, PathAnimator};
use crate::app_config::AppConfig;
use crate::globe::{BASEMAP_GALLERY, GlobeView};
use crate::scene::GraphicsLayer;
use crate::scheduler::{Scheduler, TokioScheduler};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use tokio::signal;
use tokio::task::LocalSet;
use tracing::info;

mod animation;
mod app_config;
mod deserializers;
mod domain;
mod globe;
mod scene;
mod scheduler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    // Every timer callback shares the scene through `Rc`, so they all run on this thread
    LocalSet::new().run_until(run(config)).await
}

async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let mut view = GlobeView::new(config.view())?;
    view.watch_camera(*config.view().camera(), config.view().zoom());
    if config.view().show_basemap_gallery() {
        view.toggle_basemap_gallery();
    }
    info!(
        basemaps = view.gallery().basemaps().len(),
        gallery = ?view.ui().position_of(BASEMAP_GALLERY),
        gallery_visible = view.gallery().is_visible(),
        "✅  Initialized globe view with basemap '{}' on '{}'",
        view.basemap(),
        view.ground()
    );

    let scene = Rc::new(RefCell::new(GraphicsLayer::new()));
    let route = globe::route::draw(&mut *scene.borrow_mut(), config.route())?;
    info!(
        origin = %route.origin.marker,
        origin_label = %route.origin.label,
        destination = %route.destination.marker,
        destination_label = %route.destination.label,
        path = %route.path,
        "✅  Drew route"
    );

    let scheduler: Rc<dyn Scheduler> = Rc::new(TokioScheduler::new(config.view().frame_interval()));
    let endpoints = config.route().endpoints();

    let animator = Rc::new(RefCell::new(PathAnimator::new(scene.clone(), scheduler.clone(), endpoints, config.plane())?));
    PathAnimator::start(&animator);

    let spawner = Rc::new(RefCell::new(CloudSpawner::new(
        scene.clone(),
        scheduler.clone(),
        endpoints,
        config.clouds(),
        StdRng::from_entropy(),
    )));
    CloudSpawner::start(&spawner);

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    signal::ctrl_c().await?;

    info!("🛑 Shutting down...");
    animator.borrow_mut().stop();
    spawner.borrow_mut().shutdown();
    scheduler.cancel_all();
    info!("🛑 Shutting down... OK, {} drawable(s) left on the globe", scene.borrow().len());

    Ok(())
}
