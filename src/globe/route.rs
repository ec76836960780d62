use crate::app_config::{City, Route};
use crate::domain::{Color, Drawable, Symbol};
use crate::scene::{DrawableHandle, Scene, SceneError};
use tracing::{info, instrument};

const CITY_MARKER_SIZE_PX: f64 = 10.0;

/// Handles of the static route graphics.
#[derive(Debug)]
pub struct RouteGraphics {
    pub origin: CityGraphics,
    pub destination: CityGraphics,
    pub path: DrawableHandle,
}

#[derive(Debug)]
pub struct CityGraphics {
    pub marker: DrawableHandle,
    pub label: DrawableHandle,
}

/// Draws both cities and the straight path connecting them.
#[instrument(skip_all)]
pub fn draw<S: Scene>(scene: &mut S, route: &Route) -> Result<RouteGraphics, SceneError> {
    let origin = draw_city(scene, route.origin())?;
    let destination = draw_city(scene, route.destination())?;

    let altitude = route.path_altitude_m();
    let path = vec![
        route.origin().location().with_altitude(altitude),
        route.destination().location().with_altitude(altitude),
    ];
    let symbol = Symbol::SimpleLine {
        color: route.path_color().clone(),
        width_px: route.path_width_px(),
    };
    let path = scene.add_drawable(Drawable::polyline(path, symbol))?;

    info!("📍 Drew route from '{}' to '{}'", route.origin().name(), route.destination().name());
    Ok(RouteGraphics { origin, destination, path })
}

fn draw_city<S: Scene>(scene: &mut S, city: &City) -> Result<CityGraphics, SceneError> {
    let color: &Color = city.color();
    let marker = scene.add_drawable(Drawable::point(
        city.location(),
        Symbol::SimpleMarker {
            color: color.clone(),
            size_px: CITY_MARKER_SIZE_PX,
        },
    ))?;
    let label = scene.add_drawable(Drawable::point(city.location(), Symbol::label(city.name(), color.clone())))?;

    info!(color = %color, "📍 Drew city '{}'", city.name());
    Ok(CityGraphics { marker, label })
}
