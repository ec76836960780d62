use crate::domain::{Color, Coordinate, Endpoints};
use crate::globe::Camera;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    view: View,
    route: Route,
    plane: Plane,
    clouds: Clouds,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("SKYROUTE").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.plane.step > 0.0 && self.plane.step < 1.0) {
            return Err(ConfigError::Message(format!("plane.step must be between 0 and 1 (exclusive), got {}", self.plane.step)));
        }

        if !(0.0..=1.0).contains(&self.clouds.opacity) {
            return Err(ConfigError::Message(format!("clouds.opacity must be between 0 and 1, got {}", self.clouds.opacity)));
        }

        let durations = [
            ("view.frame_interval", self.view.frame_interval),
            ("clouds.spawn_interval", self.clouds.spawn_interval),
            ("clouds.lifetime", self.clouds.lifetime),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, duration)| duration.is_zero()) {
            return Err(ConfigError::Message(format!("{} must be greater than zero", name)));
        }

        if !self.view.basemaps.contains(&self.view.basemap) {
            return Err(ConfigError::Message(format!("view.basemap '{}' is not one of view.basemaps", self.view.basemap)));
        }

        Ok(())
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn clouds(&self) -> &Clouds {
        &self.clouds
    }
}

#[derive(Debug, Deserialize)]
pub struct View {
    basemap: String,
    ground: String,
    basemaps: Vec<String>,
    zoom: f64,
    camera: Camera,
    #[serde(with = "humantime_serde")]
    frame_interval: Duration,
    #[serde(default)]
    show_basemap_gallery: bool,
}

impl View {
    pub fn basemap(&self) -> &str {
        &self.basemap
    }

    pub fn ground(&self) -> &str {
        &self.ground
    }

    pub fn basemaps(&self) -> &[String] {
        &self.basemaps
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Whether the basemap gallery starts opened, as if its overlay button was pressed.
    pub fn show_basemap_gallery(&self) -> bool {
        self.show_basemap_gallery
    }
}

#[derive(Debug, Deserialize)]
pub struct City {
    name: String,
    color: Color,
    location: Coordinate,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Route {
    origin: City,
    destination: City,
    path_altitude_m: f64,
    path_color: Color,
    path_width_px: f64,
}

impl Route {
    pub fn origin(&self) -> &City {
        &self.origin
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.origin.location, self.destination.location)
    }

    pub fn path_altitude_m(&self) -> f64 {
        self.path_altitude_m
    }

    pub fn path_color(&self) -> &Color {
        &self.path_color
    }

    pub fn path_width_px(&self) -> f64 {
        self.path_width_px
    }
}

#[derive(Debug, Deserialize)]
pub struct Plane {
    icon_url: String,
    icon_size_px: f64,
    altitude_m: f64,
    step: f64,
}

impl Plane {
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn icon_size_px(&self) -> f64 {
        self.icon_size_px
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    /// Fraction of the route covered per frame.
    pub fn step(&self) -> f64 {
        self.step
    }
}

#[derive(Debug, Deserialize)]
pub struct Clouds {
    icon_url: String,
    icon_size_px: f64,
    opacity: f64,
    altitude_m: f64,
    #[serde(with = "humantime_serde")]
    spawn_interval: Duration,
    #[serde(with = "humantime_serde")]
    lifetime: Duration,
}

impl Clouds {
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn icon_size_px(&self) -> f64 {
        self.icon_size_px
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn spawn_interval(&self) -> Duration {
        self.spawn_interval
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                view: View {
                    basemap: "streets-night-vector".to_string(),
                    ground: "world-elevation".to_string(),
                    basemaps: vec!["streets-night-vector".to_string(), "satellite".to_string()],
                    zoom: 5.3,
                    camera: Camera::new(Coordinate::new(82.6, 8.35).with_altitude(7_279_043.0), 11.9, 0.0),
                    frame_interval: Duration::from_millis(16),
                    show_basemap_gallery: false,
                },
                route: Route {
                    origin: City {
                        name: "Delhi, India".to_string(),
                        color: Color::RGB(255, 0, 0),
                        location: Coordinate::new(77.216721, 28.6448),
                    },
                    destination: City {
                        name: "Bengaluru, India".to_string(),
                        color: Color::RGB(0, 0, 255),
                        location: Coordinate::new(77.594566, 12.971598),
                    },
                    path_altitude_m: 100_000.0,
                    path_color: Color::RGBA(0, 255, 255, 0.7),
                    path_width_px: 2.0,
                },
                plane: Plane {
                    icon_url: "./img/plane.png".to_string(),
                    icon_size_px: 40.0,
                    altitude_m: 100_000.0,
                    step: 0.001,
                },
                clouds: Clouds {
                    icon_url: "./img/cloud.png".to_string(),
                    icon_size_px: 50.0,
                    opacity: 0.5,
                    altitude_m: 80_000.0,
                    spawn_interval: Duration::from_millis(3000),
                    lifetime: Duration::from_millis(5000),
                },
            },
        }
    }

    pub fn plane_step(mut self, step: f64) -> Self {
        self.config.plane.step = step;
        self
    }

    pub fn cloud_timing(mut self, spawn_interval: Duration, lifetime: Duration) -> Self {
        self.config.clouds.spawn_interval = spawn_interval;
        self.config.clouds.lifetime = lifetime;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
