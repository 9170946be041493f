use std::env;
use std::time::Duration;
use config::{Config, File};
use log::{info, warn};
use crate::domain::coords::Coords;
use crate::domain::locale::Locale;
use crate::domain::map_zoom::MapZoom;
use crate::error::TrackerError;
use crate::storage::workout_storage::DEFAULT_KEY;

pub const CONFIG_YAML: &'static str = "conf/application.yaml";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub db_path: String,
    pub storage_key: String,
    pub zoom: MapZoom,
    pub home: Option<Coords>, // Position reported by the geolocation provider
    pub geolocation_timeout: Duration,
    pub locale: Locale
}

impl Settings {
    pub fn load(path: &str) -> Result<Self, TrackerError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .build()?;
        Ok(Self::from_config(&config))
    }

    /// Missing keys fall back to defaults
    pub fn from_config(config: &Config) -> Self {
        let zoom = config.get_int("map.zoom_level").ok()
            .and_then(|level| u8::try_from(level).ok())
            .and_then(MapZoom::new)
            .unwrap_or_else(|| {
                warn!("No valid map.zoom_level configured, use {}", MapZoom::DEFAULT.value());
                MapZoom::DEFAULT
            });
        let home = match (config.get_float("map.home.lat"), config.get_float("map.home.lng")) {
            (Ok(lat), Ok(lng)) => Some(Coords::new(lat, lng)),
            _ => None
        };
        let timeout_secs = config.get_int("geolocation.timeout_secs").unwrap_or(10).max(0) as u64;
        let locale = config.get_string("ui.locale")
            .or_else(|_| env::var("LANG"))
            .map(|tag| Locale::from_tag_or_default(&tag))
            .unwrap_or_default();
        let settings = Self {
            db_path: config.get_string("storage.db_path").unwrap_or("workouts.db".to_string()),
            storage_key: config.get_string("storage.key").unwrap_or(DEFAULT_KEY.to_string()),
            zoom,
            home,
            geolocation_timeout: Duration::from_secs(timeout_secs),
            locale
        };
        info!("Settings: {:?}", settings);
        settings
    }
}
