use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend Ecoleta (items + points)
    pub api_url: String,
    /// Servicio de localidades (IBGE)
    pub divisions_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3333".to_string(),
            divisions_url: "https://servicodados.ibge.gov.br/api/v1/localidades".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 0.0,
            default_center_lng: 0.0,
            default_zoom: 15.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

impl MapConfig {
    /// Centro por defecto mientras no llega la geolocalización
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(self.default_center_lat, self.default_center_lng)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let map_defaults = MapConfig::default();

        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            divisions_url: option_env!("DIVISIONS_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.divisions_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("0").parse().unwrap_or(0.0),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("0").parse().unwrap_or(0.0),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("15").parse().unwrap_or(15.0),
                tile_url: option_env!("MAP_TILE_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(map_defaults.tile_url),
                attribution: map_defaults.attribution,
            },
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
