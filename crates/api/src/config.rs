use serde::Deserialize;
use std::net::SocketAddr;

use domain::models::LatLng;
use domain::services::MapViewOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Map rendering defaults handed to the view builder.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    #[serde(default = "default_center_lat")]
    pub default_lat: f64,

    #[serde(default = "default_center_lng")]
    pub default_lng: f64,

    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
}

impl MapConfig {
    /// View options for the derivation pipeline.
    pub fn view_options(&self) -> MapViewOptions {
        MapViewOptions {
            tile_url: self.tile_url.clone(),
            default_center: LatLng::new(self.default_lat, self.default_lng),
            default_zoom: self.default_zoom,
            focus_zoom: self.focus_zoom,
            marker_radius: self.marker_radius,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}
fn default_center_lat() -> f64 {
    50.4501
}
fn default_center_lng() -> f64 {
    30.5234
}
fn default_zoom() -> u8 {
    11
}
fn default_focus_zoom() -> u8 {
    16
}
fn default_marker_radius() -> f32 {
    12.0
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with GM__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GM").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.map.tile_url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "map.tile_url must be set".to_string(),
            ));
        }

        // The default center must itself be a renderable position.
        if self.map.default_lat.abs() >= 90.0 || !self.map.default_lat.is_finite() {
            return Err(ConfigValidationError::InvalidValue(
                "map.default_lat must be strictly between -90 and 90".to_string(),
            ));
        }
        if self.map.default_lng.abs() >= 180.0 || !self.map.default_lng.is_finite() {
            return Err(ConfigValidationError::InvalidValue(
                "map.default_lng must be strictly between -180 and 180".to_string(),
            ));
        }

        if self.map.focus_zoom <= self.map.default_zoom {
            return Err(ConfigValidationError::InvalidValue(
                "map.focus_zoom must be greater than map.default_zoom".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .expect("Invalid socket address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_for_test(overrides: &[(&str, &str)]) -> Result<Config, config::ConfigError> {
        // Embed defaults directly to avoid file system dependency in tests
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [map]
            tile_url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
            default_lat = 50.4501
            default_lng = 30.5234
            default_zoom = 11
            focus_zoom = 16
            marker_radius = 12.0
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    #[test]
    fn test_config_load_with_defaults() {
        let config = load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.map.default_zoom, 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_override() {
        let config = load_for_test(&[("server.port", "9000"), ("logging.level", "debug")])
            .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validation_rejects_boundary_center() {
        let config = load_for_test(&[("map.default_lat", "90.0")]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("default_lat"));
    }

    #[test]
    fn test_validation_rejects_focus_zoom_not_above_default() {
        let config = load_for_test(&[("map.focus_zoom", "11")]).expect("Failed to load config");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("focus_zoom"));
    }

    #[test]
    fn test_validation_rejects_empty_tile_url() {
        let config = load_for_test(&[("map.tile_url", "")]).expect("Failed to load config");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_view_options_mirror_map_config() {
        let config = load_for_test(&[]).expect("Failed to load config");
        let options = config.map.view_options();
        assert_eq!(options.default_center, LatLng::new(50.4501, 30.5234));
        assert_eq!(options.default_zoom, 11);
        assert_eq!(options.focus_zoom, 16);
        assert_eq!(options.tile_url, config.map.tile_url);
    }

    #[test]
    fn test_socket_addr() {
        let config = load_for_test(&[("server.host", "127.0.0.1"), ("server.port", "3000")])
            .expect("Failed to load config");

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
