use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Startup configuration supplied by the host, loadable from a JSON settings
/// file. Every field has a default so a partial (or empty) document works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas width in pixels.
    pub canvas_width: f32,
    /// Canvas height in pixels.
    pub canvas_height: f32,
    /// Logic ticks per second (default: 60).
    pub tick_rate: f32,
    /// Uniform stack scale while configuring the grid.
    pub config_scale: f32,
    /// Uniform stack scale during normal preview.
    pub preview_scale: f32,
    /// Rotation speed in degrees per second.
    pub rotation_speed: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 375.0,
            tick_rate: 60.0,
            config_scale: 1.0,
            preview_scale: 8.0,
            rotation_speed: 20.0,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Canvas dimensions as a vector.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.canvas_width, 500.0);
        assert_eq!(config.canvas_height, 375.0);
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.preview_scale, 8.0);
    }

    #[test]
    fn partial_document_overrides_some_fields() {
        let config = AppConfig::from_json(r#"{ "canvas_width": 800, "tick_rate": 120 }"#).unwrap();
        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.tick_rate, 120.0);
        // Untouched fields keep their defaults
        assert_eq!(config.rotation_speed, 20.0);
    }

    #[test]
    fn canvas_size_pairs_dimensions() {
        let config = AppConfig::default();
        assert_eq!(config.canvas_size(), Vec2::new(500.0, 375.0));
    }
}
