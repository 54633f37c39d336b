//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use memoria_scene::{CloudFieldParams, HillStackParams, StarFieldParams, ZoneBounds};

use crate::error::ConfigError;

/// Top-level scene configuration.
///
/// Generator parameter structs live in `memoria-scene` and are embedded
/// here directly, so the config file is the single source of every tuning
/// constant the generators consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Deterministic generation seed.
    pub seed: u64,
    /// Vertical zone thresholds.
    pub zones: ZoneBounds,
    /// Star field generation settings.
    pub stars: StarFieldParams,
    /// Cloud field generation settings.
    pub clouds: CloudFieldParams,
    /// Hill silhouette stack settings.
    pub hills: HillStackParams,
    /// Panel placement and scroll settings.
    pub ui: UiConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Panel placement and scroll animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Estimated size of the new-tribute panel (px).
    pub new_panel_width: f64,
    pub new_panel_height: f64,
    /// Estimated size of the tribute details panel (px).
    pub details_panel_width: f64,
    pub details_panel_height: f64,
    /// Minimum distance between a panel and the viewport edges (px).
    pub viewport_margin: f64,
    /// Offset between the pointer anchor and the panel (px).
    pub cursor_offset: f64,
    /// How far above the surface line the intro scroll lands (px).
    pub surface_scroll_lead: f64,
    /// Intro scroll duration (ms).
    pub surface_scroll_duration_ms: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            new_panel_width: 300.0,
            new_panel_height: 455.0,
            details_panel_width: 300.0,
            details_panel_height: 600.0,
            viewport_margin: 0.0,
            cursor_offset: 0.0,
            surface_scroll_lead: 450.0,
            surface_scroll_duration_ms: 2000.0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("memoria.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `memoria.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("memoria.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Check cross-field consistency before handing parameters to the
    /// generators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zones.validate()?;
        if !(0.0..1.0).contains(&self.hills.overlap_fraction) {
            return Err(ConfigError::InvalidHillOverlap(self.hills.overlap_fraction));
        }
        Ok(())
    }
}
