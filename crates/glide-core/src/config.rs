use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user config directory.
    ///
    /// Falls back to defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                let config: Self = toml::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.scroll.step_size <= 0.0 {
            return Err(Error::Config(
                "scroll.step_size must be positive".to_string(),
            ));
        }
        if self.scroll.edge_margin < 0.0 {
            return Err(Error::Config(
                "scroll.edge_margin must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Path to the config file: `<config_dir>/glide/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glide").join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl UiConfig {
    /// Tick duration for the animation frame rate
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Settings for the scroll engine: the click tween, the hover stepper, and
/// the control visibility rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Duration of the click-triggered animated scroll in milliseconds
    #[serde(default = "default_click_duration")]
    pub click_duration_ms: u64,
    /// Pacing of continuous hover scrolling in milliseconds per step
    #[serde(default = "default_hover_interval")]
    pub hover_interval_ms: u64,
    /// Lines moved per hover step
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    /// Offset above which the up control is shown
    #[serde(default = "default_hide_threshold")]
    pub hide_threshold: f64,
    /// Distance from the bottom within which the down control is hidden
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            click_duration_ms: default_click_duration(),
            hover_interval_ms: default_hover_interval(),
            step_size: default_step_size(),
            hide_threshold: default_hide_threshold(),
            edge_margin: default_edge_margin(),
        }
    }
}

impl ScrollConfig {
    #[inline]
    pub fn click_duration(&self) -> Duration {
        Duration::from_millis(self.click_duration_ms)
    }

    #[inline]
    pub fn hover_interval(&self) -> Duration {
        Duration::from_millis(self.hover_interval_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_animation_fps() -> u16 {
    60
}

fn default_click_duration() -> u64 {
    500
}

fn default_hover_interval() -> u64 {
    100
}

fn default_step_size() -> f64 {
    1.0
}

fn default_hide_threshold() -> f64 {
    0.0
}

fn default_edge_margin() -> f64 {
    10.0
}
