//! Application configuration module
//!
//! Provides the configuration model for the menu demo. Every field has a
//! default, so an empty TOML file (or no file at all) yields the stock timing.
//!
//! ```toml
//! theme = "dark"
//! intro_open_delay = 1.5
//! intro_tap_delay = 3.0
//!
//! [spring]
//! stiffness = 250.0
//! damping = 25.0
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Which palette the app renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Follow the display mode reported by the platform
    #[default]
    System,
    Light,
    Dark,
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeChoice::System => write!(f, "system"),
            ThemeChoice::Light => write!(f, "light"),
            ThemeChoice::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemeChoice::System),
            "light" => Ok(ThemeChoice::Light),
            "dark" => Ok(ThemeChoice::Dark),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// Spring parameters for the menu scale animation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringSettings {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: 250.0,
            damping: 25.0,
            mass: 1.0,
        }
    }
}

/// Application configuration
///
/// Delays and durations are in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Delay after mount before the scripted sequence opens the menu
    pub intro_open_delay: f32,
    /// Delay after mount before the scripted sequence taps the Blank entry
    pub intro_tap_delay: f32,
    /// How long a tapped row keeps its tint
    pub tint_reset_delay: f32,
    /// Duration of the opacity cross-fade
    pub opacity_duration: f32,
    pub spring: SpringSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::System,
            intro_open_delay: 1.5,
            intro_tap_delay: 3.0,
            tint_reset_delay: 0.5,
            opacity_duration: 0.25,
            spring: SpringSettings::default(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("intro_open_delay", self.intro_open_delay)?;
        non_negative("intro_tap_delay", self.intro_tap_delay)?;
        non_negative("tint_reset_delay", self.tint_reset_delay)?;
        non_negative("opacity_duration", self.opacity_duration)?;

        if self.intro_tap_delay < self.intro_open_delay {
            return Err(ConfigError::OutOfRange {
                field: "intro_tap_delay",
                reason: "must not be earlier than intro_open_delay".to_string(),
            });
        }

        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.damping", self.spring.damping)?;
        positive("spring.mass", self.spring.mass)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            reason: format!("expected a finite value >= 0, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            reason: format!("expected a finite value > 0, got {value}"),
        })
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the palette choice
    pub fn theme(mut self, theme: ThemeChoice) -> Self {
        self.config.theme = theme;
        self
    }

    /// Set both scripted delays (open, tap)
    pub fn intro_delays(mut self, open: f32, tap: f32) -> Self {
        self.config.intro_open_delay = open;
        self.config.intro_tap_delay = tap;
        self
    }

    pub fn tint_reset_delay(mut self, seconds: f32) -> Self {
        self.config.tint_reset_delay = seconds;
        self
    }

    pub fn opacity_duration(mut self, seconds: f32) -> Self {
        self.config.opacity_duration = seconds;
        self
    }

    pub fn spring(mut self, spring: SpringSettings) -> Self {
        self.config.spring = spring;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },
    #[error("unknown theme '{0}' (expected system, light or dark)")]
    InvalidTheme(String),
}
