//! Menu Timing
//!
//! Delays and animation constants the controller runs on, converted from the
//! seconds-based [`AppConfig`] into `Duration`s.

use std::time::Duration;

use super::animation::SpringConfig;
use crate::shared::{AppConfig, SharedError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTiming {
    /// Mount to scripted open
    pub intro_open_delay: Duration,
    /// Mount to scripted tap on Blank
    pub intro_tap_delay: Duration,
    /// Tap to tint reset; long enough for the close animation to finish
    pub tint_reset_delay: Duration,
    /// Opacity cross-fade length
    pub opacity_duration: Duration,
    pub spring: SpringConfig,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            intro_open_delay: Duration::from_millis(1500),
            intro_tap_delay: Duration::from_millis(3000),
            tint_reset_delay: Duration::from_millis(500),
            opacity_duration: Duration::from_millis(250),
            spring: SpringConfig::MENU,
        }
    }
}

fn seconds(field: &'static str, value: f32) -> Result<Duration, SharedError> {
    Duration::try_from_secs_f32(value).map_err(|e| SharedError::validation(field, e.to_string()))
}

impl TryFrom<&AppConfig> for MenuTiming {
    type Error = SharedError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            intro_open_delay: seconds("intro_open_delay", config.intro_open_delay)?,
            intro_tap_delay: seconds("intro_tap_delay", config.intro_tap_delay)?,
            tint_reset_delay: seconds("tint_reset_delay", config.tint_reset_delay)?,
            opacity_duration: seconds("opacity_duration", config.opacity_duration)?,
            spring: config.spring.into(),
        })
    }
}
