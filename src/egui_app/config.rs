use std::path::PathBuf;

use crate::egui_app::menu::MenuTiming;
use crate::shared::{AppConfig, AppConfigBuilder, SharedError, ThemeChoice};

/// Environment variable naming a TOML config file
pub const CONFIG_PATH_ENV: &str = "MENU_DEMO_CONFIG";

/// Environment variable overriding the theme (`system`, `light`, `dark`)
pub const THEME_ENV: &str = "MENU_DEMO_THEME";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    timing: MenuTiming,
    source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            timing: MenuTiming::default(),
            source: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, SharedError> {
        Self::from_app_config(builder.build()?, None)
    }

    fn from_app_config(app: AppConfig, source: Option<PathBuf>) -> Result<Self, SharedError> {
        let timing = MenuTiming::try_from(&app)?;
        Ok(Self { app, timing, source })
    }

    /// Load from the config file (if any) and apply environment overrides
    pub fn from_env() -> Result<Self, SharedError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| default_config_path().filter(|path| path.is_file()));

        let mut app = match &path {
            Some(path) => {
                tracing::info!("[CONFIG] loading {}", path.display());
                AppConfig::load(path)?
            }
            None => AppConfig::default(),
        };

        if let Ok(theme) = std::env::var(THEME_ENV) {
            match theme.parse() {
                Ok(theme) => app.theme = theme,
                Err(e) => tracing::warn!("[CONFIG] {}; keeping theme {}", e, app.theme),
            }
        }

        Self::from_app_config(app, path)
    }

    /// Like [`Config::from_env`], logging and falling back to defaults on error
    pub fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[CONFIG] {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn theme(&self) -> ThemeChoice {
        self.app.theme
    }

    pub fn menu_timing(&self) -> MenuTiming {
        self.timing
    }

    /// File the configuration was read from, if any
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }
}

/// `<config dir>/programmatic-menu/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("programmatic-menu").join("config.toml"))
}
