//! Configuration flowing into the controller

use std::io::Write;
use std::time::Duration;

use assert_matches::assert_matches;
use programmatic_menu::egui_app::menu::{MenuController, MenuState, MenuTiming};
use programmatic_menu::egui_app::Config;
use programmatic_menu::shared::{AppConfig, ConfigError, SharedError, ThemeChoice};

use crate::common::*;

#[test]
fn test_custom_delays_drive_the_intro() {
    let config = Config::with_builder(AppConfig::builder().intro_delays(0.5, 1.0)).unwrap();
    let mut controller = MenuController::new(config.menu_timing());
    controller.on_mount(at(0.0));

    controller.tick(at(0.49));
    assert_eq!(controller.view().menu, MenuState::Closed);
    controller.tick(at(0.5));
    assert_eq!(controller.view().menu, MenuState::Open);
    controller.tick(at(1.0));
    assert_eq!(controller.view().menu, MenuState::Closed);
}

#[test]
fn test_toml_file_to_timing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "theme = \"light\"").unwrap();
    writeln!(file, "tint_reset_delay = 1.0").unwrap();
    writeln!(file, "[spring]").unwrap();
    writeln!(file, "stiffness = 300.0").unwrap();

    let app = AppConfig::load(file.path()).unwrap();
    assert_eq!(app.theme, ThemeChoice::Light);

    let timing = MenuTiming::try_from(&app).unwrap();
    assert_eq!(timing.tint_reset_delay, Duration::from_secs(1));
    assert_eq!(timing.spring.stiffness, 300.0);
    assert_eq!(timing.spring.damping, 25.0);
}

#[test]
fn test_invalid_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "intro_open_delay = -2.0").unwrap();

    let error = AppConfig::load(file.path()).unwrap_err();
    assert_matches!(&error, ConfigError::OutOfRange { field: "intro_open_delay", .. });

    let error: SharedError = error.into();
    assert!(error.to_string().contains("intro_open_delay"));
}
