use std::time::Duration;

use eframe::egui;

use crate::egui_app::menu::MenuController;
use crate::egui_app::theme::Theme;
use crate::egui_app::Config;
use crate::shared::ThemeChoice;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub controller: MenuController,
    /// Whether the root screen was on top last frame
    root_visible: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        tracing::info!(
            "[CONFIG] theme={}, source={}",
            config.theme(),
            config
                .source()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "defaults".to_string())
        );

        Self {
            controller: MenuController::new(config.menu_timing()),
            config,
            root_visible: false,
        }
    }

    /// Fire due timers before anything is drawn
    pub fn begin_frame(&mut self, now: Duration) {
        self.controller.tick(now);
    }

    /// Track appearance of the root screen; mounting on each appearance is
    /// harmless since the controller plays its intro only once.
    pub fn set_root_visible(&mut self, visible: bool, now: Duration) {
        if visible && !self.root_visible {
            self.controller.on_mount(now);
        }
        self.root_visible = visible;
    }

    /// Resolve the configured theme against the platform's display mode
    pub fn theme(&self, ctx: &egui::Context) -> Theme {
        resolve_theme(self.config.theme(), ctx.system_theme())
    }

    /// How long the frame loop may sleep; `None` when nothing is pending
    pub fn repaint_after(&self, now: Duration) -> Option<Duration> {
        if self.controller.is_animating(now) {
            return Some(Duration::ZERO);
        }
        self.controller
            .next_wakeup()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Screen teardown: no timer may fire after this
    pub fn unmount(&mut self) {
        self.root_visible = false;
        self.controller.on_unmount();
    }
}

fn resolve_theme(choice: ThemeChoice, system: Option<egui::Theme>) -> Theme {
    match choice {
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::System => Theme::from_dark_mode(system == Some(egui::Theme::Dark)),
    }
}
