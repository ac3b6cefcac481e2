/**
 * egui Native Desktop App - Main Entry Point
 *
 * Opens a phone-sized window with the menu demo. The scripted intro starts
 * as soon as the main view first appears.
 */
use std::time::Duration;

use eframe::egui;
use programmatic_menu::egui_app::theme::{styles, Palette};
use programmatic_menu::egui_app::{views, AppState, Config};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "programmatic_menu=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let config = Config::from_env_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Programmatic Menu",
        options,
        Box::new(move |_cc| Ok(Box::new(MenuDemoApp::new(config)))),
    )
}

/// Main application state
struct MenuDemoApp {
    state: AppState,
}

impl MenuDemoApp {
    fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for MenuDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.state.begin_frame(now);

        let theme = self.state.theme(ctx);
        let palette = Palette::for_theme(theme);
        styles::apply_global_theme(ctx, theme, palette);

        views::render_top_bar(ctx, &mut self.state, palette, now);
        views::render_main_panel(ctx, &mut self.state, palette, now);
        views::render_menu_overlay(ctx, &mut self.state, palette, now);

        match self.state.repaint_after(now) {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}

impl Drop for MenuDemoApp {
    fn drop(&mut self) {
        self.state.unmount();
    }
}
