use std::time::Duration;

use eframe::egui;

use crate::egui_app::menu::panel;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{styles, Palette};

pub mod detail_view;
pub mod main_view;

/// Glyph of the toolbar trigger
const TRIGGER_GLYPH: &str = "➕";

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, palette: &Palette, now: Duration) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame(palette))
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if state.controller.navigation().is_empty() {
                    ui.label(egui::RichText::new("Title").size(30.0).strong());
                    render_trigger(ui, state, palette, now);
                } else {
                    let back = egui::Button::new(
                        egui::RichText::new("‹ Title").size(17.0).color(palette.trigger),
                    )
                    .frame(false);
                    if ui.add(back).clicked() {
                        state.controller.pop_route();
                    }
                }
            });
        });
}

fn render_trigger(ui: &mut egui::Ui, state: &mut AppState, palette: &Palette, now: Duration) {
    let opacity = state.controller.presentation(now).toolbar_icon_opacity;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let response = ui
            .scope(|ui| {
                ui.set_opacity(opacity.clamp(0.0, 1.0));
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(TRIGGER_GLYPH)
                            .size(22.0)
                            .color(palette.trigger),
                    )
                    .sense(egui::Sense::click()),
                )
            })
            .inner;

        if response.clicked() {
            state.controller.trigger_tapped(now);
        }
    });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState, palette: &Palette, now: Duration) {
    let top = state.controller.navigation().top();
    state.set_root_visible(top.is_none(), now);

    egui::CentralPanel::default()
        .frame(styles::screen_frame(palette))
        .show(ctx, |ui| match top {
            None => main_view::render(ui),
            Some(route) => detail_view::render(ui, route),
        });
}

/// The panel floats above both the top bar and the body
pub fn render_menu_overlay(ctx: &egui::Context, state: &mut AppState, palette: &Palette, now: Duration) {
    panel::render(ctx, &mut state.controller, palette, now);
}
