//! Theme Styling Functions
//!
//! Frame builders and global visuals, all parameterised by a [`Palette`].

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors::{Palette, Theme};

/// Width of the menu panel; matches the system menu with three rows
pub const MENU_WIDTH: f32 = 252.0;

pub const MENU_CORNER_RADIUS: u8 = 15;

/// Height of one menu row, divider excluded
pub const MENU_ROW_HEIGHT: f32 = 44.0;

/// Height of the tinted backdrop behind the first row, snug to its divider
pub const FIRST_ROW_BACKDROP_HEIGHT: f32 = 54.0;

/// Breathing room kept around the panel so its shadow is not clipped
pub const MENU_PADDING: f32 = 16.0;

/// Nudge of the padded panel towards the trailing edge and down past the trigger
pub const MENU_OFFSET: egui::Vec2 = egui::vec2(10.0, 25.0);

/// Offset of the panel from the top-trailing corner of the screen
pub fn menu_anchor_offset() -> egui::Vec2 {
    egui::vec2(MENU_OFFSET.x - MENU_PADDING, MENU_PADDING + MENU_OFFSET.y)
}

/// Apply the palette to the egui context
pub fn apply_global_theme(ctx: &egui::Context, theme: Theme, palette: &Palette) {
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.cell_untapped;
    visuals.override_text_color = Some(palette.text);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.divider);

    ctx.set_visuals(visuals);
}

/// Create a frame style for the top bar
pub fn top_bar_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.background)
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Create a frame style for the screen body
pub fn screen_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.background)
        .inner_margin(egui::Margin::same(0))
}

/// Create a frame for the menu panel
pub fn menu_panel_frame(palette: &Palette) -> egui::Frame {
    // Rows paint their own backgrounds; the fill only shows through the corners
    egui::Frame::new()
        .fill(palette.cell_untapped)
        .corner_radius(CornerRadius::same(MENU_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(0))
        .shadow(egui::epaint::Shadow {
            offset: [0, 0],
            blur: 50,
            spread: 0,
            color: palette.panel_shadow,
        })
}
