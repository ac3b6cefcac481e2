//! Menu Panel
//!
//! Draws the custom menu as a foreground area anchored to the top-trailing
//! corner. Opacity comes from the controller's presentation; the spring
//! scale is applied as a layer transform pivoting on the panel's
//! top-trailing corner, so the panel grows out of the trigger.

use std::time::Duration;

use eframe::egui::{self, emath::TSTransform, CornerRadius};

use super::state::{MenuController, MenuPhase, MenuState};
use crate::egui_app::theme::{styles, Palette};
use crate::egui_app::types::{CellTint, MenuEntry};

const ROW_PADDING: f32 = 16.0;
const ROW_FONT_SIZE: f32 = 17.0;

/// Render the panel and route row taps into the controller
pub fn render(ctx: &egui::Context, controller: &mut MenuController, palette: &Palette, now: Duration) {
    if controller.phase(now) == MenuPhase::Closed {
        return;
    }
    let presentation = controller.presentation(now);
    let view = controller.view();

    let mut tapped = None;
    let area = egui::Area::new(egui::Id::new("menu_panel"))
        .anchor(egui::Align2::RIGHT_TOP, styles::menu_anchor_offset())
        .order(egui::Order::Foreground)
        .interactable(view.menu == MenuState::Open)
        .show(ctx, |ui| {
            ui.set_opacity(presentation.menu_opacity.clamp(0.0, 1.0));
            styles::menu_panel_frame(palette).show(ui, |ui| {
                ui.set_width(styles::MENU_WIDTH);
                ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

                let last = MenuEntry::ALL.len() - 1;
                for (index, entry) in MenuEntry::ALL.into_iter().enumerate() {
                    if index > 0 {
                        ui.add(egui::Separator::default().horizontal().spacing(0.0));
                    }
                    let row = Row {
                        entry,
                        height: row_height(index),
                        corners: row_corners(index, last),
                        tint: view.tint_of(entry),
                    };
                    if entry_row(ui, row, palette).clicked() {
                        tapped = Some(entry);
                    }
                }
            });
        });

    let scale = presentation.menu_scale.max(0.0);
    let pivot = area.response.rect.right_top().to_vec2();
    ctx.set_transform_layer(
        area.response.layer_id,
        TSTransform::new(pivot * (1.0 - scale), scale),
    );

    if let Some(entry) = tapped {
        controller.entry_tapped(entry, now);
    }
}

fn row_corners(index: usize, last: usize) -> CornerRadius {
    let radius = styles::MENU_CORNER_RADIUS;
    CornerRadius {
        nw: if index == 0 { radius } else { 0 },
        ne: if index == 0 { radius } else { 0 },
        sw: if index == last { radius } else { 0 },
        se: if index == last { radius } else { 0 },
    }
}

fn row_height(index: usize) -> f32 {
    if index == 0 {
        styles::FIRST_ROW_BACKDROP_HEIGHT
    } else {
        styles::MENU_ROW_HEIGHT
    }
}

struct Row {
    entry: MenuEntry,
    height: f32,
    corners: CornerRadius,
    tint: CellTint,
}

fn entry_row(ui: &mut egui::Ui, row: Row, palette: &Palette) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(styles::MENU_WIDTH, row.height),
        egui::Sense::click(),
    );

    let fill = match row.tint {
        CellTint::Tapped => palette.cell_tapped,
        CellTint::Untapped => palette.cell_untapped,
    };
    let painter = ui.painter();
    painter.rect_filled(rect, row.corners, fill);

    let font = egui::FontId::proportional(ROW_FONT_SIZE);
    painter.text(
        rect.left_center() + egui::vec2(ROW_PADDING, 0.0),
        egui::Align2::LEFT_CENTER,
        row.entry.label(),
        font.clone(),
        palette.text,
    );
    painter.text(
        rect.right_center() - egui::vec2(ROW_PADDING, 0.0),
        egui::Align2::RIGHT_CENTER,
        row.entry.glyph(),
        font,
        palette.text,
    );

    response
}
