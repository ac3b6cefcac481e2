use eframe::egui;

use crate::egui_app::menu::Route;

/// Placeholder destination for every pushed route
pub fn render(ui: &mut egui::Ui, route: Route) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new("Detail View").size(17.0))
            .on_hover_text(route.to_string());
    });
}
