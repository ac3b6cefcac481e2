use eframe::egui;

/// Root screen body
pub fn render(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new("Main View").size(17.0));
    });
}
