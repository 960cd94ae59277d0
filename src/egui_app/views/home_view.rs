use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Post-authentication landing screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.label(
            egui::RichText::new("BiniBaby")
                .size(48.0)
                .strong()
                .color(colors::PRIMARY),
        );
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("Welcome!")
                .size(28.0)
                .color(colors::TEXT_DARK),
        );

        if let Some(ref session) = state.session {
            if let Some(name) = session.user_data.get("name").and_then(|v| v.as_str()) {
                ui.label(
                    egui::RichText::new(name)
                        .size(18.0)
                        .color(colors::TEXT_MUTED),
                );
            }
        }
    });
}
