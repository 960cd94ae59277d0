use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

/// Placeholder screen; password recovery is not wired up yet.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(
            egui::RichText::new("Forgot Password Page")
                .size(24.0)
                .color(colors::PRIMARY),
        );
        ui.add_space(20.0);
        if ui
            .link(egui::RichText::new("Back to Login").color(colors::PRIMARY))
            .clicked()
        {
            state.navigate(AppView::Login);
        }
    });
}
