use eframe::egui;

use crate::egui_app::forms::{Field, ValidationErrors};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

pub mod forgot_password_view;
pub mod home_view;
pub mod login_view;
pub mod signup_view;

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_SOFT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
            AppView::SignUp => signup_view::render(ui, state),
            AppView::ForgotPassword => forgot_password_view::render(ui, state),
        });
}

/// Inline error label under an input, if that field has an error
pub(crate) fn render_field_error(ui: &mut egui::Ui, errors: &ValidationErrors, field: Field) {
    if let Some(message) = errors.get(field) {
        ui.label(egui::RichText::new(message).size(12.0).color(colors::ERROR));
        ui.add_space(2.0);
    }
}

/// Dismissible alert and notice area above the form
pub(crate) fn render_alerts(ui: &mut egui::Ui, state: &mut AppState) {
    let mut dismiss_alert = false;
    if let Some(ref alert) = state.auth_state.alert {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(alert).color(colors::ERROR));
            if ui.small_button("✖").clicked() {
                dismiss_alert = true;
            }
        });
        ui.add_space(8.0);
    }
    if dismiss_alert {
        state.auth_state.clear_alert();
    }

    let mut dismiss_notice = false;
    if let Some(ref notice) = state.auth_state.notice {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
            if ui.small_button("✖").clicked() {
                dismiss_notice = true;
            }
        });
        ui.add_space(8.0);
    }
    if dismiss_notice {
        state.auth_state.notice = None;
    }
}

/// Spinner shown while a request is in flight
pub(crate) fn render_loading(ui: &mut egui::Ui, state: &AppState) {
    if state.auth_state.loading {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading...").color(colors::TEXT_MUTED));
        });
    }
}
