use eframe::egui;

use crate::egui_app::forms::Field;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;
use crate::egui_app::views::{render_alerts, render_field_error, render_loading};

const INPUT_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.label(
                egui::RichText::new("Create Account")
                    .size(28.0)
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.label(
                egui::RichText::new("Join the BiniBaby community!")
                    .size(16.0)
                    .color(colors::TEXT_MUTED),
            );
            ui.add_space(20.0);

            render_alerts(ui, state);

            text_field(ui, state, Field::Name, "Full Name", false);
            text_field(ui, state, Field::Email, "Email Address", false);
            text_field(ui, state, Field::Phone, "Phone Number", false);
            text_field(ui, state, Field::Password, "Password", true);
            text_field(ui, state, Field::ConfirmPassword, "Confirm Password", true);
            ui.add_space(16.0);

            let submit = egui::Button::new(
                egui::RichText::new("Sign Up")
                    .size(18.0)
                    .color(colors::TEXT_ON_ACCENT),
            )
            .min_size(egui::vec2(INPUT_WIDTH, 36.0))
            .fill(colors::SECONDARY);
            if ui
                .add_enabled(!state.auth_state.loading, submit)
                .clicked()
            {
                state.handle_signup();
            }

            render_loading(ui, state);
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 220.0) / 2.0);
                ui.label(
                    egui::RichText::new("Already have an account?").color(colors::TEXT_MUTED),
                );
                if ui
                    .link(egui::RichText::new("Login").color(colors::PRIMARY))
                    .clicked()
                {
                    state.navigate(AppView::Login);
                }
            });
            ui.add_space(30.0);
        });
    });
}

fn text_field(
    ui: &mut egui::Ui,
    state: &mut AppState,
    field: Field,
    placeholder: &str,
    password: bool,
) {
    let mut value = match field {
        Field::Name => state.signup_form.name.clone(),
        Field::Email => state.signup_form.email.clone(),
        Field::Phone => state.signup_form.phone.clone(),
        Field::Password => state.signup_form.password.clone(),
        Field::ConfirmPassword => state.signup_form.confirm_password.clone(),
    };

    let response = ui.add_sized(
        [INPUT_WIDTH, 28.0],
        egui::TextEdit::singleline(&mut value)
            .hint_text(placeholder)
            .password(password),
    );
    if response.changed() {
        match field {
            Field::Name => state.signup_form.set_name(value),
            Field::Email => state.signup_form.set_email(value),
            Field::Phone => state.signup_form.set_phone(value),
            Field::Password => state.signup_form.set_password(value),
            Field::ConfirmPassword => state.signup_form.set_confirm_password(value),
        }
    }
    render_field_error(ui, &state.signup_form.errors, field);
    ui.add_space(8.0);
}
