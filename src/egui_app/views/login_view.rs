use eframe::egui;

use crate::egui_app::forms::{Field, LoginMethod};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;
use crate::egui_app::views::{render_alerts, render_field_error, render_loading};

const INPUT_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(
            egui::RichText::new("Welcome Back!")
                .size(28.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.label(
            egui::RichText::new("Sign in to continue")
                .size(16.0)
                .color(colors::TEXT_MUTED),
        );
        ui.add_space(20.0);

        render_alerts(ui, state);

        // Email / phone method toggle
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - INPUT_WIDTH) / 2.0);
            let email_active = state.login_form.method == LoginMethod::Email;
            if ui
                .selectable_label(email_active, egui::RichText::new("Email").size(16.0))
                .clicked()
            {
                state.login_form.set_method(LoginMethod::Email);
            }
            if ui
                .selectable_label(!email_active, egui::RichText::new("Phone").size(16.0))
                .clicked()
            {
                state.login_form.set_method(LoginMethod::Phone);
            }
        });
        ui.add_space(12.0);

        match state.login_form.method {
            LoginMethod::Email => {
                let mut email = state.login_form.email.clone();
                let response = ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut email).hint_text("Email"),
                );
                if response.changed() {
                    state.login_form.set_email(email);
                }
                render_field_error(ui, &state.login_form.errors, Field::Email);
            }
            LoginMethod::Phone => {
                let mut phone = state.login_form.phone.clone();
                let response = ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut phone).hint_text("Phone Number"),
                );
                if response.changed() {
                    state.login_form.set_phone(phone);
                }
                render_field_error(ui, &state.login_form.errors, Field::Phone);
            }
        }
        ui.add_space(8.0);

        let mut password = state.login_form.password.clone();
        let response = ui.add_sized(
            [INPUT_WIDTH, 28.0],
            egui::TextEdit::singleline(&mut password)
                .hint_text("Password")
                .password(true),
        );
        if response.changed() {
            state.login_form.set_password(password);
        }
        render_field_error(ui, &state.login_form.errors, Field::Password);
        ui.add_space(16.0);

        let submit = egui::Button::new(
            egui::RichText::new("Login")
                .size(16.0)
                .color(colors::TEXT_ON_ACCENT),
        )
        .min_size(egui::vec2(INPUT_WIDTH, 36.0))
        .fill(colors::PRIMARY);
        if ui
            .add_enabled(!state.auth_state.loading, submit)
            .clicked()
        {
            state.handle_login();
        }
        ui.add_space(10.0);

        let facebook = egui::Button::new(
            egui::RichText::new("Continue with Facebook")
                .size(16.0)
                .color(colors::TEXT_ON_ACCENT),
        )
        .min_size(egui::vec2(INPUT_WIDTH, 36.0))
        .fill(colors::FACEBOOK);
        if ui
            .add_enabled(!state.auth_state.loading, facebook)
            .clicked()
        {
            state.handle_facebook_login();
        }

        render_loading(ui, state);
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 220.0) / 2.0);
            ui.label(egui::RichText::new("Don't have an account?").color(colors::TEXT_MUTED));
            if ui
                .link(egui::RichText::new("Sign Up").color(colors::PRIMARY))
                .clicked()
            {
                state.navigate(AppView::SignUp);
            }
        });
        if ui
            .link(egui::RichText::new("Forgot Password?").color(colors::PRIMARY))
            .clicked()
        {
            state.navigate(AppView::ForgotPassword);
        }
    });
}
