/**
 * egui Native Desktop App - Main Entry Point
 *
 * Runs the BiniBaby auth screens: login, sign-up, forgot password and the
 * post-auth home screen.
 */
use binibaby::egui_app::{views, AppState};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BiniBaby",
        options,
        Box::new(|_cc| Ok(Box::new(BiniBabyApp::default()))),
    )
}

/// Main application
struct BiniBabyApp {
    state: AppState,
}

impl Default for BiniBabyApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for BiniBabyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_main_panel(ctx, &mut self.state);

        if self.state.auth_state.loading {
            // Keep polling for the background submission result
            ctx.request_repaint();
        }
    }
}
