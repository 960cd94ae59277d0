use std::sync::mpsc::{channel, Receiver, TryRecvError};

use tokio::runtime::Runtime;

use crate::egui_app::auth;
use crate::egui_app::config::Config;
use crate::egui_app::forms::{LoginForm, SignUpForm};
use crate::egui_app::session::{Session, SessionStore};
use crate::egui_app::types::{AppView, AuthSession, RegisterRequest};
use crate::egui_app::validate;
use crate::shared::error::AuthError;

/// Outcome of a background submission, reported over the channel
enum AuthMessage {
    LoggedIn(AuthSession),
    Registered,
    Failed(AuthError),
}

/// Screen-level authentication status
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// A request is in flight; submit controls are disabled
    pub loading: bool,
    /// Dismissible error alert (server/network/malformed-response errors)
    pub alert: Option<String>,
    /// Dismissible info notice (e.g. after successful registration)
    pub notice: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }

    pub fn set_alert(&mut self, message: String) {
        self.alert = Some(message);
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub login_form: LoginForm,
    pub signup_form: SignUpForm,
    /// Session loaded at startup or created by a successful login. The
    /// rest of the app reads this to decide authentication status.
    pub session: Option<Session>,
    session_store: SessionStore,
    /// In-flight submission, tagged with the screen that started it so a
    /// late result for a dismissed screen can be discarded.
    auth_result: Option<(AppView, Receiver<AuthMessage>)>,
}

impl AppState {
    pub fn new() -> Self {
        let session_store = SessionStore::open_default().unwrap_or_else(|e| {
            tracing::warn!("no platform data dir, using working dir for session: {e}");
            SessionStore::at("session.json")
        });
        Self::with(Config::new(), session_store)
    }

    pub fn with(config: Config, session_store: SessionStore) -> Self {
        let session = session_store.load().unwrap_or_else(|e| {
            tracing::warn!("failed to read session: {e}");
            None
        });
        Self {
            config,
            auth_state: AuthState::new(),
            current_view: AppView::Login,
            login_form: LoginForm::new(),
            signup_form: SignUpForm::new(),
            session,
            session_store,
            auth_result: None,
        }
    }

    /// Whether a submission is outstanding
    pub fn request_in_flight(&self) -> bool {
        self.auth_result.is_some()
    }

    /// Move to another screen. Dismissing a screen with a request in
    /// flight abandons that request; its result will not touch state.
    pub fn navigate(&mut self, view: AppView) {
        if view == self.current_view {
            return;
        }
        if let Some((origin, _)) = &self.auth_result {
            if *origin == self.current_view {
                tracing::debug!("abandoning in-flight request for dismissed screen");
                self.auth_result = None;
                self.auth_state.loading = false;
            }
        }
        self.auth_state.alert = None;
        self.auth_state.notice = None;
        self.current_view = view;
    }

    /// Poll the in-flight submission, if any. Called once per frame.
    pub fn check_auth_result(&mut self) {
        let Some((origin, rx)) = &self.auth_result else {
            return;
        };
        let origin = *origin;

        match rx.try_recv() {
            Ok(message) => {
                self.auth_result = None;
                self.auth_state.loading = false;
                if self.current_view != origin {
                    tracing::debug!("discarding auth result for dismissed screen");
                    return;
                }
                match message {
                    AuthMessage::LoggedIn(auth) => self.finish_login(auth),
                    AuthMessage::Registered => {
                        self.signup_form = SignUpForm::new();
                        self.auth_state.notice =
                            Some("Account created successfully!".to_string());
                        self.current_view = AppView::Login;
                    }
                    AuthMessage::Failed(error) => self.fail(origin, error),
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting; treat like a failed request
                self.auth_result = None;
                self.auth_state.loading = false;
                self.auth_state.set_alert(AuthError::Network.to_string());
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.auth_state.loading {
            return;
        }
        self.auth_state.clear_alert();
        self.auth_state.notice = None;

        let errors = validate::validate_login(&self.login_form);
        if !errors.is_empty() {
            self.login_form.errors = errors;
            return;
        }
        self.login_form.errors = Default::default();
        self.auth_state.loading = true;

        let config = self.config.clone();
        let credentials = self.login_form.credentials();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_auth(|rt| rt.block_on(auth::login(&config, &credentials)));
            let _ = tx.send(match result {
                Ok(session) => AuthMessage::LoggedIn(session),
                Err(error) => AuthMessage::Failed(error),
            });
        });
        self.auth_result = Some((AppView::Login, rx));
    }

    pub fn handle_signup(&mut self) {
        if self.auth_state.loading {
            return;
        }
        self.auth_state.clear_alert();
        self.auth_state.notice = None;

        let errors = validate::validate_sign_up(&self.signup_form);
        if !errors.is_empty() {
            self.signup_form.errors = errors;
            self.auth_state
                .set_alert("Please fix the errors in the form".to_string());
            return;
        }
        self.signup_form.errors = Default::default();
        self.auth_state.loading = true;

        let config = self.config.clone();
        let request = RegisterRequest {
            name: self.signup_form.name.clone(),
            email: self.signup_form.email.clone(),
            phone: self.signup_form.phone.clone(),
            password: self.signup_form.password.clone(),
        };
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_auth(|rt| rt.block_on(auth::register(&config, &request)));
            let _ = tx.send(match result {
                Ok(()) => AuthMessage::Registered,
                Err(error) => AuthMessage::Failed(error),
            });
        });
        self.auth_result = Some((AppView::SignUp, rx));
    }

    pub fn handle_facebook_login(&mut self) {
        if self.auth_state.loading {
            return;
        }
        self.auth_state.clear_alert();
        self.auth_state.notice = None;
        self.auth_state.loading = true;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = block_on_auth(|rt| rt.block_on(auth::facebook_login(&config)));
            let _ = tx.send(match result {
                Ok(session) => AuthMessage::LoggedIn(session),
                Err(error) => AuthMessage::Failed(error),
            });
        });
        self.auth_result = Some((AppView::Login, rx));
    }

    fn finish_login(&mut self, auth: AuthSession) {
        let session = Session::from(auth);
        if let Err(e) = self.session_store.save(&session) {
            tracing::error!("failed to persist session: {e}");
            self.auth_state
                .set_alert("Could not save your session. Please try again.".to_string());
            return;
        }
        self.session = Some(session);
        self.login_form.set_password(String::new());
        self.current_view = AppView::Home;
    }

    fn fail(&mut self, origin: AppView, error: AuthError) {
        if let AuthError::ServerValidation { errors } = &error {
            // Field-level UI reflects server-side validation too
            match origin {
                AppView::SignUp => self.signup_form.errors.merge_server(errors),
                _ => self.login_form.errors.merge_server(errors),
            }
        }
        self.auth_state.set_alert(error.to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn block_on_auth<T>(f: impl FnOnce(&Runtime) -> Result<T, AuthError>) -> Result<T, AuthError> {
    match Runtime::new() {
        Ok(rt) => f(&rt),
        Err(e) => {
            tracing::error!("failed to create runtime: {e}");
            Err(AuthError::Network)
        }
    }
}
