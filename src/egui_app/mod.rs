//! egui Native Desktop App Module
//!
//! This module provides the native desktop application using egui/eframe:
//! the login, sign-up, forgot-password and home screens, plus the client
//! logic behind them.
//!
//! # Module Structure
//!
//! - **`config`** - Configuration management (backend base URL, timeout)
//! - **`types`** - Screen destinations and wire request/response types
//! - **`forms`** - Form state with per-field validation errors
//! - **`validate`** - Pure client-side validators
//! - **`auth`** - HTTP submission client for the auth endpoints
//! - **`session`** - Local session persistence (token + user record)
//! - **`state`** - Central app state: submit orchestration and navigation
//! - **`views`** - The screens themselves
//! - **`theme`** - Color constants
//! - **`main`** - Application entry point (binary)

pub mod auth;
pub mod config;
pub mod forms;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod validate;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use forms::{Field, LoginForm, LoginMethod, SignUpForm, ValidationErrors};
pub use session::{Session, SessionStore};
pub use state::{AppState, AuthState};
pub use types::{AppView, AuthSession, LoginCredentials, RegisterRequest};
