//! BiniBaby - Main Library
//!
//! BiniBaby is a small desktop companion app. This crate implements its
//! authentication screens: login (email or phone + password, plus a
//! Facebook login stub), sign-up with client-side form validation, and a
//! placeholder forgot-password screen, wired together by a simple
//! screen-navigation surface.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared across the app
//!   - Application configuration and builder
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Form state and validation
//!   - HTTP submission client for the auth endpoints
//!   - Local session persistence
//!   - The auth screens themselves
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error` and `egui_app::session`
//!
//! All errors are recovered at the screen level; none are fatal to the
//! application.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
