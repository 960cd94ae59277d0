//! Color Constants
//!
//! Soft pink/blue palette used across the auth screens.

use eframe::egui::Color32;

/// Screen background - Soft pink
pub const BG_SOFT: Color32 = Color32::from_rgb(0xFF, 0xE5, 0xEC);

/// Primary accent - Hot pink
pub const PRIMARY: Color32 = Color32::from_rgb(0xFF, 0x69, 0xB4);

/// Secondary accent - Baby blue
pub const SECONDARY: Color32 = Color32::from_rgb(0x7F, 0xE5, 0xFF);

/// Facebook brand blue
pub const FACEBOOK: Color32 = Color32::from_rgb(0x18, 0x77, 0xF2);

/// Primary heading text
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Secondary text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// Text on filled buttons
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

/// Inline validation error text
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Success notice text
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
