//! Theme Module
//!
//! Color constants for the BiniBaby screens.

pub mod colors;
