//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Light and dark palettes
//! - Reusable widgets
//! - Screen renderers and the main render entry point

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
