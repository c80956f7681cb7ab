//! medisuggester - terminal health companion shell
//!
//! A home screen listing the feature destinations, placeholder screens for
//! the ones still in the works, and a settings screen that switches the
//! interface between English and Hindi.

pub mod app;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod types;
pub mod ui;
