//! Core data types for medisuggester
//!
//! Routes name every screen the shell can show. The set is closed: adding a
//! destination means adding a variant, and every `match` over `Route` has to
//! account for it.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// A navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Symptoms,
    Medicines,
    Labs,
    Reminders,
    Records,
    Settings,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Symptoms,
            Route::Medicines,
            Route::Labs,
            Route::Reminders,
            Route::Records,
            Route::Settings,
        ]
    }

    /// Stable string key for this route
    pub fn key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Symptoms => "symptoms",
            Route::Medicines => "medicines",
            Route::Labs => "labs",
            Route::Reminders => "reminders",
            Route::Records => "records",
            Route::Settings => "settings",
        }
    }

    /// String-table key of the screen title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "welcome_title",
            Route::Symptoms => "symptom_checker",
            Route::Medicines => "medicines",
            Route::Labs => "lab_analyzer",
            Route::Reminders => "reminders",
            Route::Records => "records",
            Route::Settings => "settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Route::all().iter().find(|r| r.key() == s) {
            Some(route) => Ok(*route),
            None => bail!("Unknown route '{}'", s),
        }
    }
}

/// One entry of the home screen list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeEntry {
    pub label_key: &'static str,
    pub route: Route,
}

/// Home screen entries, in display order
pub const HOME_ENTRIES: [HomeEntry; 6] = [
    HomeEntry { label_key: "symptom_checker", route: Route::Symptoms },
    HomeEntry { label_key: "medicines", route: Route::Medicines },
    HomeEntry { label_key: "lab_analyzer", route: Route::Labs },
    HomeEntry { label_key: "reminders", route: Route::Reminders },
    HomeEntry { label_key: "records", route: Route::Records },
    HomeEntry { label_key: "settings", route: Route::Settings },
];
