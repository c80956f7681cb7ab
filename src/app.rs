//! Application state and event handling
//!
//! `App` is the context every renderer receives: navigation state, the
//! active locale and the selected theme travel together instead of living in
//! globals.

use crate::config::Config;
use crate::i18n::{self, Locale};
use crate::navigation::Navigator;
use crate::types::{Route, HOME_ENTRIES};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FLASH_TTL: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub nav: Navigator,
    pub locale: Locale,
    pub theme: Theme,
    pub config: Config,

    /// Where locale changes are persisted; `None` keeps them in memory only
    config_path: Option<PathBuf>,

    // Home screen state
    pub home_selected: usize,

    // Settings screen state
    pub settings_focus: Locale,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl App {
    /// Create a new App instance, starting on the home screen
    pub fn new(config: Config, theme: Theme, config_path: Option<PathBuf>) -> Self {
        let locale = config.locale;
        Self {
            should_quit: false,
            nav: Navigator::new(),
            locale,
            theme,
            config,
            config_path,
            home_selected: 0,
            settings_focus: locale,
            flash_message: None,
        }
    }

    /// Translate a string-table key into the active locale
    pub fn tr<'a>(&self, key: &'a str) -> &'a str {
        i18n::t(key, self.locale)
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.update_flash();

        // Global keys (work on every screen)
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.nav.back();
                return;
            }
            _ => {}
        }

        match self.route() {
            Route::Home => self.handle_home_key(key),
            Route::Settings => self.handle_settings_key(key),
            Route::Symptoms
            | Route::Medicines
            | Route::Labs
            | Route::Reminders
            | Route::Records => {}
        }
    }

    /// Handle keys on the home screen
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.home_selected < HOME_ENTRIES.len() - 1 {
                    self.home_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.home_selected = self.home_selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.home_selected = 0,
            KeyCode::Char('G') => self.home_selected = HOME_ENTRIES.len() - 1,
            KeyCode::Enter => self.activate_entry(self.home_selected),
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as u8 - b'1') as usize;
                self.activate_entry(index);
            }
            _ => {}
        }
    }

    /// Open the destination bound to home entry `index`
    pub fn activate_entry(&mut self, index: usize) {
        let Some(entry) = HOME_ENTRIES.get(index) else {
            return;
        };
        self.home_selected = index;
        if entry.route == Route::Settings {
            self.settings_focus = self.locale;
        }
        self.nav.navigate(entry.route);
    }

    /// Handle keys on the settings screen
    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.settings_focus = Locale::En,
            KeyCode::Char('l') | KeyCode::Right => self.settings_focus = Locale::Hi,
            KeyCode::Tab | KeyCode::BackTab => {
                self.settings_focus = match self.settings_focus {
                    Locale::En => Locale::Hi,
                    Locale::Hi => Locale::En,
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.set_locale(self.settings_focus),
            KeyCode::Char('e') => self.set_locale(Locale::En),
            KeyCode::Char('i') => self.set_locale(Locale::Hi),
            _ => {}
        }
    }

    /// Switch the display language and persist the choice.
    ///
    /// A failed save is reported but the new locale stays active.
    pub fn set_locale(&mut self, locale: Locale) {
        self.settings_focus = locale;
        if locale == self.locale && locale == self.config.locale {
            return;
        }

        tracing::info!(from = %self.locale, to = %locale, "locale changed");
        self.locale = locale;
        self.config.locale = locale;

        let Some(path) = &self.config_path else {
            return;
        };
        match self.config.save_to(path) {
            Ok(()) => {
                let message = self.tr("flash.locale_saved").to_string();
                self.show_flash(&message, false);
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "failed to persist locale");
                let message = format!("{}: {:#}", self.tr("flash.save_failed"), e);
                self.show_flash(&message, true);
            }
        }
    }

    /// Drop the flash message once it has been visible long enough
    pub fn update_flash(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed() >= FLASH_TTL {
                self.flash_message = None;
            }
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}
