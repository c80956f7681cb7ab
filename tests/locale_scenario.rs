//! End-to-end walk through the shell: home, settings, switch to Hindi, back home.

use crossterm::event::{KeyCode, KeyEvent};
use medisuggester::app::App;
use medisuggester::config::Config;
use medisuggester::i18n::Locale;
use medisuggester::types::Route;
use medisuggester::ui::{self, Theme};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn switch_to_hindi_and_back_home() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config = Config::load_from(&config_path).unwrap();
    let mut app = App::new(config, Theme::select(false), Some(config_path.clone()));

    // Launch: home, English
    assert_eq!(app.route(), Route::Home);
    assert!(screen_text(&app).contains("Welcome"));

    // Settings is the last entry
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::Settings);

    // Hindi button
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.locale, Locale::Hi);

    // Back home, title is now Hindi
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.tr("welcome_title"), "स्वागत है");
    assert!(!screen_text(&app).contains("Welcome"));

    // The choice survives a restart
    let reloaded = Config::load_from(&config_path).unwrap();
    let app = App::new(reloaded, Theme::select(false), None);
    assert_eq!(app.locale, Locale::Hi);
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn english_button_reverts_text() {
    let mut app = App::new(Config::default(), Theme::select(true), None);
    app.set_locale(Locale::Hi);
    assert!(!screen_text(&app).contains("Welcome"));

    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.locale, Locale::En);
    assert!(screen_text(&app).contains("Welcome"));
}

#[test]
fn every_destination_is_reachable_only_from_home() {
    for (digit, route) in ('1'..='6').zip(Route::all().iter().skip(1)) {
        let mut app = App::new(Config::default(), Theme::select(true), None);
        press(&mut app, KeyCode::Char(digit));
        assert_eq!(app.route(), *route);

        // Digits do nothing away from home
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.route(), *route);
    }
}
