//! medisuggester - terminal health companion
//!
//! Features:
//! - Home screen listing symptom checker, medicines, lab analyzer,
//!   reminders, records and settings
//! - English and Hindi interface, switchable from Settings
//! - Light and dark palettes following the terminal background
//!
//! Usage: medisuggester [--locale en|hi] [--light|--dark]

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use medisuggester::app::App;
use medisuggester::config::{Appearance, Config};
use medisuggester::i18n::Locale;
use medisuggester::ui::{self, theme, Theme};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    help: bool,
    version: bool,
    locale: Option<Locale>,
    appearance: Option<Appearance>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--version" => options.version = true,
            "--light" => options.appearance = Some(Appearance::Light),
            "--dark" => options.appearance = Some(Appearance::Dark),
            "--locale" => {
                let tag = iter.next().context("--locale needs a value (en or hi)")?;
                options.locale = Some(tag.parse()?);
            }
            other => bail!("Unknown argument '{}' (see --help)", other),
        }
    }

    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    if options.help {
        print_help();
        return Ok(());
    }

    if options.version {
        println!("medisuggester {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    if let Err(e) = run_app(options) {
        tracing::error!(error = %format!("{:#}", e), "fatal error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"medisuggester - terminal health companion

USAGE:
    medisuggester [OPTIONS]

OPTIONS:
        --locale <en|hi>    Interface language for this run
        --light             Use the light palette
        --dark              Use the dark palette
    -h, --help              Print help information
    -v, --version           Print version information

KEYBINDINGS:
    j/k, ↑/↓         Move through the home list
    Enter            Open the selected entry
    1-6              Open an entry directly
    h/l, ←/→         Choose a language (Settings)
    Esc              Back
    q                Quit

CONFIG:
    ~/.config/medisuggester/config.toml
"#
    );
}

fn run_app(options: Options) -> Result<()> {
    match medisuggester::logging::init() {
        Ok(path) => eprintln!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    // Load configuration
    let config_path = Config::path()?;
    let config = Config::load_from(&config_path)
        .context("Failed to load configuration")?;

    let appearance = options.appearance.unwrap_or(config.appearance);
    let dark = appearance.is_dark(theme::system_prefers_dark);
    tracing::info!(
        locale = %config.locale,
        appearance = appearance.as_str(),
        dark,
        "starting"
    );

    let mut app = App::new(config, Theme::select(dark), Some(config_path));
    if let Some(locale) = options.locale {
        app.locale = locale;
        app.settings_focus = locale;
    }

    install_panic_hook();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("exiting");
    result
}

/// Put the terminal back before the default hook prints the panic message
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        tracing::error!(panic = %info, "panicked");
        default_hook(info);
    }));
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        app.update_flash();

        // Poll for events with timeout (for flash expiry)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_locale_and_appearance() {
        let options = parse_args(&args(&["--locale", "hi", "--light"])).unwrap();
        assert_eq!(options.locale, Some(Locale::Hi));
        assert_eq!(options.appearance, Some(Appearance::Light));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["--locale"])).is_err());
        assert!(parse_args(&args(&["--locale", "fr"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }
}
