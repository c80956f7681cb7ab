//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Title bar with the application name
//! - The screen for the current route
//! - Status bar and flash messages

use crate::app::App;
use crate::i18n::Locale;
use crate::types::{Route, HOME_ENTRIES};
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Paint the palette background everywhere first
    frame.render_widget(Block::default().style(app.theme.block_style()), area);

    // Main layout: title bar, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title_bar(frame, app, layout[0]);
    render_screen(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Title bar, shown on every screen
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!(" {}", app.tr("app_name"))).style(app.theme.app_bar());
    frame.render_widget(title, area);
}

/// Route table: every route maps to exactly one renderer
fn render_screen(frame: &mut Frame, app: &App, area: Rect) {
    match app.route() {
        Route::Home => render_home(frame, app, area),
        Route::Settings => render_settings(frame, app, area),
        route @ (Route::Symptoms
        | Route::Medicines
        | Route::Labs
        | Route::Reminders
        | Route::Records) => render_coming_soon(frame, app, route, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.route() {
        Route::Home => app.tr("hint.home"),
        Route::Settings => app.tr("hint.settings"),
        _ => app.tr("hint.placeholder"),
    };

    widgets::render_status_bar(frame, hints, app.locale.tag(), &app.theme, area);
}

// === SCREENS ===

/// Home: welcome title, destination list, disclaimer footer
fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let layout = Layout::vertical([
        Constraint::Length(2), // Welcome title
        Constraint::Min(3),    // Entries
        Constraint::Length(3), // Divider + disclaimer
    ])
    .split(area);

    let title = Paragraph::new(format!(" {}", app.tr("welcome_title"))).style(theme.title());
    // Title sits on the last row of its slot, which may be squeezed to nothing
    let title_area = Rect {
        y: layout[0].y + layout[0].height.saturating_sub(1),
        height: layout[0].height.min(1),
        ..layout[0]
    };
    frame.render_widget(title, title_area);

    let items: Vec<ListItem> = HOME_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.home_selected {
                theme.selected()
            } else {
                theme.text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), theme.text_dim()),
                Span::styled(format!(" {} ", app.tr(entry.label_key)), style),
            ]))
        })
        .collect();

    let list_block = Block::default()
        .style(theme.block_style())
        .borders(Borders::ALL)
        .border_style(theme.border());
    frame.render_widget(List::new(items).block(list_block), layout[1]);

    let disclaimer = Paragraph::new(app.tr("disclaimer"))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border()),
        )
        .style(theme.text_dim())
        .wrap(Wrap { trim: true });
    frame.render_widget(disclaimer, layout[2]);
}

/// Placeholder for destinations that are not built yet
fn render_coming_soon(frame: &mut Frame, app: &App, route: Route, area: Rect) {
    let theme = &app.theme;

    let content = vec![
        Line::styled(app.tr(route.title_key()), theme.title()),
        Line::raw(""),
        Line::styled(app.tr("coming_soon"), theme.text()),
    ];

    let centered = widgets::centered_rect(area.width, content.len() as u16, area);
    let paragraph = Paragraph::new(content)
        .style(theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

/// Settings: language heading and one button per locale
fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", app.tr("settings")))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut buttons: Vec<Span> = Vec::new();
    for (i, locale) in Locale::all().iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("  "));
        }
        buttons.extend(widgets::button(
            app.tr(locale.label_key()),
            app.settings_focus == *locale,
            app.locale == *locale,
            theme,
        ));
    }

    let content = vec![
        Line::raw(""),
        Line::styled(format!(" {}", app.tr("language")), theme.title()),
        Line::raw(""),
        Line::from(
            std::iter::once(Span::raw(" "))
                .chain(buttons)
                .collect::<Vec<_>>(),
        ),
    ];

    frame.render_widget(Paragraph::new(content).style(theme.text()), inner);
}
