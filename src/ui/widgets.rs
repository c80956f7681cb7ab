//! Reusable UI widgets
//!
//! Small building blocks shared by the screens:
//! - Language buttons
//! - Flash message and status bar lines
//! - Layout helpers

use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Spans for a push button: `[ label ]`, highlighted when focused.
/// `active` adds a marker in front of the label.
pub fn button<'a>(label: &'a str, focused: bool, active: bool, theme: &Theme) -> Vec<Span<'a>> {
    let style = if focused {
        theme.selected()
    } else {
        theme.border_focused()
    };
    let marker = if active { "● " } else { "  " };

    vec![
        Span::styled("[ ", style),
        Span::styled(marker, style.add_modifier(Modifier::BOLD)),
        Span::styled(label, style),
        Span::styled(" ]", style),
    ]
}

/// Render a flash message on the last line of `area`
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(theme.text());

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    // Right side, measured in columns rather than bytes
    let right_width = Span::raw(right_content).width() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_width + 1),
        y: status_area.y,
        width: (right_width + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size, clipped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(40, 20, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_bars_skip_empty_area_at_bottom_edge() {
        use ratatui::{backend::TestBackend, Terminal};

        let theme = Theme::light();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|frame| {
                let below = Rect::new(0, 5, 10, 0);
                render_status_bar(frame, "hints", "en", &theme, below);
                render_flash_message(frame, "saved", false, &theme, below);
            })
            .unwrap();
    }

    #[test]
    fn test_button_marks_active() {
        let theme = Theme::dark();
        let active: String = button("English", false, true, &theme)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        let inactive: String = button("English", true, false, &theme)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert_eq!(active, "[ ● English ]");
        assert_eq!(inactive, "[   English ]");
    }
}
