//! Theme definitions for medisuggester
//!
//! Two fixed palettes built from the same three greens, swapped around for
//! dark backgrounds. Which one is used is decided once at startup.

use ratatui::style::{Color, Modifier, Style};

const GREEN_PRIMARY: Color = Color::Rgb(46, 125, 50);     // #2e7d32
const GREEN_SECONDARY: Color = Color::Rgb(102, 187, 106); // #66bb6a
const GREEN_ACCENT: Color = Color::Rgb(165, 214, 167);    // #a5d6a7

/// Complete theme with all required colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Brand colors
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Theme {
    /// Pick the palette for a dark-mode signal
    pub fn select(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(251, 253, 247),        // #fbfdf7
            fg: Color::Rgb(26, 28, 25),           // #1a1c19
            fg_dim: Color::Rgb(92, 100, 90),      // #5c645a
            primary: GREEN_PRIMARY,
            secondary: GREEN_SECONDARY,
            tertiary: GREEN_ACCENT,
            success: GREEN_PRIMARY,
            error: Color::Rgb(186, 26, 26),       // #ba1a1a
            border: Color::Rgb(194, 201, 189),    // #c2c9bd
            selection_bg: GREEN_ACCENT,
            selection_fg: Color::Rgb(0, 33, 4),   // #002104
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(26, 28, 25),           // #1a1c19
            fg: Color::Rgb(226, 227, 221),        // #e2e3dd
            fg_dim: Color::Rgb(140, 147, 137),    // #8c9389
            primary: GREEN_SECONDARY,
            secondary: GREEN_ACCENT,
            tertiary: GREEN_PRIMARY,
            success: GREEN_SECONDARY,
            error: Color::Rgb(255, 180, 171),     // #ffb4ab
            border: Color::Rgb(66, 73, 64),       // #424940
            selection_bg: GREEN_PRIMARY,
            selection_fg: Color::Rgb(226, 227, 221),
        }
    }

    // Style helpers for common UI patterns

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Top app bar: brand colour fill
    pub fn app_bar(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.tertiary)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style for the focused element
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.secondary).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

/// Guess whether the terminal has a dark background.
///
/// Reads `COLORFGBG` ("fg;bg" colour indices, set by rxvt, konsole and
/// others). Without it we assume dark, which most terminals are.
pub fn system_prefers_dark() -> bool {
    dark_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()).unwrap_or(true)
}

fn dark_from_colorfgbg(value: Option<&str>) -> Option<bool> {
    let bg: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}
