//! Color scheme and styles.

use catalog_core::view::common::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Catalog color palette.
pub struct Theme;

impl Theme {
    pub const TEXT: Color = Color::White;
    pub const MUTED: Color = Color::DarkGray;

    pub const BAR_FG: Color = Color::White;
    pub const BAR_BG: Color = Color::Blue;
    pub const CURSOR_BG: Color = Color::DarkGray;

    pub const LOW_STOCK: Color = Color::Yellow;
    pub const OUT_OF_STOCK: Color = Color::Red;
    pub const PRICE: Color = Color::Cyan;

    pub const KEY_HINT: Color = Color::Yellow;
    pub const BORDER: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::TEXT).bg(Color::Reset)
    }

    fn bar() -> Style {
        Style::default()
            .fg(Theme::BAR_FG)
            .bg(Theme::BAR_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Top header line.
    pub fn header() -> Style {
        Self::bar()
    }

    /// Column header row of the products table.
    pub fn table_header() -> Style {
        Self::bar()
    }

    /// Row under the cursor.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::CURSOR_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Theme::MUTED)
    }

    /// Key name in hints and popups.
    pub fn key() -> Style {
        Style::default().fg(Theme::KEY_HINT)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Maps a view tone to a ratatui style.
    pub fn for_tone(tone: Tone) -> Style {
        match tone {
            Tone::Plain => Self::default(),
            Tone::Warn => Style::default().fg(Theme::LOW_STOCK),
            Tone::Alert => Style::default()
                .fg(Theme::OUT_OF_STOCK)
                .add_modifier(Modifier::BOLD),
            Tone::Muted => Self::dim(),
            Tone::Highlight => Style::default().fg(Theme::PRICE),
        }
    }
}
