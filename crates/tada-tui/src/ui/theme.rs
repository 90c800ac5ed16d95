use ratatui::style::Color;
use tada_core::models::Theme;

/// Colors a theme contributes to the widgets.
pub struct Palette {
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub dim: Color,
    pub complete: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Default => Palette {
            accent: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            dim: Color::DarkGray,
            complete: Color::Green,
        },
        Theme::Ocean => Palette {
            accent: Color::Blue,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            dim: Color::Gray,
            complete: Color::LightCyan,
        },
        Theme::Sunset => Palette {
            accent: Color::Magenta,
            border: Color::DarkGray,
            highlight: Color::LightRed,
            dim: Color::Gray,
            complete: Color::Yellow,
        },
        Theme::Midnight => Palette {
            accent: Color::White,
            border: Color::DarkGray,
            highlight: Color::LightBlue,
            dim: Color::DarkGray,
            complete: Color::Gray,
        },
    }
}
