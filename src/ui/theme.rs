// ui/theme.rs - HingeView Visual Theme
//
// Color palette and the widget styles shared by both sample binaries.

use iced::widget::{button, container, rule};
use iced::{Background, Border, Color, Font, Theme};

/// Color palette (modern dark theme)
pub mod colors {
    use iced::Color;

    /// Window background
    pub const BG_PRIMARY: Color = Color::from_rgb(0.09, 0.09, 0.12);
    /// Pane background
    pub const BG_SECONDARY: Color = Color::from_rgb(0.12, 0.12, 0.16);
    /// Hovered list row
    pub const BG_HOVER: Color = Color::from_rgb(0.18, 0.18, 0.24);

    /// Brand accent, used for the top bar and selection highlight
    pub const ACCENT: Color = Color::from_rgb(0.35, 0.55, 0.95);
    /// Accent shifted for pressed controls
    pub const ACCENT_DARK: Color = Color::from_rgb(0.26, 0.42, 0.76);

    /// Primary text
    pub const TEXT_PRIMARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.95);
    /// Secondary text (captions, titles under ids)
    pub const TEXT_SECONDARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
    /// Muted text (empty states)
    pub const TEXT_MUTED: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.4);

    /// Row separator
    pub const DIVIDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.12);
    /// Selected row fill
    pub const ROW_SELECTED: Color = Color::from_rgba(0.35, 0.55, 0.95, 0.25);
}

/// Default font with bold weight, for item ids and the bar title.
pub fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// `color` with its alpha scaled by `alpha`, clamped to `[0, 1]`.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Style for a tappable list row. The selected row keeps its highlight
/// regardless of hover state.
pub fn row_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let background = if selected {
            colors::ROW_SELECTED
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors::TEXT_PRIMARY,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Flat button on the accent top bar (the back control).
pub fn bar_button_style(_: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors::ACCENT_DARK,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Root container style for both windows.
pub fn surface(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_PRIMARY)),
        ..Default::default()
    }
}

/// Detail pane backdrop.
pub fn pane(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_SECONDARY)),
        border: Border {
            color: colors::DIVIDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Top app bar backdrop.
pub fn top_bar(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::ACCENT)),
        ..Default::default()
    }
}

/// Row separator matching the palette divider color.
pub fn divider(_: &Theme) -> rule::Style {
    rule::Style {
        color: colors::DIVIDER,
        width: 1,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
    }
}
