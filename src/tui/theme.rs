//! Centralized theme and color scheme for the TUI.
//!
//! Consistent styling across the detail chart, overview strip, and chrome.

use crate::model::ActivityStatus;
use ratatui::prelude::*;
use std::sync::RwLock;

/// Color scheme for the TUI application.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Activity colors (one per status band)
    pub driving: Color,
    pub other_work: Color,
    pub available: Color,
    pub rest: Color,
    pub unknown: Color,

    // Series and brush
    pub series: Color,
    pub brush_fill: Color,
    pub brush_edge: Color,

    // UI elements
    pub primary: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            driving: Color::Red,
            other_work: Color::Yellow,
            available: Color::Cyan,
            rest: Color::Green,
            unknown: Color::DarkGray,

            series: Color::Rgb(244, 119, 53),
            brush_fill: Color::Rgb(60, 60, 80),
            brush_edge: Color::Gray,

            primary: Color::Cyan,
            accent: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            muted: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            driving: Color::Red,
            other_work: Color::Rgb(160, 120, 0),
            available: Color::Blue,
            rest: Color::Rgb(0, 130, 0),
            unknown: Color::Gray,

            series: Color::Rgb(200, 90, 30),
            brush_fill: Color::Rgb(210, 210, 230),
            brush_edge: Color::DarkGray,

            primary: Color::Blue,
            accent: Color::Rgb(160, 100, 0),
            border: Color::Gray,
            border_focused: Color::Blue,
            text: Color::Black,
            text_muted: Color::DarkGray,
            muted: Color::Gray,

            success: Color::Green,
            warning: Color::Rgb(160, 120, 0),
            error: Color::Red,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            driving: Color::LightRed,
            other_work: Color::LightYellow,
            available: Color::LightCyan,
            rest: Color::LightGreen,
            unknown: Color::White,

            series: Color::LightYellow,
            brush_fill: Color::Rgb(90, 90, 90),
            brush_edge: Color::White,

            primary: Color::White,
            accent: Color::LightYellow,
            border: Color::White,
            border_focused: Color::LightYellow,
            text: Color::White,
            text_muted: Color::Gray,
            muted: Color::DarkGray,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
        }
    }

    /// Color assigned to a status band.
    #[must_use]
    pub fn status_color(&self, status: ActivityStatus) -> Color {
        match status {
            ActivityStatus::Driving => self.driving,
            ActivityStatus::OtherWork => self.other_work,
            ActivityStatus::Available => self.available,
            ActivityStatus::Rest => self.rest,
            ActivityStatus::Unknown => self.unknown,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

/// Render footer key hints as styled spans.
#[must_use]
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let scheme = colors();
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(scheme.primary).bold(),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(scheme.text_muted),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_rotation_cycles() {
        let dark = Theme::dark();
        let light = dark.next();
        assert_eq!(light.name, "light");
        let hc = light.next();
        assert_eq!(hc.name, "high-contrast");
        assert_eq!(hc.next().name, "dark");
    }

    #[test]
    fn from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("hc").name, "high-contrast");
        assert_eq!(Theme::from_name("nonsense").name, "dark");
    }

    #[test]
    fn every_status_has_a_color() {
        let scheme = ColorScheme::dark();
        for status in ActivityStatus::DISPLAY_ORDER {
            let _ = scheme.status_color(status);
        }
    }
}
