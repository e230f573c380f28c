//! # Theme System
//!
//! Centralized color themes for the terminal page.
//!
//! ## Overview
//!
//! The [`Theme`] struct names every color the renderer uses by its role on
//! the page (company heading, badges, approach text, ...). Rendering code
//! never hardcodes a `ratatui::style::Color`. The active theme is chosen in
//! the config file and can be cycled at runtime with `Ctrl+T`.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colors used by the page, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name stored in the config file.
    pub name: &'static str,

    /// Main background color.
    pub bg: Color,
    /// Primary text (question text, input text).
    pub fg: Color,
    /// Muted text (hints, footer, notes, empty state).
    pub fg_dim: Color,

    /// Focused borders, header, selected-card marker.
    pub accent: Color,
    /// Company names and counters.
    pub secondary: Color,

    /// Role badge.
    pub role_badge: Color,
    /// Experience badge.
    pub experience_badge: Color,
    /// Date badge.
    pub date_badge: Color,

    /// Approach text and the enrichment marker.
    pub approach: Color,

    /// Background of the selected card's heading.
    pub selection_bg: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),                // base
        fg: Color::Rgb(205, 214, 244),             // text
        fg_dim: Color::Rgb(108, 112, 134),         // overlay0
        accent: Color::Rgb(137, 180, 250),         // blue
        secondary: Color::Rgb(249, 226, 175),      // yellow
        role_badge: Color::Rgb(203, 166, 247),     // mauve
        experience_badge: Color::Rgb(250, 179, 135), // peach
        date_badge: Color::Rgb(148, 226, 213),     // teal
        approach: Color::Rgb(166, 227, 161),       // green
        selection_bg: Color::Rgb(69, 71, 90),      // surface1
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        secondary: Color::Rgb(238, 212, 159),
        role_badge: Color::Rgb(198, 160, 246),
        experience_badge: Color::Rgb(245, 169, 127),
        date_badge: Color::Rgb(139, 213, 202),
        approach: Color::Rgb(166, 218, 149),
        selection_bg: Color::Rgb(73, 77, 100),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),
        secondary: Color::Rgb(241, 250, 140),
        role_badge: Color::Rgb(189, 147, 249),
        experience_badge: Color::Rgb(255, 184, 108),
        date_badge: Color::Rgb(255, 121, 198),
        approach: Color::Rgb(80, 250, 123),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        role_badge: Color::Rgb(180, 142, 173),
        experience_badge: Color::Rgb(208, 135, 112),
        date_badge: Color::Rgb(143, 188, 187),
        approach: Color::Rgb(163, 190, 140),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        role_badge: Color::Rgb(211, 134, 155),
        experience_badge: Color::Rgb(254, 128, 25),
        date_badge: Color::Rgb(142, 192, 124),
        approach: Color::Rgb(184, 187, 38),
        selection_bg: Color::Rgb(80, 73, 69),
    },
];
