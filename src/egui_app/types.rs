/**
 * Shared Types Module
 *
 * Defines the menu entries and per-row tint shared by the controller and the views.
 */

use std::fmt;

use crate::egui_app::menu::navigation::Route;

/// Rows of the custom menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    /// Plain chat; the entry the scripted sequence taps
    Blank,
    /// Start from a prompt
    Prompt,
    /// Start from a random prompt
    Random,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Blank, MenuEntry::Prompt, MenuEntry::Random];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Blank => "Blank",
            MenuEntry::Prompt => "Prompt",
            MenuEntry::Random => "Random",
        }
    }

    /// Trailing glyph (from egui's bundled emoji font)
    pub fn glyph(self) -> &'static str {
        match self {
            MenuEntry::Blank => "🗨",
            MenuEntry::Prompt => "💬",
            MenuEntry::Random => "🎲",
        }
    }

    /// Route pushed when the entry is tapped
    pub fn route(self) -> Route {
        match self {
            MenuEntry::Blank => Route(1),
            MenuEntry::Prompt => Route(2),
            MenuEntry::Random => Route(3),
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Background state of a menu row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellTint {
    #[default]
    Untapped,
    Tapped,
}
