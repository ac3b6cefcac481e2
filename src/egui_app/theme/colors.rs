//! Color Palettes for the Menu Demo
//!
//! Two palettes, light and dark, tuned to sit close to the system menu's
//! grays. Views never branch on the display mode themselves; they look the
//! palette up by [`Theme`] and read colors from it.

use eframe::egui::Color32;

/// Display mode the screen is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn index(self) -> usize {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }
}

/// Every color the screen draws with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Screen background behind the title and body text
    pub background: Color32,
    pub text: Color32,
    /// Toolbar trigger glyph
    pub trigger: Color32,
    /// Divider between menu rows
    pub divider: Color32,
    /// Menu panel and untapped row background
    pub cell_untapped: Color32,
    /// Row background while tapped
    pub cell_tapped: Color32,
    pub panel_shadow: Color32,
}

/// Light mode
pub const LIGHT: Palette = Palette {
    background: Color32::WHITE,
    text: Color32::BLACK,
    trigger: Color32::from_rgb(0x00, 0x7A, 0xFF),
    divider: Color32::from_rgb(179, 179, 179),
    cell_untapped: Color32::from_rgb(245, 245, 245),
    cell_tapped: Color32::from_rgb(230, 230, 230),
    panel_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 38),
};

/// Dark mode
pub const DARK: Palette = Palette {
    background: Color32::BLACK,
    text: Color32::WHITE,
    trigger: Color32::WHITE,
    divider: Color32::from_rgb(96, 96, 96),
    cell_untapped: Color32::from_rgb(31, 31, 31),
    cell_tapped: Color32::from_rgb(54, 54, 54),
    panel_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 38),
};

static PALETTES: [Palette; 2] = [LIGHT, DARK];

impl Palette {
    /// Palette lookup keyed by theme
    pub fn for_theme(theme: Theme) -> &'static Palette {
        &PALETTES[theme.index()]
    }
}
