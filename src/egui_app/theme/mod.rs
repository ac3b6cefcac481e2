//! Theme Module
//!
//! Light and dark palettes for the menu demo, plus the frame builders that
//! use them. The theme is always passed in explicitly:
//!
//! - `colors` - [`Theme`], [`Palette`] and the palette lookup table
//! - `styles` - global visuals, frame builders and menu geometry
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{styles, Palette, Theme};
//!
//! let palette = Palette::for_theme(Theme::Dark);
//! styles::apply_global_theme(ctx, Theme::Dark, palette);
//! styles::menu_panel_frame(palette).show(ui, |ui| {
//!     // Rows
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
