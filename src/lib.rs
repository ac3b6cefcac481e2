//! Programmatic Menu - Main Library
//!
//! A single-screen egui demo that reproduces the look and animation of a
//! native dropdown menu out of plain panels and painter calls: the panel
//! fades in, springs out of the top-trailing corner, tints the tapped row,
//! and on launch plays a short scripted demo of itself.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic configuration and error types
//!   - `AppConfig` loaded from TOML, with a builder and validation
//!   - `SharedError` / `ConfigError`
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - `menu` - the screen controller: menu state machine, animations,
//!     cancellable timers, navigation stack, and the panel renderer
//!   - `theme` - light/dark palettes keyed by [`egui_app::theme::Theme`]
//!   - `views` - top bar, main and detail screens
//!
//! # Usage
//!
//! ```rust,no_run
//! // Run the native desktop app:
//! // cargo run --bin egui_app
//! ```
//!
//! The controller is independent of egui's clock, so the scripted sequence
//! can be driven from tests:
//!
//! ```rust
//! use std::time::Duration;
//! use programmatic_menu::egui_app::menu::{MenuController, MenuState, MenuTiming};
//!
//! let mut controller = MenuController::new(MenuTiming::default());
//! controller.on_mount(Duration::ZERO);
//! controller.tick(Duration::from_millis(1500));
//! assert_eq!(controller.view().menu, MenuState::Open);
//! ```
//!
//! # Thread Safety
//!
//! egui is a single-threaded immediate mode GUI; every mutation happens inside
//! `eframe::App::update`, so nothing here is shared across threads.

/// Shared configuration and error types
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
