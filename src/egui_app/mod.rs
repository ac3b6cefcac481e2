//! egui Native Desktop App Module
//!
//! This module provides the menu demo as a native desktop application using
//! egui/eframe.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration loading (config file, environment overrides)
//! - **`types`** - Menu entries and row tint
//! - **`menu`** - Screen controller, animations, timers and the panel renderer
//! - **`state`** - `AppState` tying config, controller and frame loop together
//! - **`theme`** - Light/dark palettes and frame builders
//! - **`views`** - Top bar, main and detail screens
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── types.rs        - Shared types
//! ├── menu/           - Controller and panel
//! ├── state/          - App state
//! ├── theme/          - Palettes and styles
//! └── views/          - Screens
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod types;
pub mod menu;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use types::{CellTint, MenuEntry};
pub use state::AppState;
pub use menu::{MenuController, MenuState, MenuTiming};
