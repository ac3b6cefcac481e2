//! Custom Menu
//!
//! The demo screen's controller and the panel it drives.
//!
//! - **`state`** - [`MenuController`]: menu state machine, row tint,
//!   scripted intro, user input guards
//! - **`animation`** - tween and spring primitives sampled by time
//! - **`timers`** - cancellable one-shot timers
//! - **`navigation`** - route stack pushed by entry taps
//! - **`timing`** - delays and animation constants
//! - **`panel`** - egui rendering of the panel

pub mod animation;
pub mod navigation;
pub mod panel;
pub mod state;
pub mod timers;
pub mod timing;

pub use animation::{Spring, SpringConfig, Tween};
pub use navigation::{NavigationStack, Route};
pub use state::{MenuController, MenuPhase, MenuState, Presentation, ViewState};
pub use timers::{TimerHandle, TimerQueue};
pub use timing::MenuTiming;
