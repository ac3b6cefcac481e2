//! Clock helpers
//!
//! The controller takes `now` explicitly; these helpers turn seconds into
//! instants and step a controller through time frame by frame.

use std::time::Duration;

use programmatic_menu::egui_app::menu::MenuController;

/// One frame at 60 Hz
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Seconds since app start
pub fn at(seconds: f32) -> Duration {
    Duration::from_secs_f32(seconds)
}

/// Tick the controller every frame in `(from, to]`, then exactly at `to`
pub fn run_frames(controller: &mut MenuController, from: Duration, to: Duration) {
    let mut now = from + FRAME;
    while now < to {
        controller.tick(now);
        now += FRAME;
    }
    controller.tick(to);
}
