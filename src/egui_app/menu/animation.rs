//! Animation Primitives
//!
//! Two kinds of animated scalar drive the menu:
//!
//! - [`Tween`] - fixed-duration ease-in-out, used for the opacity cross-fade
//! - [`Spring`] - damped harmonic oscillator, used for the menu scale
//!
//! Both are evaluated in closed form against an explicit `now`, so sampling
//! is a pure function of time and retargeting mid-flight starts from the
//! value currently on screen.

use std::time::Duration;

use crate::shared::SpringSettings;

/// Displacement and speed below which a spring counts as at rest
const REST_EPSILON: f32 = 1e-3;

/// Cubic ease-in-out on `t` in `[0, 1]`
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn elapsed_secs(start: Duration, now: Duration) -> f32 {
    now.saturating_sub(start).as_secs_f32()
}

/// A value easing from `from` to `to` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Duration,
    duration: Duration,
}

impl Tween {
    /// A tween already resting at `value`
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    pub fn value_at(&self, now: Duration) -> f32 {
        if self.is_settled(now) {
            return self.to;
        }
        let progress = elapsed_secs(self.start, now) / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.duration.is_zero() || now >= self.start + self.duration
    }

    /// Start a new ease towards `to` from wherever the value is at `now`
    pub fn retarget(&mut self, to: f32, now: Duration, duration: Duration) {
        let from = self.value_at(now);
        *self = Self {
            from,
            to,
            start: now,
            duration,
        };
    }
}

/// Spring constants, in the units of a unit-mass oscillator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Slightly under-damped; close to the system menu's pop
    pub const MENU: Self = Self {
        stiffness: 250.0,
        damping: 25.0,
        mass: 1.0,
    };

    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::MENU
    }
}

impl From<SpringSettings> for SpringConfig {
    fn from(settings: SpringSettings) -> Self {
        Self {
            stiffness: settings.stiffness,
            damping: settings.damping,
            mass: settings.mass,
        }
    }
}

/// A scalar pulled towards `to` by a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    from: f32,
    to: f32,
    initial_velocity: f32,
    start: Duration,
}

impl Spring {
    /// A spring already resting at `value`
    pub fn settled(value: f32, config: SpringConfig) -> Self {
        Self {
            config,
            from: value,
            to: value,
            initial_velocity: 0.0,
            start: Duration::ZERO,
        }
    }

    pub fn value_at(&self, now: Duration) -> f32 {
        let (displacement, velocity) = self.state_at(now);
        if displacement.abs() < REST_EPSILON && velocity.abs() < REST_EPSILON {
            self.to
        } else {
            self.to + displacement
        }
    }

    pub fn velocity_at(&self, now: Duration) -> f32 {
        self.state_at(now).1
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        let (displacement, velocity) = self.state_at(now);
        displacement.abs() < REST_EPSILON && velocity.abs() < REST_EPSILON
    }

    /// Pull towards `to`, carrying over the current position and velocity
    pub fn retarget(&mut self, to: f32, now: Duration) {
        let (displacement, velocity) = self.state_at(now);
        self.from = self.to + displacement;
        self.initial_velocity = velocity;
        self.to = to;
        self.start = now;
    }

    /// Displacement from the target and velocity at `now`
    fn state_at(&self, now: Duration) -> (f32, f32) {
        let t = elapsed_secs(self.start, now);
        let x0 = self.from - self.to;
        let v0 = self.initial_velocity;
        if x0 == 0.0 && v0 == 0.0 {
            return (0.0, 0.0);
        }

        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (x0 + b * t) * decay;
            let v = (b - omega * (x0 + b * t)) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * (-zeta * omega * (a * cos + b * sin) + omega_d * (b * cos - a * sin));
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}
