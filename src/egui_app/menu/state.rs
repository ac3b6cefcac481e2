//! Menu Controller
//!
//! Owns everything the demo screen mutates: the explicit open/closed state,
//! the animations that follow it, the row tint, the navigation stack, and
//! the timers of the scripted sequence.
//!
//! Every operation takes `now`, the time since app start on a monotonic
//! clock. The egui layer passes the frame time; tests pass whatever instant
//! they want to observe.

use std::time::Duration;

use super::animation::{Spring, Tween};
use super::navigation::{NavigationStack, Route};
use super::timers::{TimerHandle, TimerQueue};
use super::timing::MenuTiming;
use crate::egui_app::types::{CellTint, MenuEntry};

/// Explicit menu state; the only thing a toggle flips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toolbar_icon_opacity(self) -> f32 {
        match self {
            MenuState::Closed => ICON_OPACITY_CLOSED,
            MenuState::Open => ICON_OPACITY_CEILING - ICON_OPACITY_CLOSED,
        }
    }

    pub fn menu_opacity(self) -> f32 {
        match self {
            MenuState::Closed => MENU_OPACITY_CLOSED,
            MenuState::Open => MENU_OPACITY_OPEN,
        }
    }

    pub fn menu_scale(self) -> f32 {
        match self {
            MenuState::Closed => MENU_SCALE_CLOSED,
            MenuState::Open => MENU_SCALE_OPEN,
        }
    }
}

/// Menu state as seen on screen, including the in-between animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// The icon dims to `1.4 - 1.0` while the menu is up
pub const ICON_OPACITY_CEILING: f32 = 1.4;
pub const ICON_OPACITY_CLOSED: f32 = 1.0;
pub const MENU_OPACITY_CLOSED: f32 = 0.0;
pub const MENU_OPACITY_OPEN: f32 = 1.0;
pub const MENU_SCALE_CLOSED: f32 = 0.2;
pub const MENU_SCALE_OPEN: f32 = 1.2;

/// Target values of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub menu: MenuState,
    pub toolbar_icon_opacity: f32,
    pub menu_opacity: f32,
    pub menu_scale: f32,
    pub cell_tint: CellTint,
    /// Row that carries the tint while it is `Tapped`
    pub tapped_entry: Option<MenuEntry>,
    pub has_played_intro: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        let menu = MenuState::Closed;
        Self {
            menu,
            toolbar_icon_opacity: menu.toolbar_icon_opacity(),
            menu_opacity: menu.menu_opacity(),
            menu_scale: menu.menu_scale(),
            cell_tint: CellTint::Untapped,
            tapped_entry: None,
            has_played_intro: false,
        }
    }
}

impl ViewState {
    fn apply_menu(&mut self, menu: MenuState) {
        self.menu = menu;
        self.toolbar_icon_opacity = menu.toolbar_icon_opacity();
        self.menu_opacity = menu.menu_opacity();
        self.menu_scale = menu.menu_scale();
    }

    /// Tint of a given row; only the tapped row carries `Tapped`
    pub fn tint_of(&self, entry: MenuEntry) -> CellTint {
        match self.tapped_entry {
            Some(tapped) if tapped == entry => self.cell_tint,
            _ => CellTint::Untapped,
        }
    }
}

/// Animated values sampled at one instant, ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub toolbar_icon_opacity: f32,
    pub menu_opacity: f32,
    pub menu_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledAction {
    ToggleMenu,
    TapEntry(MenuEntry),
    PushRoute(Route),
    ResetTint,
}

/// Controller for the demo screen
#[derive(Debug)]
pub struct MenuController {
    timing: MenuTiming,
    view: ViewState,
    navigation: NavigationStack,
    timers: TimerQueue<ScheduledAction>,
    intro_timers: Vec<TimerHandle>,
    tint_reset: Option<TimerHandle>,
    icon_opacity: Tween,
    menu_opacity: Tween,
    menu_scale: Spring,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(MenuTiming::default())
    }
}

impl MenuController {
    pub fn new(timing: MenuTiming) -> Self {
        let view = ViewState::default();
        Self {
            icon_opacity: Tween::settled(view.toolbar_icon_opacity),
            menu_opacity: Tween::settled(view.menu_opacity),
            menu_scale: Spring::settled(view.menu_scale, timing.spring),
            timing,
            view,
            navigation: NavigationStack::new(),
            timers: TimerQueue::new(),
            intro_timers: Vec::new(),
            tint_reset: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    /// Schedule the scripted sequence.
    ///
    /// Only the first call does anything; returns whether the intro was
    /// scheduled by this call.
    pub fn on_mount(&mut self, now: Duration) -> bool {
        if self.view.has_played_intro {
            tracing::trace!("[MENU] mount ignored, intro already played");
            return false;
        }
        self.view.has_played_intro = true;

        let open = self
            .timers
            .schedule(now + self.timing.intro_open_delay, ScheduledAction::ToggleMenu);
        let tap = self.timers.schedule(
            now + self.timing.intro_tap_delay,
            ScheduledAction::TapEntry(MenuEntry::Blank),
        );
        self.intro_timers = vec![open, tap];
        tracing::info!(
            "[MENU] intro scheduled: open at +{:?}, tap at +{:?}",
            self.timing.intro_open_delay,
            self.timing.intro_tap_delay
        );
        true
    }

    /// Cancel everything still pending
    pub fn on_unmount(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.intro_timers.clear();
        self.tint_reset = None;
        if cancelled > 0 {
            tracing::debug!("[TIMER] unmount cancelled {} pending timer(s)", cancelled);
        }
    }

    /// Whether any timer of the scripted sequence has yet to fire
    pub fn is_intro_running(&self) -> bool {
        self.intro_timers
            .iter()
            .any(|handle| self.timers.contains(*handle))
    }

    /// Fire every timer due at `now`; returns how many fired.
    ///
    /// Timers scheduled by the fired actions wait for the next tick.
    pub fn tick(&mut self, now: Duration) -> usize {
        let due = self.timers.take_due(now);
        let fired = due.len();
        for action in due {
            tracing::debug!("[TIMER] firing {:?}", action);
            match action {
                ScheduledAction::ToggleMenu => self.toggle_menu(now),
                ScheduledAction::TapEntry(entry) => self.tap_entry(entry, now),
                ScheduledAction::PushRoute(route) => self.navigation.push(route),
                ScheduledAction::ResetTint => {
                    self.tint_reset = None;
                    self.view.cell_tint = CellTint::Untapped;
                    self.view.tapped_entry = None;
                }
            }
        }
        fired
    }

    pub fn toggle_menu(&mut self, now: Duration) {
        let next = self.view.menu.toggled();
        self.set_menu(next, now);
    }

    /// Tint the row, close the menu, then navigate on the next tick
    pub fn tap_entry(&mut self, entry: MenuEntry, now: Duration) {
        tracing::info!("[MENU] tapped {}", entry);
        self.view.cell_tint = CellTint::Tapped;
        self.view.tapped_entry = Some(entry);

        if self.view.menu == MenuState::Open {
            self.set_menu(MenuState::Closed, now);
        }

        self.timers
            .schedule(now, ScheduledAction::PushRoute(entry.route()));

        if let Some(previous) = self.tint_reset.take() {
            self.timers.cancel(previous);
        }
        self.tint_reset = Some(
            self.timers
                .schedule(now + self.timing.tint_reset_delay, ScheduledAction::ResetTint),
        );
    }

    /// User tap on the toolbar trigger; returns whether it was honoured
    pub fn trigger_tapped(&mut self, now: Duration) -> bool {
        if self.is_intro_running() {
            tracing::debug!("[MENU] trigger tap ignored during intro");
            return false;
        }
        self.toggle_menu(now);
        true
    }

    /// User tap on a menu row; returns whether it was honoured
    pub fn entry_tapped(&mut self, entry: MenuEntry, now: Duration) -> bool {
        if self.is_intro_running() {
            tracing::debug!("[MENU] tap on {} ignored during intro", entry);
            return false;
        }
        if self.view.menu == MenuState::Closed {
            tracing::debug!("[MENU] tap on {} ignored, menu is closed", entry);
            return false;
        }
        self.tap_entry(entry, now);
        true
    }

    /// Back navigation from a detail page
    pub fn pop_route(&mut self) -> Option<Route> {
        self.navigation.pop()
    }

    pub fn presentation(&self, now: Duration) -> Presentation {
        Presentation {
            toolbar_icon_opacity: self.icon_opacity.value_at(now),
            menu_opacity: self.menu_opacity.value_at(now),
            menu_scale: self.menu_scale.value_at(now),
        }
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        !(self.icon_opacity.is_settled(now)
            && self.menu_opacity.is_settled(now)
            && self.menu_scale.is_settled(now))
    }

    pub fn phase(&self, now: Duration) -> MenuPhase {
        match (self.view.menu, self.is_animating(now)) {
            (MenuState::Open, true) => MenuPhase::Opening,
            (MenuState::Open, false) => MenuPhase::Open,
            (MenuState::Closed, true) => MenuPhase::Closing,
            (MenuState::Closed, false) => MenuPhase::Closed,
        }
    }

    /// Next time the controller needs a tick, if a timer is pending
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    fn set_menu(&mut self, menu: MenuState, now: Duration) {
        tracing::debug!("[MENU] {:?} -> {:?}", self.view.menu, menu);
        self.view.apply_menu(menu);
        self.icon_opacity
            .retarget(self.view.toolbar_icon_opacity, now, self.timing.opacity_duration);
        self.menu_opacity
            .retarget(self.view.menu_opacity, now, self.timing.opacity_duration);
        self.menu_scale.retarget(self.view.menu_scale, now);
    }
}
