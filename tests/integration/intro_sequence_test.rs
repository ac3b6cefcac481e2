//! Scripted intro: open, tap Blank, navigate, reset tint

use pretty_assertions::assert_eq;
use programmatic_menu::egui_app::menu::{MenuController, MenuPhase, MenuState, MenuTiming, Route};
use programmatic_menu::egui_app::{CellTint, MenuEntry};

use crate::common::*;

#[test]
fn test_scripted_sequence_timeline() {
    let mut controller = MenuController::new(MenuTiming::default());
    assert!(controller.on_mount(at(0.0)));
    controller.tick(at(0.0));

    // T=0: closed
    let closed = controller.presentation(at(0.0));
    assert_eq!(closed.menu_opacity, 0.0);
    assert_eq!(closed.menu_scale, 0.2);
    assert_eq!(closed.toolbar_icon_opacity, 1.0);

    run_frames(&mut controller, at(0.0), at(1.49));
    assert_eq!(controller.view().menu, MenuState::Closed);

    // T=1.5: open
    controller.tick(at(1.5));
    assert_eq!(controller.view().menu, MenuState::Open);
    assert_eq!(controller.view().menu_opacity, 1.0);
    assert_eq!(controller.view().menu_scale, 1.2);
    assert_eq!(controller.phase(at(1.5)), MenuPhase::Opening);

    run_frames(&mut controller, at(1.5), at(2.9));
    let open = controller.presentation(at(2.9));
    assert_eq!(open.menu_opacity, 1.0);
    assert_approx_eq!(open.menu_scale, 1.2);
    assert_approx_eq!(open.toolbar_icon_opacity, 0.4);
    assert_eq!(controller.phase(at(2.9)), MenuPhase::Open);

    // T=3.0: the scripted tap
    controller.tick(at(3.0));
    assert_eq!(controller.view().cell_tint, CellTint::Tapped);
    assert_eq!(controller.view().tapped_entry, Some(MenuEntry::Blank));
    assert_eq!(controller.view().menu, MenuState::Closed);
    assert!(controller.navigation().is_empty());

    // Next tick: navigation
    controller.tick(at(3.0) + FRAME);
    assert_eq!(controller.navigation().routes(), &[Route(1)]);

    run_frames(&mut controller, at(3.0) + FRAME, at(3.49));
    assert_eq!(controller.view().cell_tint, CellTint::Tapped);

    // T=3.5: tint reset
    controller.tick(at(3.5));
    assert_eq!(controller.view().cell_tint, CellTint::Untapped);
    assert_eq!(controller.next_wakeup(), None);
    assert_eq!(controller.phase(at(4.5)), MenuPhase::Closed);
}

#[test]
fn test_intro_runs_once_across_remounts() {
    let mut controller = MenuController::default();
    let mut fired = 0;

    assert!(controller.on_mount(at(0.0)));
    for step in 1..=100 {
        let now = at(step as f32 * 0.1);
        // Re-layout fires the mount event again every frame
        assert!(!controller.on_mount(now));
        fired += controller.tick(now);
    }

    // open, tap, push, reset
    assert_eq!(fired, 4);
    assert_eq!(controller.navigation().len(), 1);
}

#[test]
fn test_late_frame_fires_in_order() {
    let mut controller = MenuController::default();
    controller.on_mount(at(0.0));

    // The window was stalled past both scripted deadlines
    assert_eq!(controller.tick(at(4.0)), 2);
    assert_eq!(controller.view().menu, MenuState::Closed);
    assert_eq!(controller.view().cell_tint, CellTint::Tapped);

    controller.tick(at(4.0) + FRAME);
    assert_eq!(controller.navigation().top(), Some(Route(1)));
}

#[test]
fn test_unmount_mid_sequence() {
    let mut controller = MenuController::default();
    controller.on_mount(at(0.0));
    run_frames(&mut controller, at(0.0), at(2.0));
    assert_eq!(controller.view().menu, MenuState::Open);

    controller.on_unmount();
    assert_eq!(controller.tick(at(10.0)), 0);
    assert_eq!(controller.view().menu, MenuState::Open);
    assert_eq!(controller.view().cell_tint, CellTint::Untapped);
    assert!(controller.navigation().is_empty());
    assert!(!controller.is_intro_running());
}
