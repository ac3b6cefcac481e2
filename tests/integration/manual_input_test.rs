//! User taps on the trigger and the rows

use pretty_assertions::assert_eq;
use programmatic_menu::egui_app::menu::{MenuController, MenuState, Route};
use programmatic_menu::egui_app::{CellTint, MenuEntry};

use crate::common::*;

fn after_intro() -> MenuController {
    let mut controller = MenuController::default();
    controller.on_mount(at(0.0));
    run_frames(&mut controller, at(0.0), at(4.0));
    controller.pop_route();
    controller
}

#[test]
fn test_trigger_toggles_without_navigation() {
    let mut controller = after_intro();
    assert!(controller.navigation().is_empty());

    assert!(controller.trigger_tapped(at(10.0)));
    assert_eq!(controller.view().menu, MenuState::Open);

    assert!(controller.trigger_tapped(at(11.0)));
    assert_eq!(controller.view().menu, MenuState::Closed);

    run_frames(&mut controller, at(11.0), at(12.0));
    assert!(controller.navigation().is_empty());
    assert_eq!(controller.view().cell_tint, CellTint::Untapped);
}

#[test]
fn test_input_ignored_while_scripted() {
    let mut controller = MenuController::default();
    controller.on_mount(at(0.0));

    assert!(!controller.trigger_tapped(at(1.0)));
    controller.tick(at(1.5));
    assert!(!controller.trigger_tapped(at(2.0)));
    assert!(!controller.entry_tapped(MenuEntry::Random, at(2.0)));
    assert_eq!(controller.view().menu, MenuState::Open);
    assert_eq!(controller.view().cell_tint, CellTint::Untapped);

    run_frames(&mut controller, at(1.5), at(3.5));
    assert_eq!(controller.navigation().routes(), &[Route(1)]);
}

#[test]
fn test_tapping_random_row() {
    let mut controller = after_intro();
    controller.trigger_tapped(at(10.0));

    assert!(controller.entry_tapped(MenuEntry::Random, at(10.5)));
    assert_eq!(controller.view().tint_of(MenuEntry::Random), CellTint::Tapped);
    assert_eq!(controller.view().tint_of(MenuEntry::Blank), CellTint::Untapped);
    assert_eq!(controller.view().menu, MenuState::Closed);

    controller.tick(at(10.5) + FRAME);
    assert_eq!(controller.navigation().top(), Some(MenuEntry::Random.route()));
}

#[test]
fn test_toggle_mid_animation_reverses_smoothly() {
    let mut controller = after_intro();
    controller.trigger_tapped(at(10.0));
    let mid = controller.presentation(at(10.1));

    controller.trigger_tapped(at(10.1));
    let reversed = controller.presentation(at(10.1));
    assert_approx_eq!(reversed.menu_opacity, mid.menu_opacity);
    assert_approx_eq!(reversed.menu_scale, mid.menu_scale);

    let settled = controller.presentation(at(12.0));
    assert_eq!(settled.menu_opacity, 0.0);
    assert_eq!(settled.menu_scale, 0.2);
    assert_eq!(settled.toolbar_icon_opacity, 1.0);
}
