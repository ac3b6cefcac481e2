//! Property-based tests for the menu controller
//!
//! Uses proptest to generate toggle and tap timelines and verify the
//! invariants hold at every sampled instant.

use std::time::Duration;

use proptest::prelude::*;
use programmatic_menu::egui_app::menu::{MenuController, MenuState};
use programmatic_menu::egui_app::{CellTint, MenuEntry};

fn entry() -> impl Strategy<Value = MenuEntry> {
    prop_oneof![
        Just(MenuEntry::Blank),
        Just(MenuEntry::Prompt),
        Just(MenuEntry::Random),
    ]
}

proptest! {
    #[test]
    fn test_toggle_parity(gaps in prop::collection::vec(0u64..600, 0..20)) {
        let mut controller = MenuController::default();
        let mut now = Duration::ZERO;
        for gap in &gaps {
            now += Duration::from_millis(*gap);
            controller.toggle_menu(now);
        }
        let expected = if gaps.len() % 2 == 1 { MenuState::Open } else { MenuState::Closed };
        prop_assert_eq!(controller.view().menu, expected);
    }

    #[test]
    fn test_two_toggles_restore_targets(
        prefix in 0usize..5,
        start in 0u64..10_000,
        gap in 0u64..1_000,
    ) {
        let mut controller = MenuController::default();
        for i in 0..prefix {
            controller.toggle_menu(Duration::from_millis(i as u64));
        }
        let before = controller.view().clone();

        let first = Duration::from_millis(start + 10);
        controller.toggle_menu(first);
        prop_assert_eq!(
            controller.view().menu_opacity,
            1.0 - before.menu_opacity
        );
        controller.toggle_menu(first + Duration::from_millis(gap));
        prop_assert_eq!(controller.view(), &before);
    }

    #[test]
    fn test_opacities_stay_in_range(
        gaps in prop::collection::vec(1u64..400, 1..15),
        samples in prop::collection::vec(0u64..8_000, 1..40),
    ) {
        let mut controller = MenuController::default();
        let mut now = Duration::ZERO;
        for gap in &gaps {
            now += Duration::from_millis(*gap);
            controller.toggle_menu(now);
        }
        for sample in samples {
            let p = controller.presentation(Duration::from_millis(sample));
            prop_assert!((0.0..=1.0).contains(&p.menu_opacity));
            prop_assert!(p.toolbar_icon_opacity >= 0.4 - 1e-5 && p.toolbar_icon_opacity <= 1.0);
            prop_assert!(p.menu_scale > 0.0 && p.menu_scale < 1.3);
        }
    }

    #[test]
    fn test_tint_lasts_at_least_half_a_second(
        tapped in entry(),
        start in 0u64..100_000,
        early in 0u64..500,
    ) {
        let mut controller = MenuController::default();
        let tap_at = Duration::from_millis(start);
        controller.tap_entry(tapped, tap_at);
        prop_assert_eq!(controller.view().cell_tint, CellTint::Tapped);

        controller.tick(tap_at + Duration::from_millis(early));
        prop_assert_eq!(controller.view().cell_tint, CellTint::Tapped);
        prop_assert_eq!(controller.view().tint_of(tapped), CellTint::Tapped);

        controller.tick(tap_at + Duration::from_millis(500));
        prop_assert_eq!(controller.view().cell_tint, CellTint::Untapped);
        prop_assert_eq!(controller.navigation().top(), Some(tapped.route()));
    }
}
