//! Property-based invariant tests for section paging.
//!
//! Verifies:
//! 1. navigate_to(i) leaves index == i and exactly indicator i active
//! 2. navigate_to(current) is idempotent on indicator state
//! 3. While locked, wheel and key input never change the index
//! 4. Desktop: offset k·W maps back to section k
//! 5. Any event sequence keeps index in range and in sync with the indicator
//! 6. Crossing the breakpoint re-navigates to the same section

use core::time::Duration;

use folio_core::config::PagingConfig;
use folio_core::host::{Axis, PagingHost};
use folio_core::input::{IndicatorGroup, KeyCode, NavInput, ScrollSource, WheelInput};
use folio_core::paging::PagingController;
use folio_core::sim::SimulatedPage;
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_width() -> impl Strategy<Value = f64> {
    prop_oneof![(320u32..=1000).prop_map(f64::from), (1001u32..=3840).prop_map(f64::from)]
}

fn arb_input(sections: usize) -> impl Strategy<Value = NavInput> {
    prop_oneof![
        (-200i32..=200, -200i32..=200)
            .prop_map(|(dx, dy)| NavInput::Wheel(WheelInput::new(dx.into(), dy.into()))),
        prop_oneof![Just(KeyCode::Left), Just(KeyCode::Right), Just(KeyCode::Up)]
            .prop_map(|key| NavInput::Key { key }),
        (0..sections, any::<bool>()).prop_map(|(index, link)| NavInput::IndicatorClick {
            group: if link {
                IndicatorGroup::Link
            } else {
                IndicatorGroup::Dot
            },
            index,
        }),
        Just(NavInput::Scroll {
            source: ScrollSource::Container
        }),
        Just(NavInput::ScrollEnd {
            source: ScrollSource::Window
        }),
        Just(NavInput::Resize),
    ]
}

type Step = (NavInput, u64, Option<f64>, bool);

/// Section count plus a stream of (input, ms since previous, optional
/// width change, settle pending scroll first).
fn arb_stream() -> impl Strategy<Value = (usize, Vec<Step>)> {
    (1usize..8).prop_flat_map(|sections| {
        let step = (
            arb_input(sections),
            0u64..600,
            prop::option::of(arb_width()),
            any::<bool>(),
        );
        (Just(sections), prop::collection::vec(step, 1..60))
    })
}

fn setup(sections: usize, width: f64) -> (PagingController, SimulatedPage) {
    let mut page = SimulatedPage::new(sections, width);
    let mut ctl = PagingController::new(sections, PagingConfig::default(), width);
    ctl.attach(&mut page);
    (ctl, page)
}

proptest! {
    #[test]
    fn navigate_marks_exactly_target(sections in 1usize..12, pick in any::<prop::sample::Index>(), width in arb_width()) {
        let (mut ctl, mut page) = setup(sections, width);
        let target = pick.index(sections);
        ctl.navigate_to(target, &mut page, Duration::ZERO);
        prop_assert_eq!(ctl.index(), target);
        prop_assert_eq!(page.active_links(), vec![target]);
        prop_assert_eq!(page.active_dots(), vec![target]);
    }

    #[test]
    fn navigate_to_current_is_idempotent(sections in 1usize..12, pick in any::<prop::sample::Index>()) {
        let (mut ctl, mut page) = setup(sections, 1440.0);
        let target = pick.index(sections);
        ctl.navigate_to(target, &mut page, Duration::ZERO);
        let before = (page.active_links(), page.active_dots());
        ctl.navigate_to(target, &mut page, Duration::from_secs(5));
        prop_assert_eq!((page.active_links(), page.active_dots()), before);
        prop_assert_eq!(ctl.index(), target);
    }

    #[test]
    fn locked_wheel_and_keys_never_move(
        sections in 2usize..10,
        dx in -500i32..=500,
        dy in -500i32..=500,
        elapsed_ms in 0u64..1000,
        right in any::<bool>(),
    ) {
        let (mut ctl, mut page) = setup(sections, 1920.0);
        ctl.navigate_to(1, &mut page, Duration::ZERO);
        let now = Duration::from_millis(elapsed_ms);

        ctl.on_wheel(WheelInput::new(dx.into(), dy.into()), &mut page, now);
        prop_assert_eq!(ctl.index(), 1);

        let key = if right { KeyCode::Right } else { KeyCode::Left };
        ctl.on_key_down(&key, &mut page, now);
        prop_assert_eq!(ctl.index(), 1);
        prop_assert_eq!(page.scroll_requests().len(), 1);
    }

    #[test]
    fn desktop_exact_multiples_round_trip(sections in 1usize..20, pick in any::<prop::sample::Index>(), width in 1001u32..=3840) {
        let width = f64::from(width);
        let (ctl, mut page) = setup(sections, width);
        let k = pick.index(sections);
        page.set_scroll(Axis::Horizontal, k as f64 * width);
        prop_assert_eq!(ctl.compute_current_section(&page), k);
    }

    #[test]
    fn arbitrary_event_streams_keep_index_and_indicator_in_sync((sections, events) in arb_stream()) {
        let (mut ctl, mut page) = setup(sections, 1440.0);
        let mut now = Duration::ZERO;
        for (input, dt, resize_to, settle) in events {
            now += Duration::from_millis(dt);
            if let Some(width) = resize_to {
                page.set_width(width);
            }
            if settle {
                page.settle();
            }
            ctl.dispatch(&input, &mut page, now);
            prop_assert!(ctl.index() < sections);
            prop_assert_eq!(page.active_indicator(), Some(ctl.index()));
        }
    }

    #[test]
    fn breakpoint_crossing_preserves_section(sections in 1usize..10, pick in any::<prop::sample::Index>(), to_mobile in any::<bool>()) {
        let start_width = if to_mobile { 1440.0 } else { 600.0 };
        let (mut ctl, mut page) = setup(sections, start_width);
        let target = pick.index(sections);
        ctl.navigate_to(target, &mut page, Duration::ZERO);
        let before_mode = ctl.view_mode();

        page.set_width(if to_mobile { 600.0 } else { 1440.0 });
        let renavigated = ctl.on_resize(&mut page, Duration::from_secs(2));
        prop_assert_ne!(ctl.view_mode(), before_mode);
        prop_assert_eq!(renavigated, Some(target));
        prop_assert_eq!(ctl.index(), target);
        let expected = if to_mobile {
            page.section_top(target)
        } else {
            target as f64 * 1440.0
        };
        prop_assert_eq!(page.last_scroll_request().map(|r| r.offset), Some(expected));
    }
}
