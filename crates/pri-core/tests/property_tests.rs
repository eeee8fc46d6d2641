//! Property-based tests for the timing and view-state invariants
//!
//! Uses proptest to drive debounce bursts, typewriter reveals, scroll offsets
//! and drawer transition sequences.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pri_core::animator::{debounce, Typewriter, DEFAULT_DEBOUNCE_WAIT};
use pri_core::view::{CloseTrigger, Drawer, ScrollChrome, ScrollTracker, SCROLL_THRESHOLD};
use pri_core::ManualScheduler;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Well-formed hero-like markup: plain text interleaved with complete tags
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::string::string_regex("[A-Za-zéôÉ' ]{1,8}").expect("valid regex"),
            1 => Just("<br>".to_string()),
            1 => Just("<span class='text-orange'>".to_string()),
            1 => Just("</span>".to_string()),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

#[derive(Debug, Clone, Copy)]
enum DrawerOp {
    Open,
    Close(CloseTrigger),
}

fn drawer_op_strategy() -> impl Strategy<Value = DrawerOp> {
    prop_oneof![
        2 => Just(DrawerOp::Open),
        1 => Just(DrawerOp::Close(CloseTrigger::CloseButton)),
        1 => Just(DrawerOp::Close(CloseTrigger::Backdrop)),
        1 => Just(DrawerOp::Close(CloseTrigger::Escape)),
        1 => Just(DrawerOp::Close(CloseTrigger::NavLink)),
        1 => Just(DrawerOp::Close(CloseTrigger::Anchor)),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A burst inside the window runs the action once, with the last arguments
    #[test]
    fn debounce_burst_runs_once_with_last_args(
        args in prop::collection::vec(any::<u32>(), 1..40),
        gaps in prop::collection::vec(0u64..15, 40)
    ) {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debounced = debounce(scheduler.clone(), DEFAULT_DEBOUNCE_WAIT, move |a: u32| {
            sink.borrow_mut().push(a)
        });

        for (arg, gap) in args.iter().zip(gaps.iter()) {
            debounced.call(*arg);
            scheduler.advance(Duration::from_millis(*gap));
        }
        scheduler.advance(DEFAULT_DEBOUNCE_WAIT);

        prop_assert_eq!(calls.borrow().clone(), vec![*args.last().unwrap()]);
    }

    /// No rendered prefix ever ends inside a tag
    #[test]
    fn typewriter_never_splits_a_tag(markup in markup_strategy()) {
        let mut writer = Typewriter::new(markup.clone());
        let mut last_position = 0;
        while writer.advance().is_some() {
            let shown = writer.revealed();
            let opens = shown.matches('<').count();
            let closes = shown.matches('>').count();
            prop_assert_eq!(opens, closes, "partial tag in {:?}", shown);
            prop_assert!(writer.position() > last_position);
            last_position = writer.position();
        }
        prop_assert_eq!(writer.revealed(), markup.as_str());
    }

    /// Units always concatenate back to the input, whatever it contains
    #[test]
    fn typewriter_units_cover_input(markup in ".{0,80}") {
        let mut writer = Typewriter::new(markup.clone());
        let mut rebuilt = String::new();
        while let Some(unit) = writer.advance() {
            prop_assert!(!unit.is_empty());
            rebuilt.push_str(unit);
        }
        prop_assert!(writer.is_done());
        prop_assert_eq!(rebuilt, markup);
    }

    /// Header and top button agree and follow the strict threshold
    #[test]
    fn scroll_chrome_follows_threshold(offset in -500.0f64..20_000.0) {
        let chrome = ScrollChrome::from_offset(offset);
        prop_assert_eq!(chrome.header_elevated, chrome.top_button_visible);
        prop_assert_eq!(chrome.header_elevated, offset > SCROLL_THRESHOLD);
    }

    /// The tracker only depends on the latest offset
    #[test]
    fn scroll_tracker_is_order_independent(
        offsets in prop::collection::vec(0.0f64..5_000.0, 1..30)
    ) {
        let mut tracker = ScrollTracker::new();
        for offset in &offsets {
            tracker.on_scroll(*offset);
        }
        prop_assert_eq!(
            tracker.chrome(),
            ScrollChrome::from_offset(*offsets.last().unwrap())
        );
    }

    /// Markers always match the drawer state, whatever the path taken
    #[test]
    fn drawer_markers_track_state(ops in prop::collection::vec(drawer_op_strategy(), 0..40)) {
        let mut drawer = Drawer::new();
        for op in ops {
            match op {
                DrawerOp::Open => {
                    drawer.open();
                    let m = drawer.markers();
                    prop_assert!(m.drawer_open && m.backdrop_visible);
                    prop_assert!(m.body_locked && m.hamburger_toggled);
                }
                DrawerOp::Close(trigger) => {
                    drawer.close(trigger);
                    let m = drawer.markers();
                    prop_assert!(!m.drawer_open && !m.backdrop_visible);
                    prop_assert!(!m.body_locked && !m.hamburger_toggled);
                }
            }
        }
    }
}
