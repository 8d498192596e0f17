//! Property-based tests for the chart core.
//!
//! Ensures the pixel↔time mapping and the brush/domain path hold their
//! invariants across random inputs.

use proptest::prelude::*;
use tacho_view::chart::{BrushSelection, DomainState, LinearScale};
use tacho_view::model::time::format_clock;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn scale_round_trips_within_tolerance(
        width in 0.0f64..10_000.0,
        frac in 0.0f64..=1.0,
    ) {
        let scale = LinearScale::new(width);
        let px = frac * width;
        let back = scale.apply(scale.invert(px));
        // A zero-width scale collapses everything to pixel 0.
        if width == 0.0 {
            prop_assert_eq!(back, 0.0);
        } else {
            prop_assert!((back - px).abs() < 1e-6 * width.max(1.0));
        }
    }

    #[test]
    fn scale_never_produces_negative_range(width in -10_000.0f64..10_000.0) {
        let scale = LinearScale::new(width);
        prop_assert!(scale.width() >= 0.0);
        prop_assert!(scale.apply(24.0) >= 0.0);
    }

    #[test]
    fn brush_bounds_stay_inside_strip(
        width in 0.0f64..5_000.0,
        presses in prop::collection::vec(-1_000.0f64..6_000.0, 1..20),
    ) {
        let mut brush = BrushSelection::new(width);
        brush.begin(presses[0]);
        for px in &presses[1..] {
            if let Some((p0, p1)) = brush.drag_to(*px) {
                prop_assert!(p0 >= 0.0 && p1 <= brush.scale().width());
                prop_assert!(p0 <= p1);
            }
        }
    }

    #[test]
    fn lower_clamp_only(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let mut state = DomainState::new();
        state.set_from_brush(Some((a, b)));
        let window = state.current();
        prop_assert_eq!(window.x0, a.max(0.0));
        // The upper bound is deliberately never clamped.
        prop_assert_eq!(window.x1, b);
    }

    #[test]
    fn none_report_is_idempotent(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let mut state = DomainState::new();
        state.set_from_brush(Some((a, b)));
        let before = state.current();
        state.set_from_brush(None);
        prop_assert_eq!(state.current(), before);
    }

    #[test]
    fn clock_format_is_well_formed(hours in -5.0f64..30.0) {
        let formatted = format_clock(hours);
        let (h, m) = formatted.split_once(':').expect("HH:MM shape");
        prop_assert!(h.len() >= 2);
        prop_assert_eq!(m.len(), 2);
        let minutes: u32 = m.parse().unwrap();
        prop_assert!(minutes < 60);
    }
}
