// File: crates/plot-core/tests/properties.rs
// Purpose: Property checks for the scaling pipeline (ranges, rounding, divisions, mapping).

use plot_core::{
    float_round, nice_range, range_xy, x_divisions, y_divisions, CoordinateMapper, Range, RectI32, SampleSeries,
};
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e6f64..1.0e6,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

proptest! {
    #[test]
    fn ranges_only_cover_finite_pairs(
        xs in prop::collection::vec(sample(), 0..64),
        ys in prop::collection::vec(sample(), 0..64),
    ) {
        let x = SampleSeries::from_vec(xs);
        let y = SampleSeries::from_vec(ys);
        let (xr, yr) = range_xy(&x, &y);
        let pairs: Vec<(f64, f64)> = x.iter().zip(y.iter())
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .collect();
        prop_assert_eq!(pairs.is_empty(), xr.is_empty());
        prop_assert_eq!(xr.is_empty(), yr.is_empty());
        for (a, b) in pairs {
            prop_assert!(xr.inside(a) && yr.inside(b));
        }
    }

    #[test]
    fn nice_range_bounds_are_round_and_ordered(
        lo in -1.0e5f64..1.0e5,
        span in 1.0e-3f64..1.0e5,
    ) {
        let nice = nice_range(Range::new(lo, lo + span));
        prop_assert!(nice.min <= nice.max);
        prop_assert_eq!(float_round(nice.min).value, nice.min);
        prop_assert_eq!(float_round(nice.max).value, nice.max);
    }

    #[test]
    fn divisions_stay_in_the_known_set(
        lo in -1.0e4f64..1.0e4,
        span in 1.0e-2f64..1.0e4,
        extent in 1i32..4000,
    ) {
        let x = x_divisions(lo, lo + span, extent);
        let y = y_divisions(lo, lo + span, extent);
        prop_assert!((1..=12).contains(&x), "x divisions {}", x);
        prop_assert!((2..=6).contains(&y), "y divisions {}", y);
    }

    #[test]
    fn mapper_round_trips_within_one_pixel(
        lo in -1.0e3f64..1.0e3,
        span in 1.0e-2f64..1.0e3,
        t in 0.0f64..=1.0,
        width in 10i32..2000,
        height in 10i32..2000,
    ) {
        let r = Range::new(lo, lo + span);
        let m = CoordinateMapper::new(r, r, RectI32::from_ltrb(70, 20, 70 + width, 20 + height))
            .expect("configured");
        let v = lo + span * t;
        let eps = span * 1e-9;
        prop_assert!((m.to_data_x(m.to_pixel_x(v)) - v).abs() <= m.x_scale().abs() + eps);
        prop_assert!((m.to_data_y(m.to_pixel_y(v)) - v).abs() <= m.y_scale().abs() + eps);
    }
}
