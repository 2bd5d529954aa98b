//! Property tests for curve sampling and height lookup

use proptest::prelude::*;
use pumpcurve::curve::{height_buckets, sample, FlowCell, Interpolator, Strategy as Lookup};
use pumpcurve::pump::{PumpCollection, PumpSpec};

/// Valid envelope: (max_height, max_flow, min_height, min_flow)
fn envelope() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (0.0f64..50.0, 0.0f64..20_000.0, 0.0f64..1.0, 0.0f64..1.0).prop_map(
        |(min_h, min_f, h_frac, f_frac)| {
            let max_h = min_h + h_frac * 50.0 + 0.5;
            let max_f = min_f + f_frac * 20_000.0;
            (max_h, max_f, min_h, min_f)
        },
    )
}

fn collection(max_h: f64, max_f: f64, min_h: f64, min_f: f64) -> PumpCollection {
    let mut pumps = PumpCollection::new();
    pumps
        .add(
            &PumpSpec::new("p", max_h, max_f)
                .min_height(min_h)
                .min_flow(min_f),
        )
        .unwrap();
    pumps
}

proptest! {
    #[test]
    fn test_sample_endpoints_and_length(
        (max_h, max_f, min_h, min_f) in envelope(),
        steps in 1usize..200,
    ) {
        let pumps = collection(max_h, max_f, min_h, min_f);
        let pump = pumps.iter().next().unwrap();
        let points = sample(pump, steps);

        prop_assert_eq!(points.len(), steps + 1);
        prop_assert_eq!(points[0].flow, min_f);
        prop_assert_eq!(points[0].height, max_h);
        prop_assert_eq!(points[steps].flow, max_f);
        prop_assert_eq!(points[steps].height, min_h);

        for p in &points {
            prop_assert!(p.flow >= min_f - 1e-9 && p.flow <= max_f + 1e-9);
            prop_assert!(p.height >= min_h - 1e-9 && p.height <= max_h + 1e-9);
        }
        // flow rises while head falls
        for w in points.windows(2) {
            prop_assert!(w[1].flow >= w[0].flow - 1e-9);
            prop_assert!(w[1].height <= w[0].height + 1e-9);
        }
    }

    #[test]
    fn test_sample_is_deterministic((max_h, max_f, min_h, min_f) in envelope()) {
        let pumps = collection(max_h, max_f, min_h, min_f);
        let pump = pumps.iter().next().unwrap();
        prop_assert_eq!(sample(pump, 20), sample(pump, 20));
    }

    #[test]
    fn test_out_of_range_outside_head_range(
        (max_h, max_f, min_h, min_f) in envelope(),
        below in 0.001f64..100.0,
        above in 0.001f64..100.0,
    ) {
        let pumps = collection(max_h, max_f, min_h, min_f);
        let pump = pumps.iter().next().unwrap();

        for strategy in [Lookup::Nearest, Lookup::Linear] {
            let lookup = Interpolator::new(strategy);
            prop_assert_eq!(lookup.flow_at_height(pump, max_h + above), FlowCell::OutOfRange);
            prop_assert_eq!(lookup.flow_at_height(pump, min_h - below), FlowCell::OutOfRange);
        }
    }

    #[test]
    fn test_range_ends_map_to_flow_corners((max_h, max_f, min_h, min_f) in envelope()) {
        let pumps = collection(max_h, max_f, min_h, min_f);
        let pump = pumps.iter().next().unwrap();

        for strategy in [Lookup::Nearest, Lookup::Linear] {
            let lookup = Interpolator::new(strategy);
            let top = lookup.flow_at_height(pump, max_h).value().unwrap();
            let bottom = lookup.flow_at_height(pump, min_h).value().unwrap();
            prop_assert!((top - min_f).abs() < 1e-6);
            prop_assert!((bottom - max_f).abs() < 1e-6);
        }
    }

    #[test]
    fn test_buckets_cover_range(
        (max_h, max_f, min_h, min_f) in envelope(),
        step in 0.1f64..5.0,
    ) {
        let pumps = collection(max_h, max_f, min_h, min_f);
        let buckets = height_buckets(&pumps, step).unwrap();

        prop_assert!((buckets[0] - min_h).abs() < 1e-9);
        prop_assert!((buckets[buckets.len() - 1] - max_h).abs() < 1e-9);
        for w in buckets.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }
}
