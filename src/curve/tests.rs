use super::*;
use crate::pump::{PumpCollection, PumpRecord, PumpSpec};

fn pump(spec: PumpSpec) -> PumpRecord {
    let mut pumps = PumpCollection::new();
    pumps.add(&spec).unwrap().clone()
}

#[test]
fn test_sample_length_and_corners() {
    let p = pump(PumpSpec::new("P", 14.5, 7000.0).min_height(2.3).min_flow(450.0));
    let points = sample(&p, 20);

    assert_eq!(points.len(), 21);
    assert_eq!(points[0], CurvePoint { flow: 450.0, height: 14.5 });
    assert_eq!(points[20], CurvePoint { flow: 7000.0, height: 2.3 });
}

#[test]
fn test_sample_midpoint() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0));
    let points = sample(&p, DEFAULT_STEP_COUNT);

    let mid = points[10];
    assert_eq!(mid.flow, 2500.0);
    assert!((mid.height - (10.0 - 10.0 * 0.5f64.powf(1.5))).abs() < 1e-12);
    assert!((mid.height - 6.465).abs() < 1e-3);
}

#[test]
fn test_sample_is_monotonic() {
    let p = pump(PumpSpec::new("P", 12.0, 3000.0).min_height(1.0));
    let points = sample(&p, 50);

    for pair in points.windows(2) {
        assert!(pair[1].flow > pair[0].flow);
        assert!(pair[1].height < pair[0].height);
    }
}

#[test]
fn test_sample_degenerate_collapses() {
    let p = pump(PumpSpec::new("flat", 4.0, 100.0).min_height(4.0).min_flow(100.0));
    let points = sample(&p, 20);

    assert_eq!(points.len(), 21);
    assert!(points.iter().all(|pt| *pt == CurvePoint { flow: 100.0, height: 4.0 }));
}

#[test]
fn test_sample_zero_steps_treated_as_one() {
    let p = pump(PumpSpec::new("P", 10.0, 100.0));
    assert_eq!(sample(&p, 0).len(), 2);
}

#[test]
fn test_sampler_rejects_zero_steps() {
    assert_eq!(Sampler::new().with_step_count(0), Err(CurveError::ZeroSteps));
    assert_eq!(Sampler::new().with_step_count(5).unwrap().step_count(), 5);
}

#[test]
fn test_out_of_range_heights() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0).min_height(2.0));

    for strategy in [Strategy::Nearest, Strategy::Linear] {
        assert_eq!(flow_at_height(&p, 1.99, strategy), FlowCell::OutOfRange);
        assert_eq!(flow_at_height(&p, 10.01, strategy), FlowCell::OutOfRange);
        assert_eq!(flow_at_height(&p, f64::NAN, strategy), FlowCell::OutOfRange);
    }
}

#[test]
fn test_range_ends_map_to_flow_corners() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0).min_height(2.0).min_flow(300.0));

    for strategy in [Strategy::Nearest, Strategy::Linear] {
        let at_min = flow_at_height(&p, 2.0, strategy).value().unwrap();
        let at_max = flow_at_height(&p, 10.0, strategy).value().unwrap();
        assert!((at_min - 5000.0).abs() < 1e-9, "{}: {}", strategy, at_min);
        assert!((at_max - 300.0).abs() < 1e-9, "{}: {}", strategy, at_max);
    }
}

#[test]
fn test_nearest_picks_closest_sample() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0));
    let points = sample(&p, 20);

    // points[10] has height ~6.4645
    let cell = flow_at_height(&p, 6.4, Strategy::Nearest);
    assert_eq!(cell, FlowCell::Flow(points[10].flow));
}

#[test]
fn test_nearest_ties_prefer_first_sample() {
    let points = [
        CurvePoint { flow: 1.0, height: 4.0 },
        CurvePoint { flow: 2.0, height: 2.0 },
        CurvePoint { flow: 3.0, height: 2.0 },
    ];
    assert_eq!(nearest_flow(&points, 3.0), Some(1.0));
    assert_eq!(nearest_flow(&points, 2.0), Some(2.0));
    assert_eq!(nearest_flow(&[], 2.0), None);
}

#[test]
fn test_linear_midpoint() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0));
    assert_eq!(flow_at_height(&p, 5.0, Strategy::Linear), FlowCell::Flow(2500.0));
}

#[test]
fn test_linear_guards_flat_head_range() {
    let p = pump(PumpSpec::new("flat", 4.0, 900.0).min_height(4.0).min_flow(100.0));

    assert_eq!(linear_flow(p.envelope(), 4.0), None);
    assert_eq!(flow_at_height(&p, 4.0, Strategy::Linear), FlowCell::OutOfRange);
    // nearest still answers: every sample sits at 4.0, the first has min_flow
    assert_eq!(flow_at_height(&p, 4.0, Strategy::Nearest), FlowCell::Flow(100.0));
}

#[test]
fn test_strategies_diverge_when_coarse() {
    let p = pump(PumpSpec::new("P", 10.0, 5000.0));
    let coarse = Interpolator::new(Strategy::Nearest)
        .with_sampler(Sampler::new().with_step_count(2).unwrap());

    // samples at heights 10.0, ~6.46 and 0.0
    let nearest = coarse.flow_at_height(&p, 8.0).value().unwrap();
    let linear = flow_at_height(&p, 8.0, Strategy::Linear).value().unwrap();
    assert_eq!(nearest, 2500.0);
    assert!((linear - 1000.0).abs() < 1e-9);
}

#[test]
fn test_row_matches_single_lookups() {
    let p = pump(PumpSpec::new("P", 8.0, 2000.0).min_height(3.0));
    let heights = [2.0, 3.0, 4.5, 8.0, 9.0];
    let interp = Interpolator::new(Strategy::Nearest);

    let row = interp.row(&p, &heights);
    let singles: Vec<FlowCell> = heights.iter().map(|&h| interp.flow_at_height(&p, h)).collect();
    assert_eq!(row, singles);
    assert!(row[0].is_out_of_range());
    assert!(row[4].is_out_of_range());
}

#[test]
fn test_flow_cell_display() {
    assert_eq!(FlowCell::Flow(2500.0).to_string(), "2500.0");
    assert_eq!(FlowCell::Flow(1234.56).to_string(), "1234.6");
    assert_eq!(format!("{:.2}", FlowCell::Flow(1.0)), "1.00");
    assert_eq!(FlowCell::OutOfRange.to_string(), OUT_OF_RANGE_GLYPH);
}

#[test]
fn test_flow_cell_serializes_null() {
    let json = serde_json::to_string(&[FlowCell::Flow(1.5), FlowCell::OutOfRange]).unwrap();
    assert_eq!(json, "[1.5,null]");
}

#[test]
fn test_strategy_parsing() {
    assert_eq!("Nearest".parse::<Strategy>().unwrap(), Strategy::Nearest);
    assert_eq!("linear".parse::<Strategy>().unwrap(), Strategy::Linear);
    assert!("cubic".parse::<Strategy>().is_err());
    assert_eq!(Strategy::default(), Strategy::Nearest);
}

#[test]
fn test_buckets_span_all_pumps() {
    let pumps = [
        pump(PumpSpec::new("A", 5.0, 100.0).min_height(2.0)),
        pump(PumpSpec::new("B", 8.0, 100.0).min_height(3.0)),
    ];
    let buckets = height_buckets(&pumps, DEFAULT_BUCKET_STEP).unwrap();

    assert_eq!(buckets.len(), 13);
    assert_eq!(buckets[0], 2.0);
    assert_eq!(buckets[1], 2.5);
    assert_eq!(buckets[12], 8.0);
    assert!(buckets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_buckets_include_unaligned_top() {
    let pumps = [pump(PumpSpec::new("A", 5.2, 100.0))];
    let buckets = height_buckets(&pumps, 0.5).unwrap();

    assert_eq!(buckets.first(), Some(&0.0));
    assert_eq!(buckets.last(), Some(&5.2));
    assert_eq!(buckets[buckets.len() - 2], 5.0);
}

#[test]
fn test_buckets_no_float_drift() {
    let pumps = [pump(PumpSpec::new("A", 1.0, 100.0))];
    let buckets = height_buckets(&pumps, 0.1).unwrap();

    assert_eq!(buckets.len(), 11);
    assert_eq!(buckets[3], 0.3);
    assert_eq!(buckets[10], 1.0);
}

#[test]
fn test_buckets_empty_and_invalid() {
    let none: [PumpRecord; 0] = [];
    assert!(height_buckets(&none, 0.5).unwrap().is_empty());

    let pumps = [pump(PumpSpec::new("A", 5.0, 100.0))];
    assert_eq!(
        height_buckets(&pumps, 0.0),
        Err(CurveError::InvalidBucketStep(0.0))
    );
    assert!(height_buckets(&pumps, f64::NAN).is_err());
    assert!(matches!(
        height_buckets(&pumps, 1e-6),
        Err(CurveError::TooManyBuckets { .. })
    ));
}

#[test]
fn test_buckets_single_point_range() {
    let pumps = [pump(PumpSpec::new("flat", 4.0, 100.0).min_height(4.0))];
    assert_eq!(height_buckets(&pumps, 0.5).unwrap(), vec![4.0]);
}
