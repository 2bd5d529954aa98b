//! # Pump Input Checks
//!
//! Examines pump specs before they are added to a collection and reports
//! every problem at once, instead of stopping at the first invalid entry the
//! way [`crate::pump::PumpCollection::from_specs`] does.
//!
//! Failures are entries that would be rejected (empty name, negative or
//! non-finite numbers, a maximum below its minimum). Warnings are entries that
//! are accepted but likely mistaken (flat ranges, repeated names, a requested
//! color already requested by an earlier entry).
//!
//! ```rust
//! use pumpcurve::pump::PumpSpec;
//! use pumpcurve::validator::{check_pumps, Verdict};
//!
//! let specs = vec![PumpSpec::new("1/3 cv", 10.0, 5000.0)];
//! let report = check_pumps(&specs, "inline");
//! assert_eq!(report.verdict(), Verdict::Passed);
//! ```

use std::collections::HashMap;

use crate::pump::{Color, PumpSpec};

mod report;

pub use report::{CheckReport, CheckStatus, PumpCheck, Verdict};

fn check_numbers(report: &mut CheckReport, subject: &str, spec: &PumpSpec) {
    let fields = [
        ("max_height", Some(spec.max_height)),
        ("max_flow", Some(spec.max_flow)),
        ("min_height", spec.min_height),
        ("min_flow", spec.min_flow),
    ];

    let problems: Vec<String> = fields
        .iter()
        .filter_map(|(field, value)| {
            let v = (*value)?;
            if !v.is_finite() {
                Some(format!("{} is not a finite number", field))
            } else if v < 0.0 {
                Some(format!("{} is negative ({})", field, v))
            } else {
                None
            }
        })
        .collect();

    if problems.is_empty() {
        report.add_check(PumpCheck::ok(subject, "numeric fields"));
    } else {
        report.add_check(PumpCheck::failed(subject, "numeric fields", problems.join(", ")));
    }
}

fn check_range(report: &mut CheckReport, subject: &str, what: &str, max: f64, min: f64) {
    let name = format!("{} range", what);
    if max < min {
        report.add_check(PumpCheck::failed(
            subject,
            name,
            format!("maximum {} is below minimum {}", max, min),
        ));
    } else if max == min {
        report.add_check(PumpCheck::warning(
            subject,
            name,
            format!("flat range at {}", max),
        ));
    } else {
        report.add_check(PumpCheck::ok(subject, name));
    }
}

/// Check every spec and collect the results in one report
pub fn check_pumps(specs: &[PumpSpec], source: &str) -> CheckReport {
    let mut report = CheckReport::new(source);
    report.pump_count = specs.len();

    if specs.is_empty() {
        report.add_check(PumpCheck::warning(
            source,
            "pump list",
            "no pumps defined, nothing will be rendered",
        ));
        return report;
    }

    let mut seen_names: HashMap<&str, usize> = HashMap::new();
    let mut seen_colors: HashMap<Color, usize> = HashMap::new();

    for (idx, spec) in specs.iter().enumerate() {
        let position = idx + 1;
        let name = spec.name.trim();
        let subject = format!("#{} \"{}\"", position, name);

        if name.is_empty() {
            report.add_check(PumpCheck::failed(&subject, "name", "name must not be empty"));
        } else if let Some(first) = seen_names.get(name) {
            report.add_check(PumpCheck::warning(
                &subject,
                "name",
                format!("same name as #{}", first),
            ));
        } else {
            seen_names.insert(name, position);
            report.add_check(PumpCheck::ok(&subject, "name"));
        }

        check_numbers(&mut report, &subject, spec);

        let env = spec.envelope();
        check_range(&mut report, &subject, "head", env.max_height, env.min_height);
        check_range(&mut report, &subject, "flow", env.max_flow, env.min_flow);

        if let Some(color) = spec.color {
            match seen_colors.get(&color) {
                Some(first) => report.add_check(PumpCheck::warning(
                    &subject,
                    "color",
                    format!(
                        "{} already requested by #{}, a fallback will be assigned",
                        color, first
                    ),
                )),
                None => {
                    seen_colors.insert(color, position);
                    report.add_check(PumpCheck::ok(&subject, "color"));
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes() {
        let specs = vec![
            PumpSpec::new("A", 10.0, 5000.0),
            PumpSpec::new("B", 14.0, 7000.0).min_height(2.0).min_flow(100.0),
        ];
        let report = check_pumps(&specs, "pumps.toml");

        assert_eq!(report.pump_count, 2);
        assert_eq!(report.verdict(), Verdict::Passed);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(report.success_count(), 8);
    }

    #[test]
    fn test_failures_are_all_reported() {
        let specs = vec![
            PumpSpec::new("", -1.0, 5000.0),
            PumpSpec::new("B", 5.0, f64::INFINITY).min_height(8.0),
        ];
        let report = check_pumps(&specs, "pumps.toml");

        assert_eq!(report.verdict(), Verdict::Failed);
        // #1: name, numeric, head range; #2: numeric, head range
        assert_eq!(report.failure_count(), 5);
    }

    #[test]
    fn test_warnings() {
        let red = Color::rgb(255, 0, 0);
        let specs = vec![
            PumpSpec::new("A", 10.0, 5000.0).color(red),
            PumpSpec::new("A", 4.0, 5000.0).min_height(4.0).color(red),
        ];
        let report = check_pumps(&specs, "pumps.toml");

        assert_eq!(report.verdict(), Verdict::PassedWithWarnings);
        // duplicate name, flat head range, duplicate color
        assert_eq!(report.warning_count(), 3);
    }

    #[test]
    fn test_empty_list_warns() {
        let report = check_pumps(&[], "empty.toml");
        assert_eq!(report.verdict(), Verdict::PassedWithWarnings);
    }

    #[test]
    fn test_plain_rendering() {
        let specs = vec![PumpSpec::new("A", 10.0, -5.0)];
        let text = check_pumps(&specs, "pumps.toml").to_string();

        assert!(text.contains("Source: pumps.toml"));
        assert!(text.contains("#1 \"A\""));
        assert!(text.contains("[FAIL] numeric fields: max_flow is negative (-5)"));
        assert!(text.trim_end().ends_with("Check FAILED"));
    }
}
