use anyhow::{Context, Result};
use std::path::PathBuf;

use pumpcurve::curve::{FlowCell, Interpolator, Sampler, Strategy};
use pumpcurve::pump::PumpCollection;

use super::config::Config;

fn lookup_lines(pumps: &PumpCollection, height: f64, interpolator: &Interpolator) -> Vec<String> {
    let width = pumps.iter().map(|p| p.name().chars().count()).max().unwrap_or(0);
    pumps
        .iter()
        .map(|p| match interpolator.flow_at_height(p, height) {
            FlowCell::Flow(flow) => format!("{:<width$}  {:.1} L/h", p.name(), flow, width = width),
            FlowCell::OutOfRange => format!(
                "{:<width$}  -  (head range {}..{} m)",
                p.name(),
                p.min_height(),
                p.max_height(),
                width = width
            ),
        })
        .collect()
}

/// Print the flow each pump delivers at one head
pub fn run(
    file: PathBuf,
    exclude: Vec<String>,
    height: f64,
    strategy: Option<Strategy>,
    config: &Config,
) -> Result<()> {
    let pumps = super::load_session(&file, &exclude)?;
    let strategy = strategy.or(config.curve.strategy).unwrap_or_default();
    let sampler = Sampler::new()
        .with_step_count(config.step_count(None))
        .context("Invalid step count")?;
    let interpolator = Interpolator::new(strategy).with_sampler(sampler);

    println!("Flow at {} m ({} strategy):", height, strategy);
    for line in lookup_lines(&pumps, height, &interpolator) {
        println!("  {}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumpcurve::pump::PumpSpec;

    #[test]
    fn test_lookup_lines() {
        let mut pumps = PumpCollection::new();
        pumps.add(&PumpSpec::new("small", 10.0, 5000.0)).unwrap();
        pumps.add(&PumpSpec::new("big", 20.0, 8000.0).min_height(12.0)).unwrap();

        let lines = lookup_lines(&pumps, 5.0, &Interpolator::new(Strategy::Linear));
        assert_eq!(lines[0], "small  2500.0 L/h");
        assert_eq!(lines[1], "big    -  (head range 12..20 m)");
    }
}
