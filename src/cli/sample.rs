use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use pumpcurve::curve::{CurvePoint, Sampler};
use pumpcurve::pump::PumpCollection;

use super::config::Config;
use super::OutputFormat;

#[derive(Serialize)]
struct SampledCurve<'a> {
    name: &'a str,
    color: String,
    points: Vec<CurvePoint>,
}

fn sample_all<'a>(pumps: &'a PumpCollection, sampler: &Sampler) -> Vec<SampledCurve<'a>> {
    pumps
        .iter()
        .map(|p| SampledCurve {
            name: p.name(),
            color: p.color().to_string(),
            points: sampler.sample(p),
        })
        .collect()
}

fn render(curves: &[SampledCurve<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for curve in curves {
                out.push_str(&format!("{} ({})\n", curve.name, curve.color));
                for (i, p) in curve.points.iter().enumerate() {
                    out.push_str(&format!("  {:>3}  {:>12.3}  {:>10.4}\n", i, p.flow, p.height));
                }
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            {
                let mut writer = csv::Writer::from_writer(&mut buf);
                writer.write_record(["pump", "step", "flow", "height"])?;
                for curve in curves {
                    for (i, p) in curve.points.iter().enumerate() {
                        writer.write_record([
                            curve.name.to_string(),
                            i.to_string(),
                            p.flow.to_string(),
                            p.height.to_string(),
                        ])?;
                    }
                }
                writer.flush().context("Failed to flush CSV")?;
            }
            Ok(String::from_utf8(buf)?)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(curves)? + "\n"),
    }
}

/// Dump the sampled curve points of every pump
pub fn run(
    file: PathBuf,
    exclude: Vec<String>,
    steps: Option<usize>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let pumps = super::load_session(&file, &exclude)?;
    let sampler = Sampler::new()
        .with_step_count(config.step_count(steps))
        .context("Invalid step count")?;

    let content = render(&sample_all(&pumps, &sampler), format)?;
    super::emit(&content, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumpcurve::pump::PumpSpec;

    fn curves_csv(step_count: usize) -> String {
        let mut pumps = PumpCollection::new();
        pumps.add(&PumpSpec::new("A", 10.0, 5000.0)).unwrap();
        let sampler = Sampler::new().with_step_count(step_count).unwrap();
        render(&sample_all(&pumps, &sampler), OutputFormat::Csv).unwrap()
    }

    #[test]
    fn test_csv_has_one_row_per_point() {
        let text = curves_csv(4);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "pump,step,flow,height");
        assert_eq!(lines.len(), 1 + 5);
        assert_eq!(lines[1], "A,0,0,10");
        assert_eq!(lines[5], "A,4,5000,0");
    }

    #[test]
    fn test_curves_outlive_sampler() {
        let mut pumps = PumpCollection::new();
        pumps.add(&PumpSpec::new("A", 10.0, 5000.0)).unwrap();

        let curves = {
            let sampler = Sampler::new().with_step_count(2).unwrap();
            sample_all(&pumps, &sampler)
        };
        assert_eq!(curves[0].name, "A");
        assert_eq!(curves[0].points.len(), 3);

        let json: serde_json::Value =
            serde_json::from_str(&render(&curves, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["points"][2]["flow"], 5000.0);
    }
}
