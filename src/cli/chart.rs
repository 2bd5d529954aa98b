use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;

use pumpcurve::chart::{export, ChartFormat, DEFAULT_CHART_FILE};

use super::config::Config;

/// Export the selection chart.
///
/// Rendering failures are logged and do not change the exit status.
pub fn run(
    file: PathBuf,
    exclude: Vec<String>,
    output: Option<PathBuf>,
    svg: bool,
    width: Option<u32>,
    height: Option<u32>,
    config: &Config,
) -> Result<()> {
    let pumps = super::load_session(&file, &exclude)?;

    let mut output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILE));
    if svg {
        output.set_extension("svg");
    }
    let format = match ChartFormat::from_path(&output) {
        Ok(format) => format,
        Err(e) => {
            warn!("{}, writing PNG instead", e);
            output.set_extension("png");
            ChartFormat::Png
        }
    };

    let options = config.chart_options(width, height);
    info!(
        "Rendering {} curve(s) to {} ({}x{})",
        pumps.len(),
        output.display(),
        options.width,
        options.height
    );

    if export(&pumps, &output, format, &options) {
        println!("Chart written to {}", output.display());
    }
    Ok(())
}
