use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Check a pump file and print the report
pub fn run(file: PathBuf) -> Result<()> {
    use pumpcurve::pump::load_pumps;
    use pumpcurve::validator::check_pumps;

    info!("Checking pump file: {}", file.display());

    if !file.exists() {
        anyhow::bail!("Pump file does not exist: {}", file.display());
    }

    let specs = load_pumps(&file)
        .with_context(|| format!("Failed to load pump file: {}", file.display()))?;
    let report = check_pumps(&specs, &file.display().to_string());

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if any pump would be rejected
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
