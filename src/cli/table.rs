use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use pumpcurve::curve::Strategy;
use pumpcurve::table::SelectionTable;

use super::config::Config;
use super::OutputFormat;

/// Options of the `table` command
pub struct TableArgs {
    /// Pump file
    pub file: PathBuf,
    /// Pumps to leave out
    pub exclude: Vec<String>,
    /// Bucket step override
    pub step: Option<f64>,
    /// Strategy override
    pub strategy: Option<Strategy>,
    /// Output encoding
    pub format: OutputFormat,
    /// Output file, stdout when absent
    pub output: Option<PathBuf>,
}

/// Encode `table`, or `None` when there is nothing to show
fn render(table: &SelectionTable, format: OutputFormat) -> Result<Option<String>> {
    if table.is_empty() {
        return Ok(None);
    }

    let content = match format {
        OutputFormat::Text => table.to_string(),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            table.to_csv(&mut buf).context("Failed to write CSV")?;
            String::from_utf8(buf).context("CSV output is not UTF-8")?
        }
        OutputFormat::Json => table.to_json().context("Failed to serialize table")? + "\n",
    };
    Ok(Some(content))
}

/// Print or write the head → flow selection table
pub fn run(args: TableArgs, config: &Config) -> Result<()> {
    let pumps = super::load_session(&args.file, &args.exclude)?;
    let options = config.table_options(args.step, args.strategy, None);

    info!(
        "Building table: bucket step {}, {} strategy, {} curve steps",
        options.bucket_step, options.strategy, options.step_count
    );
    let table = SelectionTable::build(&pumps, &options).context("Failed to build table")?;

    match render(&table, args.format)? {
        Some(content) => super::emit(&content, args.output.as_deref()),
        None => {
            println!("No pumps in {}, table not rendered", args.file.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumpcurve::pump::{PumpCollection, PumpSpec};
    use pumpcurve::table::TableOptions;

    #[test]
    fn test_empty_table_is_not_rendered() {
        let pumps = PumpCollection::new();
        let table = SelectionTable::build(&pumps, &TableOptions::default()).unwrap();
        for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json] {
            assert!(render(&table, format).unwrap().is_none());
        }
    }

    #[test]
    fn test_csv_rendering() {
        let mut pumps = PumpCollection::new();
        pumps.add(&PumpSpec::new("A", 1.0, 100.0)).unwrap();
        let table = SelectionTable::build(&pumps, &TableOptions::default()).unwrap();

        let csv = render(&table, OutputFormat::Csv).unwrap().unwrap();
        assert_eq!(csv.lines().next(), Some("Pump,0,0.5,1"));
    }
}
