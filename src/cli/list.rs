use anyhow::Result;
use std::path::PathBuf;

use pumpcurve::pump::PumpCollection;

/// Zero minimums print as a dash, like unset fields
fn optional(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Render the pump listing: one line per pump in display order
pub fn render(pumps: &PumpCollection) -> String {
    let header = [
        "Color", "Name", "Max head (m)", "Max flow (L/h)", "Min head (m)", "Min flow (L/h)",
    ];
    let rows: Vec<[String; 6]> = pumps
        .iter()
        .map(|p| {
            [
                p.color().to_string(),
                p.name().to_string(),
                p.max_height().to_string(),
                p.max_flow().to_string(),
                optional(p.min_height()),
                optional(p.min_flow()),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(&header);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(|s| s.as_str()).collect();
        push_line(&cells);
    }
    out
}

/// List the pumps of a file
pub fn run(file: PathBuf, exclude: Vec<String>) -> Result<()> {
    let pumps = super::load_session(&file, &exclude)?;

    if pumps.is_empty() {
        println!("No pumps in {}", file.display());
        return Ok(());
    }

    print!("{}", render(&pumps));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumpcurve::pump::PumpSpec;

    #[test]
    fn test_listing_marks_unset_minimums() {
        let mut pumps = PumpCollection::new();
        pumps.add(&PumpSpec::new("1/3 cv", 10.0, 5000.0)).unwrap();
        pumps
            .add(&PumpSpec::new("1/2 cv", 14.5, 7000.0).min_height(2.0))
            .unwrap();

        let text = render(&pumps);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Color"));
        assert!(lines[1].starts_with("#2ecc71  1/3 cv"));
        assert!(lines[1].ends_with("-"));
        assert!(lines[2].contains("14.5"));
        assert!(lines[2].contains("2 "));
    }
}
