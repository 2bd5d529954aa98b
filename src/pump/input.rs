use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use super::{Color, PumpError, PumpSpec};

/// Encoding of a pump file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpFileFormat {
    /// Repeated `[[pump]]` tables
    Toml,
    /// Array of pump objects, or an object with a `pump` array
    Json,
}

impl PumpFileFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, PumpError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(PumpError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PumpFile {
    #[serde(default, alias = "pumps")]
    pump: Vec<PumpSpec>,
}

/// Entry list of a JSON pump file: the root array, or the `pump`/`pumps` array
fn json_entries(root: Value) -> Result<Vec<Value>, PumpError> {
    let list = match root {
        Value::Object(mut map) => match map.remove("pump").or_else(|| map.remove("pumps")) {
            Some(list) => list,
            None => return Ok(Vec::new()),
        },
        other => other,
    };
    Ok(Vec::<Value>::deserialize(list)?)
}

/// First known key of `entry` whose value has the wrong type
fn offending_field(entry: &Value) -> Option<String> {
    entry.as_object()?.iter().find_map(|(key, value)| {
        let valid = match key.as_str() {
            "name" => String::deserialize(value).is_ok(),
            "max_height" | "maxHeight" | "max_flow" | "maxFlow" => f64::deserialize(value).is_ok(),
            "min_height" | "minHeight" | "min_flow" | "minFlow" => {
                Option::<f64>::deserialize(value).is_ok()
            }
            "color" => Option::<Color>::deserialize(value).is_ok(),
            _ => true,
        };
        (!valid).then(|| key.clone())
    })
}

fn decode_json_entry(index: usize, entry: &Value) -> Result<PumpSpec, PumpError> {
    PumpSpec::deserialize(entry).map_err(|source| match offending_field(entry) {
        Some(field) => PumpError::InvalidField {
            index,
            field,
            source,
        },
        None => PumpError::InvalidEntry {
            index,
            name: entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            source: Box::new(PumpError::JsonError(source)),
        },
    })
}

/// Parse pump specs from a string.
///
/// Only decoding happens here; numeric ranges are checked when the specs are
/// added to a [`super::PumpCollection`]. JSON entries are decoded one by one
/// so that an error names the entry and, where possible, the field.
pub fn parse_pumps(content: &str, format: PumpFileFormat) -> Result<Vec<PumpSpec>, PumpError> {
    match format {
        PumpFileFormat::Toml => {
            let file: PumpFile = toml::from_str(content)?;
            Ok(file.pump)
        }
        PumpFileFormat::Json => {
            let root: Value = serde_json::from_str(content)?;
            json_entries(root)?
                .iter()
                .enumerate()
                .map(|(idx, entry)| decode_json_entry(idx + 1, entry))
                .collect()
        }
    }
}

/// Load pump specs from a `.toml` or `.json` file
pub fn load_pumps<P: AsRef<Path>>(path: P) -> Result<Vec<PumpSpec>, PumpError> {
    let path = path.as_ref();
    let format = PumpFileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_pumps(&content, format)
}
