/// Errors that can occur while reading or validating pump records
#[derive(Debug, thiserror::Error)]
pub enum PumpError {
    /// I/O error reading a pump file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML pump file could not be decoded
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON pump file could not be decoded
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Pump file extension is neither `.toml` nor `.json`
    #[error("Unsupported pump file format: {0}")]
    UnsupportedFormat(String),

    /// Pump name is empty or whitespace
    #[error("Pump name must not be empty")]
    EmptyName,

    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// A numeric field is below zero
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// A maximum lies below its matching minimum
    #[error("{max_field} ({max}) is below {min_field} ({min})")]
    InvertedEnvelope {
        /// Name of the maximum field
        max_field: &'static str,
        /// Supplied maximum
        max: f64,
        /// Name of the minimum field
        min_field: &'static str,
        /// Supplied (or defaulted) minimum
        min: f64,
    },

    /// Color string is not `#rrggbb` or `#rgb`
    #[error("Invalid color '{0}': expected #rrggbb or #rgb")]
    InvalidColor(String),

    /// A field of a JSON pump entry has the wrong type
    #[error("Pump #{index}, field `{field}`: {source}")]
    InvalidField {
        /// 1-based position of the entry in its file
        index: usize,
        /// Key as written in the file
        field: String,
        /// Decoding error
        source: serde_json::Error,
    },

    /// An entry of a pump file failed validation
    #[error("Pump #{index} ({name}): {source}")]
    InvalidEntry {
        /// 1-based position of the entry in its file
        index: usize,
        /// Name given to the entry
        name: String,
        /// Underlying validation error
        source: Box<PumpError>,
    },
}
