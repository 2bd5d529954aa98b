use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Color, PumpError};

/// Opaque pump identifier, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PumpId(Uuid);

impl PumpId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PumpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PumpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pump as entered by the user, before defaults are resolved
///
/// Field names are accepted both in `snake_case` and in `camelCase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSpec {
    /// Display label
    pub name: String,

    /// Highest head the pump delivers (m)
    #[serde(alias = "maxHeight")]
    pub max_height: f64,

    /// Flow at the far end of the curve (L/h)
    #[serde(alias = "maxFlow")]
    pub max_flow: f64,

    /// Lowest head on the curve, 0 when absent
    #[serde(default, alias = "minHeight", skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,

    /// Flow at the top of the curve, 0 when absent
    #[serde(default, alias = "minFlow", skip_serializing_if = "Option::is_none")]
    pub min_flow: Option<f64>,

    /// Requested display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl PumpSpec {
    /// Create a spec with only the required fields set
    pub fn new(name: impl Into<String>, max_height: f64, max_flow: f64) -> Self {
        Self {
            name: name.into(),
            max_height,
            max_flow,
            min_height: None,
            min_flow: None,
            color: None,
        }
    }

    /// Set the lowest head
    pub fn min_height(mut self, value: f64) -> Self {
        self.min_height = Some(value);
        self
    }

    /// Set the flow at maximum head
    pub fn min_flow(mut self, value: f64) -> Self {
        self.min_flow = Some(value);
        self
    }

    /// Request a display color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Resolve the optional minimums to concrete values
    pub fn envelope(&self) -> Envelope {
        Envelope {
            min_flow: self.min_flow.unwrap_or(0.0),
            max_flow: self.max_flow,
            min_height: self.min_height.unwrap_or(0.0),
            max_height: self.max_height,
        }
    }

    /// Check the spec can become a [`PumpRecord`]
    pub fn validate(&self) -> Result<(), PumpError> {
        if self.name.trim().is_empty() {
            return Err(PumpError::EmptyName);
        }

        let env = self.envelope();
        for (field, value) in [
            ("max_height", env.max_height),
            ("max_flow", env.max_flow),
            ("min_height", env.min_height),
            ("min_flow", env.min_flow),
        ] {
            if !value.is_finite() {
                return Err(PumpError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(PumpError::Negative { field, value });
            }
        }

        if env.max_height < env.min_height {
            return Err(PumpError::InvertedEnvelope {
                max_field: "max_height",
                max: env.max_height,
                min_field: "min_height",
                min: env.min_height,
            });
        }
        if env.max_flow < env.min_flow {
            return Err(PumpError::InvertedEnvelope {
                max_field: "max_flow",
                max: env.max_flow,
                min_field: "min_flow",
                min: env.min_flow,
            });
        }

        Ok(())
    }
}

/// Operating envelope: the two corners a pump curve runs between
///
/// The curve starts at `(min_flow, max_height)` and ends at
/// `(max_flow, min_height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Flow at maximum head
    pub min_flow: f64,
    /// Flow at minimum head
    pub max_flow: f64,
    /// Lowest head
    pub min_height: f64,
    /// Highest head
    pub max_height: f64,
}

impl Envelope {
    /// Whether `height` lies within `[min_height, max_height]`
    pub fn contains_height(&self, height: f64) -> bool {
        height >= self.min_height && height <= self.max_height
    }

    /// Whether the curve collapses to a single point
    pub fn is_degenerate(&self) -> bool {
        self.min_flow == self.max_flow && self.min_height == self.max_height
    }
}

/// A validated pump held by a [`super::PumpCollection`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpRecord {
    id: PumpId,
    name: String,
    #[serde(flatten)]
    envelope: Envelope,
    color: Color,
}

impl PumpRecord {
    /// Validate `spec` and create a record with a fresh id
    pub fn from_spec(spec: &PumpSpec, color: Color) -> Result<Self, PumpError> {
        spec.validate()?;
        Ok(Self {
            id: PumpId::new(),
            name: spec.name.trim().to_string(),
            envelope: spec.envelope(),
            color,
        })
    }

    /// Unique identifier
    pub fn id(&self) -> PumpId {
        self.id
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved operating envelope
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Highest head
    pub fn max_height(&self) -> f64 {
        self.envelope.max_height
    }

    /// Flow at minimum head
    pub fn max_flow(&self) -> f64 {
        self.envelope.max_flow
    }

    /// Lowest head
    pub fn min_height(&self) -> f64 {
        self.envelope.min_height
    }

    /// Flow at maximum head
    pub fn min_flow(&self) -> f64 {
        self.envelope.min_flow
    }

    /// Display color
    pub fn color(&self) -> Color {
        self.color
    }
}
