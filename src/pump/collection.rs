use log::{debug, warn};

use super::{Color, Palette, PumpError, PumpId, PumpRecord, PumpSpec};

/// Ordered set of pumps for one session
///
/// Insertion order is display order. Records are never edited in place:
/// replacing a pump means removing it and adding a new spec.
#[derive(Debug, Clone, Default)]
pub struct PumpCollection {
    pumps: Vec<PumpRecord>,
    palette: Palette,
}

impl PumpCollection {
    /// Create an empty collection using the default palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with a custom palette
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            pumps: Vec::new(),
            palette,
        }
    }

    /// Build a collection from loaded specs, stopping at the first invalid entry
    pub fn from_specs<I>(specs: I) -> Result<Self, PumpError>
    where
        I: IntoIterator<Item = PumpSpec>,
    {
        let mut collection = Self::new();
        for (idx, spec) in specs.into_iter().enumerate() {
            collection
                .add(&spec)
                .map_err(|e| PumpError::InvalidEntry {
                    index: idx + 1,
                    name: spec.name.clone(),
                    source: Box::new(e),
                })?;
        }
        Ok(collection)
    }

    /// Validate `spec`, assign it an id and a color, and append it
    pub fn add(&mut self, spec: &PumpSpec) -> Result<&PumpRecord, PumpError> {
        let used = self.used_colors();
        let color = self.palette.assign(spec.color, &used);
        let record = PumpRecord::from_spec(spec, color)?;

        if spec.color.is_some_and(|requested| requested != color) {
            debug!(
                "Pump '{}' requested a color already in use, assigned {}",
                record.name(),
                color
            );
        }
        if record.envelope().is_degenerate() {
            warn!(
                "Pump '{}' has a single-point envelope; its curve collapses to one coordinate",
                record.name()
            );
        }

        self.pumps.push(record);
        Ok(&self.pumps[self.pumps.len() - 1])
    }

    /// Remove the pump with the given id
    pub fn remove(&mut self, id: PumpId) -> Option<PumpRecord> {
        let idx = self.pumps.iter().position(|p| p.id() == id)?;
        Some(self.pumps.remove(idx))
    }

    /// Remove the first pump with the given name
    pub fn remove_by_name(&mut self, name: &str) -> Option<PumpRecord> {
        let idx = self.pumps.iter().position(|p| p.name() == name)?;
        Some(self.pumps.remove(idx))
    }

    /// Look up a pump by id
    pub fn get(&self, id: PumpId) -> Option<&PumpRecord> {
        self.pumps.iter().find(|p| p.id() == id)
    }

    /// Iterate in display order
    pub fn iter(&self) -> std::slice::Iter<'_, PumpRecord> {
        self.pumps.iter()
    }

    /// Pumps in display order
    pub fn as_slice(&self) -> &[PumpRecord] {
        &self.pumps
    }

    /// Number of held pumps
    pub fn len(&self) -> usize {
        self.pumps.len()
    }

    /// Whether no pump is held
    pub fn is_empty(&self) -> bool {
        self.pumps.is_empty()
    }

    /// Colors currently held, in display order
    pub fn used_colors(&self) -> Vec<Color> {
        self.pumps.iter().map(|p| p.color()).collect()
    }
}

impl<'a> IntoIterator for &'a PumpCollection {
    type Item = &'a PumpRecord;
    type IntoIter = std::slice::Iter<'a, PumpRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pumps.iter()
    }
}
