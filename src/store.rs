//! Layer record storage for one authoring session

use crate::emit::ExistingNameChecker;
use crate::error::{LayerMakeError, Result};
use crate::types::{Color, LayerName};
use indexmap::IndexMap;

/// The name/color/linetype triple destined for creation in the host
/// application
///
/// Records are fully populated from the moment they are created: linetype
/// defaults to `"Continuous"` and color to white, so a record can always be
/// handed to the command emitter as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    /// The finalized layer name
    pub name: LayerName,
    /// Layer color
    pub color: Color,
    /// Linetype name
    pub linetype: String,
}

impl LayerRecord {
    /// Create a record with default color and linetype
    pub fn new(name: LayerName) -> Self {
        LayerRecord {
            name,
            color: Color::WHITE,
            linetype: "Continuous".to_string(),
        }
    }

    /// Set the color from RGB components
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Color::from_rgb(r, g, b);
    }

    /// Set the linetype name
    pub fn set_linetype(&mut self, linetype: impl Into<String>) {
        self.linetype = linetype.into();
    }
}

/// Insertion-ordered collection of layer records, keyed by name
///
/// Keys are unique by construction: the only way in is [`LayerTable::create`],
/// which rejects collisions. Matching is exact on the normalized 17-character
/// key; no field semantics are checked.
#[derive(Debug, Clone, Default)]
pub struct LayerTable {
    records: IndexMap<LayerName, LayerRecord>,
}

impl LayerTable {
    /// Create an empty table
    pub fn new() -> Self {
        LayerTable {
            records: IndexMap::new(),
        }
    }

    /// Create a record for `name` with default color and linetype.
    ///
    /// Fails with [`LayerMakeError::DuplicateName`] when the name is already
    /// present; the table is left unchanged in that case.
    pub fn create(&mut self, name: LayerName) -> Result<&mut LayerRecord> {
        if self.records.contains_key(&name) {
            return Err(LayerMakeError::DuplicateName(name.to_string()));
        }
        let record = LayerRecord::new(name.clone());
        Ok(self.records.entry(name).or_insert(record))
    }

    /// Create a record, first consulting an external existing-name predicate
    /// (the host document's layer table). An external hit fails with the
    /// same [`LayerMakeError::DuplicateName`] regardless of local state.
    pub fn create_checked(
        &mut self,
        name: LayerName,
        checker: &dyn ExistingNameChecker,
    ) -> Result<&mut LayerRecord> {
        if checker.exists(&name) {
            return Err(LayerMakeError::DuplicateName(name.to_string()));
        }
        self.create(name)
    }

    /// Get a record by name
    pub fn get(&self, name: &LayerName) -> Option<&LayerRecord> {
        self.records.get(name)
    }

    /// Get a mutable record by name
    pub fn get_mut(&mut self, name: &LayerName) -> Option<&mut LayerRecord> {
        self.records.get_mut(name)
    }

    /// Check whether a name is present
    pub fn contains(&self, name: &LayerName) -> bool {
        self.records.contains_key(name)
    }

    /// Update a record's color in place
    pub fn update_color(&mut self, name: &LayerName, r: u8, g: u8, b: u8) -> Result<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| LayerMakeError::LayerNotFound(name.to_string()))?;
        record.set_color(r, g, b);
        Ok(())
    }

    /// Update a record's linetype in place
    pub fn update_linetype(&mut self, name: &LayerName, linetype: impl Into<String>) -> Result<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| LayerMakeError::LayerNotFound(name.to_string()))?;
        record.set_linetype(linetype);
        Ok(())
    }

    /// Remove a record by name, preserving the order of the rest.
    /// A no-op returning `None` when the name is absent.
    pub fn remove(&mut self, name: &LayerName) -> Option<LayerRecord> {
        self.records.shift_remove(name)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &LayerRecord> {
        self.records.values()
    }

    /// Iterate over names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &LayerName> {
        self.records.keys()
    }
}
