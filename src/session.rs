//! Interactive authoring session over a loaded catalog
//!
//! A [`Session`] holds the current picks, the layer table being built, and
//! the notifications accumulated along the way. It lives for one authoring
//! pass: select segments, preview the assembled name, `make` layers, adjust
//! color and linetype, then [`Session::finish`] hands every record to a
//! [`CommandEmitter`] and consumes the session.

use crate::catalog::{SegmentCatalog, Slot};
use crate::compose::{compose, Composition, DescPosition, Selections};
use crate::emit::{CommandEmitter, ExistingNameChecker};
use crate::error::{LayerMakeError, Result};
use crate::notification::Notification;
use crate::store::LayerTable;
use crate::types::LayerName;

/// One authoring session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: SegmentCatalog,
    selections: Selections,
    layers: LayerTable,
    notifications: Vec<Notification>,
}

impl Session {
    /// Start a session over a loaded catalog, preselecting the first entry
    /// of every slot (entity descriptions land on the first position)
    pub fn new(catalog: SegmentCatalog) -> Self {
        let mut selections = Selections::default();
        for slot in Slot::ALL {
            if let Some(segment) = catalog.segment(slot, 0) {
                selections.set(segment.clone());
            }
        }
        Session {
            catalog,
            selections,
            layers: LayerTable::new(),
            notifications: Vec::new(),
        }
    }

    /// The catalog this session picks from
    pub fn catalog(&self) -> &SegmentCatalog {
        &self.catalog
    }

    /// The current picks
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Pick a catalog entry by slot and picklist index.
    /// Entity-description picks land on the first position.
    pub fn select(&mut self, slot: Slot, index: usize) -> Result<()> {
        let segment = self
            .catalog
            .segment(slot, index)
            .ok_or(LayerMakeError::SegmentOutOfRange { slot, index })?
            .clone();
        self.selections.set(segment);
        Ok(())
    }

    /// Pick an entity-description entry into an explicit position
    pub fn select_desc(&mut self, position: DescPosition, index: usize) -> Result<()> {
        let slot = Slot::EntityDesc;
        let segment = self
            .catalog
            .segment(slot, index)
            .ok_or(LayerMakeError::SegmentOutOfRange { slot, index })?
            .clone();
        self.selections.set_desc(position, segment);
        Ok(())
    }

    /// Reset an entity-description position back to filler
    pub fn clear_desc(&mut self, position: DescPosition) {
        self.selections.clear_desc(position);
    }

    /// Assemble the name for the current picks. Recomputing never fails.
    pub fn preview(&self) -> Composition {
        compose(&self.selections)
    }

    /// Finalize the previewed name and create its record.
    ///
    /// The external predicate is consulted first, then the local table;
    /// either collision fails with [`LayerMakeError::DuplicateName`] and the
    /// user re-selects. Truncation notifications are kept on the session
    /// even when the create fails.
    pub fn make(&mut self, checker: &dyn ExistingNameChecker) -> Result<LayerName> {
        let Composition {
            name,
            mut notifications,
        } = self.preview();
        self.notifications.append(&mut notifications);
        self.layers.create_checked(name.clone(), checker)?;
        Ok(name)
    }

    /// Update a made layer's color
    pub fn set_color(&mut self, name: &LayerName, r: u8, g: u8, b: u8) -> Result<()> {
        self.layers.update_color(name, r, g, b)
    }

    /// Update a made layer's linetype
    pub fn set_linetype(&mut self, name: &LayerName, linetype: impl Into<String>) -> Result<()> {
        self.layers.update_linetype(name, linetype)
    }

    /// Remove a made layer; a no-op when the name is absent
    pub fn remove(&mut self, name: &LayerName) {
        self.layers.remove(name);
    }

    /// The layers made so far, in creation order
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// Notifications accumulated over the session
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hand every record to the emitter and end the session.
    /// The collection is discarded with the session after handoff.
    pub fn finish(self, emitter: &mut dyn CommandEmitter) -> Result<()> {
        for record in self.layers.iter() {
            emitter.emit(record)?;
        }
        Ok(())
    }
}
