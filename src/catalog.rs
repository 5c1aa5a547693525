//! Segment catalog loaded from the layermake XML source
//!
//! The catalog document carries four repeating list sections, one per
//! picklist slot:
//!
//! ```xml
//! <layermake>
//!     <dsseg>E	Existing</dsseg>
//!     <dsseg>P	Proposed</dsseg>
//!     <cseg>RDW	Roadway</cseg>
//!     <etseg>LN	Line work</etseg>
//!     <edseg>CURB	Curb and gutter</edseg>
//! </layermake>
//! ```
//!
//! Each entry is a raw value, a delimiter, and free-text documentation. The
//! delimiter and the slot-separator character appended when names are
//! assembled are configurable through [`CatalogOptions`].

use crate::error::{LayerMakeError, Result};
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;
use std::fs;
use std::path::Path;

/// One of the four picklist slots of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Data state (existing, proposed, ...)
    DataState,
    /// Discipline category
    Category,
    /// Entity type (line work, point, text, ...)
    EntityType,
    /// Entity description; feeds all three description fields
    EntityDesc,
}

impl Slot {
    /// All slots in catalog order
    pub const ALL: [Slot; 4] = [
        Slot::DataState,
        Slot::Category,
        Slot::EntityType,
        Slot::EntityDesc,
    ];

    /// XML element name of this slot's entries
    pub fn element_name(self) -> &'static str {
        match self {
            Slot::DataState => "dsseg",
            Slot::Category => "cseg",
            Slot::EntityType => "etseg",
            Slot::EntityDesc => "edseg",
        }
    }

    fn from_element(name: &[u8]) -> Option<Slot> {
        match name {
            b"dsseg" => Some(Slot::DataState),
            b"cseg" => Some(Slot::Category),
            b"etseg" => Some(Slot::EntityType),
            b"edseg" => Some(Slot::EntityDesc),
            _ => None,
        }
    }

    /// Whether segments of this slot carry the slot-separator when assembled.
    /// Entity descriptions run together; the other slots are separated.
    pub fn carries_separator(self) -> bool {
        !matches!(self, Slot::EntityDesc)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::DataState => "DataState",
            Slot::Category => "Category",
            Slot::EntityType => "EntityType",
            Slot::EntityDesc => "EntityDesc",
        };
        write!(f, "{name}")
    }
}

/// Options controlling how catalog entries are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Character separating the raw value from its documentation text
    pub label_delimiter: char,
    /// Separator appended after separated slots' values when assembling
    pub slot_separator: char,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            label_delimiter: '\t',
            slot_separator: '-',
        }
    }
}

/// An immutable picklist token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The slot this segment belongs to
    pub slot: Slot,
    /// The raw value assembled into the layer name
    pub value: String,
    /// Full display label (value plus documentation)
    pub label: String,
    /// Separator appended after the value when assembling, if any
    pub separator: Option<char>,
}

impl Segment {
    /// Create a segment with an explicit separator
    pub fn new(slot: Slot, value: impl Into<String>, separator: Option<char>) -> Self {
        let value = value.into();
        Segment {
            slot,
            label: value.clone(),
            value,
            separator,
        }
    }

    /// Create a separator-less segment from a raw field value
    pub fn bare(slot: Slot, value: impl Into<String>) -> Self {
        Self::new(slot, value, None)
    }
}

/// The loaded catalog: an ordered list of segments per slot
#[derive(Debug, Clone)]
pub struct SegmentCatalog {
    slots: IndexMap<Slot, Vec<Segment>>,
}

impl SegmentCatalog {
    /// Load a catalog file with default options
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &CatalogOptions::default())
    }

    /// Load a catalog file with explicit options
    pub fn load_with(path: impl AsRef<Path>, options: &CatalogOptions) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        Self::from_xml_str(&xml, options)
    }

    /// Parse a catalog from XML text.
    ///
    /// Fails with a catalog parse error on malformed XML and with
    /// [`LayerMakeError::EmptySlot`] when any slot ends up with no entries;
    /// a session cannot start without all four picklists populated.
    pub fn from_xml_str(xml: &str, options: &CatalogOptions) -> Result<Self> {
        let mut slots: IndexMap<Slot, Vec<Segment>> =
            Slot::ALL.iter().map(|s| (*s, Vec::new())).collect();

        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if let Some(slot) = Slot::from_element(start.name().as_ref()) {
                        let text = reader.read_text(start.name())?;
                        slots[&slot].push(Self::parse_entry(slot, &text, options));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        for (slot, entries) in &slots {
            if entries.is_empty() {
                return Err(LayerMakeError::EmptySlot(*slot));
            }
        }

        Ok(SegmentCatalog { slots })
    }

    /// Split one entry's text into value and label
    fn parse_entry(slot: Slot, text: &str, options: &CatalogOptions) -> Segment {
        let label = text.trim().to_string();
        let value = label
            .split(options.label_delimiter)
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
        let separator = slot.carries_separator().then_some(options.slot_separator);
        Segment {
            slot,
            value,
            label,
            separator,
        }
    }

    /// All segments of one slot, in catalog order
    pub fn segments(&self, slot: Slot) -> &[Segment] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One segment of a slot by picklist index
    pub fn segment(&self, slot: Slot, index: usize) -> Option<&Segment> {
        self.segments(slot).get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<layermake>\
        <dsseg>E\tExisting</dsseg>\
        <dsseg>P\tProposed</dsseg>\
        <cseg>RDW\tRoadway</cseg>\
        <etseg>LN\tLine work</etseg>\
        <edseg>CURB\tCurb and gutter</edseg>\
        <edseg>EDGE\tEdge of pavement</edseg>\
        </layermake>";

    #[test]
    fn test_load_sample_catalog() {
        let catalog = SegmentCatalog::from_xml_str(SAMPLE, &CatalogOptions::default()).unwrap();
        assert_eq!(catalog.segments(Slot::DataState).len(), 2);
        assert_eq!(catalog.segments(Slot::Category).len(), 1);
        assert_eq!(catalog.segments(Slot::EntityType).len(), 1);
        assert_eq!(catalog.segments(Slot::EntityDesc).len(), 2);
    }

    #[test]
    fn test_entry_value_and_label() {
        let catalog = SegmentCatalog::from_xml_str(SAMPLE, &CatalogOptions::default()).unwrap();
        let seg = catalog.segment(Slot::EntityDesc, 0).unwrap();
        assert_eq!(seg.value, "CURB");
        assert_eq!(seg.label, "CURB\tCurb and gutter");
        assert_eq!(seg.separator, None);
    }

    #[test]
    fn test_separated_slots_carry_separator() {
        let catalog = SegmentCatalog::from_xml_str(SAMPLE, &CatalogOptions::default()).unwrap();
        assert_eq!(
            catalog.segment(Slot::DataState, 0).unwrap().separator,
            Some('-')
        );
        assert_eq!(
            catalog.segment(Slot::Category, 0).unwrap().separator,
            Some('-')
        );
    }

    #[test]
    fn test_custom_options() {
        let xml = "<layermake>\
            <dsseg>E|Existing</dsseg>\
            <cseg>RDW|Roadway</cseg>\
            <etseg>LN|Line work</etseg>\
            <edseg>CURB|Curb</edseg>\
            </layermake>";
        let options = CatalogOptions {
            label_delimiter: '|',
            slot_separator: '_',
        };
        let catalog = SegmentCatalog::from_xml_str(xml, &options).unwrap();
        let seg = catalog.segment(Slot::DataState, 0).unwrap();
        assert_eq!(seg.value, "E");
        assert_eq!(seg.separator, Some('_'));
    }

    #[test]
    fn test_missing_slot_fails() {
        let xml = "<layermake><dsseg>E\tExisting</dsseg></layermake>";
        let err = SegmentCatalog::from_xml_str(xml, &CatalogOptions::default()).unwrap_err();
        assert!(matches!(err, LayerMakeError::EmptySlot(_)));
    }

    #[test]
    fn test_malformed_xml_fails() {
        let xml = "<layermake><dsseg>E";
        let err = SegmentCatalog::from_xml_str(xml, &CatalogOptions::default()).unwrap_err();
        assert!(matches!(err, LayerMakeError::CatalogParse(_)));
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let xml = "<layermake>\
            <comment>not a segment</comment>\
            <dsseg>E\tExisting</dsseg>\
            <cseg>RDW\tRoadway</cseg>\
            <etseg>LN\tLine work</etseg>\
            <edseg>CURB\tCurb</edseg>\
            </layermake>";
        let catalog = SegmentCatalog::from_xml_str(xml, &CatalogOptions::default()).unwrap();
        assert_eq!(catalog.segments(Slot::DataState).len(), 1);
    }
}
