//! Pure assembly of a layer name from picked segments
//!
//! [`compose`] is a pure function of an explicit [`Selections`] value: given
//! identical selections it always produces an identical [`LayerName`], so
//! re-assembly after edits is idempotent. There is no hidden per-field state
//! and no ordering dependence between selection updates.

use crate::catalog::{Segment, Slot};
use crate::notification::Notification;
use crate::types::{Field, LayerName, FILLER};

/// One of the three entity-description positions of a layer name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescPosition {
    /// First description field (3 characters)
    First,
    /// Middle description field (3 characters)
    Middle,
    /// Last description field (4 characters)
    Last,
}

impl DescPosition {
    /// All positions in layout order
    pub const ALL: [DescPosition; 3] =
        [DescPosition::First, DescPosition::Middle, DescPosition::Last];

    /// Index into [`Selections::entity_desc`]
    pub const fn index(self) -> usize {
        match self {
            DescPosition::First => 0,
            DescPosition::Middle => 1,
            DescPosition::Last => 2,
        }
    }

    /// The layer-name field this position fills
    pub const fn field(self) -> Field {
        match self {
            DescPosition::First => Field::EntityDesc1,
            DescPosition::Middle => Field::EntityDesc2,
            DescPosition::Last => Field::EntityDesc3,
        }
    }
}

/// The picked segments a layer name is assembled from
///
/// Every element is optional. An unselected entity-description position
/// contributes pure filler (`ZZZ` / `ZZZZ`); any other unselected slot
/// contributes filler of its field width with no separator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selections {
    /// Data-state pick
    pub data_state: Option<Segment>,
    /// Category pick
    pub category: Option<Segment>,
    /// Entity-type pick
    pub entity_type: Option<Segment>,
    /// Entity-description picks, one per [`DescPosition`]
    pub entity_desc: [Option<Segment>; 3],
}

impl Selections {
    /// Set a pick, routed by the segment's slot.
    /// Entity-description segments land on [`DescPosition::First`].
    pub fn set(&mut self, segment: Segment) {
        match segment.slot {
            Slot::DataState => self.data_state = Some(segment),
            Slot::Category => self.category = Some(segment),
            Slot::EntityType => self.entity_type = Some(segment),
            Slot::EntityDesc => self.set_desc(DescPosition::First, segment),
        }
    }

    /// Set an entity-description pick at an explicit position
    pub fn set_desc(&mut self, position: DescPosition, segment: Segment) {
        self.entity_desc[position.index()] = Some(segment);
    }

    /// Clear an entity-description position back to filler
    pub fn clear_desc(&mut self, position: DescPosition) {
        self.entity_desc[position.index()] = None;
    }
}

/// The result of composing a layer name
#[derive(Debug, Clone)]
pub struct Composition {
    /// The finalized name
    pub name: LayerName,
    /// Non-fatal issues encountered while assembling
    pub notifications: Vec<Notification>,
}

impl Composition {
    /// Whether the assembled string exceeded the fixed width and was cut
    pub fn was_truncated(&self) -> bool {
        !self.notifications.is_empty()
    }
}

/// Assemble a layer name from the given selections.
///
/// Field rules: each picked value is right-padded with [`FILLER`] to its
/// field width (never left-padded) and followed by the segment's separator
/// if it carries one. The first and middle entity-description fields are
/// clipped to 3 characters; the last is padded to 4 and left unclipped.
/// The whole string is uppercased, padded to 17, and cut at 17 if longer;
/// the cut is reported as a truncation notification, not an error.
pub fn compose(selections: &Selections) -> Composition {
    let mut raw = String::with_capacity(LayerName::WIDTH + 4);
    push_field(&mut raw, selections.data_state.as_ref(), Field::DataState, false);
    push_field(&mut raw, selections.category.as_ref(), Field::Category, false);
    push_field(&mut raw, selections.entity_type.as_ref(), Field::EntityType, false);
    push_field(&mut raw, selections.entity_desc[0].as_ref(), Field::EntityDesc1, true);
    push_field(&mut raw, selections.entity_desc[1].as_ref(), Field::EntityDesc2, true);
    push_field(&mut raw, selections.entity_desc[2].as_ref(), Field::EntityDesc3, false);

    let (name, truncated) = LayerName::finalize(&raw);
    let mut notifications = Vec::new();
    if truncated {
        notifications.push(Notification::truncation(format!(
            "assembled name '{}' exceeded {} characters and was cut to '{}'",
            raw.to_uppercase(),
            LayerName::WIDTH,
            name
        )));
    }
    Composition {
        name,
        notifications,
    }
}

fn push_field(out: &mut String, segment: Option<&Segment>, field: Field, clip: bool) {
    match segment {
        Some(segment) => {
            let mut text = segment.value.clone();
            while text.chars().count() < field.width() {
                text.push(FILLER);
            }
            if clip {
                text = text.chars().take(field.width()).collect();
            }
            out.push_str(&text);
            if let Some(sep) = segment.separator {
                out.push(sep);
            }
        }
        None => {
            for _ in 0..field.width() {
                out.push(FILLER);
            }
        }
    }
}

/// Split a finalized name back into selections at the fixed field offsets.
///
/// The recovered values are the raw field slices (separators and filler
/// included, none re-appended), so re-composing the result reproduces the
/// name exactly.
pub fn decompose(name: &LayerName) -> Selections {
    let slice = |field: Field| name.field(field);
    Selections {
        data_state: Some(Segment::bare(Slot::DataState, slice(Field::DataState))),
        category: Some(Segment::bare(Slot::Category, slice(Field::Category))),
        entity_type: Some(Segment::bare(Slot::EntityType, slice(Field::EntityType))),
        entity_desc: [
            Some(Segment::bare(Slot::EntityDesc, slice(Field::EntityDesc1))),
            Some(Segment::bare(Slot::EntityDesc, slice(Field::EntityDesc2))),
            Some(Segment::bare(Slot::EntityDesc, slice(Field::EntityDesc3))),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(slot: Slot, value: &str) -> Segment {
        let separator = slot.carries_separator().then_some('-');
        Segment::new(slot, value, separator)
    }

    #[test]
    fn test_compose_separated_slots_then_truncate() {
        let mut selections = Selections::default();
        selections.set(picked(Slot::DataState, "AB"));
        selections.set(picked(Slot::Category, "CDE"));
        selections.set(picked(Slot::EntityType, "FG"));
        selections.set_desc(DescPosition::First, picked(Slot::EntityDesc, "HIJ"));

        let composition = compose(&selections);
        assert_eq!(composition.name, "AB-CDE-FG-HIJZZZZ");
        assert!(composition.was_truncated());
    }

    #[test]
    fn test_compose_empty_selections_is_all_filler() {
        let composition = compose(&Selections::default());
        assert_eq!(composition.name, "ZZZZZZZZZZZZZZZZZ");
        assert!(!composition.was_truncated());
    }

    #[test]
    fn test_unselected_desc_defaults_to_filler() {
        let mut selections = Selections::default();
        selections.set_desc(DescPosition::First, picked(Slot::EntityDesc, "HIJ"));
        let name = compose(&selections).name;
        assert_eq!(name.field(Field::EntityDesc2), "ZZZ");
        assert_eq!(name.field(Field::EntityDesc3), "ZZZZ");
    }

    #[test]
    fn test_desc_positions_are_clipped_to_width() {
        let mut selections = Selections::default();
        selections.set_desc(DescPosition::First, picked(Slot::EntityDesc, "WATER"));
        selections.set_desc(DescPosition::Middle, picked(Slot::EntityDesc, "MAINS"));
        let name = compose(&selections).name;
        assert_eq!(name.field(Field::EntityDesc1), "WAT");
        assert_eq!(name.field(Field::EntityDesc2), "MAI");
    }

    #[test]
    fn test_short_values_are_right_padded() {
        let mut selections = Selections::default();
        selections.set(picked(Slot::DataState, "E"));
        let composition = compose(&selections);
        // "E" padded to width 2, then the separator
        assert!(composition.name.as_str().starts_with("EZ-"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let mut selections = Selections::default();
        selections.set(picked(Slot::DataState, "EX"));
        selections.set(picked(Slot::Category, "RDW"));
        let a = compose(&selections).name;
        let b = compose(&selections).name;
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_uppercases() {
        let mut selections = Selections::default();
        selections.set(picked(Slot::DataState, "ex"));
        assert!(compose(&selections).name.as_str().starts_with("EX-"));
    }

    #[test]
    fn test_decompose_recompose_roundtrip() {
        let mut selections = Selections::default();
        selections.set(picked(Slot::DataState, "EX"));
        selections.set(picked(Slot::Category, "RDW"));
        selections.set(picked(Slot::EntityType, "LN"));
        selections.set_desc(DescPosition::First, picked(Slot::EntityDesc, "CUR"));

        let name = compose(&selections).name;
        let recomposed = compose(&decompose(&name));
        assert_eq!(recomposed.name, name);
        assert!(!recomposed.was_truncated());
    }
}
