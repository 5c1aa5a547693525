//! Fixed-width layout of a layer name
//!
//! A finalized layer name is always exactly [`NAME_WIDTH`] characters, laid
//! out as six fields at fixed offsets. Fields shorter than their width are
//! right-padded with [`FILLER`].

use std::fmt;
use std::ops::Range;

/// Padding character used to fill a field to its required width.
pub const FILLER: char = 'Z';

/// Total width of a finalized layer name.
pub const NAME_WIDTH: usize = 17;

/// One of the six fixed-width fields of a layer name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Data state, 2 characters at offset 0
    DataState,
    /// Category, 3 characters at offset 2
    Category,
    /// Entity type, 2 characters at offset 5
    EntityType,
    /// First entity-description part, 3 characters at offset 7
    EntityDesc1,
    /// Second entity-description part, 3 characters at offset 10
    EntityDesc2,
    /// Third entity-description part, 4 characters at offset 13
    EntityDesc3,
}

impl Field {
    /// All fields in layout order
    pub const ALL: [Field; 6] = [
        Field::DataState,
        Field::Category,
        Field::EntityType,
        Field::EntityDesc1,
        Field::EntityDesc2,
        Field::EntityDesc3,
    ];

    /// Character offset of this field in the finalized name
    pub const fn offset(self) -> usize {
        match self {
            Field::DataState => 0,
            Field::Category => 2,
            Field::EntityType => 5,
            Field::EntityDesc1 => 7,
            Field::EntityDesc2 => 10,
            Field::EntityDesc3 => 13,
        }
    }

    /// Width of this field in characters
    pub const fn width(self) -> usize {
        match self {
            Field::DataState => 2,
            Field::Category => 3,
            Field::EntityType => 2,
            Field::EntityDesc1 => 3,
            Field::EntityDesc2 => 3,
            Field::EntityDesc3 => 4,
        }
    }

    /// Character range of this field in the finalized name
    pub fn range(self) -> Range<usize> {
        self.offset()..self.offset() + self.width()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::DataState => "DataState",
            Field::Category => "Category",
            Field::EntityType => "EntityType",
            Field::EntityDesc1 => "EntityDesc1",
            Field::EntityDesc2 => "EntityDesc2",
            Field::EntityDesc3 => "EntityDesc3",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_contiguous() {
        let mut next = 0;
        for field in Field::ALL {
            assert_eq!(field.offset(), next, "{field} starts at {next}");
            next += field.width();
        }
        assert_eq!(next, NAME_WIDTH);
    }

    #[test]
    fn test_field_range() {
        assert_eq!(Field::DataState.range(), 0..2);
        assert_eq!(Field::EntityDesc3.range(), 13..17);
    }
}
