//! The fixed-width layer name key

use super::field::{Field, FILLER, NAME_WIDTH};
use std::fmt;

/// A finalized layer name
///
/// Always exactly [`NAME_WIDTH`] characters, uppercased. `LayerName` is the
/// unique key of the layer record store; because every instance goes through
/// [`LayerName::finalize`], two names that render the same compare equal and
/// hash the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerName(String);

impl LayerName {
    /// Width of every layer name, in characters
    pub const WIDTH: usize = NAME_WIDTH;

    /// Finalize a raw assembled string into a layer name.
    ///
    /// Uppercases the input, cuts it at [`NAME_WIDTH`] characters if longer,
    /// and right-pads with [`FILLER`] if shorter. Returns the name and
    /// whether the input was cut. The cut is lossy and can land inside the
    /// last entity-description field; callers surface it as a truncation
    /// notification rather than an error.
    pub fn finalize(raw: &str) -> (Self, bool) {
        let upper = raw.to_uppercase();
        let truncated = upper.chars().count() > NAME_WIDTH;
        let mut name: String = upper.chars().take(NAME_WIDTH).collect();
        while name.chars().count() < NAME_WIDTH {
            name.push(FILLER);
        }
        (LayerName(name), truncated)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the text of one fixed-offset field
    pub fn field(&self, field: Field) -> String {
        self.0
            .chars()
            .skip(field.offset())
            .take(field.width())
            .collect()
    }
}

impl AsRef<str> for LayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for LayerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LayerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_pads_with_filler() {
        let (name, truncated) = LayerName::finalize("E-RDW-LN-CURB");
        assert_eq!(name, "E-RDW-LN-CURBZZZZ");
        assert!(!truncated);
    }

    #[test]
    fn test_finalize_uppercases() {
        let (name, _) = LayerName::finalize("e-rdw-ln-curb");
        assert_eq!(name, "E-RDW-LN-CURBZZZZ");
    }

    #[test]
    fn test_finalize_truncates_at_width() {
        let (name, truncated) = LayerName::finalize("AB-CDE-FG-HIJZZZZZZZ");
        assert_eq!(name, "AB-CDE-FG-HIJZZZZ");
        assert_eq!(name.as_str().chars().count(), LayerName::WIDTH);
        assert!(truncated);
    }

    #[test]
    fn test_finalize_exact_width_is_not_truncated() {
        let (name, truncated) = LayerName::finalize("TESTLAYER00000000");
        assert_eq!(name, "TESTLAYER00000000");
        assert!(!truncated);
    }

    #[test]
    fn test_field_extraction() {
        let (name, _) = LayerName::finalize("ABCDEFGHIJKLMNOPQ");
        assert_eq!(name.field(Field::DataState), "AB");
        assert_eq!(name.field(Field::Category), "CDE");
        assert_eq!(name.field(Field::EntityType), "FG");
        assert_eq!(name.field(Field::EntityDesc1), "HIJ");
        assert_eq!(name.field(Field::EntityDesc2), "KLM");
        assert_eq!(name.field(Field::EntityDesc3), "NOPQ");
    }
}
