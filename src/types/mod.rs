//! Core value types for layer naming

pub mod color;
pub mod field;
pub mod layer_name;

pub use color::Color;
pub use field::{Field, FILLER, NAME_WIDTH};
pub use layer_name::LayerName;
