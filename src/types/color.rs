//! Layer color representation

use std::fmt;

/// A layer color as true-color RGB components (0-255)
///
/// New layer records default to white, matching the host application's
/// default for freshly created layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Get the RGB components as a tuple
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Render as the truecolor argument of the `-LAYER` command (`r,g,b`)
    pub fn truecolor_arg(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Common color constants
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
