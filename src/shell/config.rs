//! Shell configuration and colours.

use std::time::Duration;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Configuration for the terminal shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Cells between the screen edge and the image.
    pub border_offset: u16,
    /// Rows reserved for the status line at the bottom.
    pub status_rows: u16,
    /// Colour of foreground (painted) pixels.
    pub foreground: Rgb,
    /// Colour of background pixels.
    pub background: Rgb,
    /// Colour of error messages in the status line.
    pub error: Rgb,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            border_offset: 1,
            status_rows: 1,
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            error: Rgb::from_u32(0xE0_40_40),
            alternate_screen: true,
        }
    }
}
