//! Display mapping: Forward transform from display coordinates to pixels.

/// How an image is laid out on the display.
///
/// The image is drawn `border_offset` units from the top-left corner and
/// scaled so that `height_budget` display units cover its height. Each
/// pixel becomes a square of [`pixel_size`](Self::pixel_size) units.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DisplayMapping {
    /// Display units available for the image height.
    pub height_budget: u16,
    /// Fixed inset between the display origin and the image.
    pub border_offset: u16,
}

impl DisplayMapping {
    /// Create a new mapping.
    #[inline]
    pub const fn new(height_budget: u16, border_offset: u16) -> Self {
        Self {
            height_budget,
            border_offset,
        }
    }

    /// Display units per image pixel.
    ///
    /// Integer division: when the budget is not a multiple of the height
    /// the image comes out slightly short of the budget, and the leftover
    /// units at the bottom/right map past the last pixel. An image taller
    /// than the budget gets a size of 1 instead of 0.
    #[inline]
    pub const fn pixel_size(self, image_height: u16) -> u16 {
        if image_height == 0 {
            return 1;
        }
        let size = self.height_budget / image_height;
        if size == 0 {
            1
        } else {
            size
        }
    }

    /// Translate a display point to an unbounded `(row, col)`.
    ///
    /// Returns `None` for points inside the border, above or left of the
    /// image.
    #[inline]
    pub const fn translate(self, x: u16, y: u16, image_height: u16) -> Option<(u16, u16)> {
        let size = self.pixel_size(image_height);
        let (Some(dx), Some(dy)) = (
            x.checked_sub(self.border_offset),
            y.checked_sub(self.border_offset),
        ) else {
            return None;
        };
        Some((dy / size, dx / size))
    }

    /// Translate a display point to the `(row, col)` of the pixel under it,
    /// or `None` if the point is outside a `width`×`height` image.
    #[inline]
    pub const fn locate(self, x: u16, y: u16, width: u16, height: u16) -> Option<(u16, u16)> {
        match self.translate(x, y, height) {
            Some((row, col)) if row < height && col < width => Some((row, col)),
            _ => None,
        }
    }
}
