//! Rect: A rectangle of terminal cells.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split vertically at a given row offset.
    pub fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// Split off the bottom `rows` rows.
    ///
    /// Returns `(top, bottom)`; the bottom part gets at most `rows` rows.
    pub fn split_bottom(&self, rows: u16) -> (Self, Self) {
        self.split_vertical(self.height.saturating_sub(rows))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_rect_split_bottom() {
        let (top, bottom) = Rect::from_size(80, 24).split_bottom(1);
        assert_eq!(top, Rect::new(0, 0, 80, 23));
        assert_eq!(bottom, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_rect_split_bottom_too_many_rows() {
        let (top, bottom) = Rect::from_size(10, 2).split_bottom(5);
        assert!(top.is_empty());
        assert_eq!(bottom, Rect::from_size(10, 2));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let r = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(Rect::ZERO.bottom(), 0);
    }
}
