//! `EditController`: Edit-mode gating and pointer-driven painting.

use super::mapping::DisplayMapping;
use crate::error::Result;
use crate::image::ImageModel;

/// Whether pointer events may modify the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Pointer events are ignored.
    #[default]
    ViewOnly,
    /// Pointer events paint pixels.
    Editing,
}

/// A pointer position in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// Horizontal display coordinate.
    pub x: u16,
    /// Vertical display coordinate.
    pub y: u16,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOutcome {
    /// No image is loaded, or the controller is view-only.
    Ignored,
    /// The point is outside the rendered image.
    OutsideImage,
    /// The pixel at (row, col) was painted.
    Painted {
        /// Painted row.
        row: u16,
        /// Painted column.
        col: u16,
    },
}

impl EditOutcome {
    /// Whether the shell should re-render.
    pub const fn needs_redraw(self) -> bool {
        matches!(self, Self::Painted { .. })
    }
}

/// Translates pointer events into paint operations on an [`ImageModel`].
///
/// The controller holds only the edit mode. The image stays with the
/// caller and is borrowed for the duration of a single event.
///
/// The default flow only ever switches into [`EditMode::Editing`] (after a
/// new blank canvas is created); [`set_edit_mode`](Self::set_edit_mode)
/// is there for shells that want to switch back.
#[derive(Debug, Clone, Default)]
pub struct EditController {
    mode: EditMode,
}

impl EditController {
    /// Create a view-only controller.
    pub const fn new() -> Self {
        Self {
            mode: EditMode::ViewOnly,
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Whether pointer events paint.
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing)
    }

    /// Switch pointer painting on or off.
    pub const fn set_edit_mode(&mut self, editing: bool) {
        self.mode = if editing {
            EditMode::Editing
        } else {
            EditMode::ViewOnly
        };
    }

    /// Switch pointer painting on.
    pub const fn enter_edit_mode(&mut self) {
        self.mode = EditMode::Editing;
    }

    /// Handle a pointer event at display `(display_x, display_y)`.
    ///
    /// `scale_factor` is the display height budget for the image and
    /// `border_offset` the inset of the image from the display origin.
    pub fn handle_pointer_event(
        &self,
        image: Option<&mut ImageModel>,
        display_x: u16,
        display_y: u16,
        scale_factor: u16,
        border_offset: u16,
    ) -> Result<EditOutcome> {
        self.handle(
            image,
            PointerEvent::new(display_x, display_y),
            DisplayMapping::new(scale_factor, border_offset),
        )
    }

    /// Handle a pointer event with a prepared mapping.
    pub fn handle(
        &self,
        image: Option<&mut ImageModel>,
        event: PointerEvent,
        mapping: DisplayMapping,
    ) -> Result<EditOutcome> {
        let Some(image) = image else {
            return Ok(EditOutcome::Ignored);
        };
        if !self.is_editing() {
            return Ok(EditOutcome::Ignored);
        }

        let Some((row, col)) = mapping.locate(event.x, event.y, image.width(), image.height())
        else {
            return Ok(EditOutcome::OutsideImage);
        };

        image.paint(row, col)?;
        tracing::trace!(target: "limg::edit", row, col, x = event.x, y = event.y, "painted pixel");
        Ok(EditOutcome::Painted { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Format;

    fn canvas() -> ImageModel {
        ImageModel::new_blank(4, 3, Format::Bitonal).unwrap()
    }

    fn editing() -> EditController {
        let mut controller = EditController::new();
        controller.enter_edit_mode();
        controller
    }

    #[test]
    fn test_starts_view_only() {
        let controller = EditController::new();
        assert_eq!(controller.mode(), EditMode::ViewOnly);
        assert!(!controller.is_editing());
        assert_eq!(EditController::default().mode(), EditMode::ViewOnly);
    }

    #[test]
    fn test_no_image_is_ignored() {
        let outcome = editing().handle_pointer_event(None, 50, 50, 300, 9).unwrap();
        assert_eq!(outcome, EditOutcome::Ignored);
    }

    #[test]
    fn test_view_only_is_ignored() {
        let mut image = canvas();
        let controller = EditController::new();
        let outcome = controller
            .handle_pointer_event(Some(&mut image), 9, 9, 300, 9)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(image, canvas());
    }

    #[test]
    fn test_paints_translated_pixel() {
        let mut image = canvas();
        // height 3 → 100 units per pixel; (x=9+250, y=9+150) → (row 1, col 2)
        let outcome = editing()
            .handle_pointer_event(Some(&mut image), 259, 159, 300, 9)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Painted { row: 1, col: 2 });
        assert!(outcome.needs_redraw());
        assert_eq!(image.get(1, 2).unwrap(), 1);
        assert_eq!(image.buffer().count(1), 1);
    }

    #[test]
    fn test_outside_image_leaves_model_unchanged() {
        let mut image = canvas();
        let controller = editing();
        for (x, y) in [(409, 9), (9, 309), (2, 50), (50, 2), (u16::MAX, u16::MAX)] {
            let outcome = controller
                .handle_pointer_event(Some(&mut image), x, y, 300, 9)
                .unwrap();
            assert_eq!(outcome, EditOutcome::OutsideImage, "({x}, {y})");
            assert!(!outcome.needs_redraw());
        }
        assert_eq!(image, canvas());
    }

    #[test]
    fn test_set_edit_mode_back_to_view_only() {
        let mut image = canvas();
        let mut controller = editing();
        controller.set_edit_mode(false);
        assert_eq!(controller.mode(), EditMode::ViewOnly);
        let outcome = controller
            .handle_pointer_event(Some(&mut image), 9, 9, 300, 9)
            .unwrap();
        assert_eq!(outcome, EditOutcome::Ignored);

        controller.set_edit_mode(true);
        assert!(controller.is_editing());
    }

    #[test]
    fn test_repeated_event_is_idempotent() {
        let mut image = canvas();
        let controller = editing();
        let event = PointerEvent::new(20, 20);
        let mapping = DisplayMapping::new(300, 9);
        controller.handle(Some(&mut image), event, mapping).unwrap();
        let once = image.clone();
        controller.handle(Some(&mut image), event, mapping).unwrap();
        assert_eq!(image, once);
    }
}
