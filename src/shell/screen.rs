//! Screen: Layout and full-frame rendering of the editor.
//!
//! Every canvas cell is resolved through the same [`DisplayMapping`] the
//! edit controller uses for pointer events, so what is drawn under a cell
//! is exactly the pixel a click on that cell paints.

use super::config::{Rgb, ShellConfig};
use super::output::OutputBuffer;
use crate::edit::DisplayMapping;
use crate::image::ImageModel;
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Where the canvas and the status line sit on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Area the image is drawn into.
    pub canvas: Rect,
    /// Status line area at the bottom.
    pub status: Rect,
    /// Display-to-pixel mapping for the canvas.
    pub mapping: DisplayMapping,
}

impl ScreenLayout {
    /// Compute the layout for a terminal of the given size.
    ///
    /// The image height budget is the canvas height minus the border on
    /// both sides.
    pub fn new(width: u16, height: u16, config: &ShellConfig) -> Self {
        let (canvas, status) = Rect::from_size(width, height).split_bottom(config.status_rows);
        let budget = canvas
            .height
            .saturating_sub(config.border_offset.saturating_mul(2));
        Self {
            canvas,
            status,
            mapping: DisplayMapping::new(budget, config.border_offset),
        }
    }

    /// Pixel shown at terminal cell (x, y), if any.
    pub fn pixel_at(&self, x: u16, y: u16, image: &ImageModel) -> Option<(u16, u16)> {
        if !self.canvas.contains(x, y) {
            return None;
        }
        self.mapping.locate(x, y, image.width(), image.height())
    }
}

/// Everything needed to draw one frame.
#[derive(Debug)]
pub struct View<'a> {
    /// Screen layout.
    pub layout: ScreenLayout,
    /// Image to draw, if one is loaded.
    pub image: Option<&'a ImageModel>,
    /// Status line text.
    pub status: String,
    /// Whether the status line reports an error.
    pub status_is_error: bool,
}

/// Full-frame renderer.
pub struct Screen {
    output: OutputBuffer,
    foreground: Rgb,
    background: Rgb,
    error: Rgb,
}

impl Screen {
    /// Create a renderer using the configured palette.
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            output: OutputBuffer::new(),
            foreground: config.foreground,
            background: config.background,
            error: config.error,
        }
    }

    /// Render a full frame and return the bytes to write.
    pub fn render(&mut self, view: &View<'_>) -> &OutputBuffer {
        self.output.clear();
        self.output.reset_attrs();
        self.output.cursor_hide();
        self.output.clear_screen();

        self.render_canvas(view);
        self.render_status(view);

        &self.output
    }

    /// Colour of a pixel value: foreground value → foreground colour,
    /// anything else → background colour.
    fn color_of(&self, image: &ImageModel, value: u8) -> Rgb {
        if value == image.format().foreground() {
            self.foreground
        } else {
            self.background
        }
    }

    fn render_canvas(&mut self, view: &View<'_>) {
        let canvas = view.layout.canvas;
        for y in canvas.y..canvas.bottom() {
            self.output.cursor_move(canvas.x, y);
            // Outer None: nothing emitted yet on this row.
            let mut current: Option<Option<Rgb>> = None;

            for x in canvas.x..canvas.right() {
                let color = view.image.and_then(|image| {
                    let (row, col) = view.layout.pixel_at(x, y, image)?;
                    let value = image.get(row, col).ok()?;
                    Some(self.color_of(image, value))
                });

                if current != Some(color) {
                    match color {
                        Some(rgb) => self.output.set_bg(rgb),
                        None => self.output.reset_attrs(),
                    }
                    current = Some(color);
                }
                self.output.write_spaces(1);
            }
            self.output.reset_attrs();
        }
    }

    fn render_status(&mut self, view: &View<'_>) {
        let area = view.layout.status;
        if area.is_empty() {
            return;
        }

        self.output.cursor_move(area.x, area.y);
        if view.status_is_error {
            self.output.set_fg(self.error);
        }
        let used = draw_text(&mut self.output, &view.status, area.width);
        self.output
            .write_spaces(usize::from(area.width.saturating_sub(used)));
        self.output.reset_attrs();

        for y in area.y + 1..area.bottom() {
            self.output.cursor_move(area.x, y);
            self.output.write_spaces(usize::from(area.width));
        }
    }
}

/// Write `text`, clipped to `max_width` columns.
///
/// Returns the number of columns used.
fn draw_text(output: &mut OutputBuffer, text: &str, max_width: u16) -> u16 {
    let mut col: u16 = 0;
    for grapheme in text.graphemes(true) {
        // Control characters would move the cursor and corrupt the frame.
        if grapheme.chars().any(char::is_control) {
            continue;
        }
        let width = u16::try_from(grapheme.width()).unwrap_or(u16::MAX);
        if col.saturating_add(width) > max_width {
            break;
        }
        output.write_str(grapheme);
        col += width;
    }
    col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Format;

    const ROWS: u16 = 8;
    const COLS: u16 = 12;

    fn config() -> ShellConfig {
        ShellConfig::default()
    }

    fn parse(bytes: &[u8]) -> vt100::Parser {
        let mut parser = vt100::Parser::new(ROWS, COLS, 0);
        parser.process(bytes);
        parser
    }

    fn bg(parser: &vt100::Parser, row: u16, col: u16) -> vt100::Color {
        parser.screen().cell(row, col).unwrap().bgcolor()
    }

    #[test]
    fn test_layout_budget() {
        let layout = ScreenLayout::new(COLS, ROWS, &config());
        assert_eq!(layout.canvas, Rect::new(0, 0, COLS, ROWS - 1));
        assert_eq!(layout.status, Rect::new(0, ROWS - 1, COLS, 1));
        // 7 canvas rows minus a 1-cell border on each side.
        assert_eq!(layout.mapping, DisplayMapping::new(5, 1));
    }

    #[test]
    fn test_pixel_at_ignores_status_line() {
        let layout = ScreenLayout::new(COLS, ROWS, &config());
        let image = ImageModel::new_blank(1, 1, Format::Bitonal).unwrap();
        // pixel_size is 5, so the pixel block spans rows 1..6 only.
        assert_eq!(layout.pixel_at(1, 1, &image), Some((0, 0)));
        assert_eq!(layout.pixel_at(5, 5, &image), Some((0, 0)));
        assert_eq!(layout.pixel_at(6, 1, &image), None);
        assert_eq!(layout.pixel_at(1, ROWS - 1, &image), None);
    }

    #[test]
    fn test_render_bitonal_colors() {
        let mut image = ImageModel::new_blank(2, 5, Format::Bitonal).unwrap();
        image.paint(0, 1).unwrap();
        image.paint(4, 0).unwrap();

        let view = View {
            layout: ScreenLayout::new(COLS, ROWS, &config()),
            image: Some(&image),
            status: "ready".to_string(),
            status_is_error: false,
        };
        let mut screen = Screen::new(&config());
        let parser = parse(screen.render(&view).as_bytes());

        let black = vt100::Color::Rgb(0, 0, 0);
        let white = vt100::Color::Rgb(255, 255, 255);
        // 5 rows in a budget of 5 → one cell per pixel, offset by the border.
        assert_eq!(bg(&parser, 1, 1), white);
        assert_eq!(bg(&parser, 1, 2), black);
        assert_eq!(bg(&parser, 5, 1), black);
        assert_eq!(bg(&parser, 5, 2), white);
        // Border and area right of the image keep the terminal default.
        assert_eq!(bg(&parser, 0, 0), vt100::Color::Default);
        assert_eq!(bg(&parser, 1, 3), vt100::Color::Default);

        assert!(parser.screen().contents().contains("ready"));
    }

    #[test]
    fn test_render_scales_pixels() {
        let mut image = ImageModel::new_blank(1, 1, Format::Bitonal).unwrap();
        image.paint(0, 0).unwrap();
        let view = View {
            layout: ScreenLayout::new(COLS, ROWS, &config()),
            image: Some(&image),
            status: String::new(),
            status_is_error: false,
        };
        let mut screen = Screen::new(&config());
        let parser = parse(screen.render(&view).as_bytes());

        let black = vt100::Color::Rgb(0, 0, 0);
        for row in 1..=5 {
            for col in 1..=5 {
                assert_eq!(bg(&parser, row, col), black, "({row}, {col})");
            }
        }
        assert_eq!(bg(&parser, 1, 6), vt100::Color::Default);
        assert_eq!(bg(&parser, 6, 1), vt100::Color::Default);
    }

    #[test]
    fn test_render_without_image() {
        let view = View {
            layout: ScreenLayout::new(COLS, ROWS, &config()),
            image: None,
            status: "No image".to_string(),
            status_is_error: true,
        };
        let mut screen = Screen::new(&config());
        let parser = parse(screen.render(&view).as_bytes());

        assert_eq!(bg(&parser, 2, 2), vt100::Color::Default);
        let cell = parser.screen().cell(ROWS - 1, 0).unwrap();
        assert_eq!(cell.contents(), "N");
        assert_eq!(cell.fgcolor(), vt100::Color::Rgb(0xE0, 0x40, 0x40));
    }

    #[test]
    fn test_draw_text_clips_wide_graphemes() {
        let mut out = OutputBuffer::new();
        assert_eq!(draw_text(&mut out, "ab日本", 5), 4);
        assert_eq!(out.as_bytes(), "ab日".as_bytes());

        let mut out = OutputBuffer::new();
        assert_eq!(draw_text(&mut out, "x\ty", 10), 2);
        assert_eq!(out.as_bytes(), b"xy");
    }
}
