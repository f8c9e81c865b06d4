//! Layout module: Screen rectangles for the terminal shell.

mod rect;

pub use rect::Rect;
