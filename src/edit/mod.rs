//! Edit module: Interactive painting.
//!
//! A shell forwards pointer events in its own display coordinates; the
//! [`EditController`] maps them onto image pixels through a
//! [`DisplayMapping`] and paints, subject to the current [`EditMode`].
//! The mapping is recomputed for every event.

mod controller;
mod mapping;

pub use controller::{EditController, EditMode, EditOutcome, PointerEvent};
pub use mapping::DisplayMapping;
