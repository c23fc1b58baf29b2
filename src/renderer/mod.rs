//! 2D rendering module
//!
//! Draws the simulation through the [`Surface`] trait so the same frame code
//! targets the browser canvas and the headless recorder.

pub mod frame;
pub mod surface;

pub use frame::draw_frame;
pub use surface::{DrawCommand, RecordingSurface, Rect, Surface};
