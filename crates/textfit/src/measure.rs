//! Text measurement seam between the fitting core and a text engine.
//!
//! The core never shapes or rasterizes text itself; it only asks a backend
//! how large a block of text would be at a given font size and wrap width.

use crate::font::FontDescriptor;
use crate::primitives::MeasuredSize;

/// Request to measure the bounding box of a block of text.
#[derive(Debug, Clone)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    pub font: &'a FontDescriptor,
    /// Maximum horizontal extent before text breaks to a new line.
    /// `None` measures a single unwrapped line.
    pub wrap_width: Option<f32>,
}

/// Backend-agnostic text measurement.
///
/// Implementations must be deterministic for identical inputs: the fitting
/// search re-measures after every font-size change and assumes the same
/// inputs always produce the same box. `&mut self` because real engines keep
/// shaping caches.
pub trait TextMeasurer {
    /// Measure the bounding box of `req.text` laid out at `req.font`'s size,
    /// wrapped at `req.wrap_width` if given.
    fn measure(&mut self, req: MeasureRequest<'_>) -> MeasuredSize;
}
