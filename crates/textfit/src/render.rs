use crate::font::FontDescriptor;
use crate::primitives::{Anchor, Color};

/// Request to draw a block of text into a render target.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub text: &'a str,
    pub font: &'a FontDescriptor,
    pub color: Color,
    pub anchor: Anchor,
    /// Wrap width used for layout; must match the width the text was
    /// measured with for the placement to come out as fitted.
    pub wrap_width: Option<f32>,
}

/// Backend-agnostic text drawing.
///
/// `Target` is whatever pixel surface the backend composites into. The target
/// is taken and returned by value so draws can be chained.
pub trait TextRenderer {
    type Target;

    /// Draw `req.text` into `target`, placed according to `req.anchor`.
    fn render_text(&mut self, target: Self::Target, req: RenderRequest<'_>) -> Self::Target;
}
