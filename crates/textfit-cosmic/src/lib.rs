//! `cosmic-text` implementation of the `textfit` measurement and rendering
//! seams.
//!
//! The engine shapes with cosmic-text, wraps at word boundaries when a wrap
//! width is given, and composites glyph coverage masks into an
//! [`image::RgbaImage`] on the CPU. It owns the `FontSystem` and swash cache;
//! callers that share one engine across threads must serialize access
//! themselves.

use cosmic_text::{fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Wrap};
use image::{Rgba, RgbaImage};
use textfit::{
    FontDescriptor, FontFamily, FontStyle, MeasureRequest, MeasuredSize, RenderRequest,
    TextMeasurer, TextRenderer,
};

/// Line height as a multiple of the font size, matching common UI defaults.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Concrete text engine backed by `cosmic-text`.
pub struct CosmicEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl CosmicEngine {
    /// Create an engine over the system font database.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Create an engine over an explicit font database. Useful for tests and
    /// for deployments that ship their own fonts.
    pub fn with_db(db: fontdb::Database) -> Self {
        Self {
            font_system: FontSystem::new_with_locale_and_db("en-US".into(), db),
            swash_cache: SwashCache::new(),
        }
    }

    /// Load raw font bytes into the engine's database.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
    }

    /// Access the underlying `FontSystem` if callers want to customize further.
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    fn shaped_buffer(
        &mut self,
        text: &str,
        font: &FontDescriptor,
        wrap_width: Option<f32>,
    ) -> Buffer {
        let metrics = Metrics::new(font.size, font.size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        match wrap_width {
            Some(width) => {
                buffer.set_wrap(&mut self.font_system, Wrap::Word);
                buffer.set_size(&mut self.font_system, Some(width), None);
            }
            None => {
                // Single unwrapped line: no wrapping, unbounded width.
                buffer.set_wrap(&mut self.font_system, Wrap::None);
                buffer.set_size(&mut self.font_system, Some(f32::MAX), None);
            }
        }

        let mut attrs = Attrs::new().family(family(&font.family));
        if font.style == FontStyle::Italic {
            attrs = attrs.style(cosmic_text::Style::Italic);
        }

        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for CosmicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicEngine {
    fn measure(&mut self, req: MeasureRequest<'_>) -> MeasuredSize {
        let buffer = self.shaped_buffer(req.text, req.font, req.wrap_width);
        block_size(&buffer)
    }
}

impl TextRenderer for CosmicEngine {
    type Target = RgbaImage;

    fn render_text(&mut self, mut target: RgbaImage, req: RenderRequest<'_>) -> RgbaImage {
        let mut buffer = self.shaped_buffer(req.text, req.font, req.wrap_width);

        let block = block_size(&buffer);
        let origin = req.anchor.origin(block.width, block.height);
        let origin_x = origin[0].round() as i64;
        let origin_y = origin[1].round() as i64;

        log::debug!(
            "render_text: {} glyph lines, block {:.1}x{:.1} at origin ({}, {})",
            buffer.layout_runs().count(),
            block.width,
            block.height,
            origin_x,
            origin_y,
        );

        let [r, g, b, a] = req.color.to_rgba8();
        let color = cosmic_text::Color::rgba(r, g, b, a);

        let width = target.width() as i64;
        let height = target.height() as i64;

        // `draw` emits coverage-modulated spans in line-box space; offset them
        // by the resolved block origin and clip to the target.
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            color,
            |x, y, w, h, c| {
                let src = [c.r(), c.g(), c.b(), c.a()];
                for dy in 0..h as i64 {
                    for dx in 0..w as i64 {
                        let px = origin_x + x as i64 + dx;
                        let py = origin_y + y as i64 + dy;
                        if px < 0 || py < 0 || px >= width || py >= height {
                            continue;
                        }
                        blend_px(target.get_pixel_mut(px as u32, py as u32), src);
                    }
                }
            },
        );

        target
    }
}

/// Bounding box of every laid-out run in the buffer.
fn block_size(buffer: &Buffer) -> MeasuredSize {
    let mut size = MeasuredSize::default();
    for run in buffer.layout_runs() {
        size.width = size.width.max(run.line_w);
        size.height = size.height.max(run.line_top + run.line_height);
    }
    size
}

fn family(family: &FontFamily) -> Family<'_> {
    match family {
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Serif => Family::Serif,
        FontFamily::Monospace => Family::Monospace,
        FontFamily::Name(name) => Family::Name(name),
    }
}

/// Source-over blend of one straight-alpha pixel.
fn blend_px(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }

    let da = dst[3] as u32;
    for i in 0..3 {
        let s = src[i] as u32;
        let d = dst[i] as u32;
        dst[i] = ((s * sa + d * (255 - sa) + 127) / 255) as u8;
    }
    dst[3] = (sa + da * (255 - sa) / 255).min(255) as u8;
}
