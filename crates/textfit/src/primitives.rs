/// Canvas dimensions in pixels
///
/// Immutable input to the fitting routines. Both dimensions must be positive
/// for a fit to be attempted; [`crate::fit`] rejects zero dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Bounding box of a text block laid out at a given font size and wrap width.
///
/// Produced fresh by every measurement call; results are never cached across
/// font-size changes because changing the size moves the wrap points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredSize {
    pub width: f32,
    pub height: f32,
}

impl MeasuredSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Quantize to 8-bit RGBA channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Placement reference for a rendered text block.
///
/// `position` is the point the block is aligned about: with
/// `HorizontalAlign::Left` the block's left edge sits on `position[0]`, with
/// `HorizontalAlign::Center` the block is centered on it, and so on for the
/// other alignments and the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: [f32; 2],
    pub h_align: HorizontalAlign,
    pub v_align: VerticalAlign,
}

impl Anchor {
    pub const fn new(position: [f32; 2], h_align: HorizontalAlign, v_align: VerticalAlign) -> Self {
        Self {
            position,
            h_align,
            v_align,
        }
    }

    /// Resolve the top-left origin of a block of the given size.
    pub fn origin(&self, block_width: f32, block_height: f32) -> [f32; 2] {
        let x = match self.h_align {
            HorizontalAlign::Left => self.position[0],
            HorizontalAlign::Center => self.position[0] - block_width * 0.5,
            HorizontalAlign::Right => self.position[0] - block_width,
        };

        let y = match self.v_align {
            VerticalAlign::Top => self.position[1],
            VerticalAlign::Center => self.position[1] - block_height * 0.5,
            VerticalAlign::Bottom => self.position[1] - block_height,
        };

        [x, y]
    }
}
