/// Font family selection, backend-resolved.
///
/// The generic families map to whatever the text engine considers its default
/// sans-serif/serif/monospace face; `Name` requests a specific family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    Name(String),
}

/// Font style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A font family/style reference plus a size in pixels.
///
/// Descriptors have value semantics: deriving a new size via [`with_size`]
/// produces a fresh descriptor and never mutates the original. The fitting
/// loop relies on this to keep the caller's initial font untouched.
///
/// [`with_size`]: FontDescriptor::with_size
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl FontDescriptor {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            style: FontStyle::Normal,
            size,
        }
    }

    /// Create a descriptor for a named family
    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self::new(FontFamily::Name(family.into()), size)
    }

    /// Set the style
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Derive a descriptor with the same family and style at a new size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            style: self.style,
            size,
        }
    }
}
