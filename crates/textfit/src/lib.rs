//! # textfit
//!
//! Backend agnostic text-to-canvas fitting.
//!
//! This crate provides the core data model and the font-size search that makes
//! a block of text fill a rectangular canvas as closely as possible without
//! overflowing it. Measurement and rasterization are delegated to backend
//! crates through the [`TextMeasurer`] and [`TextRenderer`] traits, so the
//! core has zero dependencies on any specific text engine.

mod error;
mod fit;
mod font;
mod measure;
mod primitives;
mod render;

pub use error::*;
pub use fit::*;
pub use font::*;
pub use measure::*;
pub use primitives::*;
pub use render::*;
