// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer capability consumed by Charcoal's style and text layout.
//!
//! Chart elements never talk to a concrete drawing backend. They push
//! resolved style attributes through the [`Renderer`] trait and ask it to
//! measure text; rasterization, font parsing, and color science all live
//! downstream. Keeping this interface narrow is what makes the style
//! cascade and the wrap algorithms testable without a real canvas.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - backend-agnostic (a shaping engine, an SVG writer, and the bundled
//!   [`HeuristicRenderer`] all implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

use kurbo::Rect;
use peniko::Color;
use smallvec::SmallVec;

/// An opaque reference to a font.
///
/// Charcoal does not parse font files; a font is either a generic family or
/// a name that the backend resolves however it likes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name as a CSS-style font family string.
    #[must_use]
    pub fn family_name(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// The drawing-state capability that chart elements push style into.
///
/// A renderer instance holds the current stroke/fill/text state and is
/// mutated in place; one logical render must not share an instance with
/// another without serializing its push-then-measure-or-draw sequences.
///
/// [`Renderer::measure_text`] is infallible within this contract: a backend
/// that cannot measure has no business implementing the trait. It must also
/// be pure given unchanged font state, so layout stays deterministic.
pub trait Renderer {
    /// Sets the stroke color for subsequent draw calls.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the stroke width.
    fn set_stroke_width(&mut self, width: f64);

    /// Sets the stroke dash pattern; an empty pattern means solid.
    fn set_stroke_dash_array(&mut self, dash_array: &[f64]);

    /// Sets the fill color for subsequent draw calls.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the active font; `None` falls back to the backend default.
    fn set_font(&mut self, font: Option<FontFamily>);

    /// Sets the font color.
    fn set_font_color(&mut self, color: Color);

    /// Sets the font size in points.
    fn set_font_size(&mut self, size: f64);

    /// Returns the pixel bounding box of `text` under the current font
    /// state, anchored at the origin.
    fn measure_text(&mut self, text: &str) -> Rect;
}

/// A renderer that only retains state and measures heuristically.
///
/// Measurement assumes an average glyph width of ~0.6 em and a line height
/// of 1 em, which is deterministic and good enough for demos and for
/// exercising the wrap algorithms in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicRenderer {
    /// Current stroke color.
    pub stroke_color: Color,
    /// Current stroke width.
    pub stroke_width: f64,
    /// Current stroke dash pattern; empty means solid.
    pub stroke_dash_array: SmallVec<[f64; 4]>,
    /// Current fill color.
    pub fill_color: Color,
    /// Current font, if any was pushed.
    pub font: Option<FontFamily>,
    /// Current font color.
    pub font_color: Color,
    /// Current font size in points.
    pub font_size: f64,
}

impl Default for HeuristicRenderer {
    fn default() -> Self {
        Self {
            stroke_color: Color::TRANSPARENT,
            stroke_width: 0.0,
            stroke_dash_array: SmallVec::new(),
            fill_color: Color::TRANSPARENT,
            font: None,
            font_color: Color::TRANSPARENT,
            // Measurement must work before any style is pushed.
            font_size: 12.0,
        }
    }
}

impl HeuristicRenderer {
    /// Creates a heuristic renderer with default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeuristicRenderer {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn set_stroke_dash_array(&mut self, dash_array: &[f64]) {
        self.stroke_dash_array = SmallVec::from_slice(dash_array);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_font(&mut self, font: Option<FontFamily>) {
        self.font = font;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        let width = 0.6 * self.font_size * text.chars().count() as f64;
        Rect::new(0.0, 0.0, width, self.font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn measurement_tracks_pushed_font_size() {
        let mut r = HeuristicRenderer::new();
        assert_eq!(r.measure_text("abcd").width(), 0.6 * 12.0 * 4.0);

        r.set_font_size(10.0);
        let rect = r.measure_text("abcd");
        assert_eq!(rect.width(), 24.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn measurement_counts_codepoints_not_bytes() {
        let mut r = HeuristicRenderer::new();
        r.set_font_size(10.0);
        // Five codepoints, seven bytes.
        assert_eq!(r.measure_text("héllö").width(), 30.0);
        assert_eq!(r.measure_text("日本語").width(), 18.0);
    }

    #[test]
    fn named_family_round_trips_through_family_name() {
        let font = FontFamily::Named(Arc::from("Inter"));
        assert_eq!(font.family_name(), "Inter");
        assert_eq!(FontFamily::SansSerif.family_name(), "sans-serif");
    }
}
