// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotation drawing helpers.

use charcoal_render::Renderer;
use charcoal_style::Style;
use kurbo::Rect;

use crate::annotation::{DEFAULT_ANNOTATION_DELTA_WIDTH, DEFAULT_ANNOTATION_PADDING};

/// The shape-drawing extension of the renderer capability.
///
/// The core capability is state pushes plus measurement; actually putting
/// ink on a surface needs a path and text API, which chart elements consume
/// through this extension. Paths follow the usual begin/segment/close
/// model, and `fill_stroke` paints the current path with the pushed fill
/// and stroke state.
pub trait DrawRenderer: Renderer {
    /// Starts a new path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current path with a line segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current path.
    fn close(&mut self);

    /// Fills then strokes the current path, consuming it.
    fn fill_stroke(&mut self);

    /// Draws `body` with the pushed text state, anchored at `(x, y)`.
    fn text(&mut self, body: &str, x: f64, y: f64);
}

/// Returns the bounds an annotation label box would occupy.
///
/// `(lx, ly)` is the annotated point in pixels. The box extends right of
/// the point by the callout notch width plus padded text, and is centered
/// vertically on it; the resolved stroke width widens the reported bounds
/// so strokes are not clipped by tight layouts.
pub fn measure_annotation(
    r: &mut dyn Renderer,
    style: &Style,
    lx: f64,
    ly: f64,
    label: &str,
) -> Rect {
    style.write_to_renderer(r);
    let text_box = r.measure_text(label);
    let text_width = text_box.width();
    let half_text_height = 0.5 * text_box.height();

    let padding = style.padding_or(DEFAULT_ANNOTATION_PADDING);
    let stroke_width = style.stroke_width_or(None);

    let top = ly - (padding.y0 + half_text_height);
    let right =
        lx + padding.x0 + padding.x1 + text_width + DEFAULT_ANNOTATION_DELTA_WIDTH + stroke_width;
    let bottom = ly + (padding.y1 + half_text_height);

    Rect::new(lx, top, right, bottom)
}

/// Draws an annotation: a filled, stroked callout box with `label` inside,
/// pointing at `(lx, ly)`.
pub fn draw_annotation(r: &mut dyn DrawRenderer, style: &Style, lx: f64, ly: f64, label: &str) {
    style.text_options().write_text_options_to_renderer(r);
    let text_box = r.measure_text(label);
    let text_width = text_box.width();
    let half_text_height = 0.5 * text_box.height();

    let padding = style.padding_or(DEFAULT_ANNOTATION_PADDING);

    let text_x = lx + padding.x0 + DEFAULT_ANNOTATION_DELTA_WIDTH;
    let text_y = ly + half_text_height;

    let notch_x = lx + DEFAULT_ANNOTATION_DELTA_WIDTH;
    let top = ly - (padding.y0 + half_text_height);
    let right = lx + padding.x0 + padding.x1 + text_width + DEFAULT_ANNOTATION_DELTA_WIDTH;
    let bottom = ly + (padding.y1 + half_text_height);

    style.fill_and_stroke_options().write_drawing_options_to_renderer(r);
    r.move_to(lx, ly);
    r.line_to(notch_x, top);
    r.line_to(right, top);
    r.line_to(right, bottom);
    r.line_to(notch_x, bottom);
    r.line_to(lx, ly);
    r.close();
    r.fill_stroke();

    style.text_options().write_text_options_to_renderer(r);
    r.text(label, text_x, text_y);
}
