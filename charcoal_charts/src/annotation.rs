// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotation series: labeled points on a chart.

use alloc::string::String;
use alloc::vec::Vec;

use charcoal_render::Renderer;
use charcoal_style::Style;
use kurbo::{Insets, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::draw::{DrawRenderer, draw_annotation, measure_annotation};
use crate::range::Range;

/// Fill color an annotation label box gets unless overridden.
pub const DEFAULT_ANNOTATION_FILL_COLOR: Color = css::WHITE;

/// Font size (points) an annotation label gets unless overridden.
pub const DEFAULT_ANNOTATION_FONT_SIZE: f64 = 10.0;

/// Padding around an annotation label unless overridden.
pub const DEFAULT_ANNOTATION_PADDING: Insets = Insets {
    x0: 5.0,
    y0: 5.0,
    x1: 5.0,
    y1: 5.0,
};

/// Width of the callout notch between the annotated point and its label box.
pub const DEFAULT_ANNOTATION_DELTA_WIDTH: f64 = 10.0;

/// One labeled data point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotation {
    /// X data value of the annotated point.
    pub x_value: f64,
    /// Y data value of the annotated point.
    pub y_value: f64,
    /// Label text.
    pub label: String,
    /// Per-annotation style overrides.
    pub style: Style,
}

/// A series of labels placed over a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationSeries {
    /// Series name.
    pub name: String,
    /// Series-level style overrides.
    pub style: Style,
    /// The labeled points.
    pub annotations: Vec<Annotation>,
}

impl AnnotationSeries {
    /// The style every annotation in this series starts from: annotation
    /// fill/size/padding built-ins, with font and stroke carried over from
    /// the chart-level `defaults`.
    fn style_defaults(&self, defaults: &Style) -> Style {
        Style {
            font: defaults.font.clone(),
            fill_color: Some(DEFAULT_ANNOTATION_FILL_COLOR),
            font_size: Some(DEFAULT_ANNOTATION_FONT_SIZE),
            stroke_color: defaults.stroke_color,
            stroke_width: defaults.stroke_width,
            padding: DEFAULT_ANNOTATION_PADDING,
            ..Style::default()
        }
    }

    /// Whether the series should measure and render at all.
    ///
    /// An entirely-unset style means "use defaults, draw it"; a configured
    /// style must also opt in with `show`.
    fn is_enabled(&self) -> bool {
        self.style.is_zero() || self.style.show
    }

    /// Returns the union of the bounds of every annotation in the series.
    ///
    /// A disabled or empty series returns the inverted sentinel rect
    /// (`x0`/`y0` at `f64::MAX`, `x1`/`y1` at zero), which unions cleanly
    /// with real bounds.
    pub fn measure(
        &self,
        r: &mut dyn Renderer,
        canvas: Rect,
        xrange: &dyn Range,
        yrange: &dyn Range,
        defaults: &Style,
    ) -> Rect {
        let mut bounds = Rect::new(f64::MAX, f64::MAX, 0.0, 0.0);
        if self.is_enabled() {
            let series_style = self.style.inherit_from(&self.style_defaults(defaults));
            for a in &self.annotations {
                let style = a.style.inherit_from(&series_style);
                let lx = canvas.x0 + xrange.translate(a.x_value);
                let ly = canvas.y1 - yrange.translate(a.y_value);
                let ab = measure_annotation(r, &style, lx, ly, &a.label);
                bounds.x0 = bounds.x0.min(ab.x0);
                bounds.y0 = bounds.y0.min(ab.y0);
                bounds.x1 = bounds.x1.max(ab.x1);
                bounds.y1 = bounds.y1.max(ab.y1);
            }
        }
        bounds
    }

    /// Draws every annotation in the series.
    pub fn render(
        &self,
        r: &mut dyn DrawRenderer,
        canvas: Rect,
        xrange: &dyn Range,
        yrange: &dyn Range,
        defaults: &Style,
    ) {
        if self.is_enabled() {
            let series_style = self.style.inherit_from(&self.style_defaults(defaults));
            for a in &self.annotations {
                let style = a.style.inherit_from(&series_style);
                let lx = canvas.x0 + xrange.translate(a.x_value);
                let ly = canvas.y1 - yrange.translate(a.y_value);
                draw_annotation(r, &style, lx, ly, &a.label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    use charcoal_render::{FontFamily, HeuristicRenderer};
    use peniko::color::palette::css;

    use crate::range::LinearRange;

    use super::*;

    fn series(annotations: Vec<Annotation>) -> AnnotationSeries {
        AnnotationSeries {
            name: "labels".to_string(),
            style: Style::default(),
            annotations,
        }
    }

    fn label(x: f64, y: f64, text: &str) -> Annotation {
        Annotation {
            x_value: x,
            y_value: y,
            label: text.to_string(),
            style: Style::default(),
        }
    }

    #[test]
    fn measure_places_the_label_box_beside_the_point() {
        let mut r = HeuristicRenderer::new();
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let xrange = LinearRange::new(0.0, 1.0, 100.0);
        let yrange = LinearRange::new(0.0, 1.0, 100.0);

        let s = series(vec![label(0.5, 0.5, "hi")]);
        let bounds = s.measure(&mut r, canvas, &xrange, &yrange, &Style::default());

        // Point lands at (50, 50); the label "hi" measures 12x10 at the
        // 10 pt annotation default, padded 5 px per side, notch 10 px,
        // plus the resolved 1 px stroke on the right.
        assert_eq!(bounds, Rect::new(50.0, 40.0, 83.0, 60.0));
    }

    #[test]
    fn measure_unions_annotation_bounds() {
        let mut r = HeuristicRenderer::new();
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let xrange = LinearRange::new(0.0, 1.0, 100.0);
        let yrange = LinearRange::new(0.0, 1.0, 100.0);

        let s = series(vec![label(0.5, 0.5, "hi"), label(0.1, 0.9, "yo")]);
        let bounds = s.measure(&mut r, canvas, &xrange, &yrange, &Style::default());
        assert_eq!(bounds, Rect::new(10.0, 0.0, 83.0, 60.0));
    }

    #[test]
    fn configured_but_hidden_series_is_skipped() {
        let mut r = HeuristicRenderer::new();
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let xrange = LinearRange::new(0.0, 1.0, 100.0);
        let yrange = LinearRange::new(0.0, 1.0, 100.0);

        let mut s = series(vec![label(0.5, 0.5, "hi")]);
        s.style.stroke_color = Some(css::RED);
        let bounds = s.measure(&mut r, canvas, &xrange, &yrange, &Style::default());
        assert_eq!(bounds, Rect::new(f64::MAX, f64::MAX, 0.0, 0.0));

        s.style.show = true;
        let bounds = s.measure(&mut r, canvas, &xrange, &yrange, &Style::default());
        assert_eq!(bounds.x0, 50.0);
    }

    #[test]
    fn annotation_style_cascades_over_series_and_chart_defaults() {
        let mut r = HeuristicRenderer::new();
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let xrange = LinearRange::new(0.0, 1.0, 100.0);
        let yrange = LinearRange::new(0.0, 1.0, 100.0);

        let chart_defaults = Style {
            font: Some(FontFamily::Monospace),
            stroke_color: Some(css::BLUE),
            ..Style::default()
        };
        let s = series(vec![label(0.5, 0.5, "hi")]);
        s.measure(&mut r, canvas, &xrange, &yrange, &chart_defaults);

        // The cascaded style was pushed during measurement: annotation
        // built-ins for fill/size, chart defaults for font and stroke.
        assert_eq!(r.fill_color, DEFAULT_ANNOTATION_FILL_COLOR);
        assert_eq!(r.font_size, DEFAULT_ANNOTATION_FONT_SIZE);
        assert_eq!(r.font, Some(FontFamily::Monospace));
        assert_eq!(r.stroke_color, css::BLUE);
    }

    /// Records draw calls for pinning the annotation render sequence.
    #[derive(Default)]
    struct OpLog {
        font_size: f64,
        ops: Vec<String>,
    }

    impl Renderer for OpLog {
        fn set_stroke_color(&mut self, color: Color) {
            let rgba = color.to_rgba8();
            self.ops
                .push(format!("stroke_color rgba({},{},{},{})", rgba.r, rgba.g, rgba.b, rgba.a));
        }

        fn set_stroke_width(&mut self, width: f64) {
            self.ops.push(format!("stroke_width {width}"));
        }

        fn set_stroke_dash_array(&mut self, dash_array: &[f64]) {
            self.ops.push(format!("stroke_dash_array {dash_array:?}"));
        }

        fn set_fill_color(&mut self, color: Color) {
            let rgba = color.to_rgba8();
            self.ops
                .push(format!("fill_color rgba({},{},{},{})", rgba.r, rgba.g, rgba.b, rgba.a));
        }

        fn set_font(&mut self, font: Option<FontFamily>) {
            match font {
                Some(font) => self.ops.push(format!("font {}", font.family_name())),
                None => self.ops.push("font none".to_string()),
            }
        }

        fn set_font_color(&mut self, color: Color) {
            let rgba = color.to_rgba8();
            self.ops
                .push(format!("font_color rgba({},{},{},{})", rgba.r, rgba.g, rgba.b, rgba.a));
        }

        fn set_font_size(&mut self, size: f64) {
            self.font_size = size;
            self.ops.push(format!("font_size {size}"));
        }

        fn measure_text(&mut self, text: &str) -> Rect {
            self.ops.push(format!("measure {text}"));
            let width = 0.6 * self.font_size * text.chars().count() as f64;
            Rect::new(0.0, 0.0, width, self.font_size)
        }
    }

    impl DrawRenderer for OpLog {
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(format!("move_to {x} {y}"));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(format!("line_to {x} {y}"));
        }

        fn close(&mut self) {
            self.ops.push("close".to_string());
        }

        fn fill_stroke(&mut self) {
            self.ops.push("fill_stroke".to_string());
        }

        fn text(&mut self, body: &str, x: f64, y: f64) {
            self.ops.push(format!("text {body} {x} {y}"));
        }
    }

    #[test]
    fn render_draws_the_callout_box_then_the_label() {
        let mut log = OpLog::default();
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let xrange = LinearRange::new(0.0, 1.0, 100.0);
        let yrange = LinearRange::new(0.0, 1.0, 100.0);

        let s = series(vec![label(0.5, 0.5, "hi")]);
        s.render(&mut log, canvas, &xrange, &yrange, &Style::default());

        assert_eq!(
            log.ops,
            [
                // text state, so measurement sees the label font
                "font none",
                "font_color rgba(0,0,0,0)",
                "font_size 10",
                "measure hi",
                // box paint state, then the callout outline
                "stroke_color rgba(0,0,0,0)",
                "stroke_width 1",
                "stroke_dash_array []",
                "fill_color rgba(255,255,255,255)",
                "move_to 50 50",
                "line_to 60 40",
                "line_to 82 40",
                "line_to 82 60",
                "line_to 60 60",
                "line_to 50 50",
                "close",
                "fill_stroke",
                // text state again, then the label itself
                "font none",
                "font_color rgba(0,0,0,0)",
                "font_size 10",
                "text hi 65 55",
            ]
        );
    }
}
