// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for the Charcoal style/text core: cascade a style, wrap a
//! paragraph both ways, and render an annotation series through an
//! op-tracing renderer.

use charcoal_charts::{Annotation, AnnotationSeries, DrawRenderer, LinearRange};
use charcoal_render::{FontFamily, HeuristicRenderer, Renderer};
use charcoal_style::{Style, TextWrap};
use charcoal_text::{wrap_fit, wrap_fit_rune};
use kurbo::{Insets, Rect};
use peniko::Color;
use peniko::color::palette::css;

/// Holds heuristic measurement state and records every call made to it.
struct TraceRenderer {
    state: HeuristicRenderer,
    ops: Vec<String>,
}

impl TraceRenderer {
    fn new() -> Self {
        Self {
            state: HeuristicRenderer::new(),
            ops: Vec::new(),
        }
    }
}

impl Renderer for TraceRenderer {
    fn set_stroke_color(&mut self, color: Color) {
        self.state.set_stroke_color(color);
        self.ops.push(format!("set_stroke_color {color:?}"));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.state.set_stroke_width(width);
        self.ops.push(format!("set_stroke_width {width}"));
    }

    fn set_stroke_dash_array(&mut self, dash_array: &[f64]) {
        self.state.set_stroke_dash_array(dash_array);
        self.ops.push(format!("set_stroke_dash_array {dash_array:?}"));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.set_fill_color(color);
        self.ops.push(format!("set_fill_color {color:?}"));
    }

    fn set_font(&mut self, font: Option<FontFamily>) {
        self.ops.push(match &font {
            Some(font) => format!("set_font {}", font.family_name()),
            None => "set_font none".to_string(),
        });
        self.state.set_font(font);
    }

    fn set_font_color(&mut self, color: Color) {
        self.state.set_font_color(color);
        self.ops.push(format!("set_font_color {color:?}"));
    }

    fn set_font_size(&mut self, size: f64) {
        self.state.set_font_size(size);
        self.ops.push(format!("set_font_size {size}"));
    }

    fn measure_text(&mut self, text: &str) -> Rect {
        self.state.measure_text(text)
    }
}

impl DrawRenderer for TraceRenderer {
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(format!("move_to ({x}, {y})"));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(format!("line_to ({x}, {y})"));
    }

    fn close(&mut self) {
        self.ops.push("close".to_string());
    }

    fn fill_stroke(&mut self) {
        self.ops.push("fill_stroke".to_string());
    }

    fn text(&mut self, body: &str, x: f64, y: f64) {
        self.ops.push(format!("text {body:?} at ({x}, {y})"));
    }
}

fn main() {
    // A chart-level theme, a label override, and the cascade between them.
    let theme = Style {
        font: Some(FontFamily::SansSerif),
        stroke_color: Some(css::BLACK),
        stroke_width: Some(2.0),
        font_color: Some(css::BLACK),
        ..Style::default()
    };
    let label = Style {
        font_size: Some(12.0),
        padding: Insets::uniform(4.0),
        ..Style::default()
    };
    let resolved = label.inherit_from(&theme);
    println!("label style:    {label}");
    println!("resolved style: {resolved}");

    // Width-constrained wrapping, word and rune flavors.
    let mut r = TraceRenderer::new();
    let paragraph = "the quick brown fox jumps over the lazy dog";

    println!("word-wrapped to 90px:");
    for line in wrap_fit(&mut r, paragraph, 90.0, &resolved, Some(TextWrap::Word)) {
        println!("  |{line}|");
    }

    println!("rune-wrapped to 90px:");
    for line in wrap_fit_rune(&mut r, paragraph, 90.0, &resolved) {
        println!("  |{line}|");
    }

    // An annotation series rendered through the tracing renderer.
    let series = AnnotationSeries {
        name: "callouts".to_string(),
        style: Style::default(),
        annotations: vec![
            Annotation {
                x_value: 0.25,
                y_value: 0.25,
                label: "low".to_string(),
                style: Style::default(),
            },
            Annotation {
                x_value: 0.75,
                y_value: 0.75,
                label: "high".to_string(),
                style: Style {
                    fill_color: Some(css::YELLOW),
                    ..Style::default()
                },
            },
        ],
    };

    let canvas = Rect::new(0.0, 0.0, 240.0, 120.0);
    let xrange = LinearRange::new(0.0, 1.0, canvas.width());
    let yrange = LinearRange::new(0.0, 1.0, canvas.height());

    let bounds = series.measure(&mut r, canvas, &xrange, &yrange, &theme);
    println!("series bounds: {bounds:?}");

    r.ops.clear();
    series.render(&mut r, canvas, &xrange, &yrange, &theme);
    println!("render ops:");
    for op in &r.ops {
        println!("  {op}");
    }
}
