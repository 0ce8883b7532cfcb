// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement-driven text wrapping.
//!
//! Fitting a string into a pixel-width budget cannot be done on character
//! counts alone; glyph widths depend on the font the renderer will actually
//! use. So the wrap functions here drive the
//! [`Renderer`](charcoal_render::Renderer) capability: push the style,
//! measure candidate prefixes, and break where the measurement says to.
//!
//! Wrapping is pure given a deterministic renderer, and deliberately eager:
//! every scanned codepoint triggers a measurement of the accumulated
//! prefix, so an `O(n)` rewrap issues `O(n)` measurement calls. Backends
//! with expensive measurement should cache per `(text, font state)` pair.
//!
//! Shaping, bidi, and glyph layout are downstream concerns; input strings
//! are treated as plain codepoint sequences.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use charcoal_render::Renderer;
use charcoal_style::{Style, TextWrap};

/// Wraps `value` to fit `width`, dispatching on `wrap`.
///
/// The unwrapped string is measured first, with the renderer's *current*
/// state; only when its width strictly exceeds the budget does a wrap
/// strategy run. A `None` or [`TextWrap::None`] policy returns the single
/// unwrapped line unchanged.
#[must_use]
pub fn wrap_fit(
    r: &mut dyn Renderer,
    value: &str,
    width: f64,
    style: &Style,
    wrap: Option<TextWrap>,
) -> Vec<String> {
    let value_box = r.measure_text(value);
    if value_box.width() > width {
        match wrap {
            Some(TextWrap::Rune) => return wrap_fit_rune(r, value, width, style),
            Some(TextWrap::Word) => return wrap_fit_word(r, value, width, style),
            Some(TextWrap::None) | None => {}
        }
    }
    vec![value.to_string()]
}

/// Wraps `value` on word boundaries (spaces and tabs) to fit `width`.
///
/// `style` is pushed to the renderer first so measurement reflects the
/// correct font and size. Committed lines are trimmed of surrounding
/// whitespace; a `\n` always forces a break. A word that alone exceeds the
/// budget is not kept intact — it sheds its measured prefix onto the
/// previous line exactly the way the scanner happens to fall, which can
/// include committing an empty first line.
#[must_use]
pub fn wrap_fit_word(r: &mut dyn Renderer, value: &str, width: f64, style: &Style) -> Vec<String> {
    style.write_to_renderer(r);

    let mut output = Vec::new();
    let mut line = String::new();
    let mut word = String::new();

    for c in value.chars() {
        if c == '\n' {
            // commit the line to output
            output.push(trim(&format!("{line}{word}")).to_string());
            line.clear();
            word.clear();
            continue;
        }

        let text_box = r.measure_text(&format!("{line}{word}{c}"));

        if text_box.width() >= width {
            output.push(trim(&line).to_string());
            line = core::mem::take(&mut word);
            word.push(c);
            continue;
        }

        if c == ' ' || c == '\t' {
            line.push_str(&word);
            line.push(c);
            word.clear();
            continue;
        }
        word.push(c);
    }

    output.push(trim(&format!("{line}{word}")).to_string());
    output
}

/// Wraps `value` on codepoint boundaries to fit `width`.
///
/// Unlike word wrapping, committed lines are kept verbatim (no trimming),
/// and whatever remains after the scan is appended to the last committed
/// line rather than emitted as a line of its own. Only when nothing was
/// committed does the remainder become the sole line.
#[must_use]
pub fn wrap_fit_rune(r: &mut dyn Renderer, value: &str, width: f64, style: &Style) -> Vec<String> {
    style.write_to_renderer(r);

    let mut output: Vec<String> = Vec::new();
    let mut line = String::new();

    for c in value.chars() {
        if c == '\n' {
            output.push(core::mem::take(&mut line));
            continue;
        }

        let text_box = r.measure_text(&format!("{line}{c}"));

        if text_box.width() >= width {
            output.push(core::mem::take(&mut line));
        }
        line.push(c);
    }
    append_last(output, line)
}

fn trim(value: &str) -> &str {
    value.trim_matches([' ', '\t', '\n', '\r'])
}

fn append_last(mut lines: Vec<String>, text: String) -> Vec<String> {
    match lines.last_mut() {
        Some(last) => last.push_str(&text),
        None => lines.push(text),
    }
    lines
}
