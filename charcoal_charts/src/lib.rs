// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-element building blocks layered over the Charcoal style core.
//!
//! Elements here are *consumers* of the core: they cascade styles with
//! [`charcoal_style::Style::inherit_from`], push the result into a
//! renderer, and place themselves using measured text. Rasterization stays
//! downstream behind [`DrawRenderer`], a shape-drawing extension of the
//! state-push capability.

#![no_std]

extern crate alloc;

mod annotation;
mod draw;
mod range;

pub use annotation::{
    Annotation, AnnotationSeries, DEFAULT_ANNOTATION_DELTA_WIDTH, DEFAULT_ANNOTATION_FILL_COLOR,
    DEFAULT_ANNOTATION_FONT_SIZE, DEFAULT_ANNOTATION_PADDING,
};
pub use draw::{DrawRenderer, draw_annotation, measure_annotation};
pub use range::{LinearRange, Range};
