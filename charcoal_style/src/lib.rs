// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascading visual style resolution for Charcoal chart elements.
//!
//! Every drawable element holds an optional [`Style`]: a bundle of visual
//! attributes where each attribute may be left unset. At render time the
//! element merges its overrides with ancestor/default styles via
//! [`Style::inherit_from`], then pushes the resolved attributes into a
//! [`charcoal_render::Renderer`].
//!
//! Resolution is two-tier per attribute: the style's own value if set, else
//! an explicit default supplied by the caller, else a documented built-in
//! constant. All of it is pure value computation; nothing here touches a
//! drawing surface until a `write_*` push.

#![no_std]

extern crate alloc;

mod align;
mod style;

pub use align::{HorizontalAlign, TextWrap, VerticalAlign};
pub use style::{DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH, Style};
