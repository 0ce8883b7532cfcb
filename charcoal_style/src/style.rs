// Copyright 2026 the Charcoal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The optional visual-attribute bundle and its cascade.

use core::fmt;

use charcoal_render::{FontFamily, Renderer};
use kurbo::Insets;
use peniko::Color;
use smallvec::SmallVec;

use crate::align::{HorizontalAlign, TextWrap, VerticalAlign};

/// Stroke width applied when neither the style nor the caller supplies one.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Font size (in points) applied when neither the style nor the caller
/// supplies one.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// A bundle of optional visual attributes for one drawable element.
///
/// `None` means "not configured" and drives default fallback; a `Some`
/// value always wins, even `Some(0.0)`. Two fields keep the looser
/// zero-as-unset convention instead: `show` and `padding`, which by design
/// never participate in [`Style::is_zero`].
///
/// Styles are plain values: cascade and projection operations return new
/// styles and never mutate their input.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Whether the element is drawn at all.
    pub show: bool,
    /// Insets around the element's content.
    pub padding: Insets,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// Stroke color.
    pub stroke_color: Option<Color>,
    /// Stroke dash pattern; empty means unset (solid).
    pub stroke_dash_array: SmallVec<[f64; 4]>,
    /// Fill color.
    pub fill_color: Option<Color>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Font color.
    pub font_color: Option<Color>,
    /// Font reference.
    pub font: Option<FontFamily>,
    /// Horizontal text alignment.
    pub text_horizontal_align: Option<HorizontalAlign>,
    /// Vertical text alignment.
    pub text_vertical_align: Option<VerticalAlign>,
    /// Text wrap policy.
    pub text_wrap: Option<TextWrap>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            show: false,
            padding: Insets::ZERO,
            stroke_width: None,
            stroke_color: None,
            stroke_dash_array: SmallVec::new(),
            fill_color: None,
            font_size: None,
            font_color: None,
            font: None,
            text_horizontal_align: None,
            text_vertical_align: None,
            text_wrap: None,
        }
    }
}

impl Style {
    /// Returns whether the style is entirely unset.
    ///
    /// Only stroke color, fill color, stroke width, font color, font size
    /// and the font reference count; padding, visibility, alignment and
    /// wrap fields are ignored.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.stroke_color.is_none()
            && self.fill_color.is_none()
            && self.stroke_width.is_none()
            && self.font_color.is_none()
            && self.font_size.is_none()
            && self.font.is_none()
    }

    /// Returns the stroke color, falling back to `default`, then to
    /// transparent.
    #[must_use]
    pub fn stroke_color_or(&self, default: impl Into<Option<Color>>) -> Color {
        self.stroke_color
            .or(default.into())
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Returns the fill color, falling back to `default`, then to
    /// transparent.
    #[must_use]
    pub fn fill_color_or(&self, default: impl Into<Option<Color>>) -> Color {
        self.fill_color
            .or(default.into())
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Returns the stroke width, falling back to `default`, then to
    /// [`DEFAULT_STROKE_WIDTH`].
    #[must_use]
    pub fn stroke_width_or(&self, default: impl Into<Option<f64>>) -> f64 {
        self.stroke_width
            .or(default.into())
            .unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    /// Returns the stroke dash pattern, falling back to `default`, then to
    /// solid (empty).
    #[must_use]
    pub fn stroke_dash_array_or(
        &self,
        default: impl Into<Option<SmallVec<[f64; 4]>>>,
    ) -> SmallVec<[f64; 4]> {
        if self.stroke_dash_array.is_empty() {
            default.into().unwrap_or_default()
        } else {
            self.stroke_dash_array.clone()
        }
    }

    /// Returns the font size, falling back to `default`, then to
    /// [`DEFAULT_FONT_SIZE`].
    #[must_use]
    pub fn font_size_or(&self, default: impl Into<Option<f64>>) -> f64 {
        self.font_size.or(default.into()).unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Returns the font color, falling back to `default`, then to
    /// transparent.
    #[must_use]
    pub fn font_color_or(&self, default: impl Into<Option<Color>>) -> Color {
        self.font_color
            .or(default.into())
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Returns the font reference, falling back to `default`.
    ///
    /// There is no built-in font: both tiers unset resolves to `None` and
    /// the backend's default face applies.
    #[must_use]
    pub fn font_or(&self, default: impl Into<Option<FontFamily>>) -> Option<FontFamily> {
        self.font.clone().or(default.into())
    }

    /// Returns the padding, falling back to `default`, then to zero insets.
    #[must_use]
    pub fn padding_or(&self, default: impl Into<Option<Insets>>) -> Insets {
        if self.padding == Insets::ZERO {
            default.into().unwrap_or(Insets::ZERO)
        } else {
            self.padding
        }
    }

    /// Returns the horizontal alignment, falling back to `default`, then to
    /// [`HorizontalAlign::Left`].
    #[must_use]
    pub fn horizontal_align_or(
        &self,
        default: impl Into<Option<HorizontalAlign>>,
    ) -> HorizontalAlign {
        self.text_horizontal_align
            .or(default.into())
            .unwrap_or(HorizontalAlign::Left)
    }

    /// Returns the vertical alignment, falling back to `default`, then to
    /// [`VerticalAlign::Baseline`].
    #[must_use]
    pub fn vertical_align_or(&self, default: impl Into<Option<VerticalAlign>>) -> VerticalAlign {
        self.text_vertical_align
            .or(default.into())
            .unwrap_or(VerticalAlign::Baseline)
    }

    /// Returns the wrap policy, falling back to `default`, then to
    /// [`TextWrap::Word`].
    #[must_use]
    pub fn text_wrap_or(&self, default: impl Into<Option<TextWrap>>) -> TextWrap {
        self.text_wrap.or(default.into()).unwrap_or(TextWrap::Word)
    }

    /// Coalesces this style over `defaults` into a new style.
    ///
    /// Attribute-wise: own value if set, else the corresponding `defaults`
    /// value (which may itself be unset — built-in constants are applied by
    /// the `*_or` accessors at resolution time, never here). Chains of
    /// inheritance are built by cascading repeatedly, most specific style
    /// calling last. Repeated application with the same `defaults` is
    /// idempotent; the operation is not commutative.
    ///
    /// `show` is not inherited: the result is never marked visible by its
    /// defaults.
    #[must_use]
    pub fn inherit_from(&self, defaults: &Self) -> Self {
        Self {
            show: false,
            padding: self.padding_or(defaults.padding),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            stroke_color: self.stroke_color.or(defaults.stroke_color),
            stroke_dash_array: if self.stroke_dash_array.is_empty() {
                defaults.stroke_dash_array.clone()
            } else {
                self.stroke_dash_array.clone()
            },
            fill_color: self.fill_color.or(defaults.fill_color),
            font_size: self.font_size.or(defaults.font_size),
            font_color: self.font_color.or(defaults.font_color),
            font: self.font.clone().or_else(|| defaults.font.clone()),
            text_horizontal_align: self.text_horizontal_align.or(defaults.text_horizontal_align),
            text_vertical_align: self.text_vertical_align.or(defaults.text_vertical_align),
            text_wrap: self.text_wrap.or(defaults.text_wrap),
        }
    }

    /// Returns just the stroke components of the style.
    #[must_use]
    pub fn stroke_options(&self) -> Self {
        Self {
            stroke_dash_array: self.stroke_dash_array.clone(),
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            ..Self::default()
        }
    }

    /// Returns just the fill components of the style.
    #[must_use]
    pub fn fill_options(&self) -> Self {
        Self {
            fill_color: self.fill_color,
            ..Self::default()
        }
    }

    /// Returns the fill and stroke components of the style.
    #[must_use]
    pub fn fill_and_stroke_options(&self) -> Self {
        Self {
            stroke_dash_array: self.stroke_dash_array.clone(),
            fill_color: self.fill_color,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            ..Self::default()
        }
    }

    /// Returns just the text components of the style.
    #[must_use]
    pub fn text_options(&self) -> Self {
        Self {
            font_color: self.font_color,
            font_size: self.font_size,
            font: self.font.clone(),
            text_horizontal_align: self.text_horizontal_align,
            text_vertical_align: self.text_vertical_align,
            text_wrap: self.text_wrap,
            ..Self::default()
        }
    }

    /// Pushes the resolved stroke, fill and text attributes to `r`.
    pub fn write_to_renderer(&self, r: &mut dyn Renderer) {
        r.set_stroke_color(self.stroke_color_or(None));
        r.set_stroke_width(self.stroke_width_or(None));
        r.set_stroke_dash_array(&self.stroke_dash_array_or(None));
        r.set_fill_color(self.fill_color_or(None));
        r.set_font(self.font_or(None));
        r.set_font_color(self.font_color_or(None));
        r.set_font_size(self.font_size_or(None));
    }

    /// Pushes just the resolved drawing (stroke and fill) attributes to `r`.
    pub fn write_drawing_options_to_renderer(&self, r: &mut dyn Renderer) {
        r.set_stroke_color(self.stroke_color_or(None));
        r.set_stroke_width(self.stroke_width_or(None));
        r.set_stroke_dash_array(&self.stroke_dash_array_or(None));
        r.set_fill_color(self.fill_color_or(None));
    }

    /// Pushes just the resolved text attributes to `r`.
    pub fn write_text_options_to_renderer(&self, r: &mut dyn Renderer) {
        r.set_font(self.font_or(None));
        r.set_font_color(self.font_color_or(None));
        r.set_font_size(self.font_size_or(None));
    }
}

fn write_color(f: &mut fmt::Formatter<'_>, label: &str, color: Option<Color>) -> fmt::Result {
    match color {
        Some(c) => {
            let rgba = c.to_rgba8();
            write!(
                f,
                ", \"{label}\": rgba({},{},{},{})",
                rgba.r, rgba.g, rgba.b, rgba.a
            )
        }
        None => write!(f, ", \"{label}\": null"),
    }
}

/// The diagnostic form: a zero style prints as `{}`, anything else prints
/// every attribute as a labeled field with `null` standing in for unset
/// values and numbers formatted to two decimals.
///
/// When the font is absent the final field repeats the `"font_color"`
/// label instead of `"font"`. That duplication is inherited behavior and
/// is kept on purpose.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("{}");
        }

        write!(f, "{{\"show\": {}", self.show)?;

        if self.padding == Insets::ZERO {
            f.write_str(", \"padding\": null")?;
        } else {
            let p = self.padding;
            write!(
                f,
                ", \"padding\": [{:.2}, {:.2}, {:.2}, {:.2}]",
                p.x0, p.y0, p.x1, p.y1
            )?;
        }

        match self.stroke_width {
            Some(w) => write!(f, ", \"stroke_width\": {w:.2}")?,
            None => f.write_str(", \"stroke_width\": null")?,
        }

        write_color(f, "stroke_color", self.stroke_color)?;

        if self.stroke_dash_array.is_empty() {
            f.write_str(", \"stroke_dash_array\": null")?;
        } else {
            f.write_str(", \"stroke_dash_array\": [")?;
            for (i, v) in self.stroke_dash_array.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v:.2}")?;
            }
            f.write_str("]")?;
        }

        write_color(f, "fill_color", self.fill_color)?;

        match self.font_size {
            Some(size) => write!(f, ", \"font_size\": \"{size:.2}pt\"")?,
            None => f.write_str(", \"font_size\": null")?,
        }

        write_color(f, "font_color", self.font_color)?;

        match &self.font {
            Some(font) => write!(f, ", \"font\": \"{}\"", font.family_name())?,
            None => f.write_str(", \"font_color\": null")?,
        }

        f.write_str("}")
    }
}
