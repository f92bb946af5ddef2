// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Resolved font descriptor

use super::{FontStyle, FontWeight};
use easy_cast::CastFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font family
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FamilyName {
    /// The platform's user-interface font
    #[default]
    System,
    /// A family named with a `String`
    Named(String),
}

impl From<&str> for FamilyName {
    fn from(name: &str) -> Self {
        FamilyName::Named(name.to_string())
    }
}

/// A resolved font
///
/// This describes which font to use: family, weight, style and size in
/// points. It does not hold any font data; the host toolkit turns it into a
/// loaded face. Values are immutable once constructed and are shared from a
/// [`FontMap`](super::FontMap) as `Arc<Font>`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Font {
    family: FamilyName,
    #[cfg_attr(feature = "serde", serde(default))]
    weight: FontWeight,
    #[cfg_attr(feature = "serde", serde(default))]
    style: FontStyle,
    pt_size: f32,
}

impl Font {
    /// Construct with the given family and point size
    ///
    /// Weight and style take their default (normal) values.
    pub fn new(family: impl Into<FamilyName>, pt_size: f32) -> Self {
        Font {
            family: family.into(),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            pt_size,
        }
    }

    /// The system font at regular weight
    #[inline]
    pub fn system(pt_size: f32) -> Self {
        Font::new(FamilyName::System, pt_size)
    }

    /// The system font at bold weight
    #[inline]
    pub fn bold_system(pt_size: f32) -> Self {
        Font::system(pt_size).with_weight(FontWeight::BOLD)
    }

    /// Replace the weight
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the style
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Font family
    pub fn family(&self) -> &FamilyName {
        &self.family
    }

    /// Font weight
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Font style
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Size in points
    pub fn pt_size(&self) -> f32 {
        self.pt_size
    }

    /// Size in pixels per em
    ///
    /// `dpp` is the number of pixels per point: `dpi / 72`.
    pub fn dpem(&self, dpp: f32) -> f32 {
        self.pt_size * dpp
    }

    /// As [`Self::dpem`], rounded to whole pixels
    ///
    /// Rasterizers commonly key glyph caches on this value.
    pub fn dpem_rounded(&self, dpp: f32) -> u32 {
        self.dpem(dpp).cast_nearest()
    }
}
