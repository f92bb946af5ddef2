// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Default point sizes
//!
//! These follow the platform's built-in scaling curve. Standard styles scale
//! from `ExtraSmall` to `ExtraExtraLarge` then saturate: `ExtraExtraExtraLarge`
//! and all accessibility categories share a single maximum size. The exception
//! is [`TextStyle::Body`], which keeps growing through every accessibility
//! category.

use super::{Font, SystemFonts, SystemFontsError, TextStyle};
use crate::SizeCategory;
use std::sync::Arc;
use thiserror::Error;

/// Font resolution errors
#[derive(Error, Debug)]
pub enum FontError {
    /// The platform reported a size which is not a positive, finite number
    #[error("invalid point size {size} for text style `{style}`")]
    InvalidPointSize { style: TextStyle, size: f32 },
    /// The platform query failed
    #[error(transparent)]
    System(#[from] SystemFontsError),
}

/// Number of categories with sizes preceding saturation
const SCALED: usize = 6;

// Columns: XS, S, M, L, XL, XXL, then the saturated size used from XXXL on.
const SIZES: [[u8; SCALED + 1]; 10] = [
    [25, 26, 27, 28, 30, 32, 34], // title1
    [19, 20, 21, 22, 24, 26, 28], // title2
    [17, 18, 19, 20, 22, 24, 26], // title3
    [14, 15, 16, 17, 19, 21, 23], // headline
    [12, 13, 14, 15, 17, 19, 21], // subheadline
    [14, 15, 16, 17, 19, 21, 23], // body
    [13, 14, 15, 16, 18, 20, 22], // callout
    [12, 12, 12, 13, 15, 17, 19], // footnote
    [11, 11, 11, 12, 14, 16, 18], // caption1
    [11, 11, 11, 11, 13, 15, 17], // caption2
];

// Body does not saturate: AccessibilityMedium through AccessibilityXXXL.
const BODY_ACCESSIBILITY: [u8; 5] = [28, 33, 40, 47, 53];

impl TextStyle {
    /// The built-in point size, if any
    ///
    /// Returns `None` for [`TextStyle::Other`] and for
    /// [`SizeCategory::Unspecified`].
    pub fn explicit_point_size(&self, category: SizeCategory) -> Option<f32> {
        if category == SizeCategory::Unspecified {
            return None;
        }
        let index = self.standard_index()?;
        let cat = category.ordinal();
        let pt = match self {
            TextStyle::Body if category.is_accessibility() => {
                BODY_ACCESSIBILITY[cat - SizeCategory::AccessibilityMedium.ordinal()]
            }
            _ => SIZES[index][cat.min(SCALED)],
        };
        Some(f32::from(pt))
    }

    /// The default point size for this style at `category`
    ///
    /// Combinations not covered by the built-in table (non-standard styles or
    /// an unspecified category) are answered by `system`.
    pub fn default_point_size(
        &self,
        category: SizeCategory,
        system: &dyn SystemFonts,
    ) -> Result<f32, FontError> {
        if let Some(size) = self.explicit_point_size(category) {
            return Ok(size);
        }

        if category == SizeCategory::Unspecified {
            log::warn!("TextStyle: no built-in size for `{self}` at {category}; querying system");
        } else {
            log::debug!("TextStyle: `{self}` is not a standard style; querying system");
        }
        let size = system.preferred_point_size(self)?;
        if size.is_finite() && size > 0.0 {
            Ok(size)
        } else {
            Err(FontError::InvalidPointSize {
                style: self.clone(),
                size,
            })
        }
    }

    /// The default font for this style at `category`
    ///
    /// This is the system font at [`Self::default_point_size`], in bold for
    /// [`TextStyle::Headline`] and regular weight otherwise.
    pub fn default_font(
        &self,
        category: SizeCategory,
        system: &dyn SystemFonts,
    ) -> Result<Font, FontError> {
        let size = self.default_point_size(category, system)?;
        Ok(match self {
            TextStyle::Headline => Font::bold_system(size),
            _ => Font::system(size),
        })
    }
}

/// Construct the default creator function for a [`FontMap`](super::FontMap)
///
/// The result maps `(style, category)` through [`TextStyle::default_font`].
pub fn default_font_mapping(
    system: Arc<dyn SystemFonts>,
) -> impl Fn(&TextStyle, SizeCategory) -> Result<Font, FontError> + Send + Sync + 'static {
    move |style, category| style.default_font(category, &*system)
}
