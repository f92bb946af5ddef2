// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Platform font-description service
//!
//! The point-size table covers the standard styles at known size categories.
//! Anything else is answered by the platform through [`SystemFonts`].

use super::TextStyle;
use crate::SizeCategory;
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error reported by a [`SystemFonts`] implementation
#[derive(Error, Debug)]
#[error("system font query failed")]
pub struct SystemFontsError(#[source] pub BoxedError);

impl SystemFontsError {
    /// Wrap any error
    pub fn new(err: impl Into<BoxedError>) -> Self {
        SystemFontsError(err.into())
    }
}

/// Access to the platform's preferred font metrics
///
/// Implementations query the host (e.g. a font descriptor service) for the
/// point size it currently prefers for a text style. The answer should
/// reflect the user's live text-size setting.
pub trait SystemFonts: Send + Sync {
    /// The platform's preferred point size for `style`
    fn preferred_point_size(&self, style: &TextStyle) -> Result<f32, SystemFontsError>;
}

/// A [`SystemFonts`] implementation with fixed answers
///
/// Standard styles are answered from the built-in table at a fixed
/// `category`; other styles use `other_pt_size`. Suitable for headless hosts
/// and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSystemFonts {
    /// Category used to answer for standard styles
    ///
    /// If `Unspecified`, [`SizeCategory::Large`] is used.
    pub category: SizeCategory,
    /// Point size for non-standard styles
    pub other_pt_size: f32,
}

impl Default for FixedSystemFonts {
    fn default() -> Self {
        FixedSystemFonts {
            category: SizeCategory::Large,
            other_pt_size: 17.0,
        }
    }
}

impl SystemFonts for FixedSystemFonts {
    fn preferred_point_size(&self, style: &TextStyle) -> Result<f32, SystemFontsError> {
        let category = match self.category {
            SizeCategory::Unspecified => SizeCategory::Large,
            cat => cat,
        };
        Ok(style
            .explicit_point_size(category)
            .unwrap_or(self.other_pt_size))
    }
}
