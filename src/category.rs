// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Preferred content size categories
//!
//! A [`SizeCategory`] is one step of the user's text-size preference. These are
//! discrete steps (not point sizes): each [`TextStyle`](crate::fonts::TextStyle)
//! maps a category to its own point size.

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete step of the user's preferred text size
///
/// Variants are ordered from smallest to largest, with the five
/// "accessibility" steps above the standard seven. [`SizeCategory::Unspecified`]
/// sorts last and stands in for any value not otherwise known.
///
/// The default value is [`SizeCategory::Large`], matching the platform default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
    /// Any category outside the known set
    Unspecified,
}

impl SizeCategory {
    /// All known categories, smallest first
    ///
    /// This excludes [`SizeCategory::Unspecified`].
    pub const ALL: [SizeCategory; 12] = [
        SizeCategory::ExtraSmall,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
        SizeCategory::ExtraExtraLarge,
        SizeCategory::ExtraExtraExtraLarge,
        SizeCategory::AccessibilityMedium,
        SizeCategory::AccessibilityLarge,
        SizeCategory::AccessibilityExtraLarge,
        SizeCategory::AccessibilityExtraExtraLarge,
        SizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Position within [`Self::ALL`]
    ///
    /// [`SizeCategory::Unspecified`] yields `12`, one past the end.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// True for the five accessibility categories
    #[inline]
    pub fn is_accessibility(self) -> bool {
        SizeCategory::AccessibilityMedium <= self && self != SizeCategory::Unspecified
    }

    /// The next larger category
    ///
    /// Saturates at the largest category. `Unspecified` is returned unchanged.
    pub fn next(self) -> Self {
        match self {
            SizeCategory::Unspecified => self,
            _ => *Self::ALL.get(self.ordinal() + 1).unwrap_or(&self),
        }
    }

    /// The next smaller category
    ///
    /// Saturates at the smallest category. `Unspecified` is returned unchanged.
    pub fn prev(self) -> Self {
        match self {
            SizeCategory::Unspecified => self,
            _ => self
                .ordinal()
                .checked_sub(1)
                .map(|i| Self::ALL[i])
                .unwrap_or(self),
        }
    }

    /// Human-readable name, e.g. `extraSmall`
    pub fn name(self) -> &'static str {
        match self {
            SizeCategory::ExtraSmall => "extraSmall",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extraLarge",
            SizeCategory::ExtraExtraLarge => "extraExtraLarge",
            SizeCategory::ExtraExtraExtraLarge => "extraExtraExtraLarge",
            SizeCategory::AccessibilityMedium => "accessibilityMedium",
            SizeCategory::AccessibilityLarge => "accessibilityLarge",
            SizeCategory::AccessibilityExtraLarge => "accessibilityExtraLarge",
            SizeCategory::AccessibilityExtraExtraLarge => "accessibilityExtraExtraLarge",
            SizeCategory::AccessibilityExtraExtraExtraLarge => {
                "accessibilityExtraExtraExtraLarge"
            }
            SizeCategory::Unspecified => "unspecified",
        }
    }

    /// Parses a name as produced by [`Self::name`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use kas_dynamic_type::SizeCategory;
    /// assert_eq!(SizeCategory::parse("small"), Some(SizeCategory::Small));
    /// assert_eq!(SizeCategory::parse("huge"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .chain(Some(SizeCategory::Unspecified))
            .find(|cat| cat.name() == s)
    }

    /// As [`Self::parse`], mapping unknown names to `Unspecified`
    pub fn from_name(s: &str) -> Self {
        Self::parse(s).unwrap_or(SizeCategory::Unspecified)
    }

    /// The platform's raw identifier for this category
    pub fn raw_value(self) -> &'static str {
        match self {
            SizeCategory::ExtraSmall => "UICTContentSizeCategoryXS",
            SizeCategory::Small => "UICTContentSizeCategoryS",
            SizeCategory::Medium => "UICTContentSizeCategoryM",
            SizeCategory::Large => "UICTContentSizeCategoryL",
            SizeCategory::ExtraLarge => "UICTContentSizeCategoryXL",
            SizeCategory::ExtraExtraLarge => "UICTContentSizeCategoryXXL",
            SizeCategory::ExtraExtraExtraLarge => "UICTContentSizeCategoryXXXL",
            SizeCategory::AccessibilityMedium => "UICTContentSizeCategoryAccessibilityM",
            SizeCategory::AccessibilityLarge => "UICTContentSizeCategoryAccessibilityL",
            SizeCategory::AccessibilityExtraLarge => "UICTContentSizeCategoryAccessibilityXL",
            SizeCategory::AccessibilityExtraExtraLarge => {
                "UICTContentSizeCategoryAccessibilityXXL"
            }
            SizeCategory::AccessibilityExtraExtraExtraLarge => {
                "UICTContentSizeCategoryAccessibilityXXXL"
            }
            SizeCategory::Unspecified => "_UICTContentSizeCategoryUnspecified",
        }
    }

    /// Map a platform raw identifier to a category
    ///
    /// This never fails: values the library does not know (including those
    /// introduced by future platform versions) map to `Unspecified`.
    /// Surrounding whitespace is ignored, as in [`Self::parse`].
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|cat| cat.raw_value() == raw)
            .unwrap_or(SizeCategory::Unspecified)
    }
}

/// Formats as a label prefixed by the zero-padded ordinal, e.g.
/// `03-large-DEFAULT`, such that labels sort lexicographically in category
/// order.
impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.ordinal(), self.name())?;
        if *self == SizeCategory::Large {
            f.write_str("-DEFAULT")?;
        }
        Ok(())
    }
}
