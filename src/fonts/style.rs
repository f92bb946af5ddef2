// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Semantic text styles

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A semantic text style
///
/// Styles name a *kind* of text rather than a font: the concrete font for a
/// style depends on the user's [`SizeCategory`](crate::SizeCategory).
///
/// The ten standard styles have built-in point sizes (see
/// [`TextStyle::default_point_size`]). [`TextStyle::Other`] carries any other
/// platform style name; its size is always taken from the platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextStyle {
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
    /// A style outside the standard set, by platform name
    Other(String),
}

impl TextStyle {
    /// The standard styles, in table order
    pub const STANDARD: [TextStyle; 10] = [
        TextStyle::Title1,
        TextStyle::Title2,
        TextStyle::Title3,
        TextStyle::Headline,
        TextStyle::Subheadline,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Footnote,
        TextStyle::Caption1,
        TextStyle::Caption2,
    ];

    /// Index into [`Self::STANDARD`], if standard
    pub(crate) fn standard_index(&self) -> Option<usize> {
        Some(match self {
            TextStyle::Title1 => 0,
            TextStyle::Title2 => 1,
            TextStyle::Title3 => 2,
            TextStyle::Headline => 3,
            TextStyle::Subheadline => 4,
            TextStyle::Body => 5,
            TextStyle::Callout => 6,
            TextStyle::Footnote => 7,
            TextStyle::Caption1 => 8,
            TextStyle::Caption2 => 9,
            TextStyle::Other(_) => return None,
        })
    }

    /// True for all but [`TextStyle::Other`]
    #[inline]
    pub fn is_standard(&self) -> bool {
        self.standard_index().is_some()
    }

    /// Short name, e.g. `title1`
    pub fn name(&self) -> &str {
        match self {
            TextStyle::Title1 => "title1",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Headline => "headline",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption1 => "caption1",
            TextStyle::Caption2 => "caption2",
            TextStyle::Other(name) => name.as_str(),
        }
    }

    /// Parses a short name or a platform name
    ///
    /// Both `body` and `UICTFontTextStyleBody` yield [`TextStyle::Body`].
    /// Unrecognised names yield [`TextStyle::Other`].
    ///
    /// ```
    /// # use kas_dynamic_type::fonts::TextStyle;
    /// assert_eq!(TextStyle::parse("caption2"), TextStyle::Caption2);
    /// assert_eq!(TextStyle::parse("UICTFontTextStyleTitle0"), TextStyle::Other("UICTFontTextStyleTitle0".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let short = s.strip_prefix("UICTFontTextStyle");
        for style in Self::STANDARD {
            let matched = match short {
                Some(rest) => rest.eq_ignore_ascii_case(style.name()),
                None => s == style.name(),
            };
            if matched {
                return style;
            }
        }
        TextStyle::Other(s.to_string())
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for TextStyle {
    fn from(s: &str) -> Self {
        TextStyle::parse(s)
    }
}
