// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font weight and style attributes

use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Visual weight of a font, on a scale from 1 to 1000
///
/// The default value is [`FontWeight::NORMAL`] (400). Text styles use either
/// [`FontWeight::NORMAL`] or [`FontWeight::BOLD`]; other weights are available
/// to custom font mappings.
///
/// This corresponds to the CSS `font-weight` property.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);
    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);
    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);
    /// Weight value of 700.
    pub const BOLD: Self = Self(700);
    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Construct from a raw weight value
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value
    pub fn value(self) -> u16 {
        self.0
    }

    /// True if heavier than [`FontWeight::MEDIUM`]
    pub fn is_bold(self) -> bool {
        self > Self::MEDIUM
    }

    /// Parses a CSS-style weight: a keyword or a number
    ///
    /// # Examples
    ///
    /// ```
    /// # use kas_dynamic_type::fonts::FontWeight;
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("650"), Some(FontWeight::new(650)));
    /// assert_eq!(FontWeight::parse("heavy-ish"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "thin" => Self::THIN,
            "light" => Self::LIGHT,
            "normal" => Self::NORMAL,
            "medium" => Self::MEDIUM,
            "semi-bold" => Self::SEMI_BOLD,
            "bold" => Self::BOLD,
            "black" => Self::BLACK,
            _ => Self(s.parse::<u16>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match *self {
            Self::THIN => "thin",
            Self::LIGHT => "light",
            Self::NORMAL => "normal",
            Self::MEDIUM => "medium",
            Self::SEMI_BOLD => "semi-bold",
            Self::BOLD => "bold",
            Self::BLACK => "black",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(keyword)
    }
}

/// Slope of a font
///
/// The default value is [`FontStyle::Normal`].
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontStyle {
    /// Upright
    #[default]
    Normal,
    /// Italic (cursive forms)
    Italic,
    /// Slanted, with an optional angle in degrees
    Oblique(Option<i16>),
}

impl FontStyle {
    /// Parses a CSS-style keyword: `normal`, `italic`, `oblique` or
    /// `oblique <n>deg`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique(None),
            _ => {
                let angle = s.strip_prefix("oblique ")?.trim().strip_suffix("deg")?;
                Self::Oblique(Some(angle.trim().parse().ok()?))
            }
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Normal => f.write_str("normal"),
            Self::Italic => f.write_str("italic"),
            Self::Oblique(None) => f.write_str("oblique"),
            Self::Oblique(Some(deg)) => write!(f, "oblique {deg}deg"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weight_display_parse() {
        for w in [FontWeight::NORMAL, FontWeight::BOLD, FontWeight::new(450)] {
            assert_eq!(FontWeight::parse(&w.to_string()), Some(w));
        }
        assert!(FontWeight::BOLD.is_bold());
        assert!(!FontWeight::default().is_bold());
    }

    #[test]
    fn style_parse() {
        assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
        assert_eq!(
            FontStyle::parse("oblique 10deg"),
            Some(FontStyle::Oblique(Some(10)))
        );
        assert_eq!(FontStyle::Oblique(Some(-5)).to_string(), "oblique -5deg");
        assert_eq!(FontStyle::parse("slanty"), None);
    }
}
