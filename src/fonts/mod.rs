// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font selection by text style and size category
//!
//! Fonts are resolved through a [`FontMap`], which calls a creator function
//! once per `(style, category)` pair and caches the result. A process-wide
//! [`DefaultFontMap`] may be installed via [`install_default_font_map`].
//!
//! ### Font sizes
//!
//! Font sizes are given in *points*:
//!
//! -   1 *Point* = 1/72 inch (~0.35mm), by the usual DTP standard
//! -   The *point size* of a font is the number of points per *em*
//!
//! To convert to pixels, multiply by DPP (Dots Per Point):
//! `dpp = dpi / 72 = scale_factor × (96 / 72)`. See [`Font::dpem`].
//!
//! On Apple systems a *point* usually refers to a (virtual) pixel, thus
//! `dpp = 1` (or `2` on Retina screens). The sizes in the built-in table
//! follow that convention.

mod attributes;
mod font;
mod map;
mod style;
mod system;
mod table;

pub use attributes::{FontStyle, FontWeight};
pub use font::{FamilyName, Font};
pub use map::{default_font_map, install_default_font_map, DefaultFontMap, FontMap};
pub use style::TextStyle;
pub use system::{FixedSystemFonts, SystemFonts, SystemFontsError};
pub use table::{default_font_mapping, FontError};
