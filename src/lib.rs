// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS Dynamic Type library
//!
//! Responsive typography: resolve a font for a semantic [`fonts::TextStyle`]
//! at the user's preferred [`SizeCategory`], cache it, and update components
//! when the preference changes.
//!
//! ```
//! use kas_dynamic_type::fonts::{FixedSystemFonts, FontMap, TextStyle};
//! use kas_dynamic_type::SizeCategory;
//! use std::sync::Arc;
//!
//! let map = FontMap::with_system(Arc::new(FixedSystemFonts::default()));
//! let title = map.try_font(&TextStyle::Title1, SizeCategory::ExtraSmall).unwrap();
//! assert_eq!(title.pt_size(), 25.0);
//! ```

mod category;
pub use category::SizeCategory;

pub mod fonts;

mod notify;
pub use notify::{ContentSizeNotifier, RespondsToDynamicFont};
