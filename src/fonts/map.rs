// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font map: a cache of fonts by style and size category

#![allow(clippy::len_without_is_empty)]

use super::{default_font_mapping, Font, FontError, SystemFonts, TextStyle};
use crate::SizeCategory;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Creator<S, F, E> = Box<dyn Fn(&S, SizeCategory) -> Result<F, E> + Send + Sync>;

/// Creates and caches fonts for a given style and size category
///
/// A `FontMap` wraps a *creator* function computing a font for a
/// `(style, category)` pair. Each pair is computed at most once over the life
/// of the map; later look-ups return the same shared `Arc`. Entries are never
/// evicted: the key space is bounded by the styles an application uses times
/// the thirteen size categories.
///
/// The creator must be deterministic. It is called while the map is locked
/// for writing and so must not access the same map.
///
/// Styles may be any hashable type. With the built-in [`TextStyle`], use
/// [`FontMap::with_system`] to get the platform's default fonts:
/// ```
/// # use kas_dynamic_type::{SizeCategory, fonts::*};
/// # use std::sync::Arc;
/// let map = FontMap::with_system(Arc::new(FixedSystemFonts::default()));
/// let font = map.try_font(&TextStyle::Body, SizeCategory::Large).unwrap();
/// assert_eq!(font.pt_size(), 17.0);
/// ```
///
/// Custom styles use a custom creator:
/// ```
/// # use kas_dynamic_type::{SizeCategory, fonts::*};
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// enum MyStyle { Label, Heading }
///
/// let map = FontMap::new(|style: &MyStyle, category: SizeCategory| {
///     let size = 12.0 + category.ordinal() as f32;
///     match style {
///         MyStyle::Label => Font::new("Helvetica", size),
///         MyStyle::Heading => Font::new("Helvetica", size * 1.5).with_weight(FontWeight::BOLD),
///     }
/// });
/// assert_eq!(map.font(&MyStyle::Label, SizeCategory::Large).pt_size(), 15.0);
/// ```
pub struct FontMap<S, F = Font, E = Infallible> {
    creator: Creator<S, F, E>,
    cache: RwLock<HashMap<S, HashMap<SizeCategory, Arc<F>>>>,
}

impl<S: Eq + Hash + Clone, F, E> FontMap<S, F, E> {
    /// Construct with a fallible creator
    ///
    /// Errors returned by `creator` are passed to the caller of
    /// [`Self::try_font`] and nothing is cached: a later call for the same
    /// key calls `creator` again.
    pub fn try_new(
        creator: impl Fn(&S, SizeCategory) -> Result<F, E> + Send + Sync + 'static,
    ) -> Self {
        FontMap {
            creator: Box::new(creator),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<S, HashMap<SizeCategory, Arc<F>>>> {
        // Entries are inserted only once complete, thus a poisoned map is still valid
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<S, HashMap<SizeCategory, Arc<F>>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the font for `style` at `category`
    ///
    /// Returns the cached font if present, otherwise calls the creator, caches
    /// the result and returns it.
    pub fn try_font(&self, style: &S, category: SizeCategory) -> Result<Arc<F>, E> {
        if let Some(font) = self.get(style, category) {
            log::trace!("FontMap: hit at {category}");
            return Ok(font);
        }

        let mut cache = self.write();
        // Another thread may have populated this entry while we waited
        if let Some(font) = cache.get(style).and_then(|fonts| fonts.get(&category)) {
            return Ok(font.clone());
        }

        let font = Arc::new((self.creator)(style, category)?);
        let fonts = cache.entry(style.clone()).or_default();
        fonts.insert(category, font.clone());
        log::debug!(
            "FontMap: created font at {category} ({} categories cached for this style)",
            fonts.len()
        );
        Ok(font)
    }

    /// Get a cached font, if present
    ///
    /// This never calls the creator.
    pub fn get(&self, style: &S, category: SizeCategory) -> Option<Arc<F>> {
        self.read()
            .get(style)
            .and_then(|fonts| fonts.get(&category))
            .cloned()
    }

    /// True if a font is cached for `style` at `category`
    pub fn contains(&self, style: &S, category: SizeCategory) -> bool {
        self.get(style, category).is_some()
    }

    /// Number of cached fonts
    pub fn len(&self) -> usize {
        self.read().values().map(|fonts| fonts.len()).sum()
    }

    /// True if no fonts are cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Eq + Hash + Clone, F> FontMap<S, F, Infallible> {
    /// Construct with an infallible creator
    pub fn new(creator: impl Fn(&S, SizeCategory) -> F + Send + Sync + 'static) -> Self {
        FontMap::try_new(move |style, category| Ok(creator(style, category)))
    }

    /// Get the font for `style` at `category`
    ///
    /// See [`Self::try_font`].
    pub fn font(&self, style: &S, category: SizeCategory) -> Arc<F> {
        match self.try_font(style, category) {
            Ok(font) => font,
            Err(never) => match never {},
        }
    }
}

/// A font map over [`TextStyle`] using default fonts
pub type DefaultFontMap = FontMap<TextStyle, Font, FontError>;

impl FontMap<TextStyle, Font, FontError> {
    /// Construct a map of the platform's default fonts
    ///
    /// Fonts are created by [`TextStyle::default_font`]; `system` answers for
    /// combinations not covered by the built-in table.
    pub fn with_system(system: Arc<dyn SystemFonts>) -> Self {
        FontMap::try_new(default_font_mapping(system))
    }
}

impl<S, F, E> fmt::Debug for FontMap<S, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let len: usize = cache.values().map(|fonts| fonts.len()).sum();
        f.debug_struct("FontMap")
            .field("styles", &cache.len())
            .field("fonts", &len)
            .finish_non_exhaustive()
    }
}

static DEFAULT_MAP: OnceLock<DefaultFontMap> = OnceLock::new();

/// Install the process-wide [`DefaultFontMap`]
///
/// The first call constructs the map (see [`FontMap::with_system`]), which
/// then lives until the process exits. Later calls ignore `system` and return
/// the installed map.
pub fn install_default_font_map(system: Arc<dyn SystemFonts>) -> &'static DefaultFontMap {
    let mut created = false;
    let map = DEFAULT_MAP.get_or_init(|| {
        created = true;
        FontMap::with_system(system)
    });
    if !created {
        log::warn!("install_default_font_map: already installed; new SystemFonts ignored");
    }
    map
}

/// Access the process-wide [`DefaultFontMap`], if installed
pub fn default_font_map() -> Option<&'static DefaultFontMap> {
    DEFAULT_MAP.get()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::{FixedSystemFonts, SystemFontsError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn counting<S: Eq + Hash + Clone>(calls: &Arc<AtomicUsize>) -> FontMap<S, Font> {
        let calls = calls.clone();
        FontMap::new(move |_: &S, category: SizeCategory| {
            calls.fetch_add(1, Ordering::SeqCst);
            Font::system(10.0 + category.ordinal() as f32)
        })
    }

    #[test]
    fn memoizes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let map = counting::<u32>(&calls);
        assert!(map.is_empty());

        let a = map.font(&1, SizeCategory::Small);
        let b = map.font(&1, SizeCategory::Small);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(map.len(), 1);
        assert!(map.contains(&1, SizeCategory::Small));
        assert!(!map.contains(&1, SizeCategory::Medium));
    }

    #[test]
    fn keys_are_isolated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let map = counting::<&'static str>(&calls);

        // The creator ignores the style, yet each style gets its own entry
        let a = map.font(&"a", SizeCategory::Large);
        let b = map.font(&"b", SizeCategory::Large);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);

        let c = map.font(&"a", SizeCategory::ExtraLarge);
        assert_ne!(a, c);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn unspecified_is_a_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let map = counting::<u8>(&calls);
        map.font(&0, SizeCategory::Unspecified);
        map.font(&0, SizeCategory::Unspecified);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(map.get(&0, SizeCategory::Unspecified).is_some());
    }

    #[test]
    fn errors_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let map: FontMap<u8, Font, &'static str> = FontMap::try_new(move |_, _| {
            // Fail on the first attempt only
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("not yet")
            } else {
                Ok(Font::system(12.0))
            }
        });

        assert_eq!(map.try_font(&0, SizeCategory::Large).unwrap_err(), "not yet");
        assert!(map.is_empty());
        let font = map.try_font(&0, SizeCategory::Large).unwrap();
        assert_eq!(font.pt_size(), 12.0);
        map.try_font(&0, SizeCategory::Large).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn contention_creates_once() {
        const THREADS: usize = 8;
        let calls = Arc::new(AtomicUsize::new(0));
        let map = counting::<u8>(&calls);
        let barrier = Barrier::new(THREADS);

        let fonts: Vec<Arc<Font>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        map.font(&7, SizeCategory::AccessibilityLarge)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(fonts.iter().all(|font| Arc::ptr_eq(font, &fonts[0])));
    }

    #[test]
    fn default_map() {
        let map = FontMap::with_system(Arc::new(FixedSystemFonts::default()));
        let body = map
            .try_font(&TextStyle::Body, SizeCategory::AccessibilityExtraExtraLarge)
            .unwrap();
        assert_eq!(*body, Font::system(47.0));
        let headline = map.try_font(&TextStyle::Headline, SizeCategory::Medium).unwrap();
        assert_eq!(*headline, Font::bold_system(16.0));
    }

    struct Failing;

    impl SystemFonts for Failing {
        fn preferred_point_size(&self, _: &TextStyle) -> Result<f32, SystemFontsError> {
            Err(SystemFontsError::new("offline"))
        }
    }

    #[test]
    fn default_map_propagates_system_errors() {
        let map = FontMap::with_system(Arc::new(Failing));
        let style = TextStyle::Other("largeTitle".into());
        assert!(map.try_font(&style, SizeCategory::Large).is_err());
        assert!(!map.contains(&style, SizeCategory::Large));
        // The table does not need the system
        assert!(map.try_font(&TextStyle::Title2, SizeCategory::Large).is_ok());
    }

    #[test]
    fn debug() {
        let map = FontMap::new(|_: &u8, _| Font::system(9.0));
        map.font(&1, SizeCategory::Small);
        map.font(&1, SizeCategory::Medium);
        assert_eq!(format!("{map:?}"), "FontMap { styles: 1, fonts: 2, .. }");
    }
}
