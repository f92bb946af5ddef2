// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Size category change propagation
//!
//! The platform reports changes to the user's preferred text size; the host
//! toolkit forwards these to a [`ContentSizeNotifier`] via
//! [`ContentSizeNotifier::post`]. Components implementing
//! [`RespondsToDynamicFont`] subscribe once when initialised (e.g. from a
//! screen's load hook) and are then updated on each change.

use crate::SizeCategory;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A component with fonts depending on the preferred size category
///
/// Typical implementations look up fonts from a
/// [`FontMap`](crate::fonts::FontMap) and assign them to their labels.
pub trait RespondsToDynamicFont {
    /// Update fonts for the given preferred size category
    fn update_fonts(&mut self, preferred: SizeCategory);
}

type Subscriber = Weak<Mutex<dyn RespondsToDynamicFont + Send>>;

struct State {
    current: SizeCategory,
    subscribers: Vec<Subscriber>,
}

/// Delivers size category changes to subscribed components
///
/// Subscribers are held weakly: dropping a component unsubscribes it.
///
/// Deliveries are serialized: a component never sees an older category after a
/// newer one. Consequently `update_fonts` must not call [`Self::subscribe`] or
/// [`Self::post`] on the same notifier.
pub struct ContentSizeNotifier {
    state: Mutex<State>,
    // Held for the whole of each delivery, including the initial update
    delivery: Mutex<()>,
}

impl Default for ContentSizeNotifier {
    fn default() -> Self {
        ContentSizeNotifier::new(SizeCategory::default())
    }
}

impl ContentSizeNotifier {
    /// Construct, with the category currently in effect
    pub fn new(current: SizeCategory) -> Self {
        ContentSizeNotifier {
            state: Mutex::new(State {
                current,
                subscribers: Vec::new(),
            }),
            delivery: Mutex::new(()),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The category currently in effect
    pub fn current(&self) -> SizeCategory {
        self.state().current
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.state()
            .subscribers
            .iter()
            .filter(|sub| sub.strong_count() > 0)
            .count()
    }

    /// Subscribe a component
    ///
    /// The component is updated immediately with [`Self::current`], then on
    /// each subsequent [`Self::post`].
    pub fn subscribe<T: RespondsToDynamicFont + Send + 'static>(&self, component: &Arc<Mutex<T>>) {
        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        let current = {
            let mut state = self.state();
            let weak: Weak<Mutex<T>> = Arc::downgrade(component);
            state.subscribers.push(weak);
            state.current
        };
        update(&**component, current);
    }

    /// Set the category and update all subscribers
    ///
    /// Subscribers are updated even if `category` equals the current value.
    pub fn post(&self, category: SizeCategory) {
        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        let live: Vec<_> = {
            let mut state = self.state();
            state.current = category;
            state.subscribers.retain(|sub| sub.strong_count() > 0);
            state.subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        log::debug!(
            "ContentSizeNotifier: delivering {category} to {} subscribers",
            live.len()
        );
        for component in live {
            update(&*component, category);
        }
    }

    /// As [`Self::post`], given the platform's raw category identifier
    ///
    /// Unknown identifiers are posted as [`SizeCategory::Unspecified`].
    pub fn post_raw(&self, raw: &str) {
        self.post(SizeCategory::from_raw(raw));
    }
}

impl std::fmt::Debug for ContentSizeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("ContentSizeNotifier")
            .field("current", &state.current)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

fn update(component: &Mutex<dyn RespondsToDynamicFont + Send>, category: SizeCategory) {
    component
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .update_fonts(category);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::{FixedSystemFonts, Font, FontMap, TextStyle};

    #[derive(Default)]
    struct Screen {
        last: Option<SizeCategory>,
        updates: usize,
    }

    impl RespondsToDynamicFont for Screen {
        fn update_fonts(&mut self, preferred: SizeCategory) {
            self.last = Some(preferred);
            self.updates += 1;
        }
    }

    #[test]
    fn initial_and_posted() {
        let notifier = ContentSizeNotifier::new(SizeCategory::Medium);
        let screen = Arc::new(Mutex::new(Screen::default()));
        notifier.subscribe(&screen);
        assert_eq!(screen.lock().unwrap().last, Some(SizeCategory::Medium));

        notifier.post(SizeCategory::Small);
        assert_eq!(screen.lock().unwrap().last, Some(SizeCategory::Small));
        notifier.post(SizeCategory::Small);
        assert_eq!(screen.lock().unwrap().updates, 3);
        assert_eq!(notifier.current(), SizeCategory::Small);
    }

    #[test]
    fn raw_values() {
        let notifier = ContentSizeNotifier::default();
        let screen = Arc::new(Mutex::new(Screen::default()));
        notifier.subscribe(&screen);
        assert_eq!(screen.lock().unwrap().last, Some(SizeCategory::Large));

        notifier.post_raw("UICTContentSizeCategoryAccessibilityXL");
        assert_eq!(
            screen.lock().unwrap().last,
            Some(SizeCategory::AccessibilityExtraLarge)
        );
        notifier.post_raw("UICTContentSizeCategoryEnormous");
        assert_eq!(screen.lock().unwrap().last, Some(SizeCategory::Unspecified));
    }

    #[test]
    fn dropped_subscribers() {
        let notifier = ContentSizeNotifier::default();
        let kept = Arc::new(Mutex::new(Screen::default()));
        let dropped = Arc::new(Mutex::new(Screen::default()));
        notifier.subscribe(&kept);
        notifier.subscribe(&dropped);
        assert_eq!(notifier.subscriber_count(), 2);

        drop(dropped);
        assert_eq!(notifier.subscriber_count(), 1);
        notifier.post(SizeCategory::ExtraLarge);
        assert_eq!(kept.lock().unwrap().updates, 2);
        assert_eq!(
            format!("{notifier:?}"),
            "ContentSizeNotifier { current: ExtraLarge, subscribers: 1 }"
        );
    }

    #[test]
    fn subscribe_racing_post() {
        for _ in 0..2000 {
            let notifier = ContentSizeNotifier::new(SizeCategory::Large);
            let screen = Arc::new(Mutex::new(Screen::default()));
            std::thread::scope(|scope| {
                scope.spawn(|| notifier.subscribe(&screen));
                scope.spawn(|| notifier.post(SizeCategory::Small));
            });
            assert_eq!(screen.lock().unwrap().last, Some(notifier.current()));
        }
    }

    #[test]
    fn posts_arrive_in_order() {
        let notifier = ContentSizeNotifier::new(SizeCategory::Large);
        let screen = Arc::new(Mutex::new(Screen::default()));
        notifier.subscribe(&screen);
        std::thread::scope(|scope| {
            for cat in SizeCategory::ALL {
                let notifier = &notifier;
                scope.spawn(move || notifier.post(cat));
            }
        });
        let screen = screen.lock().unwrap();
        assert_eq!(screen.last, Some(notifier.current()));
        assert_eq!(screen.updates, 1 + SizeCategory::ALL.len());
    }

    struct Labels {
        map: Arc<FontMap<TextStyle, Font, crate::fonts::FontError>>,
        body: Option<Arc<Font>>,
        headline: Option<Arc<Font>>,
    }

    impl RespondsToDynamicFont for Labels {
        fn update_fonts(&mut self, preferred: SizeCategory) {
            self.body = self.map.try_font(&TextStyle::Body, preferred).ok();
            self.headline = self.map.try_font(&TextStyle::Headline, preferred).ok();
        }
    }

    #[test]
    fn labels_follow_category() {
        let map = Arc::new(FontMap::with_system(Arc::new(FixedSystemFonts::default())));
        let labels = Arc::new(Mutex::new(Labels {
            map: map.clone(),
            body: None,
            headline: None,
        }));
        let notifier = ContentSizeNotifier::default();
        notifier.subscribe(&labels);
        assert_eq!(labels.lock().unwrap().body.as_ref().unwrap().pt_size(), 17.0);

        notifier.post(SizeCategory::AccessibilityExtraExtraExtraLarge);
        {
            let labels = labels.lock().unwrap();
            assert_eq!(labels.body.as_ref().unwrap().pt_size(), 53.0);
            assert_eq!(labels.headline.as_ref().unwrap().pt_size(), 23.0);
        }

        notifier.post(SizeCategory::Large);
        assert_eq!(map.len(), 4);
    }
}
