//! The preference store: durable round-trip for the four UI preferences.
//!
//! Each mutation is a pure flip/set over one field, written through to
//! durable storage synchronously, then announced to subscribers so the
//! rendering layer can resynchronize document-level attributes.

use std::str::FromStr;

use handwave_storage::{KeyValueStore as _, SharedStore};

use crate::preferences::{FontSize, Preferences, Theme};

const THEME_KEY: &str = "theme";
const ACCESSIBILITY_KEY: &str = "accessibilityMode";
const FONT_SIZE_KEY: &str = "fontSize";
const HIGH_CONTRAST_KEY: &str = "highContrast";

/// Owns the four preference fields and their durable persistence.
///
/// No operation can fail at runtime; all are synchronous and total.
pub struct PreferenceStore {
    storage: SharedStore,
    preferences: Preferences,
    subscribers: Vec<Box<dyn Fn(Preferences)>>,
}

impl PreferenceStore {
    /// Creates the store, hydrating each field from durable storage.
    ///
    /// Absent or malformed values fall back to the field's default; a
    /// malformed value is logged and never propagates an error.
    #[must_use]
    pub fn new(storage: SharedStore) -> Self {
        let preferences = Self::hydrate(&storage);
        Self {
            storage,
            preferences,
            subscribers: Vec::new(),
        }
    }

    fn hydrate(storage: &SharedStore) -> Preferences {
        let storage = storage.borrow();
        Preferences {
            theme: parse_or_default(storage.get(THEME_KEY), THEME_KEY),
            accessibility_mode: parse_bool(storage.get(ACCESSIBILITY_KEY)),
            font_size: parse_or_default(storage.get(FONT_SIZE_KEY), FONT_SIZE_KEY),
            high_contrast: parse_bool(storage.get(HIGH_CONTRAST_KEY)),
        }
    }

    /// Returns the current preference snapshot.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Flips the theme between dark and light. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.theme = self.preferences.theme.toggled();
        let theme = self.preferences.theme;
        self.persist(THEME_KEY, theme.as_str());
        theme
    }

    /// Flips accessibility mode. Returns the new value.
    pub fn toggle_accessibility(&mut self) -> bool {
        self.preferences.accessibility_mode = !self.preferences.accessibility_mode;
        let on = self.preferences.accessibility_mode;
        self.persist(ACCESSIBILITY_KEY, bool_str(on));
        on
    }

    /// Sets the text scale.
    ///
    /// Out-of-set values cannot be expressed here; string inputs are
    /// validated at the boundary via [`FontSize::from_str`].
    pub fn set_font_size(&mut self, size: FontSize) {
        self.preferences.font_size = size;
        self.persist(FONT_SIZE_KEY, size.as_str());
    }

    /// Flips high-contrast rendering. Returns the new value.
    pub fn toggle_high_contrast(&mut self) -> bool {
        self.preferences.high_contrast = !self.preferences.high_contrast;
        let on = self.preferences.high_contrast;
        self.persist(HIGH_CONTRAST_KEY, bool_str(on));
        on
    }

    /// Registers a subscriber invoked after every mutation.
    ///
    /// Subscribers observe only fully-applied snapshots: the durable write
    /// completes before notification.
    pub fn subscribe(&mut self, subscriber: impl Fn(Preferences) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn persist(&self, key: &str, value: &str) {
        self.storage.borrow_mut().set(key, value);
        self.notify();
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self.preferences);
        }
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn parse_bool(raw: Option<String>) -> bool {
    // Anything other than the exact "true" encoding resets to the default.
    raw.as_deref() == Some("true")
}

fn parse_or_default<T>(raw: Option<String>, key: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return T::default();
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed stored preference; using default");
            T::default()
        }
    }
}
