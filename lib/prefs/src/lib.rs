//! Durable UI preference state for the handwave client.
//!
//! Preferences (theme, accessibility mode, font size, high contrast) are
//! session-independent: they outlive logins and are never cleared on
//! logout. Every field always has a defined value; absent or malformed
//! durable values fall back to defaults instead of failing.
//!
//! # Example
//!
//! ```
//! use handwave_prefs::{PreferenceStore, Theme};
//! use handwave_storage::{MemoryStore, shared};
//!
//! let mut store = PreferenceStore::new(shared(MemoryStore::new()));
//! assert_eq!(store.preferences().theme, Theme::Dark);
//!
//! store.toggle_theme();
//! assert_eq!(store.preferences().theme, Theme::Light);
//! ```

pub mod preferences;
pub mod store;

pub use preferences::{FontSize, ParseFontSizeError, ParseThemeError, Preferences, Theme};
pub use store::PreferenceStore;
