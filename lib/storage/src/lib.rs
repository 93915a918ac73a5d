//! Durable key-value persistence for the handwave client.
//!
//! In the browser the client persists its state in localStorage: a
//! synchronous, string-keyed, process-local store with no cross-tab
//! coordination (last writer wins). This crate abstracts that substrate
//! behind [`KeyValueStore`] so the stores can run against an in-memory
//! map in tests or a JSON file on a native host.
//!
//! All operations are synchronous and infallible from the caller's
//! perspective; a file-backed store that hits an I/O error logs it and
//! carries on with its in-memory view.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::cell::RefCell;
use std::rc::Rc;

/// Synchronous string-keyed persistent store.
///
/// Mirrors the localStorage contract: `get` returns the stored string if
/// present, `set` overwrites unconditionally, `remove` is a no-op for a
/// missing key.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// A store handle shared between the session and preference stores.
///
/// The execution model is single-threaded and event-driven, so shared
/// ownership with interior mutability is sufficient.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wraps a store implementation into a [`SharedStore`] handle.
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
