//! Route admission policy for the handwave client.
//!
//! For a requested view this layer decides whether to render it, redirect
//! to the login view, or redirect to the default authenticated view. It is
//! a pure read-side projection over the session state: it holds no state
//! of its own and is safe to re-evaluate on every navigation.

pub mod route;

pub use route::{Admission, Capability, DEFAULT_PATH, LOGIN_PATH, admit, admit_path, required_capability};
