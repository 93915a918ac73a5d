//! handwave client shell.
//!
//! Wires the session, preference, and route-admission layers together the
//! way the browser client does at boot: hydrate both stores from durable
//! storage, install the application context, then route user actions
//! through the stores.

pub mod config;
pub mod context;
pub mod error;
pub mod shell;
