//! Error handling foundation for the handwave client.
//!
//! Only the `Result` alias lives here. Domain crates define their own
//! plain error enums and lift them into a `rootcause` report at the
//! boundary where a caller needs layered context.

use rootcause::Report;

/// Workspace-wide Result alias carrying a `rootcause` report.
///
/// `C` is the domain error the report wraps; the default `()` suits
/// context-free failures.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
