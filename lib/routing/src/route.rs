//! The route table and the admission decision.

use handwave_session::SessionState;

/// Path of the login view; unauthenticated visitors are sent here.
pub const LOGIN_PATH: &str = "/login";

/// Path of the regular authenticated landing view; under-privileged but
/// authenticated visitors are sent here.
pub const DEFAULT_PATH: &str = "/dashboard";

/// What a view requires of the session before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Renders for anyone.
    Public,
    /// Requires any active session.
    Authenticated,
    /// Requires an admin session.
    Admin,
}

/// The admission decision for a requested view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Render the requested view.
    Allow,
    /// Redirect to [`LOGIN_PATH`].
    RedirectToLogin,
    /// Redirect to [`DEFAULT_PATH`].
    RedirectToDefault,
}

impl Admission {
    /// Returns the redirect target, or `None` when the view renders.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDefault => Some(DEFAULT_PATH),
        }
    }
}

/// Returns the capability a path requires.
///
/// `/call/:roomCode` carries an opaque room code produced by the
/// meeting-code collaborator; it is not validated here. Paths outside the
/// table are public: the rendering layer owns not-found handling.
#[must_use]
pub fn required_capability(path: &str) -> Capability {
    match path {
        "/" | "/login" => Capability::Public,
        "/dashboard" | "/lobby" => Capability::Authenticated,
        "/admin" => Capability::Admin,
        p if p.strip_prefix("/call/").is_some_and(|code| !code.is_empty()) => {
            Capability::Authenticated
        }
        _ => Capability::Public,
    }
}

/// Decides admission for a required capability against a session snapshot.
///
/// Policy, first match wins:
/// 1. no capability required: allow
/// 2. authentication required, no session: redirect to login
/// 3. admin required without an admin session: redirect to the default
///    view when a session exists, else to login
/// 4. otherwise: allow
#[must_use]
pub fn admit(capability: Capability, session: SessionState) -> Admission {
    match capability {
        Capability::Public => Admission::Allow,
        Capability::Authenticated if !session.is_authenticated() => Admission::RedirectToLogin,
        Capability::Admin if !session.is_admin() => {
            if session.is_authenticated() {
                Admission::RedirectToDefault
            } else {
                Admission::RedirectToLogin
            }
        }
        Capability::Authenticated | Capability::Admin => Admission::Allow,
    }
}

/// Decides admission for a path against a session snapshot.
#[must_use]
pub fn admit_path(path: &str, session: SessionState) -> Admission {
    let capability = required_capability(path);
    let admission = admit(capability, session);
    tracing::debug!(path, ?capability, ?session, ?admission, "route admission");
    admission
}
