//! Application context: explicitly constructed stores, installed once at
//! startup and reached through a typed accessor.
//!
//! The browser original exposed its stores ambiently from anywhere in the
//! view tree. Here the context is built explicitly and installed into the
//! current thread; accessing it before installation is a programmer error
//! and fails loudly rather than returning degraded defaults.

use std::cell::RefCell;
use std::rc::Rc;

use handwave_prefs::PreferenceStore;
use handwave_session::{CredentialRecord, SessionStore, StaticAllowlist};
use handwave_storage::{FileStore, MemoryStore, SharedStore, shared};

use crate::config::ClientConfig;

thread_local! {
    static CONTEXT: RefCell<Option<AppContext>> = const { RefCell::new(None) };
}

/// The stores the view tree works against.
///
/// Both stores share one durable storage handle, like both halves of the
/// client sharing one localStorage.
#[derive(Clone)]
pub struct AppContext {
    session: Rc<RefCell<SessionStore>>,
    prefs: Rc<RefCell<PreferenceStore>>,
}

impl AppContext {
    /// Builds stores over the given storage, hydrating both from it.
    #[must_use]
    pub fn bootstrap(config: &ClientConfig, storage: SharedStore) -> Self {
        let allowlist = if config.auth.admins.is_empty() {
            StaticAllowlist::builtin()
        } else {
            StaticAllowlist::new(
                config
                    .auth
                    .admins
                    .iter()
                    .map(|a| CredentialRecord {
                        id: a.id.clone(),
                        email: a.email.clone(),
                        password: a.password.clone(),
                        name: a.name.clone(),
                    })
                    .collect(),
            )
        };

        let session = SessionStore::new(
            storage.clone(),
            Box::new(allowlist),
            config.auth.permissive_login,
        );
        let prefs = PreferenceStore::new(storage);

        Self {
            session: Rc::new(RefCell::new(session)),
            prefs: Rc::new(RefCell::new(prefs)),
        }
    }

    /// Opens the configured storage backend: file-backed when a path is
    /// configured, in-memory otherwise.
    #[must_use]
    pub fn open_storage(config: &ClientConfig) -> SharedStore {
        match &config.storage.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "using file-backed storage");
                shared(FileStore::open(path.clone()))
            }
            None => {
                tracing::info!("using in-memory storage");
                shared(MemoryStore::new())
            }
        }
    }

    /// Installs this context for the current thread.
    pub fn install(self) {
        CONTEXT.with(|slot| *slot.borrow_mut() = Some(self));
    }

    /// Returns the installed context.
    ///
    /// # Panics
    ///
    /// Panics when called before [`AppContext::install`]; store access
    /// outside an initialized context is a programmer error.
    #[must_use]
    pub fn current() -> Self {
        CONTEXT.with(|slot| {
            slot.borrow()
                .clone()
                .expect("AppContext accessed before installation")
        })
    }

    /// Returns the session store handle.
    #[must_use]
    pub fn session(&self) -> &Rc<RefCell<SessionStore>> {
        &self.session
    }

    /// Returns the preference store handle.
    #[must_use]
    pub fn prefs(&self) -> &Rc<RefCell<PreferenceStore>> {
        &self.prefs
    }
}
