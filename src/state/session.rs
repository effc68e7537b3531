//! Session state: credentials, user profile, and their persistence.
//!
//! DESIGN
//! ======
//! `SessionStore` is the sole owner and mutator of the session. It is
//! constructed once at startup, seeded from durable storage, and injected via
//! context; every mutation writes through to the storage mirror so a reload
//! reconstructs the same session. The store holds plain fields so it can be
//! driven in unit tests without a reactive runtime or a browser.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` surface rejections as `Ok(false)` and propagate
//! transport failures; `refresh_profile` is best-effort and never fails the
//! session — it reports its outcome and leaves a stale profile in place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::net::api::AuthApi;
use crate::net::types::{ApiError, LoginResponse, MeResponse, RegisterResponse, Rejection};
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Storage key for the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the raw refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// The in-memory session. An empty access token means no session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub access_token: String,
    /// Renewal credential. Stored for a future refresh flow, not consumed by
    /// any operation here.
    pub refresh_token: String,
    pub user: Option<Value>,
}

impl Session {
    /// Whether a session is established. Derived from the access token on
    /// every read; never cached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// The session's authentication status as seen by the route guard.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.is_authenticated() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

/// Authentication status derived from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

/// Outcome of a best-effort profile refresh.
///
/// Failures carry what went wrong so the caller can log them; the session
/// keeps its previous profile in every non-`Updated` case.
#[must_use]
#[derive(Debug)]
pub enum ProfileRefresh {
    /// The profile was fetched and the session updated.
    Updated,
    /// The backend answered with a non-success code.
    Rejected(Rejection),
    /// The request never produced a usable envelope.
    TransportFailed(ApiError),
}

/// Owner of the session and its storage mirror.
#[derive(Clone, Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    session: Session,
}

/// The store as wired in the browser app.
pub type ClientSessionStore = SessionStore<BrowserStorage>;

impl<S: SessionStorage> SessionStore<S> {
    /// Build a store seeded from the persisted mirror.
    ///
    /// Missing or undecodable persisted values fall back to the empty
    /// defaults, leaving the store unauthenticated.
    pub fn load(storage: S) -> Self {
        let session = Session {
            access_token: storage.get(ACCESS_TOKEN_KEY).unwrap_or_default(),
            refresh_token: storage.get(REFRESH_TOKEN_KEY).unwrap_or_default(),
            user: storage
                .get(USER_KEY)
                .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
                .filter(|v| !v.is_null()),
        };
        Self { storage, session }
    }

    /// The current session, read-only. Mutation goes through the operations
    /// below.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.session.status()
    }

    /// Authenticate against the backend.
    ///
    /// On success the whole credential triple is replaced as one group and
    /// written through to storage; on rejection nothing changes and the
    /// caller gets `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Transport and decode failures propagate; the session is untouched.
    pub async fn login(
        &mut self,
        api: &impl AuthApi,
        username: &str,
        password: &str,
    ) -> Result<bool, ApiError> {
        match api.login(username, password).await? {
            LoginResponse::Granted {
                access_token,
                refresh_token,
                user,
            } => {
                self.session = Session {
                    access_token,
                    refresh_token,
                    user: Some(user),
                };
                self.storage.set(ACCESS_TOKEN_KEY, &self.session.access_token);
                self.storage.set(REFRESH_TOKEN_KEY, &self.session.refresh_token);
                self.persist_user();
                Ok(true)
            }
            LoginResponse::Rejected(_) => Ok(false),
        }
    }

    /// Create an account. Never establishes a session.
    ///
    /// # Errors
    ///
    /// Transport failures propagate.
    pub async fn register(
        &self,
        api: &impl AuthApi,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, ApiError> {
        match api.register(username, email, password).await? {
            RegisterResponse::Created => Ok(true),
            RegisterResponse::Rejected(_) => Ok(false),
        }
    }

    /// Drop the session: reset all fields and delete the persisted mirror.
    /// Local only, always succeeds.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Re-fetch the user profile, best-effort.
    ///
    /// Only the profile (and its mirror key) changes on success; the tokens
    /// are never touched. Any failure leaves the previous profile in place —
    /// a transient refresh failure must not deauthenticate the user.
    pub async fn refresh_profile(&mut self, api: &impl AuthApi) -> ProfileRefresh {
        match api.current_user(&self.session.access_token).await {
            Ok(MeResponse::Profile(user)) => {
                self.session.user = Some(user);
                self.persist_user();
                ProfileRefresh::Updated
            }
            Ok(MeResponse::Rejected(rejection)) => ProfileRefresh::Rejected(rejection),
            Err(err) => ProfileRefresh::TransportFailed(err),
        }
    }

    fn persist_user(&self) {
        if let Some(user) = &self.session.user {
            if let Ok(encoded) = serde_json::to_string(user) {
                self.storage.set(USER_KEY, &encoded);
            }
        }
    }
}
