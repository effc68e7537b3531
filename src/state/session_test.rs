use std::cell::RefCell;

use super::*;
use crate::net::types::{decode_login, decode_me, decode_register, Envelope};
use crate::util::storage::MemoryStorage;

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    futures::executor::block_on(fut)
}

/// Canned behavior for one endpoint of the fake client.
enum Canned {
    Envelope(serde_json::Value),
    Unreachable,
}

impl Canned {
    fn envelope(&self) -> Result<Envelope, ApiError> {
        match self {
            Canned::Envelope(v) => {
                Ok(serde_json::from_value(v.clone()).expect("fake envelope"))
            }
            Canned::Unreachable => Err(ApiError::Network("connection refused".to_owned())),
        }
    }
}

/// Fake transport returning canned envelopes; records the bearer token the
/// store presents to `/me`.
struct FakeApi {
    login: Canned,
    register: Canned,
    me: Canned,
    seen_token: RefCell<Option<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Canned::Unreachable,
            register: Canned::Unreachable,
            me: Canned::Unreachable,
            seen_token: RefCell::new(None),
        }
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        decode_login(self.login.envelope()?)
    }

    async fn register(
        &self,
        _username: &str,
        _email: &str,
        _password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        Ok(decode_register(self.register.envelope()?))
    }

    async fn current_user(&self, access_token: &str) -> Result<MeResponse, ApiError> {
        *self.seen_token.borrow_mut() = Some(access_token.to_owned());
        Ok(decode_me(self.me.envelope()?))
    }
}

fn granting_api() -> FakeApi {
    FakeApi {
        login: Canned::Envelope(serde_json::json!({
            "code": 0,
            "data": {
                "access_token": "A",
                "refresh_token": "R",
                "user": {"id": 1}
            }
        })),
        ..FakeApi::default()
    }
}

fn logged_in_store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::load(storage.clone());
    let ok = block_on(store.login(&granting_api(), "u", "p")).expect("login");
    assert!(ok);
    (store, storage)
}

// =============================================================
// Seeding and the authentication invariant
// =============================================================

#[test]
fn load_from_empty_storage_is_unauthenticated() {
    let store = SessionStore::load(MemoryStorage::default());
    assert!(!store.is_authenticated());
    assert_eq!(store.status(), AuthStatus::Unauthenticated);
    assert_eq!(store.session(), &Session::default());
}

#[test]
fn is_authenticated_tracks_access_token() {
    let mut session = Session::default();
    assert!(!session.is_authenticated());

    session.access_token = "A".to_owned();
    assert!(session.is_authenticated());
    assert_eq!(session.status(), AuthStatus::Authenticated);

    session.access_token.clear();
    assert!(!session.is_authenticated());
    assert_eq!(session.status(), AuthStatus::Unauthenticated);
}

#[test]
fn load_ignores_undecodable_persisted_user() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, "not json");
    let store = SessionStore::load(storage);
    assert!(store.session().user.is_none());
}

#[test]
fn load_treats_persisted_null_user_as_absent() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, "null");
    let store = SessionStore::load(storage);
    assert!(store.session().user.is_none());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_sets_session_and_mirror() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::load(storage.clone());

    let ok = block_on(store.login(&granting_api(), "u", "p")).expect("login");

    assert!(ok);
    assert!(store.is_authenticated());
    assert_eq!(store.session().access_token, "A");
    assert_eq!(store.session().refresh_token, "R");
    assert_eq!(store.session().user, Some(serde_json::json!({"id": 1})));
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), Some("A".to_owned()));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY), Some("R".to_owned()));
    assert_eq!(storage.get(USER_KEY), Some(r#"{"id":1}"#.to_owned()));
}

#[test]
fn login_rejection_leaves_everything_unchanged() {
    let (mut store, storage) = logged_in_store();
    let before = store.session().clone();

    let api = FakeApi {
        login: Canned::Envelope(serde_json::json!({"code": 1, "message": "bad password"})),
        ..FakeApi::default()
    };
    let ok = block_on(store.login(&api, "u", "wrong")).expect("login");

    assert!(!ok);
    assert_eq!(store.session(), &before);
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), Some("A".to_owned()));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY), Some("R".to_owned()));
    assert_eq!(storage.get(USER_KEY), Some(r#"{"id":1}"#.to_owned()));
}

#[test]
fn login_transport_failure_propagates_and_preserves_session() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::load(storage.clone());

    let result = block_on(store.login(&FakeApi::default(), "u", "p"));

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
}

// =============================================================
// register
// =============================================================

#[test]
fn register_success_does_not_establish_session() {
    let storage = MemoryStorage::default();
    let store = SessionStore::load(storage.clone());

    let api = FakeApi {
        register: Canned::Envelope(serde_json::json!({"code": 0, "data": {"user_id": 7}})),
        ..FakeApi::default()
    };
    let ok = block_on(store.register(&api, "u", "u@example.com", "p")).expect("register");

    assert!(ok);
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
}

#[test]
fn register_conflict_reports_false() {
    let store = SessionStore::load(MemoryStorage::default());
    let api = FakeApi {
        register: Canned::Envelope(serde_json::json!({"code": 409, "message": "taken"})),
        ..FakeApi::default()
    };
    let ok = block_on(store.register(&api, "u", "u@example.com", "p")).expect("register");
    assert!(!ok);
}

#[test]
fn register_transport_failure_propagates() {
    let store = SessionStore::load(MemoryStorage::default());
    let result = block_on(store.register(&FakeApi::default(), "u", "u@example.com", "p"));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_mirror() {
    let (mut store, storage) = logged_in_store();

    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(store.session(), &Session::default());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(storage.get(REFRESH_TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn logout_on_empty_store_is_noop() {
    let mut store = SessionStore::load(MemoryStorage::default());
    store.logout();
    assert_eq!(store.session(), &Session::default());
}

// =============================================================
// refresh_profile
// =============================================================

#[test]
fn refresh_profile_updates_only_the_profile() {
    let (mut store, storage) = logged_in_store();

    let api = FakeApi {
        me: Canned::Envelope(serde_json::json!({
            "code": 0,
            "data": {"id": 1, "username": "john"}
        })),
        ..FakeApi::default()
    };
    let outcome = block_on(store.refresh_profile(&api));

    assert!(matches!(outcome, ProfileRefresh::Updated));
    assert_eq!(store.session().access_token, "A");
    assert_eq!(store.session().refresh_token, "R");
    assert_eq!(
        store.session().user,
        Some(serde_json::json!({"id": 1, "username": "john"}))
    );
    assert_eq!(
        storage.get(USER_KEY),
        Some(r#"{"id":1,"username":"john"}"#.to_owned())
    );
    assert_eq!(api.seen_token.borrow().as_deref(), Some("A"));
}

#[test]
fn refresh_profile_transport_failure_keeps_stale_profile() {
    let (mut store, storage) = logged_in_store();

    let outcome = block_on(store.refresh_profile(&FakeApi::default()));

    assert!(matches!(outcome, ProfileRefresh::TransportFailed(_)));
    assert!(store.is_authenticated());
    assert_eq!(store.session().user, Some(serde_json::json!({"id": 1})));
    assert_eq!(storage.get(USER_KEY), Some(r#"{"id":1}"#.to_owned()));
}

#[test]
fn refresh_profile_rejection_keeps_stale_profile() {
    let (mut store, _storage) = logged_in_store();

    let api = FakeApi {
        me: Canned::Envelope(serde_json::json!({"code": 401, "message": "token expired"})),
        ..FakeApi::default()
    };
    let outcome = block_on(store.refresh_profile(&api));

    match outcome {
        ProfileRefresh::Rejected(rejection) => {
            assert_eq!(rejection.code, 401);
            assert_eq!(rejection.message.as_deref(), Some("token expired"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(store.is_authenticated());
    assert_eq!(store.session().user, Some(serde_json::json!({"id": 1})));
}

// =============================================================
// Restart round-trip
// =============================================================

#[test]
fn reload_from_storage_reproduces_the_session() {
    let (store, storage) = logged_in_store();

    let reloaded = SessionStore::load(storage);

    assert_eq!(reloaded.session(), store.session());
    assert!(reloaded.is_authenticated());
}

#[test]
fn reload_after_logout_is_unauthenticated() {
    let (mut store, storage) = logged_in_store();
    store.logout();

    let reloaded = SessionStore::load(storage);

    assert_eq!(reloaded.session(), &Session::default());
}
