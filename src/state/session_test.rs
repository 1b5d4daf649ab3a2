use super::*;
use crate::util::storage::Store;

fn usuario() -> User {
    User {
        id: 1,
        nome: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

fn payload() -> LoginResponse {
    LoginResponse {
        token: "T".to_owned(),
        user: usuario(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn initialize_restores_persisted_session() {
    let store = Store::memory();
    store.set(TOKEN_KEY, "T");
    store.set(USER_KEY, &serde_json::to_string(&usuario()).unwrap());

    let state = SessionState::initialize(&store);
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(usuario()));
}

#[test]
fn initialize_with_empty_storage_is_anonymous() {
    let store = Store::memory();
    let state = SessionState::initialize(&store);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn initialize_requires_both_entries() {
    let store = Store::memory();
    store.set(TOKEN_KEY, "T");
    assert!(!SessionState::initialize(&store).is_authenticated());

    let store = Store::memory();
    store.set(USER_KEY, &serde_json::to_string(&usuario()).unwrap());
    assert!(!SessionState::initialize(&store).is_authenticated());
}

#[test]
fn initialize_recovers_from_corrupted_user_record() {
    let store = Store::memory();
    store.set(TOKEN_KEY, "T");
    store.set(USER_KEY, "{nome: sem aspas");

    let state = SessionState::initialize(&store);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    // Recovery clears both durable entries.
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

// =============================================================
// Login / logout round trip
// =============================================================

#[test]
fn apply_login_persists_and_installs() {
    let store = Store::memory();
    let mut state = SessionState::initialize(&store);

    state.apply_login(&store, &payload());
    assert!(state.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), Some("T".to_owned()));
    let raw = store.get(USER_KEY).expect("usuário persistido");
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), usuario());
}

#[test]
fn login_then_hydration_restores_same_user() {
    let store = Store::memory();
    let mut state = SessionState::initialize(&store);
    state.apply_login(&store, &payload());

    let rehydrated = SessionState::initialize(&store);
    assert_eq!(rehydrated.user, Some(usuario()));
}

#[test]
fn logout_clears_everything() {
    let store = Store::memory();
    let mut state = SessionState::initialize(&store);
    state.apply_login(&store, &payload());

    state.logout(&store);
    assert!(!state.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn logout_is_idempotent() {
    let store = Store::memory();
    let mut state = SessionState::initialize(&store);
    state.logout(&store);
    state.logout(&store);
    assert!(!state.is_authenticated());
}

// =============================================================
// Route guard
// =============================================================

#[test]
fn guard_is_indeterminate_while_loading() {
    // No redirect while hydration is pending, whatever the user field says.
    let anonimo = SessionState {
        user: None,
        loading: true,
    };
    assert_eq!(guard(&anonimo), GuardDecision::Loading);

    let logado = SessionState {
        user: Some(usuario()),
        loading: true,
    };
    assert_eq!(guard(&logado), GuardDecision::Loading);
}

#[test]
fn guard_renders_when_authenticated() {
    let state = SessionState {
        user: Some(usuario()),
        loading: false,
    };
    assert_eq!(guard(&state), GuardDecision::Render);
}

#[test]
fn guard_redirects_when_anonymous() {
    let state = SessionState {
        user: None,
        loading: false,
    };
    assert_eq!(guard(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn guard_reflects_forced_teardown() {
    let store = Store::memory();
    let mut state = SessionState::initialize(&store);
    state.apply_login(&store, &payload());
    assert_eq!(guard(&state), GuardDecision::Render);

    // A 401 clears storage; the page then drops the in-memory user and the
    // next guard evaluation redirects.
    clear_persisted(&store);
    state.user = None;
    assert_eq!(guard(&state), GuardDecision::RedirectToLogin);
}
