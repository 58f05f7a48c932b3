use super::*;

fn user(role: Role) -> User {
    User { id: "u1".to_owned(), name: "Nova".to_owned(), avatar_url: None, role }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolve_sets_user_and_stops_loading() {
    let mut state = AuthState::pending();
    state.resolve(Some(user(Role::Member)));
    assert!(state.is_signed_in());
    assert!(!state.loading);
    assert!(!state.is_admin());
}

#[test]
fn resolve_none_stops_loading() {
    let mut state = AuthState::pending();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn clear_drops_user() {
    let mut state = AuthState::default();
    state.resolve(Some(user(Role::Admin)));
    assert!(state.is_admin());
    state.clear();
    assert!(!state.is_signed_in());
    assert!(!state.is_admin());
}
