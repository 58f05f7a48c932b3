use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;

use super::*;

// =============================================================
// Fakes
// =============================================================

struct FakeAuth {
    result: Result<(), LogoutFailure>,
    calls: RefCell<u32>,
}

impl FakeAuth {
    fn ok() -> Self {
        Self { result: Ok(()), calls: RefCell::new(0) }
    }

    fn failing(reason: &str) -> Self {
        Self { result: Err(LogoutFailure(reason.to_owned())), calls: RefCell::new(0) }
    }
}

impl SessionAuth for FakeAuth {
    async fn logout(&self) -> Result<(), LogoutFailure> {
        *self.calls.borrow_mut() += 1;
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

#[derive(Default)]
struct MemoryStore(RefCell<HashMap<String, String>>);

impl MemoryStore {
    fn with_last_path(path: &str) -> Self {
        let store = Self::default();
        store.set_item(LAST_VISITED_PATH_KEY, path);
        store.set_item("theme", "dark");
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[derive(Default)]
struct RecordingRouter {
    pushes: RefCell<Vec<String>>,
    backs: RefCell<u32>,
}

impl Navigator for RecordingRouter {
    fn back(&self) {
        *self.backs.borrow_mut() += 1;
    }

    fn push(&self, path: &str) {
        self.pushes.borrow_mut().push(path.to_owned());
    }
}

// =============================================================
// exit_session
// =============================================================

#[test]
fn successful_logout_notifies_clears_and_redirects() {
    let auth = FakeAuth::ok();
    let notifier = RecordingNotifier::default();
    let store = MemoryStore::with_last_path("/teams/red-wolves");
    let router = RecordingRouter::default();

    let outcome = block_on(exit_session(&auth, &notifier, &store, &router));

    assert_eq!(outcome, LogoutOutcome::LoggedOut);
    assert_eq!(*auth.calls.borrow(), 1);
    assert_eq!(*notifier.successes.borrow(), vec![LOGOUT_SUCCESS_MESSAGE.to_owned()]);
    assert!(notifier.errors.borrow().is_empty());
    assert_eq!(store.get_item(LAST_VISITED_PATH_KEY), None);
    assert_eq!(*router.pushes.borrow(), vec!["/?logout=true".to_owned()]);
}

#[test]
fn failed_logout_still_clears_and_redirects() {
    let auth = FakeAuth::failing("network down");
    let notifier = RecordingNotifier::default();
    let store = MemoryStore::with_last_path("/a/settings");
    let router = RecordingRouter::default();

    let outcome = block_on(exit_session(&auth, &notifier, &store, &router));

    assert_eq!(outcome, LogoutOutcome::Failed);
    assert!(notifier.successes.borrow().is_empty());
    assert_eq!(*notifier.errors.borrow(), vec![LOGOUT_FAILURE_MESSAGE.to_owned()]);
    assert_eq!(store.get_item(LAST_VISITED_PATH_KEY), None);
    assert_eq!(*router.pushes.borrow(), vec!["/?logout=true".to_owned()]);
}

#[test]
fn logout_only_removes_last_visited_path() {
    let store = MemoryStore::with_last_path("/news");
    block_on(exit_session(&FakeAuth::ok(), &RecordingNotifier::default(), &store, &RecordingRouter::default()));
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
}

#[test]
fn logout_without_stored_path_still_redirects() {
    let store = MemoryStore::default();
    let router = RecordingRouter::default();
    block_on(exit_session(&FakeAuth::failing("401"), &RecordingNotifier::default(), &store, &router));
    assert_eq!(*router.pushes.borrow(), vec![LOGOUT_REDIRECT.to_owned()]);
    assert_eq!(*router.backs.borrow(), 0);
}

#[test]
fn redirect_marks_logout_and_differs_from_root() {
    assert_ne!(LOGOUT_REDIRECT, "/");
    assert!(LOGOUT_REDIRECT.starts_with("/?"));
    assert!(LOGOUT_REDIRECT.contains("logout=true"));
}

#[test]
fn logout_failure_message_includes_reason() {
    assert_eq!(LogoutFailure("timeout".to_owned()).to_string(), "logout failed: timeout");
}

// =============================================================
// BrowserSession
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_session_keeps_user_when_server_call_fails() {
    use crate::net::types::{Role, User};

    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        auth.update(|a| {
            a.resolve(Some(User { id: "u1".to_owned(), name: "Nova".to_owned(), avatar_url: None, role: Role::Member }));
        });
        let session = BrowserSession { auth };
        assert!(block_on(session.logout()).is_err());
        assert!(auth.get_untracked().is_signed_in());
    });
}
