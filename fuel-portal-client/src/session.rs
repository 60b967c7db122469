use gloo_storage::{LocalStorage, Storage};

const API_TOKEN_STORAGE_KEY: &str = "fueltrackr-api-token";

/// Single slot holding the bearer token of the active session. The API
/// client reads the slot on every outgoing request and treats an empty slot
/// as a logged out state.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
}

/// Browser local storage implementation of the token slot. The token survives
/// page reloads and is only ever replaced by a newer login; there is no
/// client side invalidation.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get(API_TOKEN_STORAGE_KEY).ok()
    }

    fn set(&self, token: &str) {
        if let Err(error) = LocalStorage::set(API_TOKEN_STORAGE_KEY, token) {
            log::error!("Could not persist the session token. {error}");
        }
    }
}

/// Value for the `Authorization` header when a session token is present. The
/// token shape and expiry are never checked client side; a stale token is
/// only discovered when the backend rejects the request.
pub fn auth_header_value<S: TokenStore>(store: &S) -> Option<String> {
    store.get().map(|token| format!("Bearer {token}"))
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::{auth_header_value, TokenStore};

    /// In-memory stand-in for the browser storage slot
    #[derive(Clone, Default)]
    struct MemoryTokenStore(Rc<RefCell<Option<String>>>);

    impl TokenStore for MemoryTokenStore {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_owned());
        }
    }

    #[test]
    fn auth_header_should_be_absent_when_slot_empty() {
        let store = MemoryTokenStore::default();

        assert_eq!(auth_header_value(&store), None);
    }

    #[test]
    fn auth_header_should_carry_exact_stored_token() {
        let store = MemoryTokenStore::default();
        store.set("abc123");

        assert_eq!(auth_header_value(&store), Some("Bearer abc123".to_owned()));
    }

    #[test]
    fn newer_login_should_overwrite_token_slot() {
        let store = MemoryTokenStore::default();
        store.set("first-session");
        store.set("second-session");

        assert_eq!(store.get(), Some("second-session".to_owned()));
        assert_eq!(
            auth_header_value(&store),
            Some("Bearer second-session".to_owned())
        );
    }
}
