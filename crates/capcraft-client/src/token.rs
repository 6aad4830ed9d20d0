//! Bearer token persistence.
//!
//! The token lives in browser localStorage under a fixed key; the client
//! reads it once at construction and its in-memory copy is authoritative
//! afterwards. The trait is the seam that lets tests (and a future
//! cookie-backed server flow) swap the backing store.

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key the token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Storage for the bearer token.
///
/// Note: no `Send` bounds because wasm is single-threaded and the browser
/// storage handles aren't `Send`.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

impl<S: TokenStore> TokenStore for Rc<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) {
        (**self).save(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Browser localStorage under [`TOKEN_STORAGE_KEY`].
///
/// Storage failures (private browsing, quota) are swallowed: losing
/// persistence degrades to a per-session login, which is acceptable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// Non-wasm stub: nothing to persist outside a browser.
#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) {}

    fn clear(&self) {}
}

/// In-memory store for tests and server-side construction.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    cell: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            cell: RefCell::new(Some(token.to_owned())),
        }
    }

    /// The currently persisted token, if any.
    pub fn current(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.cell.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.cell.borrow_mut() = None;
    }
}
