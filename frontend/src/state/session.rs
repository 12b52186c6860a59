use std::{cell::RefCell, fmt, rc::Rc};

use thiserror::Error;

use crate::api::ApiError;

/// Local storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to persist session token")]
    Persist,
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError::unknown(error.to_string())
    }
}

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), SessionError>;
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window object".into()))?;
        window
            .local_storage()
            .map_err(|_| SessionError::Unavailable("access denied".into()))?
            .ok_or_else(|| SessionError::Unavailable("no localStorage".into()))
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .ok()
            .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| SessionError::Persist)
    }

    fn clear(&self) {
        match Self::storage() {
            Ok(storage) => {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
            Err(err) => log::warn!("could not clear session token: {}", err),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// The authenticated session of the current tab. Created once at start-up and
/// handed to whatever needs the token through context.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn from_browser() -> Self {
        let session = Self::new(LocalStorageTokenStore);
        log::info!(
            "session restored from storage (authenticated: {})",
            session.is_authenticated()
        );
        session
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Browser storage on wasm, memory elsewhere.
    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::from_browser()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        Self::in_memory()
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.trim().is_empty())
    }

    /// Token presence only; validity is up to the backend.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn start(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)
    }

    pub fn clear(&self) {
        log::debug!("clearing session token");
        self.store.clear();
    }
}
