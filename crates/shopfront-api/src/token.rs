//! # Session Token Storage
//!
//! Durable client storage for the one session token the storefront holds.
//! Written on successful login, cleared on logout, read by whatever layer
//! attaches it to authenticated requests.
//!
//! ## Platform-Specific Paths
//! - **macOS**: `~/Library/Application Support/com.shopfront.shopfront/session-token`
//! - **Windows**: `%APPDATA%\shopfront\shopfront\data\session-token`
//! - **Linux**: `~/.local/share/shopfront/session-token`
//!
//! ## Development Override
//! Set `SHOPFRONT_TOKEN_PATH` to use a custom file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

const TOKEN_FILE_NAME: &str = "session-token";

/// One-token durable store backed by a file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Opens the store at the platform data directory (or the
    /// `SHOPFRONT_TOKEN_PATH` override).
    pub fn open_default() -> ApiResult<Self> {
        if let Ok(path) = std::env::var("SHOPFRONT_TOKEN_PATH") {
            return Ok(TokenStore::at_path(path));
        }

        let proj_dirs = ProjectDirs::from("com", "shopfront", "shopfront").ok_or_else(|| {
            ApiError::Config("could not determine app data directory".to_string())
        })?;

        Ok(TokenStore::at_path(
            proj_dirs.data_dir().join(TOKEN_FILE_NAME),
        ))
    }

    /// Opens the store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the token, replacing any previous one.
    pub fn save(&self, token: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    /// Loads the stored token, if any.
    pub fn load(&self) -> ApiResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the stored token. Already-absent is not an error.
    pub fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_tempdir() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at_path(dir.path().join("session-token"));
        (dir, store)
    }

    #[test]
    fn test_load_before_save_is_none() {
        let (_dir, store) = store_in_tempdir();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_token_round_trip() {
        let (_dir, store) = store_in_tempdir();
        store.save("eyJhbGciOi...").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("eyJhbGciOi..."));

        // Saving again replaces the previous token
        store.save("second-token").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second-token"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = store_in_tempdir();
        store.save("tok").unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at_path(dir.path().join("nested/deep/session-token"));
        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok"));
    }
}
