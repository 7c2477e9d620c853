//! Credential storage
//!
//! The service issues a single opaque token on sign-in/sign-up. The
//! gateway reads it on every outgoing request; auth operations write
//! and clear it. [`CredentialStore`] persists the token as a JSON file
//! so it survives process restarts; [`MemoryTokenStore`] is the
//! in-process equivalent for tests and short-lived tooling.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Read/write access to the persisted authentication token.
///
/// The gateway only ever calls [`TokenStore::token`]; writes belong to
/// the auth operations.
pub trait TokenStore: Send + Sync {
    /// Current token, if one has been stored
    fn token(&self) -> Option<String>;

    /// Store a new token, replacing any previous one
    fn save(&self, token: &str) -> std::io::Result<()>;

    /// Remove the stored token
    fn clear(&self) -> std::io::Result<()>;
}

/// Persisted credential shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Credential {
    token: String,
}

/// File-backed credential store
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a credential store rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Check whether a credential file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Credential file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for CredentialStore {
    fn token(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        let credential: Credential = serde_json::from_str(&json).ok()?;
        Some(credential.token)
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        self.ensure_dir()?;
        let credential = Credential {
            token: token.to_string(),
        };
        let json = serde_json::to_string_pretty(&credential)?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_credential_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::new(temp_dir.path(), "credential.json");

        assert!(!store.exists());
        assert!(store.token().is_none());

        store.save("abc123").unwrap();
        assert!(store.exists());
        assert_eq!(store.token().as_deref(), Some("abc123"));

        // Overwrite keeps only the newest token
        store.save("def456").unwrap();
        assert_eq!(store.token().as_deref(), Some("def456"));

        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_credential_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        CredentialStore::new(temp_dir.path(), "credential.json")
            .save("persisted")
            .unwrap();

        let reopened = CredentialStore::new(temp_dir.path(), "credential.json");
        assert_eq!(reopened.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();
        assert!(store.token().is_none());

        store.save("t").unwrap();
        assert_eq!(store.token().as_deref(), Some("t"));

        store.clear().unwrap();
        assert!(store.token().is_none());
    }
}
