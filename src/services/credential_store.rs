use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::api::ApiError;
use crate::models::CredentialPair;

/// Holds the session's token pair and mirrors it to a JSON file, so every
/// command of the CLI shares one session.
#[derive(Debug)]
pub struct CredentialStore {
    path: Option<PathBuf>,
    pair: Mutex<Option<CredentialPair>>,
}

impl CredentialStore {
    /// A store that never touches the disk.
    pub fn in_memory(pair: Option<CredentialPair>) -> Self {
        Self {
            path: None,
            pair: Mutex::new(pair),
        }
    }

    /// Loads the pair saved at `path`. A missing file means "not logged in";
    /// a corrupt one is ignored with a warning.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ApiError> {
        let path = path.into();
        let pair = match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<CredentialPair>(&text) {
                Ok(pair) => Some(pair),
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Ignoring unreadable credential file");
                    None
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: Some(path),
            pair: Mutex::new(pair),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn current(&self) -> Option<CredentialPair> {
        self.lock().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().is_some()
    }

    pub fn cookie_header(&self) -> Option<String> {
        self.lock().as_ref().map(CredentialPair::cookie_header)
    }

    /// Swaps in a new pair and persists it.
    pub async fn replace(&self, pair: CredentialPair) -> Result<(), ApiError> {
        *self.lock() = Some(pair.clone());
        self.persist(&pair).await
    }

    /// Forgets the pair and deletes the file. Returns whether anything was removed.
    pub async fn clear(&self) -> Result<bool, ApiError> {
        let had_pair = self.lock().take().is_some();
        let Some(path) = &self.path else {
            return Ok(had_pair);
        };
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(had_pair),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, pair: &CredentialPair) -> Result<(), ApiError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_string_pretty(pair)?).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
        }
        tracing::debug!(path = %path.display(), "Credentials saved");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<CredentialPair>> {
        self.pair.lock().unwrap_or_else(|e| e.into_inner())
    }
}
