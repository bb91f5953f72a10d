//! Linked accounts: default player handles keyed by Discord user ID.
//!
//! The file is a JSON object mapping a user ID string to a list of handles,
//! e.g. `{ "123456789012345678": ["Beaulo.TSM"] }`. The first handle wins.

use crate::defaults::DEFAULT_ACCOUNT_FILES;
use siege_common::{Result, SiegeError, UserId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Read-only map of Discord users to their linked player handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedAccounts {
    handles: HashMap<String, Vec<String>>,
}

impl LinkedAccounts {
    /// No linked accounts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the JSON account map.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let handles: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
        Ok(Self { handles })
    }

    /// Loads accounts from `configured`, or from the first default file that exists.
    ///
    /// Missing, unreadable or malformed files yield an empty map.
    pub fn load(configured: Option<&Path>) -> Self {
        let candidates: Vec<PathBuf> = match configured {
            Some(path) => vec![path.to_path_buf()],
            None => DEFAULT_ACCOUNT_FILES.iter().map(PathBuf::from).collect(),
        };

        let Some(path) = candidates.into_iter().find(|path| path.exists()) else {
            info!("No linked accounts file found");
            return Self::empty();
        };

        match std::fs::read_to_string(&path)
            .map_err(SiegeError::from)
            .and_then(|content| Self::from_json_str(&content))
        {
            Ok(accounts) => {
                info!("Loaded {} linked accounts from {}", accounts.len(), path.display());
                accounts
            }
            Err(e) => {
                warn!("Ignoring linked accounts file {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    /// The default handle linked to `user`.
    pub fn handle_for(&self, user: UserId) -> Option<&str> {
        self.handles
            .get(&user.to_string())
            .and_then(|handles| handles.iter().map(|h| h.trim()).find(|h| !h.is_empty()))
    }

    /// Number of users with at least one entry.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no users are linked.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
