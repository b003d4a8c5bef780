//! Collaborator interfaces the menu filter queries.
//!
//! The filter never talks to the sync engine, the account store or the
//! storage database directly. Consumers inject *how* by implementing these
//! traits; the core crate only defines *what* is asked. All methods are
//! synchronous, read-only snapshots taken at menu-build time.

use serde::{Deserialize, Serialize};

use crate::capability::ServerCapability;
use crate::config::FeatureToggles;
use crate::errors::AccountError;
use crate::files::FileEntry;

/// The active user on whose behalf a menu is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account name in `user@host` form, the key for capability lookups.
    pub account_name: String,
}

impl User {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
        }
    }
}

/// Local file and capability store.
pub trait StorageManager {
    /// Capability snapshot cached for the account, `None` if never fetched.
    fn capability(&self, account_name: &str) -> Option<ServerCapability>;

    /// Look up a file by its local storage id.
    fn file_by_id(&self, id: u64) -> Option<FileEntry>;
}

/// Background operations comparing local and remote state.
pub trait OperationsMonitor {
    fn is_synchronizing(&self, user: &User, file: &FileEntry) -> bool;
}

pub trait DownloadMonitor {
    fn is_downloading(&self, user: &User, file: &FileEntry) -> bool;
}

pub trait UploadMonitor {
    fn is_uploading(&self, user: &User, file: &FileEntry) -> bool;
}

/// External editors registered for the account (text, office, ...).
pub trait EditorRegistry {
    fn is_editor_available(&self, user: &User, mime_type: &str) -> bool;
}

/// Resolves the server-side user id of an account.
pub trait AccountDirectory {
    fn user_id(&self, user: &User) -> Result<String, AccountError>;
}

/// Accessor to the application components a menu build consults.
///
/// Transfer monitors are optional: a component that is not bound (service not
/// started yet) reports no transfers.
pub trait Components {
    fn storage(&self) -> &dyn StorageManager;

    fn accounts(&self) -> &dyn AccountDirectory;

    fn editors(&self) -> &dyn EditorRegistry;

    fn features(&self) -> &FeatureToggles;

    fn operations(&self) -> Option<&dyn OperationsMonitor> {
        None
    }

    fn downloads(&self) -> Option<&dyn DownloadMonitor> {
        None
    }

    fn uploads(&self) -> Option<&dyn UploadMonitor> {
        None
    }
}
