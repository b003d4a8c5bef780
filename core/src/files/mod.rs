pub mod lock;
pub mod mime;

pub use lock::can_user_unlock_file;

use serde::{Deserialize, Serialize};

/// Kind of lock placed on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockType {
    /// Placed explicitly by a user; only that user may release it.
    Manual,
    /// Held by a collaborative editing session.
    Collaborative,
    /// Held by a client-side token (e.g. a desktop office suite).
    Token,
}

/// Lock metadata attached to a locked file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLock {
    pub lock_type: LockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_display_name: Option<String>,
    /// Application holding the lock, for collaborative and token locks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_editor: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub locked_at: u64,
    /// Seconds after `locked_at` the server releases the lock; 0 means never.
    #[serde(default)]
    pub timeout: u64,
}

/// A file or folder known to the local storage layer.
///
/// Entries are read-only snapshots; nothing in this crate mutates them.
/// Field names are serialized as camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Local storage id.
    pub id: u64,
    /// Local storage id of the containing folder.
    #[serde(default)]
    pub parent_id: u64,
    #[serde(default)]
    pub remote_path: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub is_folder: bool,
    /// For folders, the server-reported size of the content.
    #[serde(default)]
    pub file_length: u64,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default)]
    pub favorite: bool,
    /// The file content is cached locally.
    #[serde(default)]
    pub is_down: bool,
    #[serde(default)]
    pub group_folder: bool,
    #[serde(default)]
    pub can_reshare: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<FileLock>,
}

impl FileEntry {
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Last path segment of `remote_path`, ignoring a trailing slash.
    pub fn file_name(&self) -> &str {
        self.remote_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// Declared MIME type, or one guessed from the file name when the server
    /// reported nothing useful. Folders are never guessed.
    pub fn effective_mime_type(&self) -> &str {
        if self.is_folder {
            return &self.mime_type;
        }
        mime::effective_mime_type(&self.mime_type, self.file_name())
    }
}
