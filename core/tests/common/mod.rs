//! Shared test utilities for filemenu core integration tests.
//!
//! Provides an in-memory [`Components`] implementation with switchable
//! transfer state and builders for typical file entries.

// Each integration test is compiled as its own crate, so not every test file
// uses every function from this shared module. Suppress dead_code warnings.
#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use filemenu_core::capability::{ServerCapability, TriState};
use filemenu_core::config::FeatureToggles;
use filemenu_core::errors::AccountError;
use filemenu_core::files::{FileEntry, FileLock, LockType};
use filemenu_core::services::{
    AccountDirectory, Components, DownloadMonitor, EditorRegistry, OperationsMonitor,
    StorageManager, UploadMonitor, User,
};

pub const ACCOUNT: &str = "alice@cloud.example.com";
pub const USER_ID: &str = "alice";
pub const ROOT_ID: u64 = 1;

/// Collaborators backed by plain collections.
pub struct FakeComponents {
    pub capability: Option<ServerCapability>,
    pub files: HashMap<u64, FileEntry>,
    pub user_id: Result<String, AccountError>,
    pub features: FeatureToggles,
    pub editor_mime_types: BTreeSet<String>,
    pub synchronizing: BTreeSet<u64>,
    pub downloading: BTreeSet<u64>,
    pub uploading: BTreeSet<u64>,
    /// When false, no transfer monitor is bound.
    pub monitors_bound: bool,
}

impl FakeComponents {
    pub fn new() -> Self {
        let root = FileEntry {
            id: ROOT_ID,
            remote_path: "/".into(),
            mime_type: "DIR".into(),
            is_folder: true,
            ..FileEntry::default()
        };
        Self {
            capability: Some(full_capability()),
            files: HashMap::from([(ROOT_ID, root)]),
            user_id: Ok(USER_ID.to_string()),
            features: FeatureToggles::default(),
            editor_mime_types: BTreeSet::new(),
            synchronizing: BTreeSet::new(),
            downloading: BTreeSet::new(),
            uploading: BTreeSet::new(),
            monitors_bound: true,
        }
    }

    pub fn with_capability(mut self, capability: Option<ServerCapability>) -> Self {
        self.capability = capability;
        self
    }

    pub fn with_file(mut self, file: FileEntry) -> Self {
        self.files.insert(file.id, file);
        self
    }
}

impl StorageManager for FakeComponents {
    fn capability(&self, account_name: &str) -> Option<ServerCapability> {
        if account_name == ACCOUNT {
            self.capability.clone()
        } else {
            None
        }
    }

    fn file_by_id(&self, id: u64) -> Option<FileEntry> {
        self.files.get(&id).cloned()
    }
}

impl AccountDirectory for FakeComponents {
    fn user_id(&self, _user: &User) -> Result<String, AccountError> {
        self.user_id.clone()
    }
}

impl EditorRegistry for FakeComponents {
    fn is_editor_available(&self, _user: &User, mime_type: &str) -> bool {
        self.editor_mime_types.contains(mime_type)
    }
}

impl OperationsMonitor for FakeComponents {
    fn is_synchronizing(&self, _user: &User, file: &FileEntry) -> bool {
        self.synchronizing.contains(&file.id)
    }
}

impl DownloadMonitor for FakeComponents {
    fn is_downloading(&self, _user: &User, file: &FileEntry) -> bool {
        self.downloading.contains(&file.id)
    }
}

impl UploadMonitor for FakeComponents {
    fn is_uploading(&self, _user: &User, file: &FileEntry) -> bool {
        self.uploading.contains(&file.id)
    }
}

impl Components for FakeComponents {
    fn storage(&self) -> &dyn StorageManager {
        self
    }

    fn accounts(&self) -> &dyn AccountDirectory {
        self
    }

    fn editors(&self) -> &dyn EditorRegistry {
        self
    }

    fn features(&self) -> &FeatureToggles {
        &self.features
    }

    fn operations(&self) -> Option<&dyn OperationsMonitor> {
        self.monitors_bound.then_some(self as &dyn OperationsMonitor)
    }

    fn downloads(&self) -> Option<&dyn DownloadMonitor> {
        self.monitors_bound.then_some(self as &dyn DownloadMonitor)
    }

    fn uploads(&self) -> Option<&dyn UploadMonitor> {
        self.monitors_bound.then_some(self as &dyn UploadMonitor)
    }
}

pub fn user() -> User {
    User::new(ACCOUNT)
}

/// Capability of a current server with sharing, e2e and locking enabled.
pub fn full_capability() -> ServerCapability {
    ServerCapability {
        files_sharing_api_enabled: TriState::True,
        end_to_end_encryption: TriState::True,
        files_locking_version: Some("1.0".into()),
        ..ServerCapability::default()
    }
}

/// A plain text file in the root folder.
pub fn plain_file(id: u64, name: &str) -> FileEntry {
    FileEntry {
        id,
        parent_id: ROOT_ID,
        remote_path: format!("/{name}"),
        mime_type: "text/plain".into(),
        file_length: 1024,
        can_reshare: true,
        ..FileEntry::default()
    }
}

pub fn cached_file(id: u64, name: &str) -> FileEntry {
    FileEntry {
        is_down: true,
        ..plain_file(id, name)
    }
}

/// An empty folder in the root folder.
pub fn empty_folder(id: u64, name: &str) -> FileEntry {
    FileEntry {
        id,
        parent_id: ROOT_ID,
        remote_path: format!("/{name}/"),
        mime_type: "DIR".into(),
        is_folder: true,
        can_reshare: true,
        ..FileEntry::default()
    }
}

pub fn manual_lock(owner_id: &str) -> FileLock {
    FileLock {
        lock_type: LockType::Manual,
        owner_id: Some(owner_id.to_string()),
        owner_display_name: Some(owner_id.to_string()),
        owner_editor: None,
        locked_at: 1_700_000_000,
        timeout: 0,
    }
}
