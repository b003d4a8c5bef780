//! Collaborators answered from the data carried by a single `menu.filter`
//! request.

use std::collections::{BTreeSet, HashMap};

use filemenu_core::capability::ServerCapability;
use filemenu_core::config::FeatureToggles;
use filemenu_core::errors::AccountError;
use filemenu_core::files::FileEntry;
use filemenu_core::services::{
    AccountDirectory, Components, DownloadMonitor, EditorRegistry, OperationsMonitor,
    StorageManager, UploadMonitor, User,
};

use crate::protocol::methods::TransferParams;

/// Host state as reported in one request.
pub struct RequestSnapshot<'a> {
    pub account_name: String,
    pub user_id: Option<String>,
    pub capability: Option<ServerCapability>,
    pub files: HashMap<u64, FileEntry>,
    pub editor_mime_types: BTreeSet<String>,
    pub transfers: Option<TransferParams>,
    pub features: &'a FeatureToggles,
}

impl StorageManager for RequestSnapshot<'_> {
    fn capability(&self, account_name: &str) -> Option<ServerCapability> {
        if account_name == self.account_name {
            self.capability.clone()
        } else {
            None
        }
    }

    fn file_by_id(&self, id: u64) -> Option<FileEntry> {
        self.files.get(&id).cloned()
    }
}

impl AccountDirectory for RequestSnapshot<'_> {
    fn user_id(&self, user: &User) -> Result<String, AccountError> {
        if user.account_name != self.account_name {
            return Err(AccountError::Lookup(format!(
                "unknown account {}",
                user.account_name
            )));
        }
        match self.user_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Err(AccountError::UserIdUnavailable(user.account_name.clone())),
        }
    }
}

impl EditorRegistry for RequestSnapshot<'_> {
    fn is_editor_available(&self, _user: &User, mime_type: &str) -> bool {
        self.editor_mime_types.contains(mime_type)
    }
}

impl OperationsMonitor for TransferParams {
    fn is_synchronizing(&self, _user: &User, file: &FileEntry) -> bool {
        self.synchronizing.contains(&file.id)
    }
}

impl DownloadMonitor for TransferParams {
    fn is_downloading(&self, _user: &User, file: &FileEntry) -> bool {
        self.downloading.contains(&file.id)
    }
}

impl UploadMonitor for TransferParams {
    fn is_uploading(&self, _user: &User, file: &FileEntry) -> bool {
        self.uploading.contains(&file.id)
    }
}

impl Components for RequestSnapshot<'_> {
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
        self.features
    }

    fn operations(&self) -> Option<&dyn OperationsMonitor> {
        self.transfers.as_ref().map(|t| t as &dyn OperationsMonitor)
    }

    fn downloads(&self) -> Option<&dyn DownloadMonitor> {
        self.transfers.as_ref().map(|t| t as &dyn DownloadMonitor)
    }

    fn uploads(&self) -> Option<&dyn UploadMonitor> {
        self.transfers.as_ref().map(|t| t as &dyn UploadMonitor)
    }
}
