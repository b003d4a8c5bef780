use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use filemenu_core::capability::ServerCapability;
use filemenu_core::files::FileEntry;
use filemenu_core::menu::{MenuAction, MenuContext, MenuVisibility};

// ── initialize ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    pub protocol_version: String,
    pub client: String,
    pub client_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub methods: Vec<String>,
    pub actions: Vec<MenuAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitializeResult {
    pub protocol_version: String,
    pub agent_version: String,
    pub capabilities: Capabilities,
}

// ── menu.catalog ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResult {
    pub actions: Vec<MenuAction>,
}

// ── menu.filter ─────────────────────────────────────────────────────

/// Parameters of `menu.filter`.
///
/// Envelope fields are snake_case like every other method's params. The
/// embedded [`FileEntry`] and [`ServerCapability`] values keep the camelCase
/// shape the storage layer persists them in (`remotePath`,
/// `filesLockingVersion`), so hosts can forward stored records unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuFilterParams {
    pub selection: SelectionParams,
    pub user: UserParams,
    /// Capability snapshot of the user's server, absent if never fetched.
    #[serde(default)]
    pub capability: Option<ServerCapability>,
    #[serde(default)]
    pub context: ContextParams,
    /// Absent when the host has no transfer monitors bound.
    #[serde(default)]
    pub transfers: Option<TransferParams>,
    /// Entries the filter may look up by id (parents of selected items).
    #[serde(default)]
    pub files_by_id: Vec<FileEntry>,
    #[serde(default)]
    pub editor_mime_types: BTreeSet<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionParams {
    pub files: Vec<FileEntry>,
    /// Size of the listing; defaults to the number of selected files.
    #[serde(default)]
    pub total_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserParams {
    pub account_name: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ContextParams {
    #[serde(default)]
    pub overflow_menu: bool,
    #[serde(default)]
    pub in_single_file_fragment: bool,
}

impl From<ContextParams> for MenuContext {
    fn from(params: ContextParams) -> Self {
        Self {
            overflow_menu: params.overflow_menu,
            in_single_file_fragment: params.in_single_file_fragment,
        }
    }
}

/// File ids currently in flight, per monitor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferParams {
    #[serde(default)]
    pub synchronizing: BTreeSet<u64>,
    #[serde(default)]
    pub downloading: BTreeSet<u64>,
    #[serde(default)]
    pub uploading: BTreeSet<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuFilterResult {
    pub show: Vec<MenuAction>,
    pub hide: Vec<MenuAction>,
}

impl From<&MenuVisibility> for MenuFilterResult {
    fn from(visibility: &MenuVisibility) -> Self {
        Self {
            show: visibility.shown().iter().copied().collect(),
            hide: visibility.hidden().iter().copied().collect(),
        }
    }
}

// ── health.check ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    pub status: String,
    pub uptime_secs: u64,
    pub requests_served: u64,
}
