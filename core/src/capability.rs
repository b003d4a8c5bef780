//! Server capability snapshot consulted by the menu filter.
//!
//! Capabilities are fetched once per account by the storage layer and handed
//! to the filter as an immutable value. Flags the server may not advertise are
//! modelled as [`TriState`] rather than `Option<bool>`.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest server major version that still exposes rich-document editing
/// through the legacy capability lists.
pub const LEGACY_RICH_DOCUMENTS_MAX_MAJOR: u32 = 18;

/// A capability flag that may be true, false or not reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    #[default]
    Unknown,
}

impl TriState {
    pub fn is_true(self) -> bool {
        self == Self::True
    }

    pub fn is_false(self) -> bool {
        self == Self::False
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

/// Dotted server version, e.g. `18.0.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl ServerVersion {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Parse `major[.minor[.micro]]`; missing components are zero.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        let micro = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, micro))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl TryFrom<String> for ServerVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid server version: {value}"))
    }
}

impl From<ServerVersion> for String {
    fn from(value: ServerVersion) -> Self {
        value.to_string()
    }
}

/// Server-advertised feature flags relevant to file actions.
///
/// Fields the server did not report deserialize to [`TriState::Unknown`],
/// `None` or an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ServerVersion>,
    #[serde(default)]
    pub files_sharing_api_enabled: TriState,
    #[serde(default)]
    pub end_to_end_encryption: TriState,
    /// Present only when the server supports file locking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_locking_version: Option<String>,
    #[serde(default)]
    pub rich_documents_mime_types: BTreeSet<String>,
    #[serde(default)]
    pub rich_documents_optional_mime_types: BTreeSet<String>,
    #[serde(default)]
    pub rich_documents_direct_editing: TriState,
}

impl ServerCapability {
    /// Snapshot used when the server's capabilities are not known at all:
    /// every feature reads as disabled.
    pub fn closed() -> Self {
        Self {
            version: None,
            files_sharing_api_enabled: TriState::False,
            end_to_end_encryption: TriState::False,
            files_locking_version: None,
            rich_documents_mime_types: BTreeSet::new(),
            rich_documents_optional_mime_types: BTreeSet::new(),
            rich_documents_direct_editing: TriState::False,
        }
    }

    /// Sharing is offered unless the server explicitly disabled its API.
    pub fn is_share_api_enabled(&self) -> bool {
        !self.files_sharing_api_enabled.is_false()
    }

    pub fn is_end_to_end_encryption_enabled(&self) -> bool {
        self.end_to_end_encryption.is_true()
    }

    pub fn is_file_locking_enabled(&self) -> bool {
        self.files_locking_version.is_some()
    }

    /// Rich-document editing through the legacy capability lists.
    ///
    /// Only servers up to major version 18 advertise these lists; an unknown
    /// version is treated as a legacy server.
    pub fn supports_legacy_rich_documents(&self, mime_type: &str) -> bool {
        let legacy_server = self
            .version
            .map_or(true, |v| v.major <= LEGACY_RICH_DOCUMENTS_MAX_MAJOR);
        legacy_server
            && (self.rich_documents_mime_types.contains(mime_type)
                || self.rich_documents_optional_mime_types.contains(mime_type))
            && self.rich_documents_direct_editing.is_true()
    }
}
