use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Value of [`FeatureToggles::send_files_to_other_apps`] that disables the
/// "send" action. Compared case-insensitively.
pub const SEND_OFF: &str = "off";

/// Build-time feature toggles of the client flavor.
///
/// Every field has a default so a partial (or empty) JSON object is a valid
/// configuration. Field names are serialized as camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggles {
    #[serde(default = "default_enabled")]
    pub share_via_link: bool,
    #[serde(default = "default_enabled")]
    pub share_with_users: bool,
    /// `"off"` hides the send action; any other value leaves it to the rules.
    #[serde(default = "default_send_files")]
    pub send_files_to_other_apps: String,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            share_via_link: default_enabled(),
            share_with_users: default_enabled(),
            send_files_to_other_apps: default_send_files(),
        }
    }
}

impl FeatureToggles {
    /// Read toggles from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whether at least one sharing flavor is compiled in.
    pub fn sharing_allowed(&self) -> bool {
        self.share_via_link || self.share_with_users
    }

    pub fn send_disabled(&self) -> bool {
        self.send_files_to_other_apps.eq_ignore_ascii_case(SEND_OFF)
    }
}

// --- Default value functions ---

fn default_enabled() -> bool {
    true
}

fn default_send_files() -> String {
    "on".to_string()
}
