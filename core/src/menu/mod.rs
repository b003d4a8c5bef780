//! File action menu catalog and visibility computation.
//!
//! [`FileMenuFilter`] evaluates every [`MenuAction`] against a
//! [`Selection`] and returns a [`MenuVisibility`] partition. Translating
//! actions into concrete UI menu items is left to the consumer.

pub mod filter;
pub mod selection;

pub use filter::FileMenuFilter;
pub use selection::Selection;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed catalog of file actions a menu can offer.
///
/// Serialized as kebab-case identifiers (`"select-all"`, `"lock-info"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuAction {
    Download,
    Export,
    Rename,
    Copy,
    Move,
    Remove,
    SelectAll,
    DeselectAll,
    OpenWith,
    CancelSync,
    Sync,
    Share,
    Send,
    Details,
    Favorite,
    Unfavorite,
    Encrypt,
    UnsetEncrypted,
    SetWallpaper,
    Stream,
    Lock,
    Unlock,
    LockInfo,
    Edit,
}

impl MenuAction {
    /// Every action, in catalog order.
    pub const ALL: [MenuAction; 24] = [
        Self::Download,
        Self::Export,
        Self::Rename,
        Self::Copy,
        Self::Move,
        Self::Remove,
        Self::SelectAll,
        Self::DeselectAll,
        Self::OpenWith,
        Self::CancelSync,
        Self::Sync,
        Self::Share,
        Self::Send,
        Self::Details,
        Self::Favorite,
        Self::Unfavorite,
        Self::Encrypt,
        Self::UnsetEncrypted,
        Self::SetWallpaper,
        Self::Stream,
        Self::Lock,
        Self::Unlock,
        Self::LockInfo,
        Self::Edit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Export => "export",
            Self::Rename => "rename",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Remove => "remove",
            Self::SelectAll => "select-all",
            Self::DeselectAll => "deselect-all",
            Self::OpenWith => "open-with",
            Self::CancelSync => "cancel-sync",
            Self::Sync => "sync",
            Self::Share => "share",
            Self::Send => "send",
            Self::Details => "details",
            Self::Favorite => "favorite",
            Self::Unfavorite => "unfavorite",
            Self::Encrypt => "encrypt",
            Self::UnsetEncrypted => "unset-encrypted",
            Self::SetWallpaper => "set-wallpaper",
            Self::Stream => "stream",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::LockInfo => "lock-info",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the menu is being built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuContext {
    /// The overflow ("more") menu rather than the main action bar.
    pub overflow_menu: bool,
    /// A single-file screen (preview, details) rather than a listing.
    pub in_single_file_fragment: bool,
}

/// Partition of the action catalog into shown and hidden actions.
///
/// An action is only ever in one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuVisibility {
    show: BTreeSet<MenuAction>,
    hide: BTreeSet<MenuAction>,
}

impl MenuVisibility {
    /// Every action hidden.
    pub fn hidden_all() -> Self {
        Self {
            show: BTreeSet::new(),
            hide: MenuAction::ALL.into_iter().collect(),
        }
    }

    /// Record the decision for `action`, replacing any earlier one.
    pub fn set(&mut self, action: MenuAction, visible: bool) {
        if visible {
            self.hide.remove(&action);
            self.show.insert(action);
        } else {
            self.show.remove(&action);
            self.hide.insert(action);
        }
    }

    pub fn is_shown(&self, action: MenuAction) -> bool {
        self.show.contains(&action)
    }

    pub fn is_hidden(&self, action: MenuAction) -> bool {
        self.hide.contains(&action)
    }

    pub fn shown(&self) -> &BTreeSet<MenuAction> {
        &self.show
    }

    pub fn hidden(&self) -> &BTreeSet<MenuAction> {
        &self.hide
    }

    /// Whether every catalog action has exactly one decision.
    pub fn is_complete(&self) -> bool {
        MenuAction::ALL
            .iter()
            .all(|a| self.show.contains(a) != self.hide.contains(a))
    }
}
