//! Decision table mapping a selection to visible menu actions.

use tracing::debug;

use super::{MenuAction, MenuContext, MenuVisibility, Selection};
use crate::capability::ServerCapability;
use crate::errors::AccountError;
use crate::files::{can_user_unlock_file, FileEntry};
use crate::services::{Components, User};

/// Decides which file actions a menu offers for a selection.
///
/// Built once per menu; [`compute_visibility`](Self::compute_visibility)
/// only reads collaborator state and never mutates it.
pub struct FileMenuFilter<'a> {
    selection: Selection<'a>,
    components: &'a dyn Components,
    context: MenuContext,
    user: &'a User,
    user_id: String,
    capability: ServerCapability,
}

impl<'a> FileMenuFilter<'a> {
    /// Resolve the user's server-side id and capability snapshot.
    ///
    /// Fails with the account directory's error when the user id cannot be
    /// resolved. A missing capability snapshot is replaced by
    /// [`ServerCapability::closed`].
    pub fn new(
        selection: Selection<'a>,
        components: &'a dyn Components,
        context: MenuContext,
        user: &'a User,
    ) -> Result<Self, AccountError> {
        let user_id = components.accounts().user_id(user)?;
        let capability = components
            .storage()
            .capability(&user.account_name)
            .unwrap_or_else(|| {
                debug!(
                    "No capability snapshot for {}, treating features as disabled",
                    user.account_name
                );
                ServerCapability::closed()
            });

        Ok(Self {
            selection,
            components,
            context,
            user,
            user_id,
            capability,
        })
    }

    /// Filter for a single file shown on its own.
    pub fn for_file(
        file: &'a FileEntry,
        components: &'a dyn Components,
        context: MenuContext,
        user: &'a User,
    ) -> Result<Self, AccountError> {
        Self::new(Selection::single(file), components, context, user)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Partition the action catalog into shown and hidden actions.
    pub fn compute_visibility(&self) -> MenuVisibility {
        if self.selection.is_empty() {
            debug!("Empty selection, hiding all menu actions");
            return MenuVisibility::hidden_all();
        }

        let transferring = self.any_file_transferring();
        let mut visibility = MenuVisibility::default();
        for action in MenuAction::ALL {
            visibility.set(action, self.is_visible(action, transferring));
        }

        debug!(
            "Menu for {} of {} item(s): {} shown, {} hidden (transferring: {})",
            self.selection.len(),
            self.selection.total_count(),
            visibility.shown().len(),
            visibility.hidden().len(),
            transferring
        );
        visibility
    }

    fn is_visible(&self, action: MenuAction, transferring: bool) -> bool {
        let s = &self.selection;
        let ctx = &self.context;
        let locking = self.capability.is_file_locking_enabled();
        let e2e = self.capability.is_end_to_end_encryption_enabled();

        match action {
            MenuAction::Download => {
                !s.is_empty() && !s.contains_folder() && !s.any_file_down() && !transferring
            }
            MenuAction::Export => !s.is_empty() && !s.contains_folder(),
            MenuAction::Rename => {
                s.is_single_selection()
                    && !transferring
                    && !s.contains_encrypted_file()
                    && !s.contains_encrypted_folder()
                    && !s.contains_locked_file()
            }
            MenuAction::Copy => {
                !s.is_empty()
                    && !transferring
                    && !s.contains_encrypted_file()
                    && !s.contains_encrypted_folder()
            }
            MenuAction::Move => {
                !s.is_empty()
                    && !transferring
                    && !s.contains_encrypted_file()
                    && !s.contains_encrypted_folder()
                    && !s.contains_locked_file()
            }
            MenuAction::Remove => !s.is_empty() && !transferring && !s.contains_locked_file(),
            MenuAction::SelectAll => {
                !ctx.in_single_file_fragment && s.is_partial() && !ctx.overflow_menu
            }
            MenuAction::DeselectAll => {
                !ctx.in_single_file_fragment && !s.is_empty() && !ctx.overflow_menu
            }
            MenuAction::OpenWith => {
                s.single_file().is_some() && s.any_file_down() && !transferring
            }
            MenuAction::CancelSync => !s.is_empty() && transferring,
            MenuAction::Sync => {
                !s.is_empty() && (s.any_file_down() || s.contains_folder()) && !transferring
            }
            MenuAction::Share => self.can_share(),
            MenuAction::Send => self.can_send(),
            MenuAction::Details => s.is_single_selection(),
            MenuAction::Favorite => !s.is_empty() && !transferring && !s.all_favorites(),
            MenuAction::Unfavorite => !s.is_empty() && !transferring && !s.all_not_favorites(),
            MenuAction::Encrypt => {
                s.single_folder().is_some()
                    && !s.is_encrypted_folder()
                    && !s.is_group_folder()
                    && e2e
                    && s.is_empty_folder()
            }
            MenuAction::UnsetEncrypted => {
                e2e && s.is_encrypted_folder() && !self.has_encrypted_parent() && s.is_empty_folder()
            }
            MenuAction::SetWallpaper => s.is_single_raster_image(),
            MenuAction::Stream => s.is_single_media(),
            MenuAction::Lock => {
                locking && s.single_file().is_some_and(|f| !f.is_locked())
            }
            MenuAction::Unlock => {
                locking
                    && s
                        .single_entry()
                        .is_some_and(|f| can_user_unlock_file(&self.user_id, f))
            }
            MenuAction::LockInfo => locking && s.single_entry().is_some_and(FileEntry::is_locked),
            MenuAction::Edit => self.can_edit(),
        }
    }

    /// True if any selected file is being compared with the server,
    /// downloaded or uploaded. Stops at the first hit.
    fn any_file_transferring(&self) -> bool {
        let files = self.selection.files();
        let user = self.user;

        self.components
            .operations()
            .is_some_and(|ops| files.iter().any(|f| ops.is_synchronizing(user, f)))
            || self
                .components
                .downloads()
                .is_some_and(|d| files.iter().any(|f| d.is_downloading(user, f)))
            || self
                .components
                .uploads()
                .is_some_and(|u| files.iter().any(|f| u.is_uploading(user, f)))
    }

    fn can_share(&self) -> bool {
        !self.context.overflow_menu
            && !self.selection.contains_encrypted_file()
            && self.components.features().sharing_allowed()
            && self.capability.is_share_api_enabled()
            && self.selection.single_entry().is_some_and(|f| f.can_reshare)
    }

    fn can_send(&self) -> bool {
        if self.context.overflow_menu
            || self.components.features().send_disabled()
            || self.selection.contains_encrypted_file()
        {
            return false;
        }
        self.context.in_single_file_fragment
            || (!self.selection.is_single_selection() && self.selection.any_file_down())
    }

    fn can_edit(&self) -> bool {
        let Some(file) = self.selection.single_file() else {
            return false;
        };
        if file.encrypted {
            return false;
        }
        let mime_type = file.effective_mime_type();
        self.capability.supports_legacy_rich_documents(mime_type)
            || self
                .components
                .editors()
                .is_editor_available(self.user, mime_type)
    }

    fn has_encrypted_parent(&self) -> bool {
        self.selection
            .single_entry()
            .and_then(|f| self.components.storage().file_by_id(f.parent_id))
            .is_some_and(|parent| parent.encrypted)
    }
}
