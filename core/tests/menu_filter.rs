//! End-to-end checks of the menu decision table against in-memory
//! collaborators.

mod common;

use common::{cached_file, empty_folder, manual_lock, plain_file, user, FakeComponents};
use filemenu_core::capability::{ServerCapability, TriState};
use filemenu_core::errors::AccountError;
use filemenu_core::files::FileEntry;
use filemenu_core::menu::{FileMenuFilter, MenuAction, MenuContext, MenuVisibility, Selection};

fn compute(
    components: &FakeComponents,
    files: &[FileEntry],
    total: usize,
    context: MenuContext,
) -> MenuVisibility {
    let user = user();
    FileMenuFilter::new(Selection::new(files, total), components, context, &user)
        .expect("account lookup succeeds")
        .compute_visibility()
}

fn listing() -> MenuContext {
    MenuContext::default()
}

fn assert_shown(v: &MenuVisibility, actions: &[MenuAction]) {
    for action in actions {
        assert!(v.is_shown(*action), "{action} should be shown");
    }
}

fn assert_hidden(v: &MenuVisibility, actions: &[MenuAction]) {
    for action in actions {
        assert!(v.is_hidden(*action), "{action} should be hidden");
    }
}

// ── Partition ───────────────────────────────────────────────────────

#[test]
fn every_action_lands_in_exactly_one_set() {
    let mut components = FakeComponents::new();
    components.uploading.insert(11);
    components.editor_mime_types.insert("text/plain".into());

    let mut locked = plain_file(12, "locked.txt");
    locked.lock = Some(manual_lock("alice"));
    let selections: Vec<Vec<FileEntry>> = vec![
        vec![],
        vec![cached_file(10, "a.txt")],
        vec![plain_file(11, "b.txt"), cached_file(10, "a.txt")],
        vec![empty_folder(20, "Inbox")],
        vec![locked],
        vec![empty_folder(20, "Inbox"), plain_file(13, "c.txt")],
    ];

    for files in &selections {
        for overflow_menu in [false, true] {
            for in_single_file_fragment in [false, true] {
                let context = MenuContext {
                    overflow_menu,
                    in_single_file_fragment,
                };
                let v = compute(&components, files, 6, context);
                assert!(v.is_complete(), "incomplete for {} file(s)", files.len());
                assert_eq!(v.shown().len() + v.hidden().len(), MenuAction::ALL.len());
                assert!(v.shown().is_disjoint(v.hidden()));
            }
        }
    }
}

#[test]
fn empty_selection_hides_everything() {
    let components = FakeComponents::new();
    let v = compute(&components, &[], 4, listing());
    assert!(v.shown().is_empty());
    assert_eq!(v, MenuVisibility::hidden_all());
}

// ── Single cached file ──────────────────────────────────────────────

#[test]
fn single_cached_plain_file() {
    let components = FakeComponents::new();
    let v = compute(&components, &[cached_file(10, "notes.txt")], 5, listing());

    assert_hidden(
        &v,
        &[MenuAction::Download, MenuAction::Unlock, MenuAction::LockInfo],
    );
    assert_shown(
        &v,
        &[
            MenuAction::OpenWith,
            MenuAction::Rename,
            MenuAction::Copy,
            MenuAction::Move,
            MenuAction::Remove,
            MenuAction::Lock,
            MenuAction::Details,
            MenuAction::Export,
            MenuAction::Sync,
            MenuAction::Share,
            MenuAction::Favorite,
        ],
    );
    assert_hidden(&v, &[MenuAction::Unfavorite, MenuAction::CancelSync]);
}

#[test]
fn single_uncached_file_offers_download() {
    let components = FakeComponents::new();
    let v = compute(&components, &[plain_file(10, "notes.txt")], 5, listing());
    assert_shown(&v, &[MenuAction::Download]);
    assert_hidden(&v, &[MenuAction::OpenWith, MenuAction::Sync]);
}

// ── End-to-end encryption ───────────────────────────────────────────

#[test]
fn empty_plain_folder_can_be_encrypted() {
    let components = FakeComponents::new();
    let v = compute(&components, &[empty_folder(20, "Secrets")], 5, listing());
    assert_shown(&v, &[MenuAction::Encrypt, MenuAction::Sync]);
    assert_hidden(
        &v,
        &[MenuAction::UnsetEncrypted, MenuAction::Download, MenuAction::Export],
    );
}

#[test]
fn encrypted_empty_folder_can_be_decrypted() {
    let components = FakeComponents::new();
    let folder = FileEntry {
        encrypted: true,
        ..empty_folder(20, "Secrets")
    };
    let v = compute(&components, &[folder], 5, listing());
    assert_shown(&v, &[MenuAction::UnsetEncrypted]);
    assert_hidden(
        &v,
        &[
            MenuAction::Encrypt,
            MenuAction::Rename,
            MenuAction::Copy,
            MenuAction::Move,
        ],
    );
}

#[test]
fn folder_with_content_cannot_change_encryption() {
    let components = FakeComponents::new();
    let folder = FileEntry {
        file_length: 2048,
        ..empty_folder(20, "Photos")
    };
    let v = compute(&components, &[folder.clone()], 5, listing());
    assert_hidden(&v, &[MenuAction::Encrypt]);

    let encrypted = FileEntry {
        encrypted: true,
        ..folder
    };
    let v = compute(&components, &[encrypted], 5, listing());
    assert_hidden(&v, &[MenuAction::UnsetEncrypted]);
}

#[test]
fn encryption_actions_require_capability() {
    let components = FakeComponents::new().with_capability(Some(ServerCapability {
        end_to_end_encryption: TriState::Unknown,
        ..common::full_capability()
    }));
    let v = compute(&components, &[empty_folder(20, "Secrets")], 5, listing());
    assert_hidden(&v, &[MenuAction::Encrypt]);

    let encrypted = FileEntry {
        encrypted: true,
        ..empty_folder(20, "Secrets")
    };
    let v = compute(&components, &[encrypted], 5, listing());
    assert_hidden(&v, &[MenuAction::UnsetEncrypted]);
}

#[test]
fn nested_encrypted_folder_keeps_encryption() {
    let parent = FileEntry {
        encrypted: true,
        ..empty_folder(30, "Vault")
    };
    let components = FakeComponents::new().with_file(parent);
    let child = FileEntry {
        parent_id: 30,
        encrypted: true,
        ..empty_folder(31, "Vault/Inner")
    };
    let v = compute(&components, &[child], 5, listing());
    assert_hidden(&v, &[MenuAction::UnsetEncrypted, MenuAction::Encrypt]);
}

// ── Media rules on folders ──────────────────────────────────────────

#[test]
fn folder_named_like_an_image_is_not_a_wallpaper() {
    let components = FakeComponents::new();
    for mime_type in ["", "DIR"] {
        let folder = FileEntry {
            mime_type: mime_type.into(),
            ..empty_folder(40, "Holiday.jpg")
        };
        let v = compute(&components, &[folder], 5, listing());
        assert_hidden(&v, &[MenuAction::SetWallpaper]);
    }
}

#[test]
fn folder_named_like_media_is_not_streamable() {
    let components = FakeComponents::new();
    let folder = FileEntry {
        mime_type: String::new(),
        ..empty_folder(41, "Trailer.mp4")
    };
    let v = compute(&components, &[folder], 5, listing());
    assert_hidden(&v, &[MenuAction::Stream]);
}

#[test]
fn folders_are_never_edited() {
    let mut components = FakeComponents::new();
    for mime_type in ["", "DIR", "text/plain", "image/jpeg"] {
        components.editor_mime_types.insert(mime_type.into());
    }
    for (name, mime_type) in [("Notes.txt", ""), ("Drafts", "DIR")] {
        let folder = FileEntry {
            mime_type: mime_type.into(),
            ..empty_folder(42, name)
        };
        let v = compute(&components, &[folder], 5, listing());
        assert_hidden(&v, &[MenuAction::Edit]);
    }
}

#[test]
fn file_without_declared_type_is_classified_by_name() {
    let components = FakeComponents::new();
    let photo = FileEntry {
        mime_type: String::new(),
        ..plain_file(43, "Holiday.jpg")
    };
    let v = compute(&components, &[photo], 5, listing());
    assert_shown(&v, &[MenuAction::SetWallpaper]);
    assert_hidden(&v, &[MenuAction::Stream]);
}

// ── Transfers ───────────────────────────────────────────────────────

#[test]
fn upload_in_progress_blocks_file_operations() {
    let mut components = FakeComponents::new();
    components.uploading.insert(11);
    let files = [cached_file(10, "a.txt"), plain_file(11, "b.txt")];

    let v = compute(&components, &files, 5, listing());
    assert_shown(&v, &[MenuAction::CancelSync]);
    assert_hidden(
        &v,
        &[
            MenuAction::Download,
            MenuAction::Rename,
            MenuAction::Copy,
            MenuAction::Move,
            MenuAction::Remove,
            MenuAction::Favorite,
            MenuAction::Unfavorite,
            MenuAction::Sync,
        ],
    );
}

#[test]
fn download_and_sync_count_as_transfers() {
    let mut components = FakeComponents::new();
    components.downloading.insert(10);
    let v = compute(&components, &[plain_file(10, "a.txt")], 5, listing());
    assert_shown(&v, &[MenuAction::CancelSync]);
    assert_hidden(&v, &[MenuAction::Download]);

    let mut components = FakeComponents::new();
    components.synchronizing.insert(20);
    let v = compute(&components, &[empty_folder(20, "Docs")], 5, listing());
    assert_shown(&v, &[MenuAction::CancelSync]);
    assert_hidden(&v, &[MenuAction::Sync]);
}

#[test]
fn unbound_monitors_report_no_transfers() {
    let mut components = FakeComponents::new();
    components.uploading.insert(10);
    components.monitors_bound = false;
    let v = compute(&components, &[plain_file(10, "a.txt")], 5, listing());
    assert_hidden(&v, &[MenuAction::CancelSync]);
    assert_shown(&v, &[MenuAction::Download, MenuAction::Rename]);
}

// ── Selection size ──────────────────────────────────────────────────

#[test]
fn select_all_hidden_when_everything_is_selected() {
    let components = FakeComponents::new();
    let files = [plain_file(10, "a.txt"), plain_file(11, "b.txt")];

    let v = compute(&components, &files, 2, listing());
    assert_hidden(&v, &[MenuAction::SelectAll]);
    assert_shown(&v, &[MenuAction::DeselectAll]);

    let v = compute(&components, &files, 3, listing());
    assert_shown(&v, &[MenuAction::SelectAll]);
}

#[test]
fn multi_selection_hides_single_item_actions() {
    let mut components = FakeComponents::new();
    components.editor_mime_types.insert("text/plain".into());
    let files = [cached_file(10, "a.txt"), cached_file(11, "b.txt")];

    let v = compute(&components, &files, 5, listing());
    assert_hidden(
        &v,
        &[
            MenuAction::Rename,
            MenuAction::Details,
            MenuAction::OpenWith,
            MenuAction::Share,
            MenuAction::Edit,
            MenuAction::Lock,
        ],
    );
    assert_shown(&v, &[MenuAction::Send, MenuAction::Copy, MenuAction::Move]);
}

// ── Locking ─────────────────────────────────────────────────────────

#[test]
fn own_lock_can_be_released() {
    let components = FakeComponents::new();
    let file = FileEntry {
        lock: Some(manual_lock(common::USER_ID)),
        ..cached_file(10, "plan.md")
    };
    let v = compute(&components, &[file], 5, listing());
    assert_shown(&v, &[MenuAction::Unlock, MenuAction::LockInfo]);
    assert_hidden(&v, &[MenuAction::Lock, MenuAction::Rename, MenuAction::Remove]);
}

#[test]
fn locking_actions_need_server_support() {
    let components = FakeComponents::new().with_capability(Some(ServerCapability {
        files_locking_version: None,
        ..common::full_capability()
    }));
    let file = FileEntry {
        lock: Some(manual_lock(common::USER_ID)),
        ..cached_file(10, "plan.md")
    };
    let v = compute(&components, &[file], 5, listing());
    assert_hidden(&v, &[MenuAction::Lock, MenuAction::Unlock, MenuAction::LockInfo]);
}

// ── Capability and account boundaries ──────────────────────────────

#[test]
fn unknown_account_capability_is_closed() {
    let components = FakeComponents::new().with_capability(None);
    let v = compute(&components, &[empty_folder(20, "Secrets")], 5, listing());
    assert_hidden(&v, &[MenuAction::Encrypt, MenuAction::Share, MenuAction::Lock]);
    assert_shown(&v, &[MenuAction::Details, MenuAction::Sync]);
}

#[test]
fn account_lookup_failure_fails_construction() {
    let mut components = FakeComponents::new();
    components.user_id = Err(AccountError::Lookup("account removed".into()));
    let user = user();
    let file = plain_file(10, "a.txt");

    let result = FileMenuFilter::for_file(&file, &components, listing(), &user);
    match result {
        Err(err) => assert_eq!(err, AccountError::Lookup("account removed".into())),
        Ok(_) => panic!("expected account lookup to fail"),
    }
}

#[test]
fn single_file_view_offers_send_but_no_selection_actions() {
    let components = FakeComponents::new();
    let user = user();
    let file = plain_file(10, "report.pdf");
    let context = MenuContext {
        in_single_file_fragment: true,
        ..MenuContext::default()
    };

    let v = FileMenuFilter::for_file(&file, &components, context, &user)
        .unwrap()
        .compute_visibility();
    assert_shown(&v, &[MenuAction::Send, MenuAction::Details]);
    assert_hidden(&v, &[MenuAction::SelectAll, MenuAction::DeselectAll]);
}
