use super::{FileEntry, LockType};

/// Whether `user_id` may release the lock on `file`.
///
/// Only manual locks can be released from the client, and only by the user
/// who placed them. Collaborative and token locks belong to an editor and are
/// released by it.
pub fn can_user_unlock_file(user_id: &str, file: &FileEntry) -> bool {
    match &file.lock {
        Some(lock) if lock.lock_type == LockType::Manual => {
            lock.owner_id.as_deref() == Some(user_id)
        }
        _ => false,
    }
}
