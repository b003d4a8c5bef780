use crate::files::{mime, FileEntry};

/// Files targeted by a menu build, plus the size of the listing they were
/// picked from.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    files: &'a [FileEntry],
    total_count: usize,
}

impl<'a> Selection<'a> {
    pub fn new(files: &'a [FileEntry], total_count: usize) -> Self {
        Self { files, total_count }
    }

    /// A single file on its own, e.g. in a preview screen.
    pub fn single(file: &'a FileEntry) -> Self {
        Self::new(std::slice::from_ref(file), 1)
    }

    pub fn files(&self) -> &'a [FileEntry] {
        self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of items in the listing the selection was made from.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// At least one listed item is not selected.
    pub fn is_partial(&self) -> bool {
        self.files.len() < self.total_count
    }

    pub fn is_single_selection(&self) -> bool {
        self.files.len() == 1
    }

    /// The only selected entry.
    pub fn single_entry(&self) -> Option<&'a FileEntry> {
        match self.files {
            [file] => Some(file),
            _ => None,
        }
    }

    /// The only selected entry, if it is a plain file.
    pub fn single_file(&self) -> Option<&'a FileEntry> {
        self.single_entry().filter(|f| !f.is_folder)
    }

    /// The only selected entry, if it is a folder.
    pub fn single_folder(&self) -> Option<&'a FileEntry> {
        self.single_entry().filter(|f| f.is_folder)
    }

    pub fn contains_folder(&self) -> bool {
        self.files.iter().any(|f| f.is_folder)
    }

    pub fn any_file_down(&self) -> bool {
        self.files.iter().any(|f| f.is_down)
    }

    pub fn contains_encrypted_file(&self) -> bool {
        self.files.iter().any(|f| !f.is_folder && f.encrypted)
    }

    pub fn contains_encrypted_folder(&self) -> bool {
        self.files.iter().any(|f| f.is_folder && f.encrypted)
    }

    pub fn contains_locked_file(&self) -> bool {
        self.files.iter().any(FileEntry::is_locked)
    }

    pub fn all_favorites(&self) -> bool {
        self.files.iter().all(|f| f.favorite)
    }

    pub fn all_not_favorites(&self) -> bool {
        self.files.iter().all(|f| !f.favorite)
    }

    /// Single encrypted folder selected.
    pub fn is_encrypted_folder(&self) -> bool {
        self.single_folder().is_some_and(|f| f.encrypted)
    }

    /// Single folder without content selected.
    pub fn is_empty_folder(&self) -> bool {
        self.single_folder().is_some_and(|f| f.file_length == 0)
    }

    pub fn is_group_folder(&self) -> bool {
        self.single_entry().is_some_and(|f| f.group_folder)
    }

    /// Single image that can serve as wallpaper (vector formats excluded).
    pub fn is_single_raster_image(&self) -> bool {
        self.single_file().is_some_and(|f| {
            let mime_type = f.effective_mime_type();
            mime::is_image(mime_type) && !mime::is_svg(mime_type)
        })
    }

    /// Single audio or video file.
    pub fn is_single_media(&self) -> bool {
        self.single_file()
            .is_some_and(|f| mime::is_media(f.effective_mime_type()))
    }
}
