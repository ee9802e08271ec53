//! Pre-order directory walk with visitor-driven early exit.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// What the walk should do after a directory has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep walking, descending into this directory.
    Continue,
    /// Do not descend into this directory.
    SkipSubtree,
    /// Abandon the walk entirely.
    Stop,
}

/// Walk every directory under `root` (root included) in lexical pre-order.
///
/// Files are never passed to `visitor`. Symlinks are not followed. Entries
/// that cannot be read are logged and skipped. Returns the number of
/// directories handed to `visitor`.
pub fn walk<F>(root: &Path, mut visitor: F) -> Result<usize>
where
    F: FnMut(&DirEntry) -> Result<WalkControl>,
{
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    let mut visited = 0usize;

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "Skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        visited += 1;
        match visitor(&entry)? {
            WalkControl::Continue => {}
            WalkControl::SkipSubtree => entries.skip_current_dir(),
            WalkControl::Stop => break,
        }
    }

    Ok(visited)
}
