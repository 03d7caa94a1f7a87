use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::config::has_archive_name;

/// Lazily walks `root` and yields every jar file beneath it, in traversal order.
///
/// Nothing is filtered except by file name: hidden files and ignore files are
/// honored as plain entries. Symlinks are not followed. Unreadable entries are
/// logged and skipped; a missing root simply yields nothing.
pub fn walk_jars(root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    let root_display = root.display().to_string();

    WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                (!is_dir && has_archive_name(entry.path())).then(|| entry.into_path())
            }
            Err(err) => {
                warn!("skipping entry under {root_display}: {err}");
                None
            }
        })
}

pub fn scan_jars(root: &Path) -> Vec<PathBuf> {
    let jars: Vec<PathBuf> = walk_jars(root).collect();
    debug!("found {} jar(s) under {}", jars.len(), root.display());
    jars
}
