use anyhow::{Context, Result};
use log::{debug, warn};
use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::config::CLASS_SUFFIX;

/// The class names listed from one jar, in central-directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub path: PathBuf,
    pub class_names: Vec<String>,
}

/// Outcome of listing one jar. A jar that cannot be read still yields a
/// record, with no class names and the reason in `diagnostic`.
#[derive(Debug, Clone)]
pub struct ArchiveListing {
    pub record: ArchiveRecord,
    pub diagnostic: Option<String>,
}

/// Maps an entry name such as `org/example/Foo.class` to `org.example.Foo`.
///
/// The name is cut at its first `.`, so `a/B.inner.class` becomes `a`.
/// Names that do not end in `.class` yield `None`.
pub fn entry_class_name(entry_name: &str) -> Option<String> {
    if !entry_name.ends_with(CLASS_SUFFIX) {
        return None;
    }
    let stem = entry_name.split_once('.').map_or(entry_name, |(stem, _)| stem);
    Some(stem.replace('/', "."))
}

pub fn list_archive(jar_path: &Path) -> ArchiveListing {
    let (class_names, diagnostic) = match read_class_names(jar_path) {
        Ok(names) => (names, None),
        Err(err) => (Vec::new(), Some(format!("{err:#}"))),
    };

    ArchiveListing {
        record: ArchiveRecord {
            path: jar_path.to_path_buf(),
            class_names,
        },
        diagnostic,
    }
}

/// Lists every jar in turn. A failing jar contributes an empty record and
/// never stops the batch.
pub fn catalog_batch<I, P>(jar_paths: I) -> Vec<ArchiveRecord>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    jar_paths
        .into_iter()
        .map(|jar_path| {
            let listing = list_archive(jar_path.as_ref());
            if let Some(diagnostic) = &listing.diagnostic {
                warn!("{diagnostic}");
            }
            listing.record
        })
        .collect()
}

fn read_class_names(jar_path: &Path) -> Result<Vec<String>> {
    let file = File::open(jar_path)
        .with_context(|| format!("failed to open jar: {}", jar_path.display()))?;
    // SAFETY: The file is opened read-only and the map is dropped before the file
    // at the end of this function.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to mmap jar: {}", jar_path.display()))?;
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..]))
        .with_context(|| format!("failed to read zip structure: {}", jar_path.display()))?;

    let mut classes = Vec::new();
    for i in 0..archive.len() {
        // Raw access reads entry metadata only, so encrypted entries still list.
        let entry = match archive.by_index_raw(i) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping entry #{i} of {}: {err}", jar_path.display());
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }
        if let Some(class_name) = entry_class_name(entry.name()) {
            classes.push(class_name);
        }
    }

    debug!("{} class(es) in {}", classes.len(), jar_path.display());
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    fn write_jar(path: &Path, entries: &[&str]) -> Result<()> {
        let file = File::create(path)?;
        let mut zip = zip::ZipWriter::new(file);
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for name in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, options)?;
            } else {
                zip.start_file(*name, options)?;
                zip.write_all(b"")?;
            }
        }

        zip.finish()?;
        Ok(())
    }

    #[test]
    fn list_archive_keeps_only_class_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let jar = dir.path().join("mixed.jar");
        write_jar(&jar, &["a/B.class", "a/b/C.class", "README.txt", "dir/"])?;

        let listing = list_archive(&jar);
        assert!(listing.diagnostic.is_none());
        assert_eq!(listing.record.path, jar);
        assert_eq!(listing.record.class_names, vec!["a.B", "a.b.C"]);
        Ok(())
    }

    #[test]
    fn list_archive_truncates_at_first_dot() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let jar = dir.path().join("inner.jar");
        write_jar(&jar, &["a/B.inner.class"])?;

        assert_eq!(list_archive(&jar).record.class_names, vec!["a"]);
        Ok(())
    }

    #[test]
    fn list_archive_keeps_duplicates_and_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let jar = dir.path().join("dups.jar");
        write_jar(&jar, &["org/x/Z.class", "org/x/Z.v2.class", "org/a/A.class"])?;

        assert_eq!(
            list_archive(&jar).record.class_names,
            vec!["org.x.Z", "org.x.Z", "org.a.A"]
        );
        Ok(())
    }

    #[test]
    fn list_archive_degrades_on_corrupt_jar() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let jar = dir.path().join("broken.jar");
        std::fs::write(&jar, b"definitely not a zip")?;

        let listing = list_archive(&jar);
        assert!(listing.record.class_names.is_empty());
        assert_eq!(listing.record.path, jar);
        assert!(listing.diagnostic.is_some());
        Ok(())
    }

    fn mark_entries_encrypted(bytes: &mut [u8]) {
        for pos in 0..bytes.len().saturating_sub(9) {
            let flags_offset = match &bytes[pos..pos + 4] {
                b"PK\x03\x04" => 6,
                b"PK\x01\x02" => 8,
                _ => continue,
            };
            bytes[pos + flags_offset] |= 1;
        }
    }

    #[test]
    fn list_archive_lists_encrypted_entries() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let jar = dir.path().join("sealed.jar");
        write_jar(&jar, &["com/acme/Sealed.class", "com/acme/Open.class"])?;
        let mut bytes = std::fs::read(&jar)?;
        mark_entries_encrypted(&mut bytes);
        std::fs::write(&jar, bytes)?;

        let listing = list_archive(&jar);
        assert!(listing.diagnostic.is_none());
        assert_eq!(
            listing.record.class_names,
            vec!["com.acme.Sealed", "com.acme.Open"]
        );
        Ok(())
    }

    #[test]
    fn catalog_batch_does_not_short_circuit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let good = dir.path().join("good.jar");
        let missing = dir.path().join("missing.jar");
        write_jar(&good, &["com/acme/Widget.class"])?;

        let records = catalog_batch([&missing, &good]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, missing);
        assert!(records[0].class_names.is_empty());
        assert_eq!(records[1].class_names, vec!["com.acme.Widget"]);
        Ok(())
    }

    #[test]
    fn entry_class_name_handles_plain_names() {
        assert_eq!(entry_class_name("Top.class").as_deref(), Some("Top"));
        assert_eq!(
            entry_class_name("org/a/Outer$Inner.class").as_deref(),
            Some("org.a.Outer$Inner")
        );
        assert_eq!(entry_class_name("META-INF/MANIFEST.MF"), None);
    }
}
