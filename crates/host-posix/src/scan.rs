//! Lazy directory enumeration over readdir.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use host_platform::{
    DirectoryEntry, DirectoryScan, EntryFields, FileMetadata, ScanHandle, WildcardPattern,
};

use crate::PosixBackend;
use crate::metadata::is_hidden_name;

/// An open directory scan.
///
/// Owns the native handle inside [`fs::ReadDir`]; the handle is dropped
/// as soon as the scan is exhausted, and in any case when the value is
/// dropped, so early abandonment never leaks it.
pub struct PosixScan {
    dir: PathBuf,
    pattern: WildcardPattern,
    entries: Option<fs::ReadDir>,
}

impl PosixScan {
    pub(crate) fn open(dir: &Path, pattern: WildcardPattern) -> Self {
        let entries = match fs::read_dir(dir) {
            Ok(rd) => Some(rd),
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "directory scan could not be opened");
                None
            }
        };
        Self {
            dir: dir.to_path_buf(),
            pattern,
            entries,
        }
    }
}

impl ScanHandle for PosixScan {
    fn next_entry(&mut self, fields: EntryFields) -> Option<DirectoryEntry> {
        loop {
            let next = self.entries.as_mut()?.next();
            let Some(result) = next else {
                // Exhausted: release the native handle now rather than
                // holding it until the scan value is dropped.
                self.entries = None;
                return None;
            };

            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(path = %self.dir.display(), error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(path = %self.dir.display(), name = ?raw, "skipping entry with non-unicode name");
                    continue;
                }
            };

            // readdir yields these on some platforms; never surface them.
            if name == "." || name == ".." {
                continue;
            }

            if !self.pattern.matches(&name) {
                continue;
            }

            match entry_metadata(&self.dir.join(&name), &name, fields) {
                Some(metadata) => return Some(DirectoryEntry { name, metadata }),
                None => continue,
            }
        }
    }
}

/// Populate only the requested fields; unrequested fields keep their
/// defaults and cost no native calls. `None` when a requested stat
/// fails (the entry vanished mid-scan).
fn entry_metadata(path: &Path, name: &str, fields: EntryFields) -> Option<FileMetadata> {
    let mut meta = FileMetadata {
        exists: true,
        ..FileMetadata::missing()
    };

    if fields.needs_stat() {
        let lstat = match fs::symlink_metadata(path) {
            Ok(lstat) => lstat,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping entry that vanished mid-scan");
                return None;
            }
        };
        let is_symlink = lstat.file_type().is_symlink();
        // A dangling link keeps the lstat view rather than vanishing.
        let stat = if is_symlink {
            fs::metadata(path).unwrap_or(lstat)
        } else {
            lstat
        };

        if fields.kind {
            meta.is_directory = stat.is_dir();
            meta.is_symlink = is_symlink;
        }
        if fields.size {
            meta.size_bytes = stat.size() as i64;
        }
        if fields.times {
            meta.modified_at_millis = stat.mtime() * 1000;
            meta.created_at_millis = stat.ctime() * 1000;
        }
        if fields.read_only {
            meta.is_read_only = stat.permissions().readonly();
        }
    }

    if fields.hidden {
        meta.is_hidden = is_hidden_name(name);
    }

    Some(meta)
}

impl DirectoryScan for PosixBackend {
    fn open_scan(&self, dir: &Path, pattern: WildcardPattern) -> Box<dyn ScanHandle> {
        Box::new(PosixScan::open(dir, pattern))
    }
}
