//! Directory enumeration contract: lazy, single-pass, resource-owning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metadata::FileMetadata;
use crate::wildcard::WildcardPattern;

/// One enumerated directory entry, owned by value. Carries no aliases
/// back to native handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub metadata: FileMetadata,
}

/// Which metadata fields a scan should populate per entry.
///
/// Unselected fields keep their defaults and cost no native calls, so
/// name-only listings never stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFields {
    /// `is_directory` / `is_symlink`.
    pub kind: bool,
    pub size: bool,
    /// Modification and creation timestamps.
    pub times: bool,
    pub hidden: bool,
    pub read_only: bool,
}

impl EntryFields {
    /// Names only; no per-entry native calls.
    pub const NAME_ONLY: Self = Self {
        kind: false,
        size: false,
        times: false,
        hidden: false,
        read_only: false,
    };

    /// Everything the accessor can populate.
    pub const ALL: Self = Self {
        kind: true,
        size: true,
        times: true,
        hidden: true,
        read_only: true,
    };

    /// Whether any selected field requires a stat call.
    pub fn needs_stat(&self) -> bool {
        self.kind || self.size || self.times || self.read_only
    }
}

/// An open native directory scan.
///
/// Forward-only and single-pass: a new handle must be constructed to
/// re-scan. The native resource is released when the handle is dropped
/// or the scan is exhausted, whichever comes first, on every exit path.
/// `&mut self` confines a handle to one consumer at a time.
pub trait ScanHandle {
    /// Advance to the next matching entry, or `None` at end of scan.
    fn next_entry(&mut self, fields: EntryFields) -> Option<DirectoryEntry>;
}

/// Per-OS directory scan construction.
pub trait DirectoryScan {
    /// Open a scan over `dir` for entries matching `pattern`.
    ///
    /// A directory that cannot be opened yields an empty scan rather
    /// than an error; the caller sees end-of-scan immediately.
    fn open_scan(&self, dir: &Path, pattern: WildcardPattern) -> Box<dyn ScanHandle>;
}
