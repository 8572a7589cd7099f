//! Metadata snapshot types and the per-OS accessor contract.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Coarse classification of the storage medium backing a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaClass {
    HardDisk,
    Removable,
    Optical,
    Network,
    /// The medium could not be queried (missing path, unreachable fs).
    #[default]
    Unknown,
}

/// Point-in-time snapshot of a path's filesystem state.
///
/// The snapshot may be stale immediately after it is returned; nothing
/// in this layer caches it. Invariant: `exists == false` implies every
/// other field holds its default value — a missing path never carries
/// garbage sizes or timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub exists: bool,
    pub is_directory: bool,
    /// The path itself is a symbolic link. Kind, size and timestamps
    /// describe the link target; a dangling link reports
    /// `exists == false` with this flag still set.
    pub is_symlink: bool,
    pub size_bytes: i64,
    pub modified_at_millis: i64,
    pub created_at_millis: i64,
    pub is_hidden: bool,
    pub is_read_only: bool,
    pub media: MediaClass,
}

impl FileMetadata {
    /// Snapshot for a path that does not exist.
    pub fn missing() -> Self {
        Self::default()
    }
}

/// Per-OS metadata queries.
///
/// Implementations never fail for a missing or inaccessible path; they
/// degrade to [`FileMetadata::missing`] or conservative defaults. Only
/// catastrophic resource exhaustion may panic, and only via debug
/// assertions.
pub trait MetadataSource {
    /// Snapshot a path's metadata.
    fn stat(&self, path: &Path) -> FileMetadata;

    /// Classify the storage medium backing a path with one native
    /// filesystem-type query.
    fn media_class(&self, path: &Path) -> MediaClass;

    /// Resolve a symbolic link's target, interpreted as a sibling of
    /// the link. `None` when the path is not a link or the query fails.
    fn link_target(&self, path: &Path) -> Option<PathBuf>;
}
