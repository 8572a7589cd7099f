//! Unified filesystem services over per-OS backends.
//!
//! This crate is the entry point of the hostfs layer. It selects the
//! backend for the compilation target, owns the write-once startup
//! capture of the invoked executable, and re-exports the platform
//! model so collaborators depend on one crate:
//!
//! ```ignore
//! use host_fs::{EntryFields, Host, WildcardPattern, startup};
//!
//! fn main() {
//!     startup::capture_invoked_executable();
//!     let host = Host::new();
//!     for entry in host.read_dir(
//!         "/proj/src".as_ref(),
//!         WildcardPattern::new("*.cpp"),
//!         EntryFields::ALL,
//!     ) {
//!         println!("{} ({} bytes)", entry.name, entry.metadata.size_bytes);
//!     }
//! }
//! ```
//!
//! All operations are synchronous and may block on native I/O; callers
//! needing responsiveness offload to their own execution context.

pub mod iter;
pub mod startup;

pub use host_platform::{
    Anchor, AnchoredPath, DirectoryEntry, DirectoryScan, EntryFields, Error, FileMetadata,
    LaunchBridge, LocationResolver, MediaClass, MetadataSource, Result, ScanHandle,
    SeparatorStyle, SpecialLocation, WildcardPattern,
};
pub use iter::DirectoryIterator;

#[cfg(unix)]
pub use host_posix::PosixBackend as NativeBackend;
#[cfg(unix)]
pub use host_posix::ops;

use std::path::{Path, PathBuf};

/// Native filesystem services for the platform this code was compiled
/// for.
///
/// Thin dispatch over the selected backend; holds no mutable state and
/// no caches, so constructing several hosts is free and all of them
/// agree.
#[derive(Debug, Clone)]
pub struct Host {
    backend: NativeBackend,
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl Host {
    /// A host wired to this platform's backend, reading the
    /// invoked-executable path captured at startup, if any.
    pub fn new() -> Self {
        Self {
            backend: NativeBackend::new(
                startup::invoked_executable().map(Path::to_path_buf),
            ),
        }
    }

    pub fn backend(&self) -> &NativeBackend {
        &self.backend
    }

    /// Snapshot a path's metadata. Never fails; a missing path reports
    /// [`FileMetadata::missing`].
    pub fn stat(&self, path: &Path) -> FileMetadata {
        self.backend.stat(path)
    }

    /// Classify the storage medium backing a path.
    pub fn media_class(&self, path: &Path) -> MediaClass {
        self.backend.media_class(path)
    }

    /// Resolve a symbolic link's target.
    pub fn link_target(&self, path: &Path) -> Option<PathBuf> {
        self.backend.link_target(path)
    }

    /// Lazily enumerate the entries of `dir` matching `pattern`,
    /// populating only the requested metadata fields per entry.
    pub fn read_dir(
        &self,
        dir: &Path,
        pattern: WildcardPattern,
        fields: EntryFields,
    ) -> DirectoryIterator {
        DirectoryIterator::new(self.backend.open_scan(dir, pattern), fields)
    }

    /// Resolve a semantic location to a concrete path.
    pub fn resolve(&self, kind: SpecialLocation) -> Option<PathBuf> {
        self.backend.resolve(kind)
    }

    pub fn filesystem_roots(&self) -> Vec<PathBuf> {
        self.backend.filesystem_roots()
    }

    /// Open a path, URL, or email address with a suitable handler.
    /// True means a handler was spawned, nothing more.
    pub fn open_document(&self, target: &str, parameters: &str) -> bool {
        self.backend.open_document(target, parameters)
    }

    /// Move a file to the platform trash facility, if one exists.
    pub fn move_to_trash(&self, path: &Path) -> bool {
        self.backend.move_to_trash(path)
    }

    /// Reveal a path in the user's file manager.
    pub fn reveal(&self, path: &Path) -> bool {
        self.backend.reveal(path)
    }
}
