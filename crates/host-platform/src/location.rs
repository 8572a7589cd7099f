//! Semantic filesystem locations and their per-OS resolution contract.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A semantically named location whose concrete path varies by OS and
/// environment.
///
/// The enumeration is closed: passing an unknown kind is a compile
/// error, not a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialLocation {
    UserHome,
    UserDocuments,
    UserDesktop,
    UserApplicationData,
    CommonApplicationData,
    GlobalApplications,
    TempDirectory,
    /// The executable as named on the command line at process start.
    InvokedExecutable,
    /// The executable actually running.
    CurrentExecutable,
    /// The hosting application, for code running inside another
    /// process (resolved via an OS self-referential link).
    HostApplicationPath,
}

/// Per-OS special-location resolution.
///
/// Resolution is a pure function of OS state and environment — no
/// in-process caching — so two calls without an environment change
/// return identical paths. `None` means the location cannot be
/// determined on this system.
pub trait LocationResolver {
    fn resolve(&self, kind: SpecialLocation) -> Option<PathBuf>;

    /// Roots of the mounted filesystem trees (`/` on POSIX).
    fn filesystem_roots(&self) -> Vec<PathBuf>;
}
