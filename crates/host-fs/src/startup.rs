//! Process-wide, write-once startup state.
//!
//! The path a process was invoked as (argv[0]) is only knowable at
//! startup; resolvers constructed later read the value captured here.
//! The cell is written at most once and never mutated afterwards.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static INVOKED_EXECUTABLE: OnceLock<PathBuf> = OnceLock::new();

/// Record the executable path the process was invoked as (argv[0]).
///
/// Call once, early in `main`, before constructing a [`crate::Host`].
/// Later calls are no-ops: the first captured value wins.
pub fn capture_invoked_executable() {
    if let Some(argv0) = env::args_os().next() {
        let _ = INVOKED_EXECUTABLE.set(PathBuf::from(argv0));
    }
}

/// Record an explicit value instead of reading the process arguments —
/// for embedders that wrap or re-exec the process and know better.
/// A no-op if a value was already captured.
pub fn set_invoked_executable(path: impl Into<PathBuf>) {
    let _ = INVOKED_EXECUTABLE.set(path.into());
}

/// The value captured at startup, if capture ever ran.
pub fn invoked_executable() -> Option<&'static Path> {
    INVOKED_EXECUTABLE.get().map(PathBuf::as_path)
}
