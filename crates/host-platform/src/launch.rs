//! External document/process launch contract.

use std::path::Path;

/// Opens documents with the OS-preferred handler and moves files to the
/// native trash facility where one exists.
///
/// Spawned handlers are fire-and-forget: a `true` return means a
/// handler process was spawned, not that it succeeded internally, and
/// no handle is retained to wait on or cancel.
pub trait LaunchBridge {
    /// Open a path, URL, or email address with a suitable handler,
    /// passing `parameters` through on the command line.
    fn open_document(&self, target: &str, parameters: &str) -> bool;

    /// Move a file to the platform trash. A missing path is "nothing to
    /// move" and succeeds without touching the filesystem; a missing
    /// trash facility fails without creating one.
    fn move_to_trash(&self, path: &Path) -> bool;

    /// Reveal a path in the user's file manager: the path itself when
    /// it is a directory, else its existing parent.
    fn reveal(&self, path: &Path) -> bool;
}
