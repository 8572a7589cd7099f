//! Special-location resolution with explicit fallback chains.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use nix::unistd::{User, getuid};

use host_platform::{LocationResolver, SpecialLocation};

use crate::PosixBackend;

impl LocationResolver for PosixBackend {
    fn resolve(&self, kind: SpecialLocation) -> Option<PathBuf> {
        match kind {
            SpecialLocation::UserHome => home_dir(),
            SpecialLocation::UserDocuments => dirs::document_dir().or_else(home_dir),
            SpecialLocation::UserDesktop => {
                dirs::desktop_dir().or_else(|| home_dir().map(|h| h.join("Desktop")))
            }
            SpecialLocation::UserApplicationData => dirs::data_dir().or_else(home_dir),
            SpecialLocation::CommonApplicationData => Some(PathBuf::from("/var")),
            SpecialLocation::GlobalApplications => Some(PathBuf::from("/usr")),
            SpecialLocation::TempDirectory => Some(temp_directory()),
            SpecialLocation::InvokedExecutable => self
                .invoked_executable()
                .map(Path::to_path_buf)
                .or_else(current_executable),
            SpecialLocation::CurrentExecutable => current_executable(),
            SpecialLocation::HostApplicationPath => {
                // The self-referential link names the hosting process
                // even when this code runs inside a foreign host.
                fs::read_link("/proc/self/exe")
                    .ok()
                    .or_else(current_executable)
            }
        }
    }

    fn filesystem_roots(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("/")]
    }
}

/// `$HOME` when set and non-empty, else the passwd entry for the
/// current uid.
pub(crate) fn home_dir() -> Option<PathBuf> {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => User::from_uid(getuid()).ok().flatten().map(|user| user.dir),
    }
}

/// `/var/tmp`, then `/tmp`, then the current working directory.
fn temp_directory() -> PathBuf {
    for candidate in ["/var/tmp", "/tmp"] {
        let path = Path::new(candidate);
        if path.is_dir() {
            return path.to_path_buf();
        }
    }
    tracing::debug!("no system temp root found, falling back to cwd");
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn current_executable() -> Option<PathBuf> {
    env::current_exe().ok()
}
