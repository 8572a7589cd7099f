//! Document launching and trash: fire-and-forget handler spawning.

use std::fs;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use host_platform::LaunchBridge;

use crate::PosixBackend;
use crate::locations::home_dir;
use crate::ops;

/// Handler programs tried in priority order for URLs and mail
/// addresses. The shell runs them as an `||` chain, so the first one
/// present and willing to take the argument wins; none being installed
/// is a silent no-op in the detached child.
pub const URL_HANDLERS: [&str; 6] = [
    "xdg-open",
    "/etc/alternatives/x-www-browser",
    "firefox",
    "mozilla",
    "konqueror",
    "opera",
];

impl LaunchBridge for PosixBackend {
    fn open_document(&self, target: &str, parameters: &str) -> bool {
        match spawn_detached(&build_open_command(target, parameters)) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "handler process not spawned");
                false
            }
        }
    }

    fn move_to_trash(&self, path: &Path) -> bool {
        if fs::symlink_metadata(path).is_err() {
            // Nothing to move.
            return true;
        }
        let Some(home) = home_dir() else {
            return false;
        };
        trash_into(&home, path)
    }

    fn reveal(&self, path: &Path) -> bool {
        if path.is_dir() {
            self.open_document(&path.to_string_lossy(), "")
        } else {
            match path.parent().filter(|parent| parent.is_dir()) {
                Some(parent) => self.open_document(&parent.to_string_lossy(), ""),
                None => false,
            }
        }
    }
}

/// URL heuristic, not a validator: just enough to route the target to
/// the browser chain instead of launching it directly.
pub fn looks_like_url(text: &str) -> bool {
    let t = text.trim().to_ascii_lowercase();
    t.starts_with("http://")
        || t.starts_with("https://")
        || t.starts_with("ftp://")
        || t.starts_with("file:")
        || t.starts_with("www.")
}

pub fn looks_like_email(text: &str) -> bool {
    let t = text.trim();
    match t.split_once('@') {
        Some((user, host)) => {
            !user.is_empty()
                && host.contains('.')
                && !t.contains('/')
                && !t.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Build the shell command for a target. Plain paths launch directly
/// with spaces escaped; URLs and mail addresses expand to the handler
/// chain.
pub fn build_open_command(target: &str, parameters: &str) -> String {
    let escaped = target.replace(' ', "\\ ");
    let command = if parameters.is_empty() {
        escaped
    } else {
        format!("{escaped} {parameters}")
    };

    if looks_like_url(target) || looks_like_email(target) {
        let quoted = quote(command.trim());
        URL_HANDLERS
            .iter()
            .map(|handler| format!("{handler} {quoted}"))
            .collect::<Vec<_>>()
            .join(" || ")
    } else {
        command
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

/// Spawn a shell command detached into its own session.
///
/// Returns as soon as the child is forked; no handle is retained and
/// the child is never waited on, so the handler's fate cannot block or
/// reach the caller.
pub fn spawn_detached(command: &str) -> host_platform::Result<()> {
    let mut shell = Command::new("/bin/sh");
    shell
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Runs in the child between fork and exec.
    unsafe {
        shell.pre_exec(|| {
            let _ = nix::unistd::setsid();
            Ok(())
        });
    }

    shell
        .spawn()
        .map(|_| ())
        .map_err(|e| host_platform::Error::Spawn {
            command: command.to_owned(),
            source: e,
        })
}

/// Move `path` into the trash convention found under `home`. Probes
/// `~/.Trash` then `~/.local/share/Trash/files`; a system with neither
/// fails the move — a trash directory is never created here.
fn trash_into(home: &Path, path: &Path) -> bool {
    let candidates = [home.join(".Trash"), home.join(".local/share/Trash/files")];
    let Some(trash) = candidates.into_iter().find(|c| c.is_dir()) else {
        tracing::debug!("no trash directory exists; refusing to create one");
        return false;
    };

    let dest = unique_destination(&trash, path);
    match ops::move_file(path, &dest) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "move to trash failed");
            false
        }
    }
}

/// A name in `dir` that does not collide with an existing entry,
/// suffixing `(2)`, `(3)`, ... before the extension.
fn unique_destination(dir: &Path, source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_owned());

    let candidate = dir.join(&name);
    if fs::symlink_metadata(&candidate).is_err() {
        return candidate;
    }

    let (stem, ext) = match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name.as_str(), ""),
    };
    let mut counter = 2u32;
    loop {
        let candidate = dir.join(format!("{stem}({counter}){ext}"));
        if fs::symlink_metadata(&candidate).is_err() {
            return candidate;
        }
        counter += 1;
    }
}
