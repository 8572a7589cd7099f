//! Structural path model, independent of OS separator conventions.
//!
//! An [`AnchoredPath`] stores normalized segments plus an absolute flag
//! and an [`Anchor`] marker recording which root a relative path hangs
//! from. Paths are immutable; every transformation returns a new value.
//! Conversion to platform text happens only at I/O boundaries.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Which root a relative path is understood to hang from.
///
/// The anchor is provenance used by rebasing decisions; it does not
/// participate in equality or hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Relative to the project file's directory.
    ProjectRoot,
    /// Relative to the generated build target's directory.
    BuildTargetRoot,
    /// Origin unknown or irrelevant (absolute paths, scratch values).
    Unspecified,
}

/// Textual separator convention for rendering a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorStyle {
    Unix,
    Windows,
}

impl SeparatorStyle {
    /// The style of the platform this code is compiled for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }
}

/// An immutable, structural filesystem path.
///
/// Two paths with identical normalized segment sequences and
/// absoluteness are equal regardless of the separator style they were
/// parsed from. `.` and empty segments are dropped at construction;
/// `..` segments are preserved and resolved only when the path is
/// resolved against a base.
#[derive(Debug, Clone)]
pub struct AnchoredPath {
    segments: Vec<String>,
    absolute: bool,
    anchor: Anchor,
}

impl AnchoredPath {
    /// Parse a path from text in either separator style.
    pub fn new(text: impl AsRef<str>, anchor: Anchor) -> Self {
        let text = text.as_ref();
        let absolute = text.starts_with('/')
            || text.starts_with('\\')
            || text.as_bytes().get(1) == Some(&b':');
        let segments = text
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_owned)
            .collect();
        Self {
            segments,
            absolute,
            anchor,
        }
    }

    /// Build from a native path value.
    pub fn from_native(path: impl AsRef<Path>, anchor: Anchor) -> Self {
        Self::new(path.as_ref().to_string_lossy(), anchor)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The same path with a different anchor marker.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The final segment, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The extension of the final segment, without the dot. A leading
    /// dot alone (`.hidden`) is a name, not an extension.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Case-insensitive extension membership test.
    pub fn has_any_extension(&self, extensions: &[&str]) -> bool {
        match self.extension() {
            Some(ext) => extensions
                .iter()
                .map(|e| e.trim_start_matches('.'))
                .any(|e| e.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }

    /// Append a child segment (which may itself contain separators).
    pub fn child(&self, segment: &str) -> Self {
        let mut out = self.clone();
        out.segments.extend(
            segment
                .split(['/', '\\'])
                .filter(|s| !s.is_empty() && *s != ".")
                .map(str::to_owned),
        );
        out
    }

    /// The path with the final segment removed. `None` when there is no
    /// segment to remove.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        let mut out = self.clone();
        out.segments.pop();
        Some(out)
    }

    /// Render with the given separator style. A relative path with no
    /// segments renders as `.`.
    pub fn to_style(&self, style: SeparatorStyle) -> String {
        let sep = style.separator();
        let body = self.segments.join(&sep.to_string());
        if self.absolute {
            if self.has_drive_prefix() {
                body
            } else {
                format!("{sep}{body}")
            }
        } else if body.is_empty() {
            ".".to_owned()
        } else {
            body
        }
    }

    pub fn to_unix_style(&self) -> String {
        self.to_style(SeparatorStyle::Unix)
    }

    pub fn to_windows_style(&self) -> String {
        self.to_style(SeparatorStyle::Windows)
    }

    /// Convert to a platform-native `PathBuf` for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(self.to_style(SeparatorStyle::native()))
    }

    /// Resolve this path against an absolute base. Absolute paths
    /// resolve to themselves; `..` segments pop resolved segments.
    pub fn resolved_against(&self, base: &AnchoredPath) -> AnchoredPath {
        if self.absolute {
            return self.clone();
        }
        let mut segments = base.segments.clone();
        for seg in &self.segments {
            if seg == ".." && segments.last().is_some_and(|s| s != "..") {
                segments.pop();
            } else {
                segments.push(seg.clone());
            }
        }
        AnchoredPath {
            segments,
            absolute: base.absolute,
            anchor: base.anchor,
        }
    }

    /// Express this absolute path relative to an absolute base.
    ///
    /// Descendants of the base become plain relative paths; paths that
    /// merely share a root with the base gain a `..` chain; paths with
    /// no common root (different drive prefixes) are returned absolute
    /// rather than as a silently wrong relative path. Relative inputs
    /// are returned unchanged.
    pub fn make_relative_to(&self, base: &AnchoredPath) -> AnchoredPath {
        if !self.absolute || !base.absolute {
            return self.clone();
        }

        let common = self
            .segments
            .iter()
            .zip(&base.segments)
            .take_while(|(a, b)| a == b)
            .count();

        // Drive-letter paths only share a root when the prefix matches.
        if common == 0 && (self.has_drive_prefix() || base.has_drive_prefix()) {
            return self.clone();
        }

        let mut segments: Vec<String> = Vec::new();
        segments.resize(base.segments.len() - common, "..".to_owned());
        segments.extend(self.segments[common..].iter().cloned());

        AnchoredPath {
            segments,
            absolute: false,
            anchor: self.anchor,
        }
    }

    /// Recompute this path to be relative to a different anchor
    /// directory. `old_base` and `new_base` are the absolute paths of
    /// the current and destination anchors; an absolute path rebases to
    /// itself with only the anchor marker updated.
    pub fn rebased(
        &self,
        old_base: &AnchoredPath,
        new_base: &AnchoredPath,
        anchor: Anchor,
    ) -> AnchoredPath {
        if self.absolute {
            return self.clone().with_anchor(anchor);
        }
        self.resolved_against(old_base)
            .make_relative_to(new_base)
            .with_anchor(anchor)
    }

    fn has_drive_prefix(&self) -> bool {
        self.segments
            .first()
            .is_some_and(|s| s.len() == 2 && s.as_bytes()[1] == b':')
    }
}

impl PartialEq for AnchoredPath {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute && self.segments == other.segments
    }
}

impl Eq for AnchoredPath {}

impl Hash for AnchoredPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
        self.segments.hash(state);
    }
}

impl fmt::Display for AnchoredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_unix_style())
    }
}

impl From<&str> for AnchoredPath {
    fn from(s: &str) -> Self {
        Self::new(s, Anchor::Unspecified)
    }
}

impl From<&Path> for AnchoredPath {
    fn from(p: &Path) -> Self {
        Self::from_native(p, Anchor::Unspecified)
    }
}

impl From<PathBuf> for AnchoredPath {
    fn from(p: PathBuf) -> Self {
        Self::from_native(p, Anchor::Unspecified)
    }
}
