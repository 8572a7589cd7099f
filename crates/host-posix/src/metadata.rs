//! Metadata queries: stat snapshots, media classification, link targets.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use nix::sys::statfs::statfs;

use host_platform::{FileMetadata, MediaClass, MetadataSource};

use crate::PosixBackend;

// Filesystem-type magics, from the kernel headers
// (linux/iso_fs.h, linux/msdos_fs.h, linux/nfs_fs.h, linux/smb_fs.h).
const ISOFS_SUPER_MAGIC: i64 = 0x9660;
const MSDOS_SUPER_MAGIC: i64 = 0x4d44;
const NFS_SUPER_MAGIC: i64 = 0x6969;
const SMB_SUPER_MAGIC: i64 = 0x517B;
const CIFS_MAGIC_NUMBER: i64 = 0xFF53_4D42;

/// Map a statfs f_type code to a media class.
///
/// Unrecognized codes classify as [`MediaClass::HardDisk`] — an
/// optimistic default that can misname exotic or virtual filesystems;
/// there is no reliable way to distinguish those here.
pub fn classify_fs_type(f_type: i64) -> MediaClass {
    match f_type {
        ISOFS_SUPER_MAGIC => MediaClass::Optical,
        // FAT is most often a mounted floppy/USB medium.
        MSDOS_SUPER_MAGIC => MediaClass::Removable,
        NFS_SUPER_MAGIC | SMB_SUPER_MAGIC | CIFS_MAGIC_NUMBER => MediaClass::Network,
        _ => MediaClass::HardDisk,
    }
}

/// Hidden-file rule for this backend: the leading-dot name convention.
/// Not portable — a Windows backend reads a file attribute bit instead.
pub(crate) fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

impl MetadataSource for PosixBackend {
    fn stat(&self, path: &Path) -> FileMetadata {
        let Ok(lstat) = fs::symlink_metadata(path) else {
            return FileMetadata::missing();
        };

        let is_symlink = lstat.file_type().is_symlink();
        let stat = if is_symlink {
            match fs::metadata(path) {
                Ok(target) => target,
                Err(_) => {
                    // Dangling link: the path does not lead to a file.
                    return FileMetadata {
                        is_symlink: true,
                        ..FileMetadata::missing()
                    };
                }
            }
        } else {
            lstat
        };

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_hidden_name);

        FileMetadata {
            exists: true,
            is_directory: stat.is_dir(),
            is_symlink,
            size_bytes: stat.size() as i64,
            modified_at_millis: stat.mtime() * 1000,
            created_at_millis: stat.ctime() * 1000,
            is_hidden: hidden,
            is_read_only: stat.permissions().readonly(),
            media: self.media_class(path),
        }
    }

    fn media_class(&self, path: &Path) -> MediaClass {
        match statfs(path) {
            Ok(info) => classify_fs_type(info.filesystem_type().0 as i64),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "statfs failed");
                MediaClass::Unknown
            }
        }
    }

    fn link_target(&self, path: &Path) -> Option<PathBuf> {
        let target = fs::read_link(path).ok()?;
        if target.is_absolute() {
            Some(target)
        } else {
            // Relative targets resolve as siblings of the link.
            Some(path.parent()?.join(target))
        }
    }
}

