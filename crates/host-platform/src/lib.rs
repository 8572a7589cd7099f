//! Platform-independent model and contract for the hostfs layer.
//!
//! This crate defines the data types and backend traits shared by every
//! OS backend:
//!
//! - **Path model**: [`AnchoredPath`], a structural path independent of
//!   separator conventions, with rebasing between anchor directories
//! - **Metadata**: [`FileMetadata`] snapshots and the [`MetadataSource`]
//!   accessor contract
//! - **Enumeration**: the [`ScanHandle`]/[`DirectoryScan`] contract for
//!   lazy, single-pass directory scans
//! - **Locations**: the [`SpecialLocation`] enumeration and its
//!   [`LocationResolver`] contract
//! - **Launch**: the [`LaunchBridge`] contract for opening documents and
//!   trashing files
//!
//! Backend crates (one per OS) implement the traits; the `host-fs`
//! facade selects one at compile time.

pub mod error;
pub mod launch;
pub mod location;
pub mod metadata;
pub mod path;
pub mod scan;
pub mod wildcard;

pub use error::{Error, Result};
pub use launch::LaunchBridge;
pub use location::{LocationResolver, SpecialLocation};
pub use metadata::{FileMetadata, MediaClass, MetadataSource};
pub use path::{Anchor, AnchoredPath, SeparatorStyle};
pub use scan::{DirectoryEntry, DirectoryScan, EntryFields, ScanHandle};
pub use wildcard::WildcardPattern;
