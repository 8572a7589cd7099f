//! Iterator adapter over a backend scan handle.

use host_platform::{DirectoryEntry, EntryFields, ScanHandle};

/// Iterator over the matching entries of one directory scan.
///
/// Owns the underlying scan handle, so the native resource lives
/// exactly as long as the iterator: dropping it mid-iteration releases
/// the handle. Single-pass — construct a new iterator to re-scan.
pub struct DirectoryIterator {
    scan: Box<dyn ScanHandle>,
    fields: EntryFields,
}

impl DirectoryIterator {
    pub fn new(scan: Box<dyn ScanHandle>, fields: EntryFields) -> Self {
        Self { scan, fields }
    }

    /// Which metadata fields each yielded entry populates.
    pub fn fields(&self) -> EntryFields {
        self.fields
    }
}

impl Iterator for DirectoryIterator {
    type Item = DirectoryEntry;

    fn next(&mut self) -> Option<DirectoryEntry> {
        self.scan.next_entry(self.fields)
    }
}
