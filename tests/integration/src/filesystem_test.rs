//! End-to-end behavior of the layer through the `Host` facade.

use std::path::Path;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use host_fs::{EntryFields, Host, MediaClass, SpecialLocation, WildcardPattern};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// The project-source scenario: `a.cpp`, `b.h` and `.hidden` under one
/// directory, enumerated with the match-all wildcard.
#[test]
fn enumerates_project_sources_with_metadata() {
    let temp = TempDir::new().unwrap();
    temp.child("src/a.cpp").write_str("int main() {}\n").unwrap();
    temp.child("src/b.h").write_str("#pragma once\n").unwrap();
    temp.child("src/.hidden").touch().unwrap();

    let host = Host::new();
    let fields = EntryFields {
        kind: true,
        hidden: true,
        size: true,
        ..EntryFields::NAME_ONLY
    };

    let mut entries: Vec<_> = host
        .read_dir(
            temp.child("src").path(),
            WildcardPattern::new("*.*"),
            fields,
        )
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, [".hidden", "a.cpp", "b.h"]);

    let hidden = &entries[0];
    assert!(hidden.metadata.is_hidden);
    let a_cpp = &entries[1];
    assert!(!a_cpp.metadata.is_hidden);
    assert!(!a_cpp.metadata.is_directory);
    assert!(a_cpp.metadata.size_bytes > 0);
}

#[test]
fn both_match_all_spellings_agree_end_to_end() {
    let temp = TempDir::new().unwrap();
    temp.child("Makefile").touch().unwrap();
    temp.child("notes.txt").touch().unwrap();
    temp.child(".git").create_dir_all().unwrap();

    let host = Host::new();
    let collect = |pattern: &str| {
        let mut names: Vec<String> = host
            .read_dir(
                temp.path(),
                WildcardPattern::new(pattern),
                EntryFields::NAME_ONLY,
            )
            .map(|e| e.name)
            .collect();
        names.sort();
        names
    };

    assert_eq!(collect("*"), collect("*.*"));
    assert_eq!(collect("*"), [".git", "Makefile", "notes.txt"]);
}

#[test]
fn stat_and_enumerator_agree_on_a_file() {
    let temp = TempDir::new().unwrap();
    temp.child("data.bin").write_str("0123456789").unwrap();

    let host = Host::new();
    let direct = host.stat(temp.child("data.bin").path());

    let from_scan = host
        .read_dir(temp.path(), WildcardPattern::new("data.*"), EntryFields::ALL)
        .next()
        .unwrap();

    assert!(direct.exists);
    assert_eq!(direct.size_bytes, from_scan.metadata.size_bytes);
    assert_eq!(direct.is_directory, from_scan.metadata.is_directory);
    assert_eq!(direct.is_hidden, from_scan.metadata.is_hidden);
}

#[test]
fn trash_of_missing_path_leaves_the_tree_alone() {
    let temp = TempDir::new().unwrap();
    let host = Host::new();

    assert!(host.move_to_trash(temp.child("never-existed.txt").path()));
    temp.child("never-existed.txt")
        .assert(predicate::path::missing());
}

#[test]
fn special_locations_are_stable_and_sensible() {
    let host = Host::new();

    let temp1 = host.resolve(SpecialLocation::TempDirectory).unwrap();
    let temp2 = host.resolve(SpecialLocation::TempDirectory).unwrap();
    assert_eq!(temp1, temp2);
    assert!(temp1.is_dir());

    let home = host.resolve(SpecialLocation::UserHome).unwrap();
    assert!(home.is_absolute());

    let exe = host.resolve(SpecialLocation::CurrentExecutable).unwrap();
    assert!(exe.exists());
}

#[test]
fn media_classification_of_a_real_directory() {
    let temp = TempDir::new().unwrap();
    let host = Host::new();

    // Whatever filesystem the suite runs on, an existing path is
    // classified and a missing one is not.
    assert_ne!(host.media_class(temp.path()), MediaClass::Unknown);
    assert_eq!(
        host.media_class(Path::new("/no/such/mount")),
        MediaClass::Unknown
    );
}

#[test]
fn scan_resources_never_leak_across_abandonment() {
    let temp = TempDir::new().unwrap();
    for i in 0..64 {
        temp.child(format!("file-{i}.dat")).touch().unwrap();
    }

    let host = Host::new();
    for _ in 0..256 {
        let mut iter = host.read_dir(
            temp.path(),
            WildcardPattern::match_all(),
            EntryFields::NAME_ONLY,
        );
        let _ = iter.next();
        // Dropped mid-scan every iteration; the fd count must not grow.
    }

    let full: Vec<_> = host
        .read_dir(
            temp.path(),
            WildcardPattern::match_all(),
            EntryFields::NAME_ONLY,
        )
        .collect();
    assert_eq!(full.len(), 64);
}
