//! The path model exercised the way a project-file generator uses it:
//! discover sources, decide compile status, and rewrite paths between
//! the project directory and a generated build directory.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use host_fs::{Anchor, AnchoredPath, EntryFields, Host, WildcardPattern};
use pretty_assertions::assert_eq;

fn compiled_by_default(file: &AnchoredPath) -> bool {
    file.has_any_extension(&["cpp", "c"])
}

#[test]
fn discovers_sources_and_rebases_them_into_the_build_tree() {
    let temp = TempDir::new().unwrap();
    temp.child("project/src/engine.cpp").touch().unwrap();
    temp.child("project/src/engine.h").touch().unwrap();
    temp.child("project/builds/linux").create_dir_all().unwrap();

    let project_dir = AnchoredPath::from_native(temp.child("project").path(), Anchor::Unspecified);
    let build_dir = project_dir.child("builds/linux");

    let host = Host::new();
    let sources: Vec<AnchoredPath> = host
        .read_dir(
            temp.child("project/src").path(),
            WildcardPattern::match_all(),
            EntryFields::NAME_ONLY,
        )
        .map(|entry| AnchoredPath::new("src", Anchor::ProjectRoot).child(&entry.name))
        .collect();
    assert_eq!(sources.len(), 2);

    for source in &sources {
        let in_build = source.rebased(&project_dir, &build_dir, Anchor::BuildTargetRoot);
        assert!(in_build.to_unix_style().starts_with("../../src/"));

        // The generated file must reach the same file the project sees.
        let round_trip = in_build.rebased(&build_dir, &project_dir, Anchor::ProjectRoot);
        assert_eq!(&round_trip, source);
    }
}

#[test]
fn compile_status_follows_the_extension() {
    let cpp = AnchoredPath::new("src/engine.cpp", Anchor::ProjectRoot);
    let header = AnchoredPath::new("src/engine.h", Anchor::ProjectRoot);
    let upper = AnchoredPath::new("src/LEGACY.C", Anchor::ProjectRoot);

    assert!(compiled_by_default(&cpp));
    assert!(!compiled_by_default(&header));
    assert!(compiled_by_default(&upper));
}

#[test]
fn include_paths_render_in_unix_style_for_any_target() {
    let sdk = AnchoredPath::new("sdk\\vst\\include", Anchor::ProjectRoot);
    assert_eq!(sdk.to_unix_style(), "sdk/vst/include");
    assert_eq!(sdk.to_windows_style(), "sdk\\vst\\include");
}

#[test]
fn paths_outside_the_project_stay_absolute() {
    let project_dir = AnchoredPath::new("/home/dev/project", Anchor::Unspecified);
    let build_dir = AnchoredPath::new("/home/dev/project/builds/linux", Anchor::Unspecified);

    let system_sdk = AnchoredPath::new("/opt/vstsdk", Anchor::Unspecified);
    let rebased = system_sdk.rebased(&project_dir, &build_dir, Anchor::BuildTargetRoot);

    // Still reachable, still unambiguous.
    assert!(rebased.is_absolute());
    assert_eq!(rebased.to_unix_style(), "/opt/vstsdk");
}

#[test]
fn generated_tree_lookups_use_structural_equality() {
    use std::collections::HashMap;

    let mut compile_flags: HashMap<AnchoredPath, &str> = HashMap::new();
    compile_flags.insert(
        AnchoredPath::new("src/engine.cpp", Anchor::ProjectRoot),
        "-O2",
    );

    // A generator that parsed the same path with backslashes finds it.
    let windows_spelling = AnchoredPath::new("src\\engine.cpp", Anchor::BuildTargetRoot);
    assert_eq!(compile_flags.get(&windows_spelling), Some(&"-O2"));
}
