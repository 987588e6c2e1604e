use super::common::{membership, write, RecordingReporter};
use prefixdupe::duplicates::{find_duplicates, DuplicateFinder, FinderConfig};
use prefixdupe::progress::NullReporter;
use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn finder() -> DuplicateFinder {
    DuplicateFinder::new(FinderConfig::new("output").with_reporter(Arc::new(NullReporter)))
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let (groups, summary) = finder().find_duplicates(dir.path());

    assert!(groups.is_empty());
    assert_eq!(summary.entries_examined, 0);
    assert_eq!(summary.duplicate_groups, 0);
    assert!(!summary.invalid_directory);
}

#[test]
fn test_scan_no_prefixed_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", b"same");
    write(dir.path(), "b.txt", b"same");

    let (groups, summary) = finder().find_duplicates(dir.path());

    assert!(groups.is_empty());
    assert_eq!(summary.entries_examined, 0);
    assert_eq!(summary.files_hashed, 0);
}

#[test]
fn test_scan_unique_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output_a", b"content a");
    write(dir.path(), "output_b", b"content b");
    write(dir.path(), "output_c", b"content c");

    let (groups, summary) = finder().find_duplicates(dir.path());

    assert!(groups.is_empty());
    assert_eq!(summary.files_hashed, 3);
    assert_eq!(summary.duplicate_groups, 0);
}

#[test]
fn test_scenario_text_files() {
    let dir = tempdir().unwrap();
    let one = write(dir.path(), "output1.txt", b"abc");
    let two = write(dir.path(), "output2.txt", b"abc");
    let three = write(dir.path(), "output3.txt", b"xyz");
    let notes = write(dir.path(), "notes.txt", b"abc");

    let groups = find_duplicates(dir.path(), "output");

    assert_eq!(groups.len(), 1);
    let members: BTreeSet<_> = groups[0].iter().cloned().collect();
    assert_eq!(members, BTreeSet::from([one, two]));
    assert!(groups.iter().flatten().all(|p| *p != three && *p != notes));
}

#[test]
fn test_scenario_binary_files_and_subdirectory() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "output_a.bin", &[0u8; 10]);
    let b = write(dir.path(), "output_b.bin", &[0u8; 10]);
    let sub = dir.path().join("output_dir");
    fs::create_dir(&sub).unwrap();
    write(&sub, "output_a.bin", &[0u8; 10]);

    let (groups, summary) = finder().find_duplicates(dir.path());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size, 10);
    let members: BTreeSet<_> = groups[0].paths.iter().cloned().collect();
    assert_eq!(members, BTreeSet::from([a, b]));
    assert_eq!(summary.non_files_skipped, 1);
    assert_eq!(summary.files_hashed, 2);
}

#[test]
fn test_multiple_groups_are_disjoint() {
    let dir = tempdir().unwrap();
    for (name, content) in [
        ("output_1", "red"),
        ("output_2", "blue"),
        ("output_3", "red"),
        ("output_4", "blue"),
        ("output_5", "red"),
        ("output_6", "green"),
    ] {
        write(dir.path(), name, content.as_bytes());
    }

    let (groups, summary) = finder().find_duplicates(dir.path());

    assert_eq!(groups.len(), 2);
    let sizes: BTreeSet<usize> = groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, BTreeSet::from([2, 3]));
    assert_eq!(summary.duplicate_files, 3);
    assert_eq!(summary.reclaimable_space, 3 * 2 + 4);

    let all: Vec<_> = groups.iter().flat_map(|g| g.paths.iter()).collect();
    let unique: BTreeSet<_> = all.iter().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    write(dir.path(), "output_x", b"1");
    write(dir.path(), "output_y", b"1");
    write(dir.path(), "output_z", b"2");
    write(dir.path(), "output_w", b"2");
    write(dir.path(), "output_v", b"3");

    let first = find_duplicates(dir.path(), "output");
    let second = find_duplicates(dir.path(), "output");

    assert_eq!(membership(&first), membership(&second));
    assert_eq!(first.len(), 2);
}

#[test]
fn test_sorted_listing_is_deterministic() {
    let dir = tempdir().unwrap();
    for name in ["output_c", "output_a", "output_b"] {
        write(dir.path(), name, b"same");
    }
    let finder = DuplicateFinder::new(
        FinderConfig::new("output")
            .with_sort_entries(true)
            .with_reporter(Arc::new(NullReporter)),
    );

    let (groups, _) = finder.find_duplicates(dir.path());

    assert_eq!(
        groups[0].paths,
        vec![
            dir.path().join("output_a"),
            dir.path().join("output_b"),
            dir.path().join("output_c"),
        ]
    );
}

#[test]
fn test_nonexistent_path_soft_fails_with_diagnostic() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");
    let recorder = Arc::new(RecordingReporter::default());
    let finder =
        DuplicateFinder::new(FinderConfig::new("output").with_reporter(recorder.clone()));

    let (groups, summary) = finder.find_duplicates(&missing);

    assert!(groups.is_empty());
    assert!(summary.invalid_directory);
    let invalid = recorder.invalid.lock().unwrap();
    assert_eq!(invalid.len(), 1);
    assert!(invalid[0].contains("does_not_exist"));
}

#[test]
fn test_regular_file_path_soft_fails_with_diagnostic() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "output.txt", b"abc");
    let recorder = Arc::new(RecordingReporter::default());
    let finder =
        DuplicateFinder::new(FinderConfig::new("output").with_reporter(recorder.clone()));

    let (groups, summary) = finder.find_duplicates(&file);

    assert!(groups.is_empty());
    assert!(summary.invalid_directory);
    assert!(recorder.invalid.lock().unwrap()[0].starts_with("Not a directory"));
    assert!(recorder.entries.lock().unwrap().is_empty());
}

#[test]
fn test_invalid_and_empty_results_are_distinguishable() {
    let dir = tempdir().unwrap();

    let (_, empty) = finder().find_duplicates(dir.path());
    let (_, invalid) = finder().find_duplicates(&dir.path().join("nope"));

    assert!(!empty.invalid_directory);
    assert!(invalid.invalid_directory);
}
