#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use featdex::{FeatdexError, convert_batch_path, convert_stream_path};
use tempdir::TempDir;

fn write_input(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write input");
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}

#[test]
fn test_streaming_conversion_worked_example() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(&dir, "in.dat", "1 qid:A x:10 y:20\n2 qid:B y:30 x:5\n");
    let output = dir.path().join("out.dat");
    let mapping = dir.path().join("mapping.txt");

    let stats = convert_stream_path(&input, &output, Some(&mapping)).unwrap();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.comments, 0);

    assert_eq!(read(&output), "1 qid:A 1:10 2:20 \n2 qid:B 2:30 1:5 \n");
    assert_eq!(read(&mapping), "1 x\n2 y\n");
}

#[test]
fn test_streaming_preserves_interleaving() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(&dir, "in.dat", "# header\n1 x:5\n# mid\n2 y:7\n");
    let output = dir.path().join("out.dat");

    let stats = convert_stream_path(&input, &output, None::<&Path>).unwrap();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.comments, 2);
    assert_eq!(read(&output), "# header\n1 1:5 \n# mid\n2 2:7 \n");
}

#[test]
fn test_batch_groups_comments_first() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(&dir, "in.dat", "1 x:5\n# trailing note\n2 y:7\n");
    let output = dir.path().join("out.dat");
    let mapping = dir.path().join("mapping.txt");

    let stats = convert_batch_path(&input, &output, Some(&mapping)).unwrap();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.comments, 1);

    assert_eq!(read(&output), "# trailing note\n1 1:5 \n2 2:7 \n");
    assert_eq!(read(&mapping), "1 x\n2 y\n");
}

#[test]
fn test_reconversion_is_idempotent() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(
        &dir,
        "in.dat",
        "1 qid:A alpha:10 beta:20 # first\n2 beta:30 gamma:1\n",
    );
    let first = dir.path().join("first.dat");
    let second = dir.path().join("second.dat");

    convert_stream_path(&input, &first, None::<&Path>).unwrap();

    // Features in `first` are numeric and appear in ascending first-occurrence
    // order, so treating them as opaque names must reproduce the file.
    convert_stream_path(&first, &second, None::<&Path>).unwrap();

    assert_eq!(read(&first), read(&second));
}

#[test]
fn test_mapping_density_and_first_occurrence_order() {
    let dir = TempDir::new("featdex_test").unwrap();

    let mut content = String::new();
    let names = ["d", "b", "a", "c", "e"];
    for start in 0..names.len() {
        content.push_str(&format!("{start}"));
        for offset in 0..names.len() {
            let name = names[(start + offset) % names.len()];
            content.push_str(&format!(" {name}:{offset}"));
        }
        content.push('\n');
    }

    let input = write_input(&dir, "in.dat", &content);
    let output = dir.path().join("out.dat");
    let mapping = dir.path().join("mapping.txt");

    convert_stream_path(&input, &output, Some(&mapping)).unwrap();

    // The i-th distinct name seen gets index i, densely from 1.
    let entries: Vec<(u32, String)> = read(&mapping)
        .lines()
        .map(|line| {
            let (index, name) = line.split_once(' ').unwrap();
            (index.parse().unwrap(), name.to_string())
        })
        .collect();

    let expected: Vec<(u32, String)> = names
        .iter()
        .enumerate()
        .map(|(slot, name)| (slot as u32 + 1, name.to_string()))
        .collect();
    assert_eq!(entries, expected);

    // Every output record is sorted ascending by index.
    for line in read(&output).lines() {
        let indices: Vec<u32> = line
            .split(' ')
            .skip(1)
            .filter_map(|token| token.split_once(':'))
            .map(|(index, _)| index.parse().unwrap())
            .collect();

        assert_eq!(indices.len(), names.len());
        assert!(indices.is_sorted(), "unsorted record: {line}");
    }
}

#[test]
fn test_mapping_file_is_overwritten() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(&dir, "in.dat", "1 x:5\n");
    let output = dir.path().join("out.dat");
    let mapping = write_input(&dir, "mapping.txt", "9 stale\n8 older\n");

    convert_stream_path(&input, &output, Some(&mapping)).unwrap();

    assert_eq!(read(&mapping), "1 x\n");
}

#[test]
fn test_duplicate_feature_aborts_run() {
    let dir = TempDir::new("featdex_test").unwrap();

    let input = write_input(&dir, "in.dat", "1 x:5\n2 a:1 a:2\n3 y:7\n");
    let output = dir.path().join("out.dat");
    let mapping = dir.path().join("mapping.txt");

    let err = convert_stream_path(&input, &output, Some(&mapping)).unwrap_err();
    assert!(matches!(err, FeatdexError::DuplicateFeature { name } if name == "a"));

    // Streaming output is truncated at the failing record, and the live
    // mapping sink was still closed with everything interned so far.
    assert_eq!(read(&output), "1 1:5 \n");
    assert_eq!(read(&mapping), "1 x\n2 a\n");
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new("featdex_test").unwrap();

    let missing = dir.path().join("nope.dat");
    let output = dir.path().join("out.dat");

    let err = convert_stream_path(&missing, &output, None::<&Path>).unwrap_err();
    assert!(matches!(err, FeatdexError::Io(_)));
}
