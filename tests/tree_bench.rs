use clap::Parser;
use ordered_trees::bench::{self, Config, Error, Library};
use std::fs;
use std::path::PathBuf;
use std::process;

const TITLES: &str = "\
The Left Hand of Darkness
War of the Worlds
Dune

Solaris
Hyperion
Neuromancer
";

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tree-bench-{}-{}", process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn int_test_sorted_fallback() {
    let unsorted = scratch_file("fallback.txt", TITLES);
    let missing = unsorted.with_extension("missing");

    let library = Library::load(&unsorted, &missing).unwrap();
    assert_eq!(library.unsorted.len(), 6);
    assert_eq!(library.unsorted[0], "The Left Hand of Darkness");
    assert_eq!(
        library.sorted,
        vec![
            "Dune",
            "Hyperion",
            "Neuromancer",
            "Solaris",
            "The Left Hand of Darkness",
            "War of the Worlds",
        ],
    );

    fs::remove_file(unsorted).unwrap();
}

#[test]
fn int_test_empty_library() {
    let empty = scratch_file("empty.txt", "\n\n");
    match Library::load(&empty, &empty) {
        Err(Error::EmptyLibrary(path)) => assert_eq!(path, empty),
        other => panic!("unexpected result: {:?}", other),
    }
    fs::remove_file(empty).unwrap();
}

#[test]
fn int_test_missing_library() {
    let missing = std::env::temp_dir().join(format!("tree-bench-{}-absent.txt", process::id()));
    match Library::load(&missing, &missing) {
        Err(Error::IOError(_)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn int_test_run() {
    let unsorted = scratch_file("run.txt", TITLES);
    let config = Config {
        unsorted_path: unsorted.clone(),
        sorted_path: unsorted.with_extension("missing"),
        ..Config::default()
    };

    let report = bench::run(&config).unwrap();
    assert_eq!(report.streams.len(), 2);
    assert_eq!(report.streams[0].stream, "unsorted");
    assert_eq!(report.streams[1].stream, "sorted");

    for stream in &report.streams {
        assert_eq!(stream.records, 6);
        assert_eq!(stream.search_key, "The Maze Runner");
        assert!(stream.traversals.is_none());

        let names: Vec<&str> = stream.timings.iter().map(|timing| timing.tree).collect();
        assert_eq!(names, vec!["binary tree", "AVL tree", "RedBlack tree"]);
        for timing in &stream.timings {
            assert!(!timing.found);
            assert!(timing.removed);
            assert_eq!(timing.len, 5);
            assert_eq!(timing.violation, None);
        }
    }

    // the sorted stream degenerates the baseline into a chain of the five remaining titles
    assert_eq!(report.streams[1].timings[0].height, 5);

    fs::remove_file(unsorted).unwrap();
}

#[test]
fn int_test_run_with_traversals() {
    let unsorted = scratch_file("show.txt", TITLES);
    let config = Config::try_parse_from(vec![
        "tree-bench".to_string(),
        "--unsorted".to_string(),
        unsorted.to_string_lossy().into_owned(),
        "--sorted".to_string(),
        unsorted.to_string_lossy().into_owned(),
        "--search".to_string(),
        "Dune".to_string(),
        "--show".to_string(),
        "pre".to_string(),
    ])
    .unwrap();

    let report = bench::run(&config).unwrap();
    let stream = &report.streams[0];
    assert!(stream.timings.iter().all(|timing| timing.found));

    let traversals = stream.traversals.as_ref().unwrap();
    assert_eq!(traversals.len(), 3);
    for dump in traversals {
        assert_eq!(dump.order, "pre-order");
        assert_eq!(dump.keys.len(), 5);
        assert!(!dump.keys.contains(&"War of the Worlds".to_string()));
    }
    // the baseline keeps the first title as its root
    assert_eq!(traversals[0].keys[0], "The Left Hand of Darkness");

    let mut out = Vec::new();
    report.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("pre-order traversal of AVL tree:\n"));

    fs::remove_file(unsorted).unwrap();
}
