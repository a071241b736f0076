//! Scenario: Picking from a static tree
//!
//! Journey: A script asks the user to pick a file, a directory, or several
//! files from a tree it already knows.
//!
//! Success Criteria:
//! - Arrow keys expand and walk the tree
//! - Enter validates the node kind against the mode
//! - The confirmation line names what was picked

use std::fs;

use tempfile::tempdir;
use termpick::widgets::tree::NodeKind;
use termpick::{DirLoader, NodeSpec, Outcome, SelectMode, TreePrompt, TreeSelection};

use crate::common::*;

/// SCENARIO: Right, Down, Enter picks the only file in a directory
#[test]
fn scenario_file_mode_picks_child() {
    let mut term = scripted(&[RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick a file")
        .mode(SelectMode::File)
        .roots(root_with_child())
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    let Outcome::Submitted(TreeSelection::Single(node)) = outcome else {
        panic!("expected a single selection, got {outcome:?}");
    };
    assert_eq!(node.value, "child");
    assert_eq!(node.path, "root/child");
    assert_eq!(node.kind, NodeKind::Leaf);

    insta::assert_snapshot!(confirmation_line(&output(&term)), @"[OK] Pick a file - child");
}

/// SCENARIO: Multi-select collects both leaves in traversal order
#[test]
fn scenario_multi_select_two_leaves() {
    let mut term = scripted(&[SPACE, DOWN, SPACE, ENTER]);
    let outcome = TreePrompt::new("Pick files")
        .mode(SelectMode::Multi)
        .roots(two_leaves())
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    let selection = outcome.into_value().expect("submitted");
    assert_eq!(selection.values(), vec!["alpha.txt", "beta.txt"]);
    insta::assert_snapshot!(
        confirmation_line(&output(&term)),
        @"[OK] Pick files - alpha.txt, beta.txt"
    );
}

/// SCENARIO: Multi-select order follows the tree, not the order of checks
#[test]
fn scenario_multi_select_order_is_traversal_order() {
    let mut term = scripted(&[DOWN, SPACE, UP, SPACE, ENTER]);
    let outcome = TreePrompt::new("Pick files")
        .mode(SelectMode::Multi)
        .roots(two_leaves())
        .interact_on(&mut term, &queued_ui())
        .unwrap();
    assert_eq!(
        outcome.into_value().unwrap().values(),
        vec!["alpha.txt", "beta.txt"]
    );
}

/// SCENARIO: Dir mode refuses a file, then accepts the directory
#[test]
fn scenario_dir_mode_rejects_file_with_bell() {
    let roots = vec![
        NodeSpec::leaf("notes.txt"),
        NodeSpec::branch("docs").with_children(vec![]),
    ];
    let mut term = scripted(&[ENTER, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick a dir")
        .mode(SelectMode::Dir)
        .roots(roots)
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    assert_eq!(outcome.into_value().unwrap().values(), vec!["docs"]);
    let out = output(&term);
    assert!(out.contains('\x07'), "expected a bell");
    assert!(out.contains("select a directory"));
}

/// SCENARIO: Left walks back up to the parent and collapses it
#[test]
fn scenario_left_returns_to_parent() {
    let mut term = scripted(&[RIGHT, DOWN, LEFT, LEFT, ENTER, DOWN, ENTER]);
    let roots = vec![
        NodeSpec::branch("root").with_children(vec![NodeSpec::leaf("child")]),
        NodeSpec::leaf("after"),
    ];
    let outcome = TreePrompt::new("Pick")
        .roots(roots)
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    // Enter on the collapsed branch expands it again; Down then lands on the child.
    assert_eq!(outcome.into_value().unwrap().values(), vec!["child"]);
}

/// SCENARIO: Type-ahead jumps and wraps
#[test]
fn scenario_type_ahead() {
    let roots = vec![
        NodeSpec::leaf("build.rs"),
        NodeSpec::leaf("Cargo.toml"),
        NodeSpec::leaf("cli.rs"),
    ];
    let mut term = scripted(&[b"c", b"c", b"c", ENTER]);
    let outcome = TreePrompt::new("Pick")
        .roots(roots)
        .interact_on(&mut term, &queued_ui())
        .unwrap();
    assert_eq!(outcome.into_value().unwrap().values(), vec!["Cargo.toml"]);
}

/// SCENARIO: Browsing a real directory through DirLoader
#[test]
fn scenario_directory_browse() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src").join("main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "").unwrap();

    let mut term = scripted(&[RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick a file")
        .loader(DirLoader::new(dir.path()))
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    let selection = outcome.into_value().expect("submitted");
    let expected = dir.path().join("src").join("main.rs");
    assert_eq!(selection.values(), vec![expected.display().to_string()]);
}

/// SCENARIO: A small window scrolls and shows indicators
#[test]
fn scenario_scrolling_window() {
    let roots: Vec<NodeSpec> = (0..6).map(|i| NodeSpec::leaf(format!("file{i}"))).collect();
    let mut term = scripted(&[DOWN, DOWN, DOWN, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .roots(roots)
        .limit(2)
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    assert_eq!(outcome.into_value().unwrap().values(), vec!["file4"]);
    let out = output(&term);
    assert!(out.contains("^ more above"));
    assert!(out.contains("v more below"));
}
