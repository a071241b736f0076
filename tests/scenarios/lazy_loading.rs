//! Scenario: Lazily loaded branches
//!
//! Journey: The tree is backed by a slow or unreliable source. Children are
//! fetched on first expand while the user keeps typing.
//!
//! Success Criteria:
//! - Each branch is fetched once; a failed fetch is retried on the next expand
//! - Escape during a load cancels at once
//! - Keys typed during a load are dropped or replayed per configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use termpick::widgets::tree::NodeInfo;
use termpick::{NodeSpec, Outcome, PromptError, Terminal, TreePrompt, UiContext};

use crate::common::*;

/// SCENARIO: Expanding a remote branch, collapsing, expanding again
#[test]
fn scenario_children_are_fetched_once() {
    let loader = CountingLoader::default();
    let mut term = scripted(&[RIGHT, LEFT, RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader.clone())
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    assert_eq!(outcome.into_value().unwrap().values(), vec!["remote-1"]);
    assert_eq!(loader.calls(), 1);
}

/// SCENARIO: The first fetch fails; the next Right retries and succeeds
#[test]
fn scenario_failed_fetch_is_rolled_back_and_retried() {
    let loader = CountingLoader::failing_first(1);
    let mut term = scripted(&[RIGHT, DOWN, RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader.clone())
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    // The first Down happens while `remote` is still collapsed: a no-op.
    assert_eq!(outcome.into_value().unwrap().values(), vec!["remote-1"]);
    assert_eq!(loader.calls(), 2);
}

/// SCENARIO: A loader panic is treated like a failed load
#[test]
fn scenario_panicking_loader_is_survivable() {
    let loader = |parent: Option<&NodeInfo>| -> anyhow::Result<Vec<NodeSpec>> {
        match parent {
            None => Ok(vec![NodeSpec::branch("boom"), NodeSpec::leaf("safe")]),
            Some(_) => panic!("loader bug"),
        }
    };
    let mut term = scripted(&[RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &queued_ui())
        .unwrap();

    assert_eq!(outcome.into_value().unwrap().values(), vec!["safe"]);
    assert!(!term.is_raw_mode().unwrap());
}

/// SCENARIO: Escape while a load is stuck cancels without waiting for it
#[test]
fn scenario_escape_cancels_pending_load() {
    let (release, gate) = mpsc::channel::<()>();
    let gate = Mutex::new(gate);
    let finished = Arc::new(AtomicBool::new(false));
    let done = Arc::clone(&finished);
    let loader = move |parent: Option<&NodeInfo>| -> anyhow::Result<Vec<NodeSpec>> {
        if parent.is_none() {
            return Ok(vec![NodeSpec::branch("stuck")]);
        }
        if let Ok(gate) = gate.lock() {
            let _ = gate.recv();
        }
        done.store(true, Ordering::SeqCst);
        Ok(vec![NodeSpec::leaf("late")])
    };

    let mut term = scripted(&[RIGHT, ESC]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &UiContext::plain())
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(!finished.load(Ordering::SeqCst), "load should still be pending");
    assert!(!term.is_raw_mode().unwrap());
    assert!(term.cursor_visible());
    assert!(confirmation_line(&output(&term)).ends_with("cancelled"));
    drop(release);
}

/// SCENARIO: Ctrl+C during a load cancels too
#[test]
fn scenario_ctrl_c_cancels_pending_load() {
    let loader = CountingLoader::slow(Duration::from_millis(500));
    let mut term = scripted(&[RIGHT, CTRL_C]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &UiContext::plain())
        .unwrap();
    assert!(outcome.is_cancelled());
}

/// SCENARIO: By default keys typed during a load are discarded
#[test]
fn scenario_keys_during_load_are_dropped_by_default() {
    let loader = CountingLoader::slow(Duration::from_millis(200));
    let mut term = scripted(&[RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader.clone())
        .interact_on(&mut term, &UiContext::plain())
        .unwrap();

    // Down and Enter were swallowed; input then ended, which cancels.
    assert!(outcome.is_cancelled());
    assert_eq!(loader.calls(), 1);
    assert!(output(&term).contains("remote-1"));
}

/// SCENARIO: With the queue policy the same keys are replayed after the load
#[test]
fn scenario_keys_during_load_can_be_queued() {
    let loader = CountingLoader::slow(Duration::from_millis(200));
    let mut term = scripted(&[RIGHT, DOWN, ENTER]);
    let outcome = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &queued_ui())
        .unwrap();
    assert_eq!(outcome.into_value().unwrap().values(), vec!["remote-1"]);
}

/// SCENARIO: The root fetch fails before the terminal is touched
#[test]
fn scenario_root_fetch_failure() {
    let loader = |_: Option<&NodeInfo>| -> anyhow::Result<Vec<NodeSpec>> {
        anyhow::bail!("registry offline")
    };
    let mut term = scripted(&[ENTER]);
    let err = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &UiContext::plain())
        .unwrap_err();

    assert!(matches!(err, PromptError::RootLoad(_)));
    assert!(err.to_string().contains("registry offline"));
    assert!(output(&term).is_empty());
}

/// SCENARIO: A loader with nothing at the root
#[test]
fn scenario_empty_root_fetch() {
    let loader = |_: Option<&NodeInfo>| -> anyhow::Result<Vec<NodeSpec>> { Ok(vec![]) };
    let mut term = scripted(&[ENTER]);
    let err = TreePrompt::new("Pick")
        .loader(loader)
        .interact_on(&mut term, &UiContext::plain())
        .unwrap_err();
    assert!(matches!(err, PromptError::EmptyTree));
}
