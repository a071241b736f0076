//! Property tests for the tree state machine.

use std::collections::HashSet;

use proptest::prelude::*;

use termpick::widgets::tree::{Expand, NodeId, NodeSpec, SelectMode, TreeState};

#[derive(Debug, Clone)]
enum Op {
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Check,
    Jump(char),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Up),
        3 => Just(Op::Down),
        1 => Just(Op::Home),
        1 => Just(Op::End),
        1 => Just(Op::PageUp),
        1 => Just(Op::PageDown),
        3 => Just(Op::Left),
        4 => Just(Op::Right),
        1 => Just(Op::Check),
        1 => proptest::char::range('a', 'e').prop_map(Op::Jump),
    ]
}

/// Trees mixing leaves, lazy branches and preloaded branches.
fn forest() -> impl Strategy<Value = Vec<NodeSpec>> {
    let leaf = prop_oneof![
        "[a-e][a-z]{0,4}".prop_map(NodeSpec::leaf),
        "[a-e][a-z]{0,4}".prop_map(NodeSpec::branch),
    ];
    let node = leaf.prop_recursive(3, 32, 4, |inner| {
        ("[a-e][a-z]{0,4}", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| NodeSpec::branch(name).with_children(children))
    });
    prop::collection::vec(node, 1..5)
}

fn mode() -> impl Strategy<Value = SelectMode> {
    prop_oneof![
        Just(SelectMode::File),
        Just(SelectMode::Dir),
        Just(SelectMode::Multi),
    ]
}

/// Children handed out for lazy branches: one more lazy level and a leaf.
fn lazy_children() -> anyhow::Result<Vec<NodeSpec>> {
    Ok(vec![NodeSpec::branch("deeper"), NodeSpec::leaf("item")])
}

fn apply(state: &mut TreeState, op: &Op) {
    match op {
        Op::Up => state.up(),
        Op::Down => state.down(),
        Op::Home => state.home(),
        Op::End => state.end(),
        Op::PageUp => state.page_up(),
        Op::PageDown => state.page_down(),
        Op::Left => {
            state.left();
        }
        Op::Right => {
            if let Expand::NeedsLoad(id, _) = state.right() {
                state.finish_load(id, lazy_children());
            }
        }
        Op::Check => {
            state.toggle_check();
        }
        Op::Jump(c) => {
            state.jump_to(*c);
        }
    }
}

fn check_invariants(state: &TreeState) -> Result<(), TestCaseError> {
    let flat = state.flat();
    prop_assert!(!flat.is_empty());
    prop_assert!(state.cursor() < flat.len());
    prop_assert!(state.offset() <= state.cursor());
    prop_assert!(state.cursor() < state.offset() + state.limit());
    prop_assert!(!state.is_loading());

    let visible: HashSet<_> = flat.iter().copied().collect();
    prop_assert_eq!(visible.len(), flat.len(), "duplicate rows in the projection");
    for id in state.ids() {
        prop_assert_eq!(
            visible.contains(&id),
            state.ancestors_expanded(id),
            "visibility of {} disagrees with its ancestors",
            state.name(id)
        );
    }

    // Depths step by at most one going down the projection.
    for pair in flat.windows(2) {
        prop_assert!(state.depth(pair[1]) <= state.depth(pair[0]) + 1);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any key sequence keeps the cursor inside the projection and the window.
    #[test]
    fn property_navigation_preserves_invariants(
        roots in forest(),
        mode in mode(),
        limit in 1usize..8,
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut state = TreeState::new(roots, mode, limit).unwrap();
        check_invariants(&state)?;
        for op in &ops {
            apply(&mut state, op);
            check_invariants(&state)?;
        }
    }

    /// PROPERTY: Collapsing then re-expanding the same branch restores the projection.
    #[test]
    fn property_collapse_expand_round_trip(
        roots in forest(),
        ops in prop::collection::vec(op(), 0..30),
    ) {
        let mut state = TreeState::new(roots, SelectMode::File, 5).unwrap();
        for op in &ops {
            apply(&mut state, op);
        }
        let Some(id) = state.focused() else {
            return Ok(());
        };
        if !state.is_expanded(id) {
            return Ok(());
        }

        let before = state.flat().to_vec();
        prop_assert_eq!(state.toggle_expand(id), Expand::Collapsed);
        prop_assert_eq!(state.toggle_expand(id), Expand::Expanded);
        prop_assert_eq!(state.flat(), before.as_slice());
        prop_assert_eq!(state.focused(), Some(id));
    }

    /// PROPERTY: Multi-select results follow tree order and hold no duplicates.
    #[test]
    fn property_multi_selection_is_ordered(
        roots in forest(),
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut state = TreeState::new(roots, SelectMode::Multi, 6).unwrap();
        for op in &ops {
            apply(&mut state, op);
        }
        let paths: Vec<String> = state.checked_infos().into_iter().map(|i| i.path).collect();

        // Depth first over every loaded node, collapsed or not.
        let mut expected = Vec::new();
        let mut stack: Vec<NodeId> = state.ids().filter(|&id| state.parent(id).is_none()).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            if state.is_checked(id) {
                expected.push(state.info(id).path);
            }
            if let Some(children) = state.children(id) {
                stack.extend(children.iter().rev());
            }
        }
        prop_assert_eq!(paths, expected);
    }
}
