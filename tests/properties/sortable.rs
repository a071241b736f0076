//! Property tests for the sortable list.

use proptest::prelude::*;

use termpick::widgets::sortable::{SortItem, SortState};

#[derive(Debug, Clone)]
enum Op {
    Up,
    Down,
    Grab,
    DragUp,
    DragDown,
    MoveTo(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Up),
        Just(Op::Down),
        Just(Op::Grab),
        Just(Op::DragUp),
        Just(Op::DragDown),
        (0usize..12, 0usize..12).prop_map(|(a, b)| Op::MoveTo(a, b)),
    ]
}

fn state(labels: &[String]) -> SortState {
    SortState::new(labels.iter().map(|l| SortItem::from(l.as_str())).collect())
}

fn apply(state: &mut SortState, op: &Op) {
    match op {
        Op::Up => state.up(),
        Op::Down => state.down(),
        Op::Grab => state.toggle_grab(),
        Op::DragUp => state.drag_up(),
        Op::DragDown => state.drag_down(),
        Op::MoveTo(from, to) => {
            state.move_to(*from, *to);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Reordering is a permutation: same length, same multiset.
    #[test]
    fn property_moves_permute(
        labels in prop::collection::vec("[a-z]{1,3}", 0..10),
        ops in prop::collection::vec(op(), 0..50),
    ) {
        let mut s = state(&labels);
        for op in &ops {
            apply(&mut s, op);
            prop_assert_eq!(s.len(), labels.len());
            prop_assert!(s.is_empty() || s.cursor() < s.len());
        }
        let mut after = s.values();
        let mut before = labels.clone();
        after.sort();
        before.sort();
        prop_assert_eq!(after, before);
    }

    /// PROPERTY: Reset always restores the original order.
    #[test]
    fn property_reset_restores(
        labels in prop::collection::vec("[a-z]{1,3}", 0..10),
        ops in prop::collection::vec(op(), 0..50),
    ) {
        let mut s = state(&labels);
        for op in &ops {
            apply(&mut s, op);
        }
        s.reset();
        prop_assert_eq!(s.values(), labels);
        prop_assert!(!s.is_grabbed());
    }

    /// PROPERTY: Moving past either edge is a no-op.
    #[test]
    fn property_edge_moves_are_noops(labels in prop::collection::vec("[a-z]{1,3}", 1..10)) {
        let mut s = state(&labels);
        let last = labels.len() - 1;
        prop_assert!(!s.move_up(0));
        prop_assert!(!s.move_down(last));
        prop_assert!(!s.move_to(last + 1, 0));
        prop_assert_eq!(s.values(), labels);
    }
}
