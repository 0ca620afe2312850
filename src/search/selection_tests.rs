//! Tests for search/selection

use super::*;
use proptest::prelude::*;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_has_no_selection() {
    assert!(SelectionState::new().get_selected().is_none());
}

#[test]
fn test_move_down_from_none_selects_first() {
    let mut state = SelectionState::new();
    state.move_down(5);
    assert_eq!(state.get_selected(), Some(0));
}

#[test]
fn test_move_up_from_none_selects_first() {
    let mut state = SelectionState::new();
    state.move_up(5);
    assert_eq!(state.get_selected(), Some(0));
}

#[test]
fn test_move_down_stops_at_last() {
    let mut state = SelectionState::new();
    state.select_index(4);
    state.move_down(5);
    assert_eq!(state.get_selected(), Some(4));
}

#[test]
fn test_move_up_stops_at_first() {
    let mut state = SelectionState::new();
    state.select_index(0);
    state.move_up(5);
    assert_eq!(state.get_selected(), Some(0));
}

#[test]
fn test_move_up_and_down() {
    let mut state = SelectionState::new();
    state.move_down(5);
    state.move_down(5);
    state.move_down(5);
    assert_eq!(state.get_selected(), Some(2));
    state.move_up(5);
    assert_eq!(state.get_selected(), Some(1));
}

#[test]
fn test_empty_list_is_noop() {
    let mut state = SelectionState::new();
    state.move_down(0);
    assert!(state.get_selected().is_none());
    state.move_up(0);
    assert!(state.get_selected().is_none());
}

#[test]
fn test_select_index_and_clear() {
    let mut state = SelectionState::new();
    state.select_index(3);
    assert_eq!(state.get_selected(), Some(3));
    state.clear_selection();
    assert!(state.get_selected().is_none());
}

#[test]
fn test_list_shrinking_clamps_on_next_move() {
    let mut state = SelectionState::new();
    state.select_index(9);
    state.move_down(3);
    assert_eq!(state.get_selected(), Some(2));
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_move_down_saturates_at_last(count in 1usize..20, presses in 0usize..50) {
        let mut state = SelectionState::new();
        for _ in 0..presses {
            state.move_down(count);
            prop_assert!(state.get_selected().unwrap() < count);
        }
        if presses > 0 {
            prop_assert_eq!(state.get_selected(), Some(presses.min(count) - 1));
        }
    }

    #[test]
    fn prop_move_up_never_returns_to_none(
        count in 1usize..20,
        start in prop::option::of(0usize..20),
        presses in 1usize..50
    ) {
        let mut state = SelectionState::new();
        if let Some(index) = start {
            prop_assume!(index < count);
            state.select_index(index);
        }
        for _ in 0..presses {
            state.move_up(count);
            prop_assert!(state.get_selected().is_some());
        }
        let expected = start.map_or(0, |i| i.saturating_sub(presses));
        prop_assert_eq!(state.get_selected(), Some(expected));
    }

    #[test]
    fn prop_any_sequence_stays_in_bounds(
        count in 1usize..20,
        moves in prop::collection::vec(prop::bool::ANY, 0..60)
    ) {
        let mut state = SelectionState::new();
        for down in moves {
            if down {
                state.move_down(count);
            } else {
                state.move_up(count);
            }
            if let Some(index) = state.get_selected() {
                prop_assert!(index < count);
            }
        }
    }
}
