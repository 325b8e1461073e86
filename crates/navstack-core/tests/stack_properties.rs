#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! # Navigation Stack Behaviour Tests
//!
//! Stack notation is head to tail: `[A, B, C]` has C on top.

use navstack_core::ScreenKind::{A, B, C};
use navstack_core::{Destination, NavController, NavOptions, PopUpTo, Screen, ScreenKind};

// ============================================================================
// Helpers
// ============================================================================

fn screen(kind: ScreenKind) -> Screen {
    Screen::from_kind(kind)
}

fn nav_with(kinds: &[ScreenKind]) -> NavController<Screen> {
    let mut nav = NavController::new();
    nav.navigate_to_all(kinds.iter().copied().map(screen), None);
    assert_eq!(nav.kinds(), kinds);
    nav
}

// ============================================================================
// Empty stack
// ============================================================================

#[test]
fn test_empty_stack_pops_are_noops() {
    let mut nav = NavController::<Screen>::new();

    nav.pop_back_stack();
    assert!(nav.is_empty());

    for kind in ScreenKind::ALL {
        nav.pop_up_to(kind, false);
        nav.pop_up_to(kind, true);
        assert!(nav.is_empty());
    }

    nav.pop_up_to_root();
    assert!(nav.is_empty());
    assert_eq!(nav.version(), 0);
}

#[test]
fn test_current_destination_on_empty_stack_is_root() {
    let nav = NavController::<Screen>::new();
    let current = nav.current_destination();
    assert!(current.is_root());
    assert_eq!(current, Screen::Root);
}

#[test]
fn test_current_destination_is_top() {
    let nav = nav_with(&[A, B]);
    assert_eq!(nav.current_destination(), Screen::B);
}

// ============================================================================
// Root short-circuit
// ============================================================================

#[test]
fn test_navigate_to_root_clears() {
    let mut nav = nav_with(&[A, B, C]);
    nav.navigate_to(Screen::Root);
    assert!(nav.is_empty());
}

#[test]
fn test_navigate_to_root_ignores_pop_up_to() {
    for target in [A, B, ScreenKind::Settings, ScreenKind::Root] {
        let mut nav = nav_with(&[A, B, C]);
        nav.navigate_with(
            Screen::Root,
            NavOptions::new().single_top(true).pop_up_to_inclusive(target),
        );
        assert!(nav.is_empty(), "target {target} left {}", nav.describe());
    }
}

#[test]
fn test_root_is_never_stored() {
    let mut nav = nav_with(&[A]);
    nav.navigate_to_single_top(Screen::Root);
    nav.navigate_to(Screen::B);
    assert_eq!(nav.kinds(), vec![B]);
}

// ============================================================================
// Push and single-top
// ============================================================================

#[test]
fn test_push_onto_empty() {
    let mut nav = NavController::<Screen>::new();
    nav.navigate_to(Screen::A);
    assert_eq!(nav.kinds(), vec![A]);
}

#[test]
fn test_push_onto_existing() {
    let mut nav = nav_with(&[A]);
    nav.navigate_to(Screen::C);
    assert_eq!(nav.kinds(), vec![A, C]);
}

#[test]
fn test_single_top_suppresses_duplicate() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_to_single_top(Screen::B);
    assert_eq!(nav.kinds(), vec![A, B]);
}

#[test]
fn test_without_single_top_duplicates_push() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_with(Screen::B, NavOptions::new().single_top(false));
    assert_eq!(nav.kinds(), vec![A, B, B]);
}

#[test]
fn test_single_top_only_checks_top() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_to_single_top(Screen::A);
    assert_eq!(nav.kinds(), vec![A, B, A]);
}

#[test]
fn test_single_top_on_empty_stack_pushes() {
    let mut nav = NavController::<Screen>::new();
    nav.navigate_to_single_top(Screen::A);
    assert_eq!(nav.kinds(), vec![A]);
}

#[test]
fn test_single_top_ignores_payload() {
    let mut nav = NavController::<Screen>::new();
    nav.navigate_to(Screen::product(1));
    nav.navigate_to_single_top(Screen::product(2));

    assert_eq!(nav.len(), 1);
    assert_eq!(nav.current_destination(), Screen::product(1));
}

// ============================================================================
// Pops
// ============================================================================

#[test]
fn test_pop_back_stack() {
    let mut nav = nav_with(&[A, B, C]);
    nav.pop_back_stack();
    assert_eq!(nav.kinds(), vec![A, B]);
}

#[test]
fn test_pop_up_to_nearest_match() {
    let mut nav = nav_with(&[A, B, C, A, B, C]);
    nav.pop_up_to(A, false);
    assert_eq!(nav.kinds(), vec![A, B, C, A]);
}

#[test]
fn test_pop_up_to_nearest_match_inclusive() {
    let mut nav = nav_with(&[A, B, C, A, B, C]);
    nav.pop_up_to(A, true);
    assert_eq!(nav.kinds(), vec![A, B, C]);
}

#[test]
fn test_pop_up_to_inclusive_bottom() {
    let mut nav = nav_with(&[A, B, C]);
    nav.pop_up_to(A, true);
    assert!(nav.is_empty());
}

#[test]
fn test_pop_up_to_top_is_noop_unless_inclusive() {
    let mut nav = nav_with(&[A, B, C]);
    nav.pop_up_to(C, false);
    assert_eq!(nav.kinds(), vec![A, B, C]);

    nav.pop_up_to(C, true);
    assert_eq!(nav.kinds(), vec![A, B]);
}

#[test]
fn test_pop_up_to_matches_regardless_of_payload() {
    let mut nav = NavController::<Screen>::new();
    nav.navigate_to_all(
        [Screen::Home, Screen::product(7), Screen::C, Screen::B],
        None,
    );
    nav.pop_up_to(ScreenKind::ProductDetail, false);
    assert_eq!(nav.stack(), &[Screen::Home, Screen::product(7)]);
}

// ============================================================================
// Combined navigate + pop-up-to
// ============================================================================

#[test]
fn test_navigate_with_pop_up_to() {
    let mut nav = nav_with(&[A, B, C, B, A, C]);
    nav.navigate_with(Screen::A, NavOptions::new().pop_up_to(B));
    assert_eq!(nav.kinds(), vec![A, B, C, B, A]);
}

#[test]
fn test_navigate_with_pop_up_to_inclusive() {
    let mut nav = nav_with(&[A, B, C, B, A, C]);
    nav.navigate_with(Screen::C, NavOptions::new().pop_up_to_inclusive(B));
    assert_eq!(nav.kinds(), vec![A, B, C, C]);
}

#[test]
fn test_navigate_with_missing_pop_target_still_pushes() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_with(Screen::C, NavOptions::new().pop_up_to(ScreenKind::Settings));
    assert_eq!(nav.kinds(), vec![A, B, C]);
}

#[test]
fn test_navigate_with_pop_up_to_root_clears_then_pushes() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_with(Screen::C, NavOptions::new().pop_up_to(ScreenKind::Root));
    assert_eq!(nav.kinds(), vec![C]);
}

// ============================================================================
// Batch push
// ============================================================================

#[test]
fn test_batch_push_has_no_dedup() {
    let mut nav = nav_with(&[A, B]);
    nav.navigate_to_all([Screen::A, Screen::B, Screen::A], None);
    assert_eq!(nav.kinds(), vec![A, B, A, B, A]);
}

#[test]
fn test_batch_push_keeps_adjacent_duplicates() {
    let mut nav = nav_with(&[B]);
    nav.navigate_to_all([Screen::B, Screen::B], None);
    assert_eq!(nav.kinds(), vec![B, B, B]);
}

#[test]
fn test_batch_push_with_pop_up_to() {
    let mut nav = nav_with(&[A, B, C, A, C]);
    nav.navigate_to_all([Screen::B, Screen::C], Some(PopUpTo::new(A)));
    assert_eq!(nav.kinds(), vec![A, B, C, A, B, C]);

    let mut nav = nav_with(&[A, B, C]);
    nav.navigate_to_all([Screen::C], Some(PopUpTo::inclusive(B)));
    assert_eq!(nav.kinds(), vec![A, C]);
}

#[test]
fn test_empty_batch_is_noop() {
    let mut nav = nav_with(&[A]);
    let version = nav.version();
    nav.navigate_to_all(Vec::new(), None);
    assert_eq!(nav.kinds(), vec![A]);
    assert_eq!(nav.version(), version);
}

// ============================================================================
// describe()
// ============================================================================

#[test]
fn test_describe_lists_positions_head_to_tail() {
    let nav = nav_with(&[A, B, C, A]);
    assert_eq!(nav.describe(), "1:A > 2:B > 3:C > 4:A");
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let mut first = nav_with(&[A, B]);
    let second = nav_with(&[C]);
    first.pop_up_to_root();
    assert_eq!(second.kinds(), vec![C]);
}
