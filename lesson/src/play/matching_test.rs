use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn animals(shuffled: bool) -> MatchingProps {
    serde_json::from_value(json!({
        "pairs": [
            { "id": 1, "left": "Cat", "right": "Meow" },
            { "id": 2, "left": "Dog", "right": "Woof" },
        ],
        "shuffled": shuffled,
        "points": 15,
    }))
    .unwrap()
}

fn pick(side: Side, id: &str) -> MatchingIntent {
    MatchingIntent::Pick(side, id.into())
}

// =============================================================
// Matching
// =============================================================

#[test]
fn matching_pair_is_recorded() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(false), &mut rng);
    assert_eq!(board.apply(&pick(Side::Left, "1"), &mut rng), Outcome::Updated);
    assert_eq!(board.apply(&pick(Side::Right, "1"), &mut rng), Outcome::Updated);
    assert_eq!(board.matched_count(), 1);
    assert!(board.is_matched("1"));
    assert_eq!(board.selection(Side::Left), None);
    assert_eq!(board.selection(Side::Right), None);
}

#[test]
fn mismatch_clears_latest_and_keeps_earlier() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(false), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    board.apply(&pick(Side::Right, "2"), &mut rng);
    assert_eq!(board.matched_count(), 0);
    assert_eq!(board.selection(Side::Right), None);
    assert_eq!(board.selection(Side::Left), Some("1"));
}

#[test]
fn right_first_then_left() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(false), &mut rng);
    board.apply(&pick(Side::Right, "2"), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    assert_eq!(board.selection(Side::Right), Some("2"));
    assert_eq!(board.selection(Side::Left), None);
    board.apply(&pick(Side::Left, "2"), &mut rng);
    assert!(board.is_matched("2"));
}

#[test]
fn reselecting_same_side_replaces_selection() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(false), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    board.apply(&pick(Side::Left, "2"), &mut rng);
    assert_eq!(board.selection(Side::Left), Some("2"));
}

#[test]
fn matched_items_ignore_clicks() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(false), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    board.apply(&pick(Side::Right, "1"), &mut rng);
    assert_eq!(board.apply(&pick(Side::Left, "1"), &mut rng), Outcome::Ignored);
    assert_eq!(board.apply(&pick(Side::Right, "9"), &mut rng), Outcome::Ignored);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn completion_awards_points_once() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(true), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    board.apply(&pick(Side::Right, "1"), &mut rng);
    board.apply(&pick(Side::Left, "2"), &mut rng);
    assert_eq!(board.apply(&pick(Side::Right, "2"), &mut rng), Outcome::Completed { points: 15 });
    assert!(board.is_complete());
    assert_eq!(board.apply(&pick(Side::Left, "1"), &mut rng), Outcome::Ignored);
}

#[test]
fn empty_board_never_completes() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&MatchingProps::default(), &mut rng);
    assert_eq!(board.apply(&pick(Side::Left, "1"), &mut rng), Outcome::Ignored);
    assert!(!board.is_complete());
}

#[test]
fn reset_clears_progress() {
    let mut rng = rng();
    let mut board = MatchingSession::new(&animals(true), &mut rng);
    board.apply(&pick(Side::Left, "1"), &mut rng);
    board.apply(&pick(Side::Right, "1"), &mut rng);
    board.apply(&pick(Side::Left, "2"), &mut rng);
    board.reset(&mut rng);
    assert_eq!(board.matched_count(), 0);
    assert_eq!(board.selection(Side::Left), None);
    assert!(!board.is_complete());
}

// =============================================================
// Layout
// =============================================================

#[test]
fn columns_hold_every_pair() {
    let mut rng = rng();
    let board = MatchingSession::new(&animals(true), &mut rng);
    let left: Vec<_> = board.left_items().iter().map(|p| p.left.as_str()).collect();
    assert_eq!(left, vec!["Cat", "Dog"]);
    let mut right: Vec<_> = board.right_items().iter().map(|p| p.right.as_str()).collect();
    right.sort_unstable();
    assert_eq!(right, vec!["Meow", "Woof"]);
}

#[test]
fn unshuffled_right_column_keeps_order() {
    let mut rng = rng();
    let board = MatchingSession::new(&animals(false), &mut rng);
    let right: Vec<_> = board.right_items().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(right, vec!["1", "2"]);
}
