//! Board tests - dealing, layout validation and tile flags

use std::collections::HashMap;

use memory_match::core::{symbol_for_pair, Board, BoardError, SimpleRng, Tile};

fn symbol_counts(board: &Board) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for tile in board.tiles() {
        *counts.entry(tile.symbol).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_every_symbol_dealt_twice() {
    for pairs in [1, 2, 6, 26, 40] {
        let mut rng = SimpleRng::new(99);
        let board = Board::new(pairs, &mut rng);
        assert_eq!(board.len(), pairs * 2);

        let counts = symbol_counts(&board);
        assert_eq!(counts.len(), pairs);
        assert!(counts.values().all(|&c| c == 2), "pairs={pairs}");
    }
}

#[test]
fn test_same_seed_same_layout() {
    let a = Board::new(6, &mut SimpleRng::new(2024));
    let b = Board::new(6, &mut SimpleRng::new(2024));
    assert_eq!(a, b);
}

#[test]
fn test_shuffle_moves_tiles() {
    // An unshuffled deal would be A A B B C C ...
    let board = Board::new(6, &mut SimpleRng::new(7));
    let dealt: Vec<char> = board.tiles().iter().map(|t| t.symbol).collect();
    let ordered: Vec<char> = (0..6)
        .flat_map(|n| [symbol_for_pair(n), symbol_for_pair(n)])
        .collect();
    assert_ne!(dealt, ordered);
}

#[test]
fn test_fresh_deal_is_face_down() {
    let board = Board::new(6, &mut SimpleRng::new(1));
    assert!(board.tiles().iter().all(Tile::is_fresh));
    assert_eq!(board.pending_face_up(), 0);
    assert!(!board.all_matched());
}

#[test]
fn test_fixed_layout_keeps_order() {
    let board = Board::from_symbols(&['X', 'Y', 'Y', 'X']).unwrap();
    assert_eq!(board.positions_of('X'), vec![0, 3]);
    assert_eq!(board.positions_of('Y'), vec![1, 2]);
    assert_eq!(board.pair_count(), 2);
}

#[test]
fn test_fixed_layout_validation() {
    assert_eq!(Board::from_symbols(&[]), Err(BoardError::Empty));
    assert!(matches!(
        Board::from_symbols(&['A', 'B']),
        Err(BoardError::UnpairedSymbol { count: 1, .. })
    ));
}

#[test]
fn test_all_matched_after_marking() {
    let mut board = Board::from_symbols(&['A', 'A', 'B', 'B']).unwrap();
    for i in 0..4 {
        assert!(!board.all_matched());
        assert!(board.mark_matched(i));
    }
    assert!(board.all_matched());
    assert!(board.tiles().iter().all(|t| t.face_up));
}

#[test]
fn test_symbol_alphabet() {
    assert_eq!(symbol_for_pair(0), 'A');
    assert_eq!(symbol_for_pair(25), 'Z');
    assert_eq!(symbol_for_pair(26), 'a');
    assert_eq!(symbol_for_pair(52), '0');
    assert_eq!(symbol_for_pair(61), '9');
    assert_eq!(symbol_for_pair(62), '\u{00C0}');
}
