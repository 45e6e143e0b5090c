//! Engine tests - shift, spawn, reversal and scoring over many boards

use std::collections::HashSet;

use cube_2048::core::{
    apply_events, is_stuck, merge_points, reverse_event, reverse_events, score, shift,
    slide_line, spawn_cells, Board, RandomSource, SimpleRng,
};
use cube_2048::types::{Cell, CellEvent, Direction, Position, MAX_TILE_VALUE};

/// Random board with roughly `fill` percent of cells set to small powers of two
fn random_board(size: usize, fill: u32, rng: &mut SimpleRng) -> Board {
    let mut board = Board::new(size).unwrap();
    let positions: Vec<Position> = board.positions().collect();
    for p in positions {
        if rng.chance_percent(fill) {
            let exp = 1 + rng.next_below(4);
            board.set(p, Cell::Number(1 << exp));
        }
    }
    board
}

fn values(cells: &[Cell]) -> Vec<u32> {
    cells.iter().map(|c| c.value().unwrap_or(0)).collect()
}

#[test]
fn test_shift_roundtrip_on_random_boards() {
    let mut rng = SimpleRng::new(2024);
    for _ in 0..200 {
        let size = 2 + rng.next_below(3) as usize;
        let board = random_board(size, 55, &mut rng);
        for dir in Direction::ALL {
            let events = shift(&board, dir);
            let shifted = apply_events(&board, &events);
            assert_eq!(
                apply_events(&shifted, &reverse_events(&events)),
                board,
                "direction {:?} on {:?}",
                dir,
                board
            );
        }
    }
}

#[test]
fn test_reverse_events_reverse_each_event() {
    let mut rng = SimpleRng::new(8);
    let board = random_board(3, 70, &mut rng);
    for dir in Direction::ALL {
        let events = shift(&board, dir);
        let back = reverse_events(&events);
        assert_eq!(back.len(), events.len());
        let forward: HashSet<CellEvent> = events.iter().map(reverse_event).collect();
        let backward: HashSet<CellEvent> = back.iter().copied().collect();
        assert_eq!(forward, backward);
    }
}

#[test]
fn test_shift_is_noop_iff_board_unchanged() {
    let mut rng = SimpleRng::new(77);
    for _ in 0..200 {
        let board = random_board(3, 60, &mut rng);
        for dir in Direction::ALL {
            let events = shift(&board, dir);
            let shifted = apply_events(&board, &events);
            assert_eq!(events.is_empty(), shifted == board);
        }
    }
}

#[test]
fn test_shift_preserves_total_value() {
    let mut rng = SimpleRng::new(31);
    for _ in 0..100 {
        let board = random_board(4, 50, &mut rng);
        let total: u32 = board.cells().iter().filter_map(Cell::value).sum();
        for dir in Direction::ALL {
            let shifted = apply_events(&board, &shift(&board, dir));
            let after: u32 = shifted.cells().iter().filter_map(Cell::value).sum();
            assert_eq!(after, total);
        }
    }
}

#[test]
fn test_moves_never_stay_in_place() {
    let mut rng = SimpleRng::new(5);
    let board = random_board(3, 50, &mut rng);
    for dir in Direction::ALL {
        for ev in shift(&board, dir) {
            if let CellEvent::Move { from, to, .. } = ev {
                assert_ne!(from, to);
            }
        }
    }
}

#[test]
fn test_slide_first_pair_only() {
    let line = [
        Cell::Number(2),
        Cell::Number(2),
        Cell::Number(2),
        Cell::Empty,
    ];
    let slide = slide_line(&line, |k| Position::new(0, 0, k));
    assert_eq!(values(&slide.cells), vec![4, 2, 0, 0]);
}

#[test]
fn test_slide_matches_board_shift() {
    // Shifting -z on a single line is the slide itself.
    let mut board = Board::default();
    board.set(Position::new(1, 2, 1), Cell::Number(4));
    board.set(Position::new(1, 2, 2), Cell::Number(4));

    let line = board.line(1, 2);
    let slide = slide_line(&line, |k| Position::new(1, 2, k));
    assert_eq!(slide.events, shift(&board, Direction::NegZ));

    let shifted = apply_events(&board, &slide.events);
    assert_eq!(shifted.line(1, 2), slide.cells);
}

#[test]
fn test_shift_pos_x_scenario() {
    let mut board = Board::default();
    board.set(Position::new(0, 1, 1), Cell::Number(2));
    let events = shift(&board, Direction::PosX);
    assert_eq!(
        events,
        vec![CellEvent::Move {
            cell: Cell::Number(2),
            from: Position::new(0, 1, 1),
            to: Position::new(2, 1, 1),
        }]
    );
    assert!(events.iter().all(|e| matches!(e, CellEvent::Move { .. })));
}

#[test]
fn test_shift_merge_toward_pos_z_keeps_far_pair() {
    // [2, 2, 2] along z shifted toward +z merges the back pair (nearest the far face).
    let mut board = Board::default();
    for z in 0..3 {
        board.set(Position::new(0, 0, z), Cell::Number(2));
    }
    let shifted = apply_events(&board, &shift(&board, Direction::PosZ));
    assert_eq!(values(&shifted.line(0, 0)), vec![0, 2, 4]);
}

#[test]
fn test_spawn_partial_when_board_nearly_full() {
    let mut rng = SimpleRng::new(11);
    let mut board = Board::default();
    let positions: Vec<Position> = board.positions().collect();
    for p in &positions[..24] {
        board.set(*p, Cell::Number(2));
    }

    let events = spawn_cells(&board, 10, &mut rng);
    assert_eq!(events.len(), 3);

    let mut seen = HashSet::new();
    for ev in &events {
        match ev {
            CellEvent::Create { cell, at } => {
                assert!(matches!(cell, Cell::Number(2) | Cell::Number(4)));
                assert_eq!(board[*at], Cell::Empty);
                assert!(seen.insert(*at));
            }
            other => panic!("unexpected spawn event {:?}", other),
        }
    }
}

#[test]
fn test_spawn_on_full_board_is_empty() {
    let mut board = Board::new(2).unwrap();
    let positions: Vec<Position> = board.positions().collect();
    for p in positions {
        board.set(p, Cell::Number(8));
    }
    let mut rng = SimpleRng::new(1);
    assert!(spawn_cells(&board, 1, &mut rng).is_empty());
}

#[test]
fn test_spawn_is_reproducible_with_seed() {
    let board = Board::default();
    let a = spawn_cells(&board, 5, &mut SimpleRng::new(99));
    let b = spawn_cells(&board, 5, &mut SimpleRng::new(99));
    assert_eq!(a, b);
}

#[test]
fn test_score_examples() {
    assert_eq!(score(Cell::Number(16)), 28);
    assert_eq!(score(Cell::Number(2)), 0);
    assert_eq!(score(Cell::Empty), 0);
}

#[test]
fn test_merge_points_of_shift() {
    let mut board = Board::default();
    board.set(Position::new(0, 0, 0), Cell::Number(8));
    board.set(Position::new(0, 0, 2), Cell::Number(8));
    board.set(Position::new(2, 2, 1), Cell::Number(2));
    board.set(Position::new(2, 2, 2), Cell::Number(2));

    let events = shift(&board, Direction::NegZ);
    assert_eq!(merge_points(&events), 28 + 4);
}

#[test]
fn test_stuck_detection_single_cell_cube() {
    let mut board = Board::new(1).unwrap();
    assert!(is_stuck(&board));
    board.set(Position::new(0, 0, 0), Cell::Number(2));
    assert!(is_stuck(&board));
}

#[test]
fn test_loaded_board_with_largest_tiles_shifts_without_merging() {
    let max = MAX_TILE_VALUE;
    let mut cells = vec![Cell::Empty; 27];
    cells[0] = Cell::Number(max);
    cells[1] = Cell::Number(max);
    let board = Board::from_cells(3, cells).unwrap();

    assert!(shift(&board, Direction::NegZ).is_empty());
    let events = shift(&board, Direction::PosZ);
    assert!(events.iter().all(|e| matches!(e, CellEvent::Move { .. })));
    let shifted = apply_events(&board, &events);
    assert_eq!(values(&shifted.line(0, 0)), vec![0, max, max]);
}

#[test]
fn test_merge_into_largest_tile_scores() {
    let half = MAX_TILE_VALUE / 2;
    let mut board = Board::default();
    board.set(Position::new(1, 1, 0), Cell::Number(half));
    board.set(Position::new(1, 1, 2), Cell::Number(half));

    let events = shift(&board, Direction::NegZ);
    assert_eq!(merge_points(&events), score(Cell::Number(MAX_TILE_VALUE)));
    let shifted = apply_events(&board, &events);
    assert_eq!(shifted[Position::new(1, 1, 0)], Cell::Number(MAX_TILE_VALUE));
}
