use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use reversi::{minimax, Board, Color, Game, GameConfig, MoveError, Pos, Turn, TOTAL_CELLS};

const OPENING: &str = "EEEEEEEEEEEEBWEEEWBEEEEEE";

fn assert_invariants(board: &Board) {
    assert_eq!(
        board.token_count(Color::Black) + board.token_count(Color::White) + board.empty_count(),
        TOTAL_CELLS as u32,
        "counts out of sync on {}",
        board.serialize()
    );
    let again = Board::from_serialized(&board.serialize()).unwrap();
    assert_eq!(&again, board);
}

/// Random legal playouts from the opening, passing when stuck.
fn random_boards(seed: u64, games: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = Vec::new();

    for _ in 0..games {
        let mut board: Board = OPENING.parse().unwrap();
        let mut color = Color::Black;
        let mut passes = 0;
        while board.winner().is_none() && passes < 2 {
            let children = board.legal_successors(color);
            match children.choose(&mut rng) {
                Some(child) => {
                    board = *child;
                    passes = 0;
                }
                None => passes += 1,
            }
            seen.push(board);
            color = color.rival();
        }
    }
    seen
}

#[test]
fn random_playouts_keep_counts_consistent() {
    for board in random_boards(7, 50) {
        assert_invariants(&board);
    }
}

#[test]
fn apply_move_touches_only_placed_and_flipped_cells() {
    for board in random_boards(11, 20) {
        for color in [Color::Black, Color::White] {
            for pos in Pos::all() {
                let before = board;
                match board.apply_move(pos, color) {
                    Ok((next, flipped)) => {
                        let changed: Vec<Pos> =
                            Pos::all().filter(|&p| board.get(p) != next.get(p)).collect();
                        assert_eq!(changed.len() as u32, flipped + 1);
                        assert!(changed.contains(&pos));
                        assert_eq!(
                            next.token_count(color),
                            board.token_count(color) + flipped + 1
                        );
                        assert_eq!(
                            next.token_count(color.rival()),
                            board.token_count(color.rival()) - flipped
                        );
                    }
                    Err(MoveError::NoCapture(_)) | Err(MoveError::OccupiedCell(_)) => {}
                    Err(other) => panic!("unexpected {other}"),
                }
                assert_eq!(board, before);
            }
        }
    }
}

#[test]
fn successors_match_legal_moves() {
    for board in random_boards(3, 10) {
        for color in [Color::Black, Color::White] {
            let moves = board.legal_moves(color);
            let successors = board.legal_successors(color);
            assert_eq!(moves.len(), successors.len());
            assert_eq!(board.has_legal_move(color), !moves.is_empty());
            for (pos, child) in moves.iter().zip(&successors) {
                assert_eq!(*child, board.apply_move(*pos, color).unwrap().0);
            }
        }
    }
}

#[test]
fn opening_depth_one_flips_exactly_one() {
    let opening: Board = OPENING.parse().unwrap();
    let result = minimax(&opening, 1, true).unwrap();

    let candidates = [Pos::new(1, 3), Pos::new(2, 4), Pos::new(3, 1), Pos::new(4, 2)];
    let chosen = candidates
        .iter()
        .find(|&&pos| opening.apply_move(pos, Color::Black).map(|(b, _)| b) == Ok(result.board))
        .expect("chosen move is adjacent to the center block");
    let (_, flipped) = opening.apply_move(*chosen, Color::Black).unwrap();
    assert_eq!(flipped, 1);
    assert_eq!(result.board.token_count(Color::Black), 4);
    assert_eq!(result.board.token_count(Color::White), 1);
}

#[test]
fn minimax_is_deterministic_across_depths() {
    let opening: Board = OPENING.parse().unwrap();
    for depth in 1..=3 {
        for maximizing in [true, false] {
            assert_eq!(
                minimax(&opening, depth, maximizing),
                minimax(&opening, depth, maximizing)
            );
        }
    }
}

#[test]
fn stuck_side_passes_without_changing_board() {
    // White has no move, Black does
    let board: Board = "BWEEEEEEEEEEEEEEEEEEEEEEE".parse().unwrap();
    assert_eq!(minimax(&board, 1, false), None);

    let config = GameConfig {
        depth: 1,
        first_to_move: Color::White,
    };
    let mut game = Game::new(board, config).unwrap();
    assert_eq!(game.step(), Turn::Passed { color: Color::White });
    assert_eq!(*game.board(), board);
    assert_eq!(game.to_move(), Color::Black);
}

#[test]
fn self_play_terminates_for_random_starts() {
    for board in random_boards(5, 3).into_iter().step_by(4) {
        let report = Game::new(board, GameConfig::with_depth(2)).unwrap().run();
        assert_invariants(&report.board);
        if report.board.is_full() {
            assert!(report.outcome.winner().is_some());
        }
    }
}
