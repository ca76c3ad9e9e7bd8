//! Property tests over arbitrary boards and move sequences.

use proptest::prelude::*;
use rewind_tictactoe::{
    Board, GameSession, GameStatus, HistoryInvariants, InvariantSet, Mark, Square, status,
    winning_line,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

/// A session driven by arbitrary cells and jumps; illegal input included.
fn session_from(ops: &[(bool, usize)]) -> GameSession {
    let mut session = GameSession::new();
    for &(jump, value) in ops {
        if jump {
            let _ = session.jump_to(value % (session.history().len() + 1));
        } else {
            session.play_move(value);
        }
    }
    session
}

proptest! {
    #[test]
    fn winning_line_is_uniform(board in board()) {
        if let Some(line) = winning_line(&board) {
            let [a, b, c] = line.positions();
            let sq = board.get(a);
            prop_assert_ne!(sq, Square::Empty);
            prop_assert_eq!(board.get(b), sq);
            prop_assert_eq!(board.get(c), sq);
        }
    }

    #[test]
    fn history_invariants_hold(ops in proptest::collection::vec((any::<bool>(), 0usize..11), 0..40)) {
        let session = session_from(&ops);
        prop_assert!(HistoryInvariants::check_all(session.history()).is_ok());
        prop_assert!(session.cursor() < session.history().len());
    }

    #[test]
    fn status_matches_turn_parity(ops in proptest::collection::vec((any::<bool>(), 0usize..11), 0..40)) {
        let session = session_from(&ops);
        let current = session.current_status();
        let full = session.current_board().occupied() == 9;
        match current {
            GameStatus::InProgress(mark) => {
                prop_assert_eq!(mark, session.next_mark());
                prop_assert!(!full);
            }
            GameStatus::Won { winner, .. } => {
                prop_assert_eq!(Some(winner), rewind_tictactoe::winner(session.current_board()));
            }
            GameStatus::Draw => prop_assert!(full),
        }
        prop_assert_eq!(current, status(session.current_board()));
    }

    #[test]
    fn illegal_moves_change_nothing(
        ops in proptest::collection::vec((any::<bool>(), 0usize..11), 0..40),
        cell in 0usize..12,
    ) {
        let mut session = session_from(&ops);
        let legal = cell < 9
            && !session.current_status().is_over()
            && session.current_board().squares()[cell] == Square::Empty;
        if !legal {
            let before = session.clone();
            session.play_move(cell);
            prop_assert_eq!(session, before);
        }
    }

    #[test]
    fn branching_drops_future(
        cells in proptest::collection::vec(0usize..9, 1..9),
        back in 0usize..9,
        cell in 0usize..9,
    ) {
        let mut session = GameSession::new();
        for c in cells {
            session.play_move(c);
        }
        let len = session.history().len();
        let k = back % len;
        session.jump_to(k).unwrap();
        let kept = session.history().snapshots()[..=k].to_vec();

        if session.try_play_move(cell).is_ok() {
            prop_assert_eq!(session.history().len(), k + 2);
            prop_assert_eq!(session.cursor(), k + 1);
            prop_assert_eq!(&session.history().snapshots()[..=k], kept.as_slice());
        } else {
            prop_assert_eq!(session.history().len(), len);
            prop_assert_eq!(session.cursor(), k);
        }
    }
}
