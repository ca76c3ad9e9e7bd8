//! Plain-text rendering of a session.

use rewind_tictactoe::{Board, GameSession, GameStatus, MoveEntry, Position, Square};
use serde::Serialize;
use std::fmt::Write;

/// Formats the board as rows of `X|O|3`, numbering empty squares 1-9.
///
/// With `highlight` set, each square is three characters wide and the
/// squares of a winning line are bracketed, e.g. `[X]`.
pub fn render_board(board: &Board, status: &GameStatus, highlight: bool) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let symbol = match board.squares()[index] {
                Square::Empty => (index + 1).to_string(),
                Square::Occupied(mark) => mark.to_string(),
            };
            if highlight {
                let winning = Position::from_index(index)
                    .is_some_and(|pos| status.is_winning_square(pos));
                if winning {
                    result.push_str(&format!("[{}]", symbol));
                } else {
                    result.push_str(&format!(" {} ", symbol));
                }
            } else {
                result.push_str(&symbol);
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            if highlight {
                result.push_str("\n---+---+---\n");
            } else {
                result.push_str("\n-+-+-\n");
            }
        }
    }
    result
}

/// Formats jump-to entries, one per line, marking the cursor with `>`.
pub fn render_move_list(entries: &[MoveEntry]) -> String {
    let mut result = String::new();
    for entry in entries {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        // Writing to a String cannot fail.
        let _ = writeln!(result, "{} {}", marker, entry.label());
    }
    result
}

/// Formats the board, status line, and move list of a session.
pub fn render_session(session: &GameSession, highlight: bool) -> String {
    let status = session.current_status();
    format!(
        "{}\n\n{}\n\nMoves ({}):\n{}",
        render_board(session.current_board(), &status, highlight),
        status,
        session.move_order().label(),
        render_move_list(&session.move_list()),
    )
}

/// JSON view of a session for `rewind replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Board at the cursor.
    pub board: Board,
    /// Status of that board.
    pub status: GameStatus,
    /// Cursor into history.
    pub cursor: usize,
    /// Jump-to entries in the session's order.
    pub moves: Vec<MoveEntry>,
}

impl From<&GameSession> for SessionView {
    fn from(session: &GameSession) -> Self {
        Self {
            board: *session.current_board(),
            status: session.current_status(),
            cursor: session.cursor(),
            moves: session.move_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_numbers() {
        let board = Board::new();
        let status = rewind_tictactoe::status(&board);
        assert_eq!(render_board(&board, &status, false), "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_highlight_brackets_winning_line() {
        let session = GameSession::replay(&[0, 3, 4, 5, 8]).unwrap();
        let status = session.current_status();
        let rendered = render_board(session.current_board(), &status, true);
        assert_eq!(
            rendered,
            "[X]| 2 | 3 \n---+---+---\n O |[X]| O \n---+---+---\n 7 | 8 |[X]"
        );
    }

    #[test]
    fn test_move_list_marks_cursor() {
        let mut session = GameSession::replay(&[4]).unwrap();
        session.jump_to(0).unwrap();
        assert_eq!(
            render_move_list(&session.move_list()),
            "> You are at game start\n  Go to move #1 (2, 2)\n"
        );
    }

    #[test]
    fn test_session_includes_status() {
        let session = GameSession::new();
        let rendered = render_session(&session, false);
        assert!(rendered.contains("Next player: X"));
        assert!(rendered.contains("Moves (Ascending):"));
    }
}
