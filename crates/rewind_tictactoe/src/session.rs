//! A game session: history, cursor, and move application.

use crate::contracts::{Contract, PlayContract};
use crate::error::{MoveError, NavigationError};
use crate::move_list::{MoveEntry, MoveOrder, describe};
use crate::rules::{GameStatus, status};
use crate::{Board, History, Mark, Snapshot};
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe with navigable history.
///
/// The session owns the history and a cursor into it. The board shown, the
/// mark to move and the game status all follow from the snapshot at the
/// cursor; none of them is stored separately.
///
/// Moving the cursor back with [`jump_to`](Self::jump_to) and then playing
/// discards every snapshot after the cursor before the new move is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    cursor: usize,
    move_order: MoveOrder,
}

impl GameSession {
    /// Creates a session at game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            move_order: MoveOrder::default(),
        }
    }

    /// Creates a session at game start with the given move-list order.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        Self {
            move_order,
            ..Self::new()
        }
    }

    /// Plays each cell in turn from game start.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::new();
        for &cell in cells {
            session.try_play_move(cell)?;
        }
        info!(moves = cells.len(), "Replayed moves");
        Ok(session)
    }

    /// Places the next mark at `cell` (0-8), ignoring illegal moves.
    ///
    /// Out-of-range cells, occupied squares, and moves on a won or drawn
    /// board leave the session unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play_move(&mut self, cell: usize) {
        if let Err(error) = self.try_play_move(cell) {
            debug!(cell, %error, "Move rejected");
        }
    }

    /// Places the next mark at `cell` (0-8), reporting why a move is refused.
    ///
    /// On success the history is cut back to the cursor, the new snapshot
    /// is appended, and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell > 8`
    /// - [`MoveError::GameOver`] if the board at the cursor is won or drawn
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark
    /// - [`MoveError::InvariantViolation`] if the resulting history is
    ///   inconsistent (checked in debug builds; the session is restored)
    #[instrument(skip(self), fields(cursor = self.cursor, history_len = self.history.len()))]
    pub fn try_play_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let pos = PlayContract::pre(self, &cell)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.next_mark();
        let snapshot = self.current_snapshot().advance(pos, mark);
        self.cursor = self.history.branch(self.cursor, snapshot);

        #[cfg(debug_assertions)]
        {
            if let Err(error) = PlayContract::post(&before, self) {
                *self = before;
                return Err(error);
            }
        }

        debug!(%pos, %mark, cursor = self.cursor, "Move played");
        Ok(())
    }

    /// Moves the cursor to `index` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfRange`] if `index` is not in history.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.history.len();
        if index >= len {
            warn!(index, len, "Jump outside history");
            return Err(NavigationError::OutOfRange { index, len });
        }
        self.cursor = index;
        debug!(cursor = index, "Cursor moved");
        Ok(())
    }

    /// Returns to game start, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.reset();
        self.cursor = 0;
        info!("Session restarted");
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order = self.move_order.toggle();
        debug!(order = self.move_order.label(), "Move order toggled");
    }

    /// Returns the move-list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Returns the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        // `jump_to` and `branch` keep the cursor inside history.
        &self.history.snapshots()[self.cursor]
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Classifies the board at the cursor.
    pub fn current_status(&self) -> GameStatus {
        status(self.current_board())
    }

    /// Mark whose turn it is at the cursor: X on even indices, O on odd.
    ///
    /// Answers even on a finished board; check
    /// [`current_status`](Self::current_status) to know whether a move is
    /// possible.
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.cursor)
    }

    /// Jump-to entries in the session's current order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.move_list_in(self.move_order)
    }

    /// Jump-to entries in the given order.
    #[instrument(skip(self))]
    pub fn move_list_in(&self, order: MoveOrder) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(index, snap)| MoveEntry::new(index, snap.placed(), index == self.cursor));
        match order {
            MoveOrder::Ascending => entries.collect(),
            MoveOrder::Descending => entries.rev().collect(),
        }
    }

    /// "game start" for index 0, "(row, column)" for later moves.
    ///
    /// Returns `None` if `index` is not in history.
    pub fn describe_move(&self, index: usize) -> Option<String> {
        self.history.get(index).map(|snap| describe(snap.placed()))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
