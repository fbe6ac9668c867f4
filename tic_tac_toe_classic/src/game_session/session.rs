use serde::Serialize;
use tracing::{debug, info, warn};

use super::model::{evaluate, Board, Cell, Mark, Outcome, CELL_COUNT};
use crate::error::{GameError, Result};

/// Canonical state of one local game. The outcome is always derived from
/// the board, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Mark,
}

/// Read-only view of a session, used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Mark,
    pub outcome: Outcome,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession {
            board: Board::new(),
            turn: Mark::X,
        }
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome(),
        }
    }

    /// Places the current mark on `index`.
    ///
    /// Returns `Ok(true)` if the play was accepted and `Ok(false)` if it was
    /// ignored because the cell is taken or the game is already decided.
    /// Indices past the last cell are rejected with [`GameError::InvalidMove`].
    /// Only an accepted play changes any state.
    pub fn play(&mut self, index: usize) -> Result<bool> {
        if index >= CELL_COUNT {
            warn!("Move rejected: cell {} is out of bounds.", index);
            return Err(GameError::InvalidMove(index));
        }
        if self.outcome().is_over() {
            debug!("Move ignored: game is already over.");
            return Ok(false);
        }
        if self.board[index].is_some() {
            debug!("Move ignored: cell {} already taken.", index);
            return Ok(false);
        }

        let mark = self.turn;
        self.board.place(index, mark);
        self.turn = mark.opponent();

        info!("✅ {} played cell {}", mark, index);
        match self.outcome() {
            Outcome::Win(winner) => info!("🏆 Game over: {} wins.", winner),
            Outcome::Draw => info!("Game over: it's a draw."),
            Outcome::InProgress => debug!("Turn switched: now it's {}'s turn.", self.turn),
        }
        self.log_snapshot();

        Ok(true)
    }

    pub fn reset(&mut self) {
        *self = GameSession::default();
        info!("🔄 Game reset. {} plays first.", self.turn);
    }

    fn log_snapshot(&self) {
        debug!("Board:\n{}", self.board);
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => debug!("State: {}", json),
            Err(e) => warn!("Failed to serialize game state: {}", e),
        }
    }
}
