//! Game orchestration between two players.
//!
//! [`Game`] owns the board and whose turn it is. Each call to
//! [`Game::advance`] asks the player on turn for exactly one move, commits
//! it, and reports whether the game has concluded.

use super::action::{Move, MoveError};
use super::log::{MoveLog, NullLog};
use super::outcome::Outcome;
use super::players::{Player, PlayerError};
use super::rules::{has_won, winner};
use super::{Board, BoardView, Side};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Errors that stop a game.
///
/// None of these are retried: a player that returns an illegal move has
/// broken its contract, and the caller decides what to do next.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// A player answered with an occupied square.
    #[display("{} played an illegal move: {}", player, source)]
    #[from(ignore)]
    IllegalMove {
        /// Name of the offending player.
        player: String,
        /// Why the move was rejected.
        source: MoveError,
    },

    /// A player could not produce a move.
    #[display("{}", _0)]
    Player(PlayerError),

    /// The move log could not be written.
    #[display("Failed to write move log: {}", _0)]
    Log(std::io::Error),
}

/// Tic-tac-toe game driven one move at a time.
///
/// Once [`advance`](Game::advance) has returned `Some(outcome)` the game is
/// over and must not be advanced again.
pub struct Game<'a> {
    board: Board,
    player_x: Box<dyn Player + 'a>,
    player_o: Box<dyn Player + 'a>,
    turn: Side,
    log: Box<dyn MoveLog + 'a>,
}

impl<'a> Game<'a> {
    /// Creates a game on an empty board with `start_side` to move first.
    #[instrument(skip(player_x, player_o), fields(x = player_x.name(), o = player_o.name()))]
    pub fn new(
        player_x: Box<dyn Player + 'a>,
        player_o: Box<dyn Player + 'a>,
        start_side: Side,
    ) -> Self {
        info!("Creating game");
        Self {
            board: Board::new(),
            player_x,
            player_o,
            turn: start_side,
            log: Box::new(NullLog),
        }
    }

    /// Sends every committed move to `log`.
    pub fn with_log(mut self, log: impl MoveLog + 'a) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Starts from `board` instead of an empty one.
    ///
    /// The board must not already be concluded.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> BoardView<'_> {
        BoardView::new(&self.board)
    }

    /// Side to move next. After a win this stays on the winner.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Name of the player on `side`.
    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::X => self.player_x.name(),
            Side::O => self.player_o.name(),
        }
    }

    /// Plays exactly one move.
    ///
    /// Returns the outcome if this move ended the game, `None` otherwise.
    /// The turn passes to the other side only if the game continues.
    ///
    /// # Errors
    ///
    /// Fails if the player on turn cannot move, answers with an occupied
    /// square, or the move log rejects the move. On any error the board and
    /// the turn are left as they were.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn advance(&mut self) -> Result<Option<Outcome>, GameError> {
        debug_assert!(
            winner(&self.board).is_none() && !self.board.is_full(),
            "advance called on a concluded game"
        );

        let side = self.turn;
        let player = match side {
            Side::X => &mut self.player_x,
            Side::O => &mut self.player_o,
        };
        let position = player.decide_move(BoardView::new(&self.board), side)?;

        let mut next = self.board;
        next.set(position, side)
            .map_err(|source| GameError::IllegalMove {
                player: self.player_name(side).to_string(),
                source,
            })?;
        self.log.record(Move::new(side, position))?;
        self.board = next;
        debug!(player = self.player_name(side), ?position, "Move committed");

        if has_won(&self.board, side) {
            let outcome = Outcome::win_for(side);
            info!(%outcome, "Game over");
            return Ok(Some(outcome));
        }

        self.turn = side.swap_side();

        if self.board.is_full() {
            info!(outcome = %Outcome::Draw, "Game over");
            return Ok(Some(Outcome::Draw));
        }

        Ok(None)
    }

    /// Advances until the game concludes.
    pub fn play_out(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.advance()? {
                return Ok(outcome);
            }
        }
    }
}
