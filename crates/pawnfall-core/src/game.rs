//! Game state and the command-level entry point.

use tracing::{debug, info};

use crate::board::{Board, Grid, PrettyBoard};
use crate::color::Color;
use crate::command::{Command, parse_command};
use crate::error::MoveError;
use crate::pawn::{Pawn, PawnId};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Moves are still being played.
    InProgress,
    /// A pawn reached the last rank or the opponent has no pawns left.
    Won(Color),
    /// The side to move has no legal move. Nobody wins.
    Stalemate,
}

impl Outcome {
    /// Return `true` once the game has a result.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The command was refused; ask the same player again.
    Rejected(MoveError),
    /// The player typed `exit`.
    ExitRequested,
    /// The move was played and the other player is up.
    Continuing,
    /// The move won the game for this color.
    Won(Color),
    /// The move left the opponent without a legal reply.
    Stalemated,
}

/// Complete game state: pawns, side to move, en passant eligibility, and result.
///
/// Rejected commands never modify it, so equality before and after a
/// rejection holds exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// The pawn that may be taken en passant on this ply only.
    en_passant: Option<PawnId>,
    outcome: Outcome,
}

/// Start a new game: sixteen pawns, White to move.
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Return the starting state.
    pub fn new() -> GameState {
        GameState::from_raw(Board::starting_position(), Color::White, None)
    }

    /// Construct a state from raw components. Used by layout parsing.
    pub(crate) fn from_raw(board: Board, side_to_move: Color, en_passant: Option<PawnId>) -> GameState {
        GameState {
            board,
            side_to_move,
            en_passant,
            outcome: Outcome::InProgress,
        }
    }

    /// Parse and play one line of player input.
    pub fn submit_command(&mut self, input: &str) -> Signal {
        match parse_command(input) {
            Command::Exit => {
                info!(side = %self.side_to_move, "exit requested");
                Signal::ExitRequested
            }
            Command::Malformed(input) => {
                debug!(input = %input, "malformed command");
                Signal::Rejected(MoveError::MalformedCommand { input })
            }
            Command::Move(mv) => match self.play(mv) {
                Ok(Outcome::InProgress) => Signal::Continuing,
                Ok(Outcome::Won(color)) => Signal::Won(color),
                Ok(Outcome::Stalemate) => Signal::Stalemated,
                Err(err) => {
                    debug!(mv = %mv, error = %err, "move rejected");
                    Signal::Rejected(err)
                }
            },
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Index of the player to move: 0 for White, 1 for Black.
    #[inline]
    pub fn current_player_index(&self) -> usize {
        self.side_to_move.index()
    }

    /// Return the id of the pawn capturable en passant, if any.
    #[inline]
    pub fn en_passant_id(&self) -> Option<PawnId> {
        self.en_passant
    }

    /// Return the pawn capturable en passant, if any.
    pub fn en_passant(&self) -> Option<&Pawn> {
        self.board.pawn(self.en_passant?)
    }

    /// Return the current result.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Return `true` once the game has a result.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Cell contents by row, rank 8 first.
    pub fn render_board(&self) -> Grid {
        self.board.grid()
    }

    /// Return a pretty-printable wrapper for the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        self.board.pretty()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_en_passant(&mut self, id: Option<PawnId>) {
        self.en_passant = id;
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
