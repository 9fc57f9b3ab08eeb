//! Rules engine for pawns-only chess: board model, move legality, and game results.

mod board;
mod chess_move;
mod color;
mod command;
mod error;
mod file;
mod game;
mod layout;
mod make_move;
mod movegen;
mod pawn;
mod perft;
mod position;
mod rank;

pub use board::{Board, Grid, PrettyBoard};
pub use chess_move::{Move, MoveKind, ResolvedMove};
pub use color::Color;
pub use command::{Command, EXIT_TOKEN, parse_command};
pub use error::{BoardError, LayoutError, MoveError};
pub use file::File;
pub use game::{GameState, Outcome, Signal, new_game};
pub use layout::STARTING_LAYOUT;
pub use movegen::{generate_legal_moves, has_legal_move, resolve, side_has_legal_move};
pub use pawn::{Pawn, PawnId};
pub use perft::{divide, perft};
pub use position::Position;
pub use rank::Rank;
