//! Layout notation: a FEN-like text form for pawn positions.
//!
//! `<placement> <side> <en-passant>`, where placement lists ranks 8 down to 1
//! with `P` for white pawns, `p` for black pawns and digits for empty runs,
//! and en-passant names the square of the pawn that just double-stepped.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::LayoutError;
use crate::file::File;
use crate::game::GameState;
use crate::position::Position;
use crate::rank::Rank;

/// The layout string for the starting position.
pub const STARTING_LAYOUT: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -";

impl FromStr for GameState {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<GameState, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut placements = Vec::new();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = Rank::ALL[Rank::COUNT - 1 - rank_index];
            let mut file_index = 0usize;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPawnChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }

                let color = match c {
                    'P' => Color::White,
                    'p' => Color::Black,
                    _ => return Err(LayoutError::InvalidPawnChar { character: c }),
                };
                let file = File::from_index(file_index as u8).ok_or(LayoutError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                })?;
                placements.push((color, Position::new(rank, file)));
                file_index += 1;
            }

            if file_index != File::COUNT {
                return Err(LayoutError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }

        let board = Board::from_placements(placements)?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(LayoutError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let en_passant = match fields[2] {
            "-" => None,
            field => {
                let invalid = || LayoutError::InvalidEnPassant {
                    found: field.to_string(),
                };
                let position = Position::from_algebraic(field).ok_or_else(invalid)?;
                // Only the opponent's pawn that just landed from a double step qualifies.
                let pawn = board
                    .pawn_at(position)
                    .filter(|p| p.color() != side_to_move)
                    .filter(|p| position.rank() == p.color().double_step_rank())
                    .ok_or_else(invalid)?;
                Some(pawn.id())
            }
        };

        let mut state = GameState::from_raw(board, side_to_move, en_passant);
        state.settle_turn();
        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.render_board().iter().enumerate() {
            let mut empty_count = 0u8;
            for cell in cells {
                match cell {
                    Some(color) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        let c = match color {
                            Color::White => 'P',
                            Color::Black => 'p',
                        };
                        write!(f, "{c}")?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < Rank::COUNT - 1 {
                write!(f, "/")?;
            }
        }

        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {side}")?;

        match self.en_passant() {
            Some(pawn) => write!(f, " {}", pawn.position()),
            None => write!(f, " -"),
        }
    }
}
