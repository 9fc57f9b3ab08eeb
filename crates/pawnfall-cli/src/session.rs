//! Turn-by-turn console loop wiring player input to the rules engine.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use pawnfall_core::{GameState, Signal};

use crate::error::SessionError;

/// Knobs for the console session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Line printed before anything else.
    pub title: String,
    /// Names used when a player enters a blank name, in turn order.
    pub default_names: [String; 2],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: " Pawns-Only Chess".to_string(),
            default_names: ["White".to_string(), "Black".to_string()],
        }
    }
}

/// A console game between two named players.
///
/// Generic over its input and output so it can run on stdin/stdout or on
/// in-memory buffers.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    state: GameState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with a fresh game.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_state(input, output, config, GameState::new())
    }

    /// Create a session that continues from an existing state.
    pub fn with_state(input: R, output: W, config: SessionConfig, state: GameState) -> Self {
        Self {
            input,
            output,
            config,
            state,
        }
    }

    /// Play until `exit`, a result, or end of input. Returns the final state.
    pub fn run(mut self) -> Result<GameState, SessionError> {
        writeln!(self.output, "{}", self.config.title)?;

        let Some(first) = self.ask_name("First Player's name:", 0)? else {
            return self.finish();
        };
        let Some(second) = self.ask_name("Second Player's name:", 1)? else {
            return self.finish();
        };
        let players = [first, second];
        info!(white = %players[0], black = %players[1], "session started");

        self.print_board()?;

        loop {
            let player = &players[self.state.current_player_index()];
            writeln!(self.output, "{player}'s turn:")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match self.state.submit_command(&line) {
                Signal::Rejected(err) => {
                    debug!(player = %player, error = ?err, "command rejected");
                    writeln!(self.output, "{err}")?;
                }
                Signal::ExitRequested => {
                    writeln!(self.output, "Bye!")?;
                    break;
                }
                Signal::Continuing => self.print_board()?,
                Signal::Won(color) => {
                    self.print_board()?;
                    writeln!(self.output, "{} Wins!", color.title())?;
                    writeln!(self.output, "Bye!")?;
                    break;
                }
                Signal::Stalemated => {
                    self.print_board()?;
                    writeln!(self.output, "Stalemate!")?;
                    writeln!(self.output, "Bye!")?;
                    break;
                }
            }
        }

        self.finish()
    }

    fn ask_name(&mut self, prompt: &str, index: usize) -> Result<Option<String>, SessionError> {
        writeln!(self.output, "{prompt}")?;
        let name = self.read_line()?.map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.config.default_names[index].clone()
            } else {
                trimmed.to_string()
            }
        });
        Ok(name)
    }

    /// Read one line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("input closed");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{}", self.state.pretty())?;
        Ok(())
    }

    fn finish(mut self) -> Result<GameState, SessionError> {
        self.output.flush()?;
        info!(outcome = ?self.state.outcome(), layout = %self.state, "session ended");
        Ok(self.state)
    }
}
