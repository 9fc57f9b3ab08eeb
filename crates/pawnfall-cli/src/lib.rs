//! Console front end for pawnfall: prompts, player names, and board printing.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{Session, SessionConfig};
