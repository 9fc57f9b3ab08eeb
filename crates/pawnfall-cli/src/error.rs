//! Console session errors.

/// Errors that end a console session abnormally.
///
/// Rule violations are not errors here; they are reported to the player
/// and the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
