use thiserror::Error;

/// Crate-specific error enum.
#[derive(Error, Debug)]
pub enum Error {
    /// The hex string was not exactly six hex digits after an optional `#`.
    #[error("invalid hex color string: '{0}'")]
    InvalidFormat(String),

    /// A channel slice had the wrong number of entries.
    #[error("expected {expected} channel values, got {actual}")]
    InvalidArity {
        /// The number of entries the constructor requires.
        expected: usize,

        /// The number of entries it was given.
        actual: usize,
    },
}
