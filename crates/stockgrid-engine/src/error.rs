use std::fmt;

/// Result type for stockgrid-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
///
/// Stock operations have no error class: their inputs are generated by the
/// engine itself and out-of-range lookups degrade to a stock of zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Non-positive or non-finite layout input (viewport or card footprint)
    InvalidViewport(String),

    /// Inflation round count outside `1..=max`
    InvalidRounds { rounds: u32, max: u32 },

    /// Remapped product id does not fit in a `u64`
    IdOverflow { base_id: u64, replica: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidRounds { rounds, max } => {
                write!(f, "Invalid inflation rounds: {} (expected 1..={})", rounds, max)
            }
            Error::IdOverflow { base_id, replica } => write!(
                f,
                "Product id overflow while inflating id {} (replica {})",
                base_id, replica
            ),
        }
    }
}

impl std::error::Error for Error {}
