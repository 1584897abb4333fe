//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur while dealing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The shoe has no cards left.
    ///
    /// This is the normal way a simulation run ends.
    #[error("no cards left in the shoe")]
    ExhaustedShoe,
}
