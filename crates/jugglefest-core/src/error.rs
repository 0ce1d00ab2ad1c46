//! Error types for the JuggleFest domain model.

use thiserror::Error;

use crate::domain::JugglerId;

/// Errors raised while constructing a [`Problem`](crate::Problem).
#[derive(Debug, Error)]
pub enum DomainError {
    /// A juggler preference refers to a circuit index outside the arena.
    #[error("juggler #{} has a preference for unknown circuit index {circuit_index}", .juggler.index())]
    UnknownCircuit {
        /// The juggler carrying the bad preference.
        juggler: JugglerId,
        /// The out-of-range circuit index.
        circuit_index: usize,
    },
}
