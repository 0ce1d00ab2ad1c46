//! JuggleFest Core - Domain model for the juggler/circuit matcher
//!
//! This crate provides the fundamental types shared by the loader and the
//! assignment engine:
//! - Compatibility attributes and the dot-product score function
//! - Juggler and circuit records, keyed by arena ids
//! - The `Problem` container holding a validated input

pub mod attributes;
pub mod domain;
pub mod error;
pub mod score;

pub use attributes::Attributes;
pub use domain::{Circuit, CircuitId, Juggler, JugglerId, Problem};
pub use error::DomainError;
pub use score::match_score;
