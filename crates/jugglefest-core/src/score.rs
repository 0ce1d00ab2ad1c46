//! The match score function.

use crate::domain::{Circuit, Juggler};

/// Compatibility score between a juggler and a circuit.
///
/// The dot product of the two attribute vectors. Pure and deterministic;
/// scores are only ever compared against each other, never against an
/// absolute threshold.
///
/// # Examples
///
/// ```
/// use jugglefest_core::{match_score, Attributes, Circuit, Juggler};
///
/// let juggler = Juggler::new("J0", Attributes::new(7.0, 6.0, 0.0), vec![]);
/// let circuit = Circuit::new("C0", Attributes::new(10.0, 8.0, 10.0));
///
/// assert_eq!(match_score(&juggler, &circuit), 118.0);
/// ```
#[inline]
pub fn match_score(juggler: &Juggler, circuit: &Circuit) -> f64 {
    juggler.attributes().dot(circuit.attributes())
}
