//! Juggler and circuit records, keyed by arena ids.
//!
//! Identity is an index into the `Problem` arenas rather than structural
//! equality on names: the loader resolves every circuit name to a `CircuitId`
//! exactly once, and the engine only ever compares and looks up ids.

use crate::attributes::Attributes;
use crate::error::DomainError;

/// Index of a circuit in a [`Problem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircuitId(usize);

impl CircuitId {
    /// Creates an id from a raw arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        CircuitId(index)
    }

    /// Returns the raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Index of a juggler in a [`Problem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JugglerId(usize);

impl JugglerId {
    /// Creates an id from a raw arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        JugglerId(index)
    }

    /// Returns the raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A circuit: a capacity-limited group jugglers are assigned to.
///
/// The record itself is immutable; roster membership is tracked by the engine,
/// not stored here.
#[derive(Clone, Debug)]
pub struct Circuit {
    name: String,
    attributes: Attributes,
}

impl Circuit {
    /// Creates a new circuit record.
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Circuit {
            name: name.into(),
            attributes,
        }
    }

    /// The circuit's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The circuit's compatibility vector.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A juggler: a participant with ranked circuit preferences.
///
/// Preferences are stored most-preferred first, in input order. Duplicate
/// entries are kept as-is; the engine's consideration flags handle them.
#[derive(Clone, Debug)]
pub struct Juggler {
    name: String,
    attributes: Attributes,
    preferences: Vec<CircuitId>,
}

impl Juggler {
    /// Creates a new juggler record with its ranked preferences.
    pub fn new(
        name: impl Into<String>,
        attributes: Attributes,
        preferences: Vec<CircuitId>,
    ) -> Self {
        Juggler {
            name: name.into(),
            attributes,
            preferences,
        }
    }

    /// The juggler's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The juggler's compatibility vector.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Ranked circuit preferences, most-preferred first.
    pub fn preferences(&self) -> &[CircuitId] {
        &self.preferences
    }
}

/// A validated matching problem: all circuits and all jugglers.
///
/// Construction checks that every preference resolves to a circuit in the
/// arena; past that point the engine trusts the collections completely.
#[derive(Clone, Debug)]
pub struct Problem {
    circuits: Vec<Circuit>,
    jugglers: Vec<Juggler>,
}

impl Problem {
    /// Creates a problem from its two collections.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCircuit`] if any juggler preference
    /// refers to a circuit index outside the arena.
    pub fn new(circuits: Vec<Circuit>, jugglers: Vec<Juggler>) -> Result<Self, DomainError> {
        for (index, juggler) in jugglers.iter().enumerate() {
            for &preference in juggler.preferences() {
                if preference.index() >= circuits.len() {
                    return Err(DomainError::UnknownCircuit {
                        juggler: JugglerId::new(index),
                        circuit_index: preference.index(),
                    });
                }
            }
        }
        Ok(Problem { circuits, jugglers })
    }

    /// All circuits, in load order.
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// All jugglers, in load order.
    pub fn jugglers(&self) -> &[Juggler] {
        &self.jugglers
    }

    /// Looks up a circuit by id.
    pub fn circuit(&self, id: CircuitId) -> &Circuit {
        &self.circuits[id.index()]
    }

    /// Looks up a juggler by id.
    pub fn juggler(&self, id: JugglerId) -> &Juggler {
        &self.jugglers[id.index()]
    }

    /// Iterates over all circuit ids in load order.
    pub fn circuit_ids(&self) -> impl Iterator<Item = CircuitId> {
        (0..self.circuits.len()).map(CircuitId::new)
    }

    /// Iterates over all juggler ids in load order.
    pub fn juggler_ids(&self) -> impl Iterator<Item = JugglerId> {
        (0..self.jugglers.len()).map(JugglerId::new)
    }

    /// The shared per-circuit target capacity `K`.
    ///
    /// Defined as the floor of juggler count over circuit count, and zero for
    /// an input with no circuits. Computed from immutable counts, so callers
    /// may cache it freely.
    pub fn target_capacity(&self) -> usize {
        if self.circuits.is_empty() {
            0
        } else {
            self.jugglers.len() / self.circuits.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(circuit_count: usize, juggler_count: usize) -> Problem {
        let circuits = (0..circuit_count)
            .map(|i| Circuit::new(format!("C{i}"), Attributes::new(1.0, 1.0, 1.0)))
            .collect();
        let jugglers = (0..juggler_count)
            .map(|i| Juggler::new(format!("J{i}"), Attributes::ZERO, vec![]))
            .collect();
        Problem::new(circuits, jugglers).unwrap()
    }

    #[test]
    fn test_target_capacity_floors() {
        assert_eq!(problem(3, 10).target_capacity(), 3);
        assert_eq!(problem(2, 4).target_capacity(), 2);
        assert_eq!(problem(5, 4).target_capacity(), 0);
    }

    #[test]
    fn test_target_capacity_no_circuits() {
        assert_eq!(problem(0, 7).target_capacity(), 0);
    }

    #[test]
    fn test_rejects_dangling_preference() {
        let circuits = vec![Circuit::new("C0", Attributes::ZERO)];
        let jugglers = vec![Juggler::new(
            "J0",
            Attributes::ZERO,
            vec![CircuitId::new(0), CircuitId::new(1)],
        )];
        let err = Problem::new(circuits, jugglers).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnknownCircuit {
                circuit_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_lookup_by_id() {
        let p = problem(2, 3);
        assert_eq!(p.circuit(CircuitId::new(1)).name(), "C1");
        assert_eq!(p.juggler(JugglerId::new(2)).name(), "J2");
        assert_eq!(p.circuit_ids().count(), 2);
        assert_eq!(p.juggler_ids().count(), 3);
    }
}
