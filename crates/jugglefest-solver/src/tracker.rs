//! Per-juggler preference consideration state.

use jugglefest_core::{CircuitId, JugglerId, Problem};

/// One entry in a juggler's ranked preference sequence.
#[derive(Clone, Debug)]
struct PreferenceEntry {
    circuit: CircuitId,
    considered: bool,
}

/// Tracks which of its ranked preferences each juggler has already considered.
///
/// Flags are monotonic: once a preference is marked considered it is never
/// cleared, even if the circuit's roster changes later. A juggler whose every
/// entry is considered is "exhausted" and leaves the preference-placement
/// phase for good.
#[derive(Clone, Debug)]
pub struct PreferenceTracker {
    /// Indexed by juggler id; entries mirror the juggler's preference order.
    entries: Vec<Vec<PreferenceEntry>>,
}

impl PreferenceTracker {
    /// Builds a tracker with every preference unconsidered.
    pub fn new(problem: &Problem) -> Self {
        let entries = problem
            .jugglers()
            .iter()
            .map(|juggler| {
                juggler
                    .preferences()
                    .iter()
                    .map(|&circuit| PreferenceEntry {
                        circuit,
                        considered: false,
                    })
                    .collect()
            })
            .collect();
        PreferenceTracker { entries }
    }

    /// Returns the most-preferred circuit the juggler has not yet considered,
    /// or `None` if the juggler is exhausted.
    pub fn next_unconsidered(&self, juggler: JugglerId) -> Option<CircuitId> {
        self.entries[juggler.index()]
            .iter()
            .find(|entry| !entry.considered)
            .map(|entry| entry.circuit)
    }

    /// Marks the juggler's first unconsidered entry for `circuit` as
    /// considered.
    ///
    /// A no-op when no such entry exists; displaced jugglers get re-marked
    /// for the circuit they were just evicted from, and that entry is already
    /// flagged. Marking the first *unconsidered* match keeps duplicate
    /// preference entries from being revisited forever.
    pub fn mark_considered(&mut self, juggler: JugglerId, circuit: CircuitId) {
        if let Some(entry) = self.entries[juggler.index()]
            .iter_mut()
            .find(|entry| entry.circuit == circuit && !entry.considered)
        {
            entry.considered = true;
        }
    }

    /// True once every preference entry has been considered.
    pub fn is_exhausted(&self, juggler: JugglerId) -> bool {
        self.entries[juggler.index()]
            .iter()
            .all(|entry| entry.considered)
    }

    /// Number of entries already considered, for progress reporting.
    pub fn considered_count(&self, juggler: JugglerId) -> usize {
        self.entries[juggler.index()]
            .iter()
            .filter(|entry| entry.considered)
            .count()
    }
}
