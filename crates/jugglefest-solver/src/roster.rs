//! Per-circuit mutable roster state.

use jugglefest_core::{match_score, CircuitId, JugglerId, Problem};

/// Membership state for every circuit, plus the reverse assignment map.
///
/// The reverse map is what enforces the single-assignment invariant
/// structurally: `insert` asserts the juggler is currently unassigned, so a
/// juggler can never appear on two rosters at once.
#[derive(Clone, Debug)]
pub struct RosterSet {
    /// Per-circuit members in insertion order.
    members: Vec<Vec<JugglerId>>,
    /// Per-juggler current circuit, if any.
    assigned: Vec<Option<CircuitId>>,
}

impl RosterSet {
    /// Builds an all-empty roster set for the problem.
    pub fn new(problem: &Problem) -> Self {
        RosterSet {
            members: vec![Vec::new(); problem.circuits().len()],
            assigned: vec![None; problem.jugglers().len()],
        }
    }

    /// Current roster size of a circuit.
    pub fn len(&self, circuit: CircuitId) -> usize {
        self.members[circuit.index()].len()
    }

    /// True if the circuit has no members.
    pub fn is_empty(&self, circuit: CircuitId) -> bool {
        self.members[circuit.index()].is_empty()
    }

    /// True once the circuit holds `target_capacity` members.
    pub fn is_at_capacity(&self, circuit: CircuitId, target_capacity: usize) -> bool {
        self.len(circuit) >= target_capacity
    }

    /// Current members of a circuit, in insertion order.
    pub fn members(&self, circuit: CircuitId) -> &[JugglerId] {
        &self.members[circuit.index()]
    }

    /// The circuit a juggler currently belongs to, if any.
    pub fn assigned_circuit(&self, juggler: JugglerId) -> Option<CircuitId> {
        self.assigned[juggler.index()]
    }

    /// Adds a juggler to a circuit's roster.
    ///
    /// The juggler must not currently belong to any roster; evict first.
    pub fn insert(&mut self, circuit: CircuitId, juggler: JugglerId) {
        debug_assert!(
            self.assigned[juggler.index()].is_none(),
            "juggler {juggler:?} is already assigned"
        );
        self.members[circuit.index()].push(juggler);
        self.assigned[juggler.index()] = Some(circuit);
    }

    /// Removes a juggler from a circuit's roster. No-op if absent.
    pub fn remove(&mut self, circuit: CircuitId, juggler: JugglerId) {
        let roster = &mut self.members[circuit.index()];
        if let Some(position) = roster.iter().position(|&member| member == juggler) {
            roster.remove(position);
            self.assigned[juggler.index()] = None;
        }
    }

    /// The roster member with the lowest score against this circuit.
    ///
    /// Linear scan with strict less-than, so the first minimum encountered in
    /// roster order wins ties. Returns `None` for an empty roster.
    pub fn weakest_member(&self, circuit: CircuitId, problem: &Problem) -> Option<JugglerId> {
        let target = problem.circuit(circuit);
        let mut weakest: Option<(JugglerId, f64)> = None;
        for &member in &self.members[circuit.index()] {
            let score = match_score(problem.juggler(member), target);
            match weakest {
                Some((_, weakest_score)) if score >= weakest_score => {}
                _ => weakest = Some((member, score)),
            }
        }
        weakest.map(|(member, _)| member)
    }

    /// Consumes the set, yielding per-circuit member lists.
    pub fn into_members(self) -> Vec<Vec<JugglerId>> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jugglefest_core::{Attributes, Circuit, Juggler};

    /// One circuit weighing only hand-eye, jugglers with the given H values.
    fn problem(hand_eyes: &[f64]) -> Problem {
        let circuits = vec![Circuit::new("C0", Attributes::new(1.0, 0.0, 0.0))];
        let jugglers = hand_eyes
            .iter()
            .enumerate()
            .map(|(i, &h)| Juggler::new(format!("J{i}"), Attributes::new(h, 0.0, 0.0), vec![]))
            .collect();
        Problem::new(circuits, jugglers).unwrap()
    }

    #[test]
    fn test_insert_remove_tracks_assignment() {
        let problem = problem(&[1.0, 2.0]);
        let mut rosters = RosterSet::new(&problem);
        let c = CircuitId::new(0);
        let j = JugglerId::new(0);

        assert!(rosters.is_empty(c));
        rosters.insert(c, j);
        assert_eq!(rosters.len(c), 1);
        assert_eq!(rosters.assigned_circuit(j), Some(c));

        rosters.remove(c, j);
        assert!(rosters.is_empty(c));
        assert_eq!(rosters.assigned_circuit(j), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let problem = problem(&[1.0, 2.0]);
        let mut rosters = RosterSet::new(&problem);
        let c = CircuitId::new(0);

        rosters.insert(c, JugglerId::new(0));
        rosters.remove(c, JugglerId::new(1));
        assert_eq!(rosters.members(c), &[JugglerId::new(0)]);
    }

    #[test]
    fn test_capacity_check() {
        let problem = problem(&[1.0, 2.0]);
        let mut rosters = RosterSet::new(&problem);
        let c = CircuitId::new(0);

        assert!(rosters.is_at_capacity(c, 0));
        assert!(!rosters.is_at_capacity(c, 1));
        rosters.insert(c, JugglerId::new(0));
        assert!(rosters.is_at_capacity(c, 1));
    }

    #[test]
    fn test_weakest_member() {
        let problem = problem(&[5.0, 2.0, 8.0]);
        let mut rosters = RosterSet::new(&problem);
        let c = CircuitId::new(0);
        for i in 0..3 {
            rosters.insert(c, JugglerId::new(i));
        }
        assert_eq!(rosters.weakest_member(c, &problem), Some(JugglerId::new(1)));
    }

    #[test]
    fn test_weakest_member_tie_goes_to_first_in_roster_order() {
        let problem = problem(&[3.0, 3.0, 7.0]);
        let mut rosters = RosterSet::new(&problem);
        let c = CircuitId::new(0);
        // Insert in reverse so roster order differs from id order.
        rosters.insert(c, JugglerId::new(2));
        rosters.insert(c, JugglerId::new(1));
        rosters.insert(c, JugglerId::new(0));
        assert_eq!(rosters.weakest_member(c, &problem), Some(JugglerId::new(1)));
    }

    #[test]
    fn test_weakest_member_empty_roster() {
        let problem = problem(&[1.0]);
        let rosters = RosterSet::new(&problem);
        assert_eq!(rosters.weakest_member(CircuitId::new(0), &problem), None);
    }
}
