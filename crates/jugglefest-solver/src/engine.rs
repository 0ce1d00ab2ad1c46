//! The two-phase assignment engine.

use std::collections::VecDeque;
use std::time::Instant;

use tracing::{debug, info, trace};

use jugglefest_config::CompletionOrder;
use jugglefest_core::{match_score, CircuitId, JugglerId, Problem};

use crate::roster::RosterSet;
use crate::tracker::PreferenceTracker;

/// The finished juggler-to-circuit assignment.
#[derive(Clone, Debug)]
pub struct Assignment {
    target_capacity: usize,
    rosters: Vec<Vec<JugglerId>>,
    unassigned: Vec<JugglerId>,
}

impl Assignment {
    /// The shared per-circuit capacity `K` the run used.
    pub fn target_capacity(&self) -> usize {
        self.target_capacity
    }

    /// The final roster of one circuit, in insertion order.
    pub fn roster(&self, circuit: CircuitId) -> &[JugglerId] {
        &self.rosters[circuit.index()]
    }

    /// All rosters, indexed by circuit id.
    pub fn rosters(&self) -> &[Vec<JugglerId>] {
        &self.rosters
    }

    /// Jugglers that ended the run without a circuit.
    ///
    /// Non-empty only when the exhausted pool outlasted the remaining
    /// capacity; a valid terminal state, not a failure.
    pub fn unassigned(&self) -> &[JugglerId] {
        &self.unassigned
    }

    /// Total number of placed jugglers.
    pub fn placed_count(&self) -> usize {
        self.rosters.iter().map(Vec::len).sum()
    }
}

/// Preference-driven placement with displacement, then best-fit completion.
///
/// # Examples
///
/// ```
/// use jugglefest_core::{Attributes, Circuit, CircuitId, Juggler, Problem};
/// use jugglefest_solver::AssignmentEngine;
///
/// let circuits = vec![Circuit::new("C0", Attributes::new(1.0, 1.0, 1.0))];
/// let jugglers = vec![Juggler::new(
///     "J0",
///     Attributes::new(2.0, 2.0, 2.0),
///     vec![CircuitId::new(0)],
/// )];
/// let problem = Problem::new(circuits, jugglers).unwrap();
///
/// let assignment = AssignmentEngine::new(&problem).run();
/// assert_eq!(assignment.roster(CircuitId::new(0)), &[jugglefest_core::JugglerId::new(0)]);
/// ```
pub struct AssignmentEngine<'a> {
    problem: &'a Problem,
    completion_order: CompletionOrder,
}

impl<'a> AssignmentEngine<'a> {
    /// Creates an engine over a validated problem, with the default
    /// completion ordering.
    pub fn new(problem: &'a Problem) -> Self {
        AssignmentEngine {
            problem,
            completion_order: CompletionOrder::default(),
        }
    }

    /// Sets the order in which the completion phase services circuits.
    pub fn with_completion_order(mut self, order: CompletionOrder) -> Self {
        self.completion_order = order;
        self
    }

    /// Runs both phases to completion and returns the final assignment.
    ///
    /// Infallible: unmatched jugglers and under-filled circuits are reflected
    /// in the result, never reported as errors.
    pub fn run(&self) -> Assignment {
        let problem = self.problem;
        let target_capacity = problem.target_capacity();
        let mut tracker = PreferenceTracker::new(problem);
        let mut rosters = RosterSet::new(problem);
        let mut exhausted: Vec<JugglerId> = Vec::new();

        self.place_by_preference(target_capacity, &mut tracker, &mut rosters, &mut exhausted);
        self.complete_best_fit(target_capacity, &mut rosters, &mut exhausted);

        Assignment {
            target_capacity,
            rosters: rosters.into_members(),
            unassigned: exhausted,
        }
    }

    /// Phase 1: drain a FIFO queue of jugglers, trying each one's next
    /// unconsidered preference, displacing weaker members at full circuits.
    fn place_by_preference(
        &self,
        target_capacity: usize,
        tracker: &mut PreferenceTracker,
        rosters: &mut RosterSet,
        exhausted: &mut Vec<JugglerId>,
    ) {
        let problem = self.problem;
        let started = Instant::now();
        let mut queue: VecDeque<JugglerId> = problem.juggler_ids().collect();
        let mut steps: u64 = 0;
        let mut displacements: u64 = 0;

        info!(
            event = "phase_start",
            phase = "preference placement",
            jugglers = problem.jugglers().len(),
            circuits = problem.circuits().len(),
            target_capacity = target_capacity,
        );

        while let Some(juggler) = queue.pop_front() {
            steps += 1;
            let Some(circuit) = tracker.next_unconsidered(juggler) else {
                trace!(
                    event = "juggler_exhausted",
                    juggler = problem.juggler(juggler).name(),
                );
                exhausted.push(juggler);
                continue;
            };

            if !rosters.is_at_capacity(circuit, target_capacity) {
                rosters.insert(circuit, juggler);
            } else {
                // A full roster only ever gives up its weakest member, and
                // only to a strictly better candidate. Ties requeue the
                // candidate instead.
                let candidate_score =
                    match_score(problem.juggler(juggler), problem.circuit(circuit));
                let displaced = rosters.weakest_member(circuit, problem).filter(|&weakest| {
                    candidate_score > match_score(problem.juggler(weakest), problem.circuit(circuit))
                });
                match displaced {
                    Some(weakest) => {
                        rosters.remove(circuit, weakest);
                        rosters.insert(circuit, juggler);
                        queue.push_back(weakest);
                        displacements += 1;
                        debug!(
                            event = "displacement",
                            circuit = problem.circuit(circuit).name(),
                            placed = problem.juggler(juggler).name(),
                            evicted = problem.juggler(weakest).name(),
                        );
                    }
                    None => queue.push_back(juggler),
                }
            }
            // Visited at most once per juggler, whatever the outcome.
            tracker.mark_considered(juggler, circuit);
        }

        info!(
            event = "phase_end",
            phase = "preference placement",
            duration_ms = started.elapsed().as_millis() as u64,
            steps = steps,
            displacements = displacements,
            exhausted = exhausted.len(),
        );
    }

    /// Phase 2: reconcile under-filled circuits against the exhausted pool,
    /// always pulling the pool member that scores highest for the circuit.
    fn complete_best_fit(
        &self,
        target_capacity: usize,
        rosters: &mut RosterSet,
        pool: &mut Vec<JugglerId>,
    ) {
        let problem = self.problem;
        let started = Instant::now();
        let pool_size = pool.len();
        let mut placed: u64 = 0;

        info!(
            event = "phase_start",
            phase = "best-fit completion",
            pool = pool_size,
        );

        for circuit in self.completion_circuit_order() {
            if pool.is_empty() {
                break;
            }
            while !rosters.is_at_capacity(circuit, target_capacity) {
                let Some(best) = best_pool_member(problem, pool, circuit) else {
                    break;
                };
                let juggler = pool.remove(best);
                rosters.insert(circuit, juggler);
                placed += 1;
                debug!(
                    event = "pool_placement",
                    circuit = problem.circuit(circuit).name(),
                    juggler = problem.juggler(juggler).name(),
                );
            }
        }

        info!(
            event = "phase_end",
            phase = "best-fit completion",
            duration_ms = started.elapsed().as_millis() as u64,
            placed = placed,
            unassigned = pool.len(),
        );
    }

    /// The circuit servicing order for the completion phase.
    fn completion_circuit_order(&self) -> Vec<CircuitId> {
        let mut order: Vec<CircuitId> = self.problem.circuit_ids().collect();
        match self.completion_order {
            CompletionOrder::CircuitName => {
                order.sort_by(|&a, &b| {
                    self.problem
                        .circuit(a)
                        .name()
                        .cmp(self.problem.circuit(b).name())
                });
            }
            CompletionOrder::LoadOrder => {}
        }
        order
    }
}

/// Index of the pool member with the highest score for `circuit`.
///
/// Strict greater-than scan, so the first maximum in pool order wins ties.
fn best_pool_member(problem: &Problem, pool: &[JugglerId], circuit: CircuitId) -> Option<usize> {
    let target = problem.circuit(circuit);
    let mut best: Option<(usize, f64)> = None;
    for (index, &juggler) in pool.iter().enumerate() {
        let score = match_score(problem.juggler(juggler), target);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
