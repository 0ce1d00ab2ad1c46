//! JuggleFest Solver - Two-phase juggler-to-circuit assignment
//!
//! The engine runs two phases over a validated [`Problem`](jugglefest_core::Problem):
//! - **Preference placement**: a FIFO pass over all jugglers that honors their
//!   ranked preferences and displaces weaker roster members.
//! - **Best-fit completion**: under-filled circuits pull the best-scoring
//!   jugglers from the exhausted pool until the circuits are full or the pool
//!   is dry.
//!
//! Both phases are single-threaded, synchronous, and deterministic. Unmatched
//! jugglers and under-filled circuits are valid terminal states, never errors.

pub mod engine;
pub mod roster;
pub mod tracker;

pub use engine::{Assignment, AssignmentEngine};
pub use roster::RosterSet;
pub use tracker::PreferenceTracker;
