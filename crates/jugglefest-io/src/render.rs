//! Report rendering for a finished assignment.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use tracing::debug;

use jugglefest_core::{match_score, Problem};
use jugglefest_solver::Assignment;

/// Renders the per-circuit assignment report.
///
/// One line per circuit, in load order. Each assigned juggler appears with its
/// score against *every* circuit in its original preference list, in
/// preference order — not just the circuit it landed on. Every score is
/// space-terminated and every juggler entry is comma-terminated, with the
/// final separator on the line replaced by the newline, so the comma sits
/// directly before the next juggler's name. Pure; assignment state is never
/// mutated.
pub fn render(problem: &Problem, assignment: &Assignment) -> String {
    let mut out = String::new();
    for circuit_id in problem.circuit_ids() {
        out.push_str(problem.circuit(circuit_id).name());
        out.push(' ');
        for &juggler_id in assignment.roster(circuit_id) {
            let juggler = problem.juggler(juggler_id);
            out.push_str(juggler.name());
            out.push(' ');
            for &preference in juggler.preferences() {
                let preferred = problem.circuit(preference);
                let _ = write!(
                    out,
                    "{}:{} ",
                    preferred.name(),
                    match_score(juggler, preferred)
                );
            }
            out.push(',');
        }
        // The line ends with a separator: ',' after the last entry, or the
        // space after the name when the roster is empty.
        out.pop();
        out.push('\n');
    }
    out
}

/// Writes the rendered report to disk.
pub fn write_report(path: impl AsRef<Path>, report: &str) -> io::Result<()> {
    std::fs::write(path.as_ref(), report)?;
    debug!(path = %path.as_ref().display(), bytes = report.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_str;
    use jugglefest_solver::AssignmentEngine;

    #[test]
    fn test_render_scores_full_preference_list() {
        // K = 1; J0 wins C0 (8 > 2) and J1 falls through to C1. Both lines
        // still list scores for both preferred circuits.
        let input = "\
C C0 H:2 E:0 P:0
C C1 H:0 E:3 P:0
J J0 H:4 E:1 P:0 C0,C1
J J1 H:1 E:2 P:0 C0,C1
";
        let problem = load_str(input).unwrap();
        let assignment = AssignmentEngine::new(&problem).run();
        let report = render(&problem, &assignment);

        assert_eq!(report, "C0 J0 C0:8 C1:3 \nC1 J1 C0:2 C1:6 \n");
    }

    #[test]
    fn test_render_comma_terminates_each_juggler_entry() {
        let input = "\
C C0 H:1 E:0 P:0
J J0 H:5 E:0 P:0 C0
J J1 H:3 E:0 P:0 C0
";
        let problem = load_str(input).unwrap();
        let assignment = AssignmentEngine::new(&problem).run();
        let report = render(&problem, &assignment);

        // The comma sits right before the next juggler's name; the final
        // comma is swapped for the newline.
        assert_eq!(report, "C0 J0 C0:5 ,J1 C0:3 \n");
        assert!(report.contains(" ,J1"));
    }

    #[test]
    fn test_render_under_filled_circuit_is_bare_name() {
        let input = "C C0 H:1 E:1 P:1\nC C1 H:1 E:1 P:1\nJ J0 H:1 E:1 P:1 C0";
        let problem = load_str(input).unwrap();
        let assignment = AssignmentEngine::new(&problem).run();
        let report = render(&problem, &assignment);

        // K = 0: nobody places anywhere.
        assert_eq!(report, "C0\nC1\n");
    }

    #[test]
    fn test_render_fractional_scores() {
        let input = "C C0 H:0.5 E:0 P:0\nJ J0 H:5 E:0 P:0 C0";
        let problem = load_str(input).unwrap();
        let assignment = AssignmentEngine::new(&problem).run();

        assert_eq!(render(&problem, &assignment), "C0 J0 C0:2.5 \n");
    }
}
