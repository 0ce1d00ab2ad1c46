//! Full pipeline tests: input text through loader, engine, and renderer.

use jugglefest_config::{AssignConfig, CompletionOrder};
use jugglefest_io::{load_str, render};
use jugglefest_solver::AssignmentEngine;

const SAMPLE: &str = "\
C C0 H:7 E:7 P:10
C C1 H:2 E:1 P:1
C C2 H:7 E:6 P:4
J J0 H:3 E:9 P:2 C2,C0,C1
J J1 H:4 E:3 P:7 C0,C2,C1
J J2 H:4 E:0 P:10 C0,C2,C1
J J3 H:10 E:3 P:8 C2,C0,C1
J J4 H:6 E:10 P:1 C0,C2,C1
J J5 H:6 E:7 P:7 C0,C2,C1
J J6 H:8 E:6 P:9 C2,C1,C0
J J7 H:7 E:1 P:5 C2,C1,C0
J J8 H:8 E:2 P:3 C1,C0,C2
J J9 H:10 E:2 P:1 C1,C2,C0
J J10 H:6 E:4 P:5 C0,C2,C1
J J11 H:8 E:4 P:7 C0,C1,C2
";

// Every score is space-terminated, the comma sits directly before the next
// juggler's name, and the line's final separator becomes the newline.
const EXPECTED: &str = concat!(
    "C0 J2 C0:128 C2:68 C1:18 ,J4 C0:122 C2:106 C1:23 ,J5 C0:161 C2:112 C1:26 ,J11 C0:154 C1:27 C2:108 \n",
    "C1 J8 C1:21 C0:100 C2:80 ,J9 C1:23 C2:86 C0:94 ,J1 C0:119 C2:74 C1:18 ,J7 C2:75 C1:20 C0:106 \n",
    "C2 J0 C2:83 C0:104 C1:17 ,J3 C2:120 C0:171 C1:31 ,J6 C2:128 C1:31 C0:188 ,J10 C0:120 C2:86 C1:21 \n",
);

#[test]
fn test_sample_input_produces_expected_report() {
    let problem = load_str(SAMPLE).unwrap();
    let assignment = AssignmentEngine::new(&problem).run();

    assert_eq!(assignment.target_capacity(), 4);
    assert!(assignment.unassigned().is_empty());
    assert_eq!(render(&problem, &assignment), EXPECTED);
}

#[test]
fn test_pipeline_is_deterministic() {
    let config = AssignConfig::default();

    let run = || {
        let problem = load_str(SAMPLE).unwrap();
        let assignment = AssignmentEngine::new(&problem)
            .with_completion_order(config.completion_order)
            .run();
        render(&problem, &assignment)
    };

    assert_eq!(run(), run());
}

#[test]
fn test_pipeline_with_exhausted_pool() {
    // Four jugglers, two circuits, K = 2. J3 only ranks the circuit everyone
    // stronger wants, exhausts, and is completed onto C1.
    let input = "\
C C0 H:10 E:0 P:0
C C1 H:0 E:10 P:0
J J0 H:9 E:1 P:0 C0
J J1 H:8 E:1 P:0 C0
J J2 H:1 E:9 P:0 C1
J J3 H:2 E:2 P:0 C0
";
    let problem = load_str(input).unwrap();
    let assignment = AssignmentEngine::new(&problem)
        .with_completion_order(CompletionOrder::CircuitName)
        .run();
    let report = render(&problem, &assignment);

    assert_eq!(
        report,
        "C0 J0 C0:90 ,J1 C0:80 \nC1 J2 C1:90 ,J3 C0:20 \n"
    );
}
