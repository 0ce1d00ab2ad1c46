//! Single-pass loader for the line-oriented input format.
//!
//! Grammar, one record per non-empty line, case-insensitive:
//!
//! ```text
//! C <name> H:<float> E:<float> P:<float>
//! J <name> H:<float> E:<float> P:<float> C<name1>,C<name2>,...
//! ```
//!
//! Fields after the leading tag may appear in any order. Circuits must all
//! precede the jugglers that reference them; there are no forward references.
//! The first malformed line aborts the whole load.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use jugglefest_core::{Attributes, Circuit, CircuitId, DomainError, Juggler, Problem};

/// Errors raised while loading the input file. All fatal; line numbers are
/// 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The line starts with something other than a `C` or `J` record tag.
    #[error("line {line}: unexpected record type {found:?} (expected C or J)")]
    UnexpectedRecord { line: usize, found: char },

    /// A mandatory field never appeared on the line.
    #[error("line {line}: {record} record is missing mandatory field {field}")]
    MissingField {
        line: usize,
        record: &'static str,
        field: &'static str,
    },

    /// An attribute field did not parse as a number.
    #[error("line {line}: invalid number {value:?} in field {field}")]
    InvalidNumber {
        line: usize,
        field: char,
        value: String,
    },

    /// A juggler preference names a circuit that was never defined.
    #[error("line {line}: preference refers to unknown circuit {name:?}")]
    UnknownCircuit { line: usize, name: String },

    /// Two records claimed the same identity key.
    #[error("line {line}: duplicate {record} name {name:?}")]
    DuplicateName {
        line: usize,
        record: &'static str,
        name: String,
    },

    /// The problem collections failed validation after parsing.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The input file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads a problem from a file on disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_str(&contents)
}

/// Loads a problem from input text.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; no partial result is ever
/// produced.
pub fn load_str(input: &str) -> Result<Problem, LoadError> {
    let mut circuits: Vec<Circuit> = Vec::new();
    let mut circuit_ids: HashMap<String, CircuitId> = HashMap::new();
    let mut jugglers: Vec<Juggler> = Vec::new();
    let mut juggler_names: HashSet<String> = HashSet::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim().to_uppercase();
        if text.is_empty() {
            continue;
        }
        match text.chars().next() {
            Some('C') => {
                let circuit = parse_circuit(line, &text)?;
                let id = CircuitId::new(circuits.len());
                if circuit_ids.insert(circuit.name().to_string(), id).is_some() {
                    return Err(LoadError::DuplicateName {
                        line,
                        record: "circuit",
                        name: circuit.name().to_string(),
                    });
                }
                circuits.push(circuit);
            }
            Some('J') => {
                let juggler = parse_juggler(line, &text, &circuit_ids)?;
                if !juggler_names.insert(juggler.name().to_string()) {
                    return Err(LoadError::DuplicateName {
                        line,
                        record: "juggler",
                        name: juggler.name().to_string(),
                    });
                }
                jugglers.push(juggler);
            }
            Some(found) => return Err(LoadError::UnexpectedRecord { line, found }),
            None => unreachable!("blank lines are skipped above"),
        }
    }

    debug!(
        circuits = circuits.len(),
        jugglers = jugglers.len(),
        "input loaded"
    );
    Ok(Problem::new(circuits, jugglers)?)
}

fn parse_circuit(line: usize, text: &str) -> Result<Circuit, LoadError> {
    let mut name: Option<&str> = None;
    let mut hand_eye: Option<f64> = None;
    let mut endurance: Option<f64> = None;
    let mut pizzazz: Option<f64> = None;

    for token in text.split_whitespace() {
        if token == "C" {
            continue;
        }
        match token.chars().next() {
            Some('C') => name = Some(token),
            Some('H') => hand_eye = Some(parse_attribute(line, 'H', token)?),
            Some('E') => endurance = Some(parse_attribute(line, 'E', token)?),
            Some('P') => pizzazz = Some(parse_attribute(line, 'P', token)?),
            _ => {}
        }
    }

    let missing = |field| LoadError::MissingField {
        line,
        record: "circuit",
        field,
    };
    Ok(Circuit::new(
        name.ok_or_else(|| missing("name"))?,
        Attributes::new(
            hand_eye.ok_or_else(|| missing("H"))?,
            endurance.ok_or_else(|| missing("E"))?,
            pizzazz.ok_or_else(|| missing("P"))?,
        ),
    ))
}

fn parse_juggler(
    line: usize,
    text: &str,
    circuit_ids: &HashMap<String, CircuitId>,
) -> Result<Juggler, LoadError> {
    let mut name: Option<&str> = None;
    let mut hand_eye: Option<f64> = None;
    let mut endurance: Option<f64> = None;
    let mut pizzazz: Option<f64> = None;
    let mut preference_list: Option<&str> = None;

    for token in text.split_whitespace() {
        if token == "J" {
            continue;
        }
        match token.chars().next() {
            Some('J') => name = Some(token),
            Some('H') => hand_eye = Some(parse_attribute(line, 'H', token)?),
            Some('E') => endurance = Some(parse_attribute(line, 'E', token)?),
            Some('P') => pizzazz = Some(parse_attribute(line, 'P', token)?),
            Some('C') => preference_list = Some(token),
            _ => {}
        }
    }

    let missing = |field| LoadError::MissingField {
        line,
        record: "juggler",
        field,
    };
    let attributes = Attributes::new(
        hand_eye.ok_or_else(|| missing("H"))?,
        endurance.ok_or_else(|| missing("E"))?,
        pizzazz.ok_or_else(|| missing("P"))?,
    );
    let preferences = preference_list
        .ok_or_else(|| missing("preferences"))?
        .split(',')
        .map(|pref| {
            circuit_ids
                .get(pref)
                .copied()
                .ok_or_else(|| LoadError::UnknownCircuit {
                    line,
                    name: pref.to_string(),
                })
        })
        .collect::<Result<Vec<CircuitId>, LoadError>>()?;

    Ok(Juggler::new(
        name.ok_or_else(|| missing("name"))?,
        attributes,
        preferences,
    ))
}

/// Parses the numeric tail of an `H:`/`E:`/`P:` token.
fn parse_attribute(line: usize, field: char, token: &str) -> Result<f64, LoadError> {
    token
        .get(2..)
        .and_then(|value| value.parse::<f64>().ok())
        .ok_or_else(|| LoadError::InvalidNumber {
            line,
            field,
            value: token.to_string(),
        })
}
