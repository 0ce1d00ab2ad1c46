//! JuggleFest IO - Input loading and report rendering
//!
//! The loader turns the line-oriented input format into a validated
//! [`Problem`](jugglefest_core::Problem) in a single pass, failing fast with
//! the offending 1-based line number. The renderer turns a finished
//! [`Assignment`](jugglefest_solver::Assignment) back into the per-circuit
//! report text.

pub mod loader;
pub mod render;

pub use loader::{load_file, load_str, LoadError};
pub use render::{render, write_report};
