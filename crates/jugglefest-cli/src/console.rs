//! Console output for the jugglefest binary.
//!
//! Prints a small banner and installs a `tracing` subscriber with sensible
//! defaults. Override verbosity with `RUST_LOG`, e.g.
//! `RUST_LOG=jugglefest_solver=debug` to see individual displacements.

use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output and tracing.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("jugglefest_cli=info".parse().unwrap())
            .from_env_lossy()
            .add_directive("jugglefest_solver=info".parse().unwrap())
            .add_directive("jugglefest_io=info".parse().unwrap());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

fn print_banner() {
    println!(
        "{} {}",
        "JuggleFest".bright_cyan().bold(),
        format!("v{VERSION}").bright_green()
    );
}
