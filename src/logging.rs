use std::io;

use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown; the core crates do not log, but
/// stay listed so `-vvv` picks up anything they emit later.
const CRATE_TARGETS: &[&str] = &[
    "climplot",
    "climplot_calendar",
    "climplot_difference",
    "climplot_grid",
    "climplot_io",
    "climplot_plot",
    "climplot_stats",
];

/// Level name for a `-v` count: none → warn, `-v` → info, `-vv` → debug,
/// more → trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Directive string enabling `level` on every workspace target.
fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so JSON on stdout stays
/// clean. `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
