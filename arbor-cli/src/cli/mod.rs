//! Command-line interface for computing minimum spanning forests.
//!
//! `arbor run <PATH>` loads an edge list, runs Kruskal's algorithm with the
//! requested load strategy and renders the accepted edges with their total.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, LoadArg, RunCommand, render_summary, run_cli,
};
