//! CLI layer for the `explore` binary: argument parsing, dispatch and
//! terminal output.

pub mod args;
pub mod entrypoint;
pub mod output;

pub use args::{Args, Command, OutputFormat};
pub use entrypoint::run;
