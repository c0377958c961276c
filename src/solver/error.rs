//! Errors at the solver boundary

use std::path::PathBuf;

use thiserror::Error;

use crate::ParseError;

/// Errors that can occur while running the solver or reading its models
#[derive(Debug, Error)]
pub enum SolverError {
    /// Program or instance file could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Solver executable could not be started
    #[error("failed to start solver '{}': {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        source: std::io::Error,
    },

    /// Communication with the running solver failed
    #[error("solver i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A model line that is not a list of symbols
    #[error("unreadable model {model}: {}", format_errors(errors))]
    Output {
        model: usize,
        line: String,
        errors: Vec<ParseError>,
    },

    /// Solver terminated with a failure status
    #[error("solver exited with {}", describe_status(*code))]
    Exit { code: Option<i32> },
}

fn format_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
