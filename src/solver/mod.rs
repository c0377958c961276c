//! Solver boundary: requests, models and the drivers that produce them
//!
//! A [`Solver`] turns one [`SolveRequest`] into a lazy sequence of models.
//! Each call to [`Solver::solve`] is an independent session; nothing is shared
//! between sessions.

pub mod clingo;
pub mod error;
pub mod parts;

use std::path::PathBuf;

use crate::term::Symbol;

pub use clingo::{ClingoModels, ClingoSolver};
pub use error::SolverError;
pub use parts::select_parts;

/// What to solve: a program, an optional fact overlay, the parts to ground
/// and how many models to produce
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRequest {
    pub program: PathBuf,
    pub instance: Option<PathBuf>,
    /// Maximum number of models, 0 for all
    pub models: usize,
    pub parts: Vec<String>,
}

impl SolveRequest {
    /// Request one model of the `base` part of `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            instance: None,
            models: 1,
            parts: vec!["base".to_string()],
        }
    }

    /// Load an instance file after the program
    pub fn with_instance(mut self, instance: Option<PathBuf>) -> Self {
        self.instance = instance;
        self
    }

    /// Set the number of models to produce
    pub fn with_models(mut self, models: usize) -> Self {
        self.models = models;
        self
    }

    /// Set the program parts to ground
    pub fn with_parts<S: Into<String>>(mut self, parts: impl IntoIterator<Item = S>) -> Self {
        self.parts = parts.into_iter().map(Into::into).collect();
        self
    }
}

/// One solution: the atoms the solver reported for it
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// 1-based position in the solver's discovery order
    pub number: usize,
    pub symbols: Vec<Symbol>,
}

impl Model {
    pub fn new(number: usize, symbols: Vec<Symbol>) -> Self {
        Self { number, symbols }
    }
}

/// Something that can run a [`SolveRequest`]
pub trait Solver {
    /// Lazy model sequence for one session; dropping it ends the session
    type Models: Iterator<Item = Result<Model, SolverError>>;

    fn solve(&self, request: &SolveRequest) -> Result<Self::Models, SolverError>;
}
