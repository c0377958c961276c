//! ASP Illustrator - render answer sets as SVG
//!
//! A logic program describes a drawing through `draw(Layer, Shape...)` atoms,
//! where each shape is a term such as `circle(cx(5),cy(5),r(2))`. This library
//! interprets those atoms, fits a canvas around the figures, and writes one
//! SVG document per model into an HTML page.
//!
//! # Example
//!
//! ```rust
//! use asp_illustrator::{render_symbols, SvgConfig};
//! use asp_illustrator::term::parse_symbols;
//!
//! let atoms = parse_symbols("draw(0,circle(cx(5),cy(5),r(2)))").unwrap();
//! let svg = render_symbols(&atoms, &SvgConfig::default()).unwrap();
//! assert!(svg.starts_with(r#"<svg viewBox="0 0 7 7">"#));
//! ```

pub mod config;
pub mod error;
pub mod figure;
pub mod interpret;
pub mod renderer;
pub mod solver;
pub mod term;

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

pub use config::{Config, ConfigError, View};
pub use error::ParseError;
pub use figure::{BoundingBox, Figure, FigureError, Point};
pub use interpret::{draw_entries, DrawEntry};
pub use renderer::{render_svg, PageConfig, PageWriter, SvgConfig};
pub use solver::{ClingoSolver, Model, SolveRequest, Solver, SolverError};

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// A draw atom could not be turned into a figure
    #[error("model {model}: {source}")]
    Figure { model: usize, source: FigureError },

    /// Error from the solver session
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),

    /// Error loading configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error writing the page
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render one model to an SVG document
pub fn render_model(model: &Model, config: &SvgConfig) -> Result<String, RenderError> {
    let entries = draw_entries(model).map_err(|source| RenderError::Figure {
        model: model.number,
        source,
    })?;
    Ok(render_svg(&entries, config))
}

/// Render a bare list of atoms to an SVG document
pub fn render_symbols(symbols: &[term::Symbol], config: &SvgConfig) -> Result<String, FigureError> {
    let entries = interpret::entries_from_symbols(symbols)?;
    Ok(render_svg(&entries, config))
}

/// Inputs of one page: what to solve and how many models per view
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub instance: Option<PathBuf>,
    /// Models per view, 0 for all
    pub solutions: usize,
}

/// Solve every configured view and stream the resulting page to `out`
///
/// Each view is its own solver session, run to completion before the next
/// one starts. Returns the number of models rendered.
pub fn render_views<S, W>(
    solver: &S,
    config: &Config,
    request: &PageRequest,
    out: W,
) -> Result<usize, RenderError>
where
    S: Solver,
    W: Write,
{
    let mut page = PageWriter::new(out, config.page.clone());
    page.begin()?;

    for view in &config.views {
        let solve = SolveRequest::new(&config.program)
            .with_instance(request.instance.clone())
            .with_models(request.solutions)
            .with_parts(view.parts.iter().cloned());

        info!(view = view.name.as_str(); "Rendering view");
        let mut rendered = 0;
        for model in solver.solve(&solve)? {
            let svg = render_model(&model?, &config.svg)?;
            page.solution(&svg)?;
            rendered += 1;
        }
        debug!(view = view.name.as_str(), models = rendered; "View complete");
    }

    let total = page.solutions();
    page.finish()?;
    Ok(total)
}
