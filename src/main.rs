//! ASP Illustrator CLI
//!
//! Usage:
//!   asp-illustrator [INSTANCE] [SOLUTIONS]
//!
//! Solves the configured program (default `witness.lp`) once per view and
//! writes an HTML page with one SVG drawing per model to standard output.
//! Set `ASP_ILLUSTRATOR_CONFIG` to a TOML file to change the program, solver
//! or views, and `RUST_LOG` to change the log level.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use asp_illustrator::{
    render_views, ClingoSolver, Config, PageRequest, RenderError, SolverError,
};

#[derive(Parser, Debug)]
#[command(name = "asp-illustrator")]
#[command(about = "Render answer sets of a logic program as SVG drawings")]
struct Cli {
    /// Instance file with extra facts (an empty string means none)
    instance: Option<String>,

    /// Number of solutions per view, 0 for all
    #[arg(default_value_t = 1)]
    solutions: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!(cli:?; "Parsed arguments");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let request = PageRequest {
        instance: cli.instance.filter(|p| !p.is_empty()).map(PathBuf::from),
        solutions: cli.solutions,
    };
    let solver = ClingoSolver::new(&config.solver).with_arguments(config.solver_args.clone());

    match render_views(&solver, &config, &request, io::stdout().lock()) {
        Ok(models) => {
            info!(models; "Completed successfully");
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

fn report(err: &RenderError) {
    eprintln!("Error: {}", err);
    if let RenderError::Solver(SolverError::Output {
        model,
        line,
        errors,
    }) = err
    {
        let name = format!("model {}", model);
        for e in errors {
            eprint!("{}", e.format(line, &name));
        }
    }
}
