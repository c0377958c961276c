//! Driver for the `clingo` executable
//!
//! The selected program is piped to the solver's standard input and its text
//! output is read line by line. Each `Answer: N` line is followed by a line
//! holding that model's atoms; a model is parsed and handed out only when the
//! consumer asks for it.

use std::fs;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

use log::{debug, info, warn};

use crate::term::parse_symbols;

use super::{select_parts, Model, SolveRequest, Solver, SolverError};

/// Exit codes clingo uses for a completed search (unknown, SAT, UNSAT, exhausted)
const SUCCESS_CODES: [i32; 4] = [0, 10, 20, 30];

/// Runs requests through an external clingo process
#[derive(Debug, Clone)]
pub struct ClingoSolver {
    executable: PathBuf,
    arguments: Vec<String>,
}

impl Default for ClingoSolver {
    fn default() -> Self {
        Self::new("clingo")
    }
}

impl ClingoSolver {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            arguments: vec![],
        }
    }

    /// Pass extra command line arguments to every solver run
    pub fn with_arguments<S: Into<String>>(mut self, arguments: impl IntoIterator<Item = S>) -> Self {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    /// The program text the solver will see for `request`
    pub fn program_text(request: &SolveRequest) -> Result<String, SolverError> {
        let mut text = select_parts(&read(&request.program)?, &request.parts);
        if let Some(instance) = &request.instance {
            // Every file starts out in the base part
            text.push('\n');
            text.push_str(&select_parts(&read(instance)?, &request.parts));
        }
        Ok(text)
    }
}

fn read(path: &Path) -> Result<String, SolverError> {
    fs::read_to_string(path).map_err(|source| SolverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl Solver for ClingoSolver {
    type Models = ClingoModels;

    fn solve(&self, request: &SolveRequest) -> Result<ClingoModels, SolverError> {
        let program = Self::program_text(request)?;

        info!(
            program:? = request.program,
            instance:? = request.instance,
            parts:? = request.parts,
            models = request.models;
            "Starting solver session"
        );

        let mut child = Command::new(&self.executable)
            .arg("--outf=0")
            .arg("-n")
            .arg(request.models.to_string())
            .args(&self.arguments)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SolverError::Spawn {
                executable: self.executable.clone(),
                source,
            })?;

        // Input is consumed completely before the search starts
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(program.as_bytes()),
            None => Ok(()),
        };

        let stdout = child.stdout.take();
        let models = ClingoModels {
            child,
            lines: stdout.map(|out| BufReader::new(out).lines()),
            produced: 0,
            finished: false,
            reaped: false,
        };
        // A closed pipe means the solver rejected the input; its exit status says why
        if let Err(e) = write_result {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
            warn!("Solver closed its input early");
        }
        Ok(models)
    }
}

/// Models of one clingo session
///
/// Owns the solver process: dropping the iterator, exhausted or not, stops
/// and reaps it.
#[derive(Debug)]
pub struct ClingoModels {
    child: Child,
    lines: Option<Lines<BufReader<ChildStdout>>>,
    produced: usize,
    /// No more models will be handed out
    finished: bool,
    /// The process has been waited on
    reaped: bool,
}

impl ClingoModels {
    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        self.lines.as_mut().and_then(|lines| lines.next())
    }

    /// Wait for the process and turn a failure status into an error
    fn finish(&mut self) -> Result<(), SolverError> {
        self.finished = true;
        let status = self.child.wait()?;
        self.reaped = true;
        debug!(produced = self.produced, code:? = status.code(); "Solver session ended");
        match status.code() {
            Some(code) if SUCCESS_CODES.contains(&code) => Ok(()),
            code => Err(SolverError::Exit { code }),
        }
    }

    fn read_model(&mut self) -> Result<Model, SolverError> {
        let line = match self.next_line() {
            Some(line) => line?,
            None => String::new(),
        };
        let number = self.produced + 1;
        let symbols = parse_symbols(&line).map_err(|errors| SolverError::Output {
            model: number,
            line: line.clone(),
            errors,
        })?;
        self.produced = number;
        debug!(model = number, atoms = symbols.len(); "Read model");
        Ok(Model::new(number, symbols))
    }
}

impl Iterator for ClingoModels {
    type Item = Result<Model, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.next_line() {
                Some(Ok(line)) if line.starts_with("Answer:") => {
                    let model = self.read_model();
                    if model.is_err() {
                        self.finished = true;
                    }
                    return Some(model);
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                None => return self.finish().err().map(Err),
            }
        }
    }
}

impl Drop for ClingoModels {
    fn drop(&mut self) {
        // A solver blocked on a full pipe only ends once the pipe is closed
        self.lines = None;
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("asp-illustrator-{}-{}", std::process::id(), name));
        fs::write(&path, content).expect("write temp file");
        path
    }

    #[test]
    fn test_program_text_selects_parts_per_file() {
        let program = temp_file(
            "program.lp",
            "a.\n#program visualize.\ndraw(0,x).\n#program constraints.\n:- a.\n",
        );
        let instance = temp_file("instance.lp", "b.\n#program constraints.\n:- b.\n");
        let request = SolveRequest::new(&program)
            .with_instance(Some(instance.clone()))
            .with_parts(["base", "visualize"]);

        let text = ClingoSolver::program_text(&request).expect("program text");
        assert!(text.contains("a."));
        assert!(text.contains("b."));
        assert!(text.contains("draw(0,x)."));
        assert!(!text.contains(":-"));

        let _ = fs::remove_file(program);
        let _ = fs::remove_file(instance);
    }

    #[test]
    fn test_missing_program_is_read_error() {
        let request = SolveRequest::new("/nonexistent/asp-illustrator/program.lp");
        let err = ClingoSolver::program_text(&request).unwrap_err();
        assert!(matches!(err, SolverError::Read { .. }));
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let program = temp_file("spawn.lp", "a.\n");
        let solver = ClingoSolver::new("/nonexistent/asp-illustrator/clingo");
        let err = solver.solve(&SolveRequest::new(&program)).unwrap_err();
        assert!(matches!(err, SolverError::Spawn { .. }));
        let _ = fs::remove_file(program);
    }
}
