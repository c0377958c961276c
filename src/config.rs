//! Run configuration
//!
//! Settings come from an optional TOML file; every key is optional and falls
//! back to the built-in value, which reproduces the classic two-view page for
//! `witness.lp`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{PageConfig, SvgConfig};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "ASP_ILLUSTRATOR_CONFIG";

/// Errors that can occur when loading or parsing a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("View '{0}' grounds no program parts")]
    EmptyView(String),
}

/// One independent solver session rendered into the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct View {
    pub name: String,
    /// Program parts to ground for this view
    pub parts: Vec<String>,
}

impl View {
    pub fn new<S: Into<String>>(name: impl Into<String>, parts: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Complete settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Logic program every view is solved against
    pub program: PathBuf,
    /// Solver executable
    pub solver: PathBuf,
    /// Extra solver arguments
    pub solver_args: Vec<String>,
    pub page: PageConfig,
    pub svg: SvgConfig,
    /// Views in page order
    pub views: Vec<View>,
}

/// TOML structure for deserializing configurations
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    program: Option<PathBuf>,
    solver: Option<PathBuf>,
    solver_args: Option<Vec<String>>,
    page: Option<TomlPage>,
    svg: Option<TomlSvg>,
    views: Option<Vec<View>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPage {
    title: Option<String>,
    style: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSvg {
    namespace: Option<bool>,
    pretty_print: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(program) = parsed.program {
            config.program = program;
        }
        if let Some(solver) = parsed.solver {
            config.solver = solver;
        }
        if let Some(args) = parsed.solver_args {
            config.solver_args = args;
        }
        if let Some(page) = parsed.page {
            if let Some(title) = page.title {
                config.page.title = title;
            }
            if let Some(style) = page.style {
                config.page.style = style;
            }
        }
        if let Some(svg) = parsed.svg {
            if let Some(namespace) = svg.namespace {
                config.svg.namespace = namespace;
            }
            if let Some(pretty) = svg.pretty_print {
                config.svg.pretty_print = pretty;
            }
        }
        if let Some(views) = parsed.views {
            if let Some(empty) = views.iter().find(|v| v.parts.is_empty()) {
                return Err(ConfigError::EmptyView(empty.name.clone()));
            }
            config.views = views;
        }

        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV`], or the defaults when it is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: PathBuf::from("witness.lp"),
            solver: PathBuf::from("clingo"),
            solver_args: vec![],
            page: PageConfig::default(),
            svg: SvgConfig::default(),
            views: vec![
                View::new("unconstrained", ["base", "visualize"]),
                View::new(
                    "constrained",
                    ["base", "constraints", "visualize", "visualize_solution"],
                ),
            ],
        }
    }
}
