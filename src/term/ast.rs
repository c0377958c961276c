//! Symbol types for solver output

use std::fmt;

/// A ground term as printed by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// Integer constant: `42`, `-3`
    Number(i32),
    /// String constant: `"label"`
    String(String),
    /// Function term or constant: `rect(x(0),y(0))`, `visible`
    Function(Function),
    /// Unnamed tuple: `(1,2)`
    Tuple(Vec<Symbol>),
    /// `#inf`
    Infimum,
    /// `#sup`
    Supremum,
}

/// A named term with ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<Symbol>,
    /// Classical negation: `-p(1)`
    pub negative: bool,
}

impl Function {
    pub fn new(name: impl Into<String>, arguments: Vec<Symbol>) -> Self {
        Self {
            name: name.into(),
            arguments,
            negative: false,
        }
    }
}

impl Symbol {
    /// Build a function symbol
    pub fn function(name: impl Into<String>, arguments: Vec<Symbol>) -> Self {
        Symbol::Function(Function::new(name, arguments))
    }

    /// Build a one-argument function, the shape of a named attribute like `cx(5)`
    pub fn attribute(name: impl Into<String>, value: Symbol) -> Self {
        Symbol::function(name, vec![value])
    }

    /// Build a string constant
    pub fn string(value: impl Into<String>) -> Self {
        Symbol::String(value.into())
    }

    /// The function part of this symbol, if it is a (positive) function term
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Symbol::Function(f) if !f.negative => Some(f),
            _ => None,
        }
    }

    /// Integer value, if this is a number
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Symbol::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of a function symbol, if any
    pub fn name(&self) -> Option<&str> {
        self.as_function().map(|f| f.name.as_str())
    }
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Symbol]) -> fmt::Result {
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Number(n) => write!(f, "{}", n),
            Symbol::String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "\"")
            }
            Symbol::Function(func) => write!(f, "{}", func),
            Symbol::Tuple(items) => {
                write!(f, "(")?;
                write_arguments(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Symbol::Infimum => write!(f, "#inf"),
            Symbol::Supremum => write!(f, "#sup"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "(")?;
            write_arguments(f, &self.arguments)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}
