//! Errors raised while turning draw facts into figures

use thiserror::Error;

/// Errors that can occur while interpreting a model's draw facts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    /// Shape name with no registered figure kind
    #[error("unknown shape '{name}'")]
    UnknownShape { name: String },

    /// Shape argument that is not a function term
    #[error("expected a shape term, found '{symbol}'")]
    NotAShape { symbol: String },

    /// Attribute required by the shape kind is absent
    #[error("{shape} is missing attribute '{attribute}'")]
    MissingAttribute { shape: String, attribute: String },

    /// Shape argument that is not of the form `name(value)`
    #[error("{shape} has malformed attribute '{argument}', expected name(value)")]
    MalformedAttribute { shape: String, argument: String },

    /// Attribute value that is neither a string nor a number
    #[error("{shape} attribute '{attribute}' has non-scalar value '{value}'")]
    NonScalarAttribute {
        shape: String,
        attribute: String,
        value: String,
    },

    /// Attribute used in geometry holds text instead of a number
    #[error("{shape} attribute '{attribute}' must be a number, found \"{value}\"")]
    NotANumber {
        shape: String,
        attribute: String,
        value: String,
    },

    /// Draw fact whose layer is not an integer
    #[error("draw layer must be a number, found '{layer}' in '{fact}'")]
    InvalidLayer { layer: String, fact: String },
}

impl FigureError {
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape { name: name.into() }
    }

    pub fn missing(shape: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            shape: shape.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether this is a lookup failure (unknown shape or absent attribute)
    /// rather than a value of the wrong type
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownShape { .. } | Self::MissingAttribute { .. }
        )
    }
}
