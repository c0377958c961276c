//! Figure model: drawable shapes built from solver terms
//!
//! Every figure kind knows which attributes its extent depends on, how to
//! compute its bounding box, and how to write itself as an SVG element.

pub mod error;
pub mod geometry;
pub mod shape;

pub use error::FigureError;
pub use geometry::{BoundingBox, Point};
pub use shape::{Attributes, Figure, Geometry, Scalar, ShapeKind};
