//! Model interpretation: from solver atoms to layered figures
//!
//! Only `draw(Layer, Shape...)` atoms with at least two arguments take part.
//! The first argument is the integer layer; every further argument is a shape
//! term placed on that layer. The single-shape form `draw(L, S)` is the one
//! argument case of the same rule.

use log::trace;

use crate::figure::{Figure, FigureError};
use crate::solver::Model;
use crate::term::Symbol;

/// Name of the atoms that carry drawing instructions
pub const DRAW: &str = "draw";

/// A figure and the layer it is painted on; lower layers are painted first
#[derive(Debug, Clone, PartialEq)]
pub struct DrawEntry {
    pub layer: i32,
    pub figure: Figure,
}

impl DrawEntry {
    pub fn new(layer: i32, figure: Figure) -> Self {
        Self { layer, figure }
    }
}

/// Collect the draw entries of a model in paint order
///
/// Entries are ordered by ascending layer; entries on the same layer keep the
/// order of the atoms (and of the shapes within one atom). The first
/// malformed shape aborts the whole model.
pub fn draw_entries(model: &Model) -> Result<Vec<DrawEntry>, FigureError> {
    entries_from_symbols(&model.symbols)
}

/// [`draw_entries`] over a bare list of atoms
pub fn entries_from_symbols(symbols: &[Symbol]) -> Result<Vec<DrawEntry>, FigureError> {
    let mut shapes: Vec<(i32, &Symbol)> = vec![];
    for fact in symbols {
        let draw = match fact.as_function() {
            Some(f) if f.name == DRAW && f.arguments.len() >= 2 => f,
            _ => continue,
        };
        let layer = draw.arguments[0]
            .as_number()
            .ok_or_else(|| FigureError::InvalidLayer {
                layer: draw.arguments[0].to_string(),
                fact: fact.to_string(),
            })?;
        shapes.extend(draw.arguments[1..].iter().map(|shape| (layer, shape)));
    }

    // Stable: equal layers keep fact order
    shapes.sort_by_key(|(layer, _)| *layer);

    shapes
        .into_iter()
        .map(|(layer, shape)| {
            trace!(layer, shape:% = shape; "Interpreting shape");
            Ok(DrawEntry::new(layer, Figure::from_symbol(shape)?))
        })
        .collect()
}
