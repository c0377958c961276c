//! Renderers for interpreted models
//!
//! [`render_svg`] turns the draw entries of one model into an SVG document;
//! [`PageWriter`] collects such documents into a single HTML page.

pub mod config;
pub mod page;
pub mod svg;

pub use config::SvgConfig;
pub use page::{PageConfig, PageWriter};
pub use svg::{canvas, render_svg};
