//! graymat library crate.
//!
//! Grayscale image matrices built from colour bitmaps, with normalization,
//! thresholding and CSV export.

pub mod bitmap;
pub mod cli;
pub mod config;
pub mod csv;
pub mod grayscale;
pub mod mat;
pub mod pipeline;
