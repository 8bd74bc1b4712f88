// Library crate root.
//
// Raster/polygon geometry: binary morphology, hole filling, contour tracing,
// point-in-polygon and area, polygon simplification, and the contour-extraction
// pipeline that chains them. The binary (src/main.rs) is a thin CLI over it.

pub mod im;
pub mod geom;
pub mod morph;
pub mod fill;
pub mod trace;
pub mod poly;
pub mod simplify;
pub mod report;
pub mod contour;
pub mod desc;
pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
pub mod test_helpers;
