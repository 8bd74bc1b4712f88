pub mod core;
pub use self::core::{BinIm, Im, MaskIm};

pub mod roi;
pub use self::roi::ROI;

pub mod ascii;

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
