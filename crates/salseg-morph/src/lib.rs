//! salseg-morph - Morphological operations on binary masks
//!
//! Masks are 8-bit gray rasters where 0 is background and any other value
//! is foreground. Results are written as 0 / 255.
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Binary morphology: erosion, dilation, opening, closing
//! - Iterated variants that repeat an operation a fixed number of times

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

// Re-export commonly used binary morphology functions
pub use binary::{close, dilate, dilate_iter, erode, erode_iter, open, open_iter};
