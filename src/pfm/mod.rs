//! Reading and writing single-channel PFM (Portable FloatMap) images
//!
//! The normalizer is position-preserving, so the raster row order of the
//! format is irrelevant here: samples round-trip verbatim in file order.

mod error;
mod reader;
mod writer;

// Re-export public API
pub use error::PfmError;
pub use reader::load_pfm;
pub use writer::save_pfm;
