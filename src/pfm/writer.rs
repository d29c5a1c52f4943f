//! PFM encoding

use super::error::PfmError;
use crate::types::SampleGrid;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `grid` as a little-endian single-channel PFM image
///
/// # Errors
///
/// Fails on I/O errors only; any in-memory grid is encodable.
pub fn save_pfm(path: &Path, grid: &SampleGrid) -> Result<(), PfmError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let dimensions = grid.dimensions();
    writeln!(writer, "Pf")?;
    writeln!(
        writer,
        "{width} {height}",
        width = dimensions.width,
        height = dimensions.height
    )?;
    // Negative scale marks little-endian samples
    writeln!(writer, "-1.0")?;

    for &value in grid.samples() {
        writer.write_all(&value.to_le_bytes())?;
    }
    writer.flush()?;

    Ok(())
}
