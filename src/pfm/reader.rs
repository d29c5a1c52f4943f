//! PFM decoding
//!
//! The header is three text lines: the magic (`Pf` for one channel), the
//! dimensions and a scale factor whose sign encodes the sample byte order.
//! The payload is `width * height` raw f32 samples.

use super::error::PfmError;
use crate::types::{Dimensions, SampleGrid};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a single-channel PFM image
///
/// # Errors
///
/// Fails on I/O errors, on a color (`PF`) or foreign magic line, on a
/// malformed header and on a payload shorter than the header promises.
pub fn load_pfm(path: &Path) -> Result<SampleGrid, PfmError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    match read_header_line(&mut reader)?.as_str() {
        "Pf" => {}
        "PF" => return Err(PfmError::ColorUnsupported),
        other => {
            return Err(PfmError::NotAPfmFile {
                found: other.to_string(),
            });
        }
    }

    let dimensions = parse_dimensions(&read_header_line(&mut reader)?)?;
    if !dimensions.is_valid() {
        return Err(PfmError::EmptyImage);
    }

    let scale_line = read_header_line(&mut reader)?;
    let scale: f32 = scale_line
        .trim()
        .parse()
        .map_err(|_| PfmError::InvalidHeader(format!("bad scale factor {scale_line:?}")))?;
    let little_endian = scale < 0.0;

    let expected = dimensions.sample_count() * 4;
    let mut bytes = Vec::with_capacity(expected);
    reader.read_to_end(&mut bytes)?;
    if bytes.len() < expected {
        return Err(PfmError::TruncatedData {
            expected,
            actual: bytes.len(),
        });
    }

    let samples: Vec<f32> = bytes[..expected]
        .chunks_exact(4)
        .map(|chunk| {
            let raw = [chunk[0], chunk[1], chunk[2], chunk[3]];
            if little_endian {
                f32::from_le_bytes(raw)
            } else {
                f32::from_be_bytes(raw)
            }
        })
        .collect();

    Ok(SampleGrid::new(dimensions, samples))
}

fn read_header_line<R: BufRead>(reader: &mut R) -> Result<String, PfmError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PfmError::InvalidHeader(
            "unexpected end of header".to_string(),
        ));
    }
    Ok(line.trim_end().to_string())
}

fn parse_dimensions(line: &str) -> Result<Dimensions, PfmError> {
    let mut parts = line.split_whitespace();
    let width = parts.next().and_then(|s| s.parse().ok());
    let height = parts.next().and_then(|s| s.parse().ok());

    match (width, height, parts.next()) {
        (Some(width), Some(height), None) => Ok(Dimensions::new(width, height)),
        _ => Err(PfmError::InvalidHeader(format!(
            "bad dimension line {line:?}"
        ))),
    }
}
