//! Header-only dimension probing.
//!
//! The walker depends on [`DimensionProbe`] only. [`HeaderProbe`] is the production implementation:
//! it sniffs magic bytes against an ordered format registry and reads just enough of the file to
//! learn width and height. Pixel data is never decoded.

use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Dimensions;

/// Outcome of probing one file. Hard failures are the `Err` side of [`DimensionProbe::probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Dimensions(Dimensions),
    /// Content is not a recognized image format. A silent skip, not an error.
    NotAnImage,
}

/// Reads the dimensions of a file. Shared by every probe unit of a scan.
pub trait DimensionProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Result<ProbeOutcome>;
}

/// Formats recognized when no registry is given.
pub const DEFAULT_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Probe backed by the `image` crate's header decoders.
#[derive(Clone, Debug)]
pub struct HeaderProbe {
    formats: Vec<ImageFormat>,
}

impl Default for HeaderProbe {
    fn default() -> Self {
        Self {
            formats: DEFAULT_FORMATS.to_vec(),
        }
    }
}

impl HeaderProbe {
    /// Probe that accepts only `formats`, tried in the given order.
    pub fn with_formats(formats: impl IntoIterator<Item = ImageFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }

    /// Pick the first registered format whose magic bytes match `header`.
    fn recognize(&self, header: &[u8]) -> Option<ImageFormat> {
        let sniffed = image::guess_format(header).ok()?;
        self.formats.iter().copied().find(|f| *f == sniffed)
    }
}

impl DimensionProbe for HeaderProbe {
    fn probe(&self, path: &Path) -> Result<ProbeOutcome> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut reader = BufReader::new(file);
        // fill_buf does not consume, so the decoder still starts at byte 0.
        let header = reader
            .fill_buf()
            .with_context(|| format!("read {}", path.display()))?;
        let Some(format) = self.recognize(header) else {
            return Ok(ProbeOutcome::NotAnImage);
        };
        let (width, height) = ImageReader::with_format(reader, format)
            .into_dimensions()
            .with_context(|| format!("decode {:?} header of {}", format, path.display()))?;
        Ok(ProbeOutcome::Dimensions(Dimensions { width, height }))
    }
}
