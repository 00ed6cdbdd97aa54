use std::path::PathBuf;

use skrifa::{outline::DrawError, raw::ReadError, GlyphId};
use thiserror::Error;

/// Everything that can stop a generator run.
///
/// None of these are recoverable: the first error ends the run, and any
/// table lines written before it stay written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open font file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output file '{}': {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read face {index} of '{}': {source}", .path.display())]
    ReadFont {
        path: PathBuf,
        index: u32,
        #[source]
        source: ReadError,
    },

    #[error("failed to set char size to {points}pt at {dpi} dpi")]
    CharSize { points: f32, dpi: u32 },

    #[error(
        "failed to load glyph advance for glyph {} (code point 0x{code_point:x})",
        .glyph_id.to_u32()
    )]
    Advance { code_point: u32, glyph_id: GlyphId },

    // DrawError only implements Display, so it can't be a source
    #[error(
        "failed to load glyph {} (code point 0x{code_point:x}): {reason}",
        .glyph_id.to_u32()
    )]
    Outline {
        code_point: u32,
        glyph_id: GlyphId,
        reason: DrawError,
    },

    #[error(
        "failed to get glyph name for glyph {} (code point 0x{code_point:x})",
        .glyph_id.to_u32()
    )]
    GlyphName { code_point: u32, glyph_id: GlyphId },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
