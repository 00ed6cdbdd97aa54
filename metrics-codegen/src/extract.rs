//! Per-code-point metric lookups.
//!
//! Each lookup maps a metric retrieval failure to an [`Error`] naming the
//! code point it was requested for.

use log::Level;
use skrifa::GlyphId;

use crate::{
    font::Face,
    metrics::{BoundingBox, GlyphMetrics},
    Error,
};

/// Maps a code point to a glyph, falling back to `.notdef` with a warning.
pub fn resolve_glyph(face: &Face, code_point: u32) -> GlyphId {
    resolve_glyph_logged(face, code_point, Level::Warn)
}

/// As [`resolve_glyph`], for a code point that has already been reported.
pub(crate) fn resolve_glyph_quietly(face: &Face, code_point: u32) -> GlyphId {
    resolve_glyph_logged(face, code_point, Level::Debug)
}

fn resolve_glyph_logged(face: &Face, code_point: u32, unmapped_level: Level) -> GlyphId {
    match face.glyph_id(code_point) {
        Some(glyph_id) => {
            log::trace!("code point 0x{code_point:x} -> glyph {}", glyph_id.to_u32());
            glyph_id
        }
        None => {
            log::log!(
                unmapped_level,
                "code point 0x{code_point:x} is not mapped, using .notdef"
            );
            GlyphId::NOTDEF
        }
    }
}

pub fn advance_width(face: &Face, code_point: u32, glyph_id: GlyphId) -> Result<i32, Error> {
    face.advance_width(glyph_id).ok_or(Error::Advance {
        code_point,
        glyph_id,
    })
}

/// Returns the y-down bounds of the glyph at the face's current size.
pub fn bounds(face: &Face, code_point: u32, glyph_id: GlyphId) -> Result<BoundingBox, Error> {
    let rect = face
        .outline_bounds(glyph_id)
        .map_err(|reason| Error::Outline {
            code_point,
            glyph_id,
            reason,
        })?;
    Ok(rect.map(BoundingBox::from_scaled_rect).unwrap_or_default())
}

pub fn glyph_name(face: &Face, code_point: u32, glyph_id: GlyphId) -> Result<String, Error> {
    face.glyph_name(glyph_id).ok_or(Error::GlyphName {
        code_point,
        glyph_id,
    })
}

/// Collects everything the generated tables say about `code_point`.
pub fn glyph_metrics(face: &Face, code_point: u32) -> Result<GlyphMetrics, Error> {
    let glyph_id = resolve_glyph(face, code_point);
    Ok(GlyphMetrics {
        code_point,
        glyph_id,
        glyph_name: glyph_name(face, code_point, glyph_id)?,
        advance_width: advance_width(face, code_point, glyph_id)?,
        bounds: bounds(face, code_point, glyph_id)?,
    })
}
