//! Generates static glyph metric tables from a font file.
//!
//! For a list of code points, [`run`] writes a Go source file holding the
//! font's units per em, an advance width table and a bounding box table, in
//! the form expected by the `boundingbox` package of a typesetting library.
//!
//! The individual lookups are also available: open a [`FontFile`], pick a
//! [`Face`], set its size and call [`glyph_metrics`].

mod codepoint;
mod emit;
mod error;
mod extract;
pub mod fixed;
mod font;
mod metrics;
mod pen;

use std::{io::Write, path::Path};

pub use codepoint::{parse_code_point, ParseCodePointError};
pub use emit::GoWriter;
pub use error::Error;
pub use extract::{advance_width, bounds, glyph_metrics, glyph_name, resolve_glyph};
use extract::resolve_glyph_quietly;
pub use font::{Face, FontFile, Hinting};
pub use metrics::{BoundingBox, GlyphMetrics};
pub use pen::BoundsPen;

/// Import path of the Go package that defines `boundingbox.BB`.
pub const DEFAULT_IMPORT_PATH: &str = "github.com/computeportal/wtsuite/pkg/tokens/math/boundingbox";

/// Settings for a generator run.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Import path of the bounding box package.
    pub import_path: String,
    /// Face to read from a font collection.
    pub face_index: u32,
    /// Nominal size, in points, that bounding boxes are measured at.
    pub char_size: f32,
    pub dpi: u32,
    pub hinting: Hinting,
}

impl Default for Options {
    fn default() -> Self {
        // 1000pt at 72 dpi is 1000 pixels per em, which matches the design
        // grid of most fonts.
        Self {
            import_path: DEFAULT_IMPORT_PATH.to_owned(),
            face_index: 0,
            char_size: 1000.0,
            dpi: 72,
            hinting: Hinting::Default,
        }
    }
}

/// Writes the metric tables for `code_points` as Go package `package`.
///
/// Both tables have one entry per code point, in the order given and with
/// duplicates kept. Lines are written as they are computed: on error,
/// everything written before the failing entry (the header included, once the
/// font has been read) is left in `out`.
pub fn run(
    font_path: &Path,
    package: &str,
    code_points: &[u32],
    options: &Options,
    out: impl Write,
) -> Result<(), Error> {
    let font = FontFile::open(font_path)?;
    let mut face = font.face(options.face_index)?;

    let mut writer = GoWriter::new(out);
    writer.header(package, &options.import_path, face.units_per_em())?;

    face.set_hinting(options.hinting);
    face.set_char_size(options.char_size, options.dpi)?;

    writer.begin_advance_widths()?;
    for &code_point in code_points {
        let glyph_id = resolve_glyph(&face, code_point);
        let advance = advance_width(&face, code_point, glyph_id)?;
        let name = glyph_name(&face, code_point, glyph_id)?;
        writer.advance_width(code_point, advance, &name)?;
    }
    writer.end_table()?;

    writer.begin_bounds()?;
    for &code_point in code_points {
        let glyph_id = resolve_glyph_quietly(&face, code_point);
        let bbox = bounds(&face, code_point, glyph_id)?;
        let name = glyph_name(&face, code_point, glyph_id)?;
        writer.bounds(code_point, &bbox, &name)?;
    }
    writer.end_table()?;

    writer.flush()?;
    log::info!(
        "wrote metrics for {} code points from '{}'",
        code_points.len(),
        font.path().display()
    );
    Ok(())
}
