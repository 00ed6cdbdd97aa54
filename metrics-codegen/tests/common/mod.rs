//! Builds small TrueType fonts for the integration tests.

#![allow(dead_code)]

use std::io::Write;

use kurbo::{BezPath, Rect, Shape};
use tempfile::NamedTempFile;
use write_fonts::{
    tables::{
        cmap::Cmap,
        glyf::{GlyfLocaBuilder, SimpleGlyph},
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        maxp::Maxp,
        post::Post,
    },
    types::GlyphId,
    FontBuilder,
};

pub const UNITS_PER_EM: u16 = 1000;

/// Mapped by [`font_with_missing_glyph`] to a glyph id past the end of the font.
pub const MISSING_GLYPH_CHAR: char = 'B';

pub const LONG_NAME: &str =
    "uni0041_with_a_glyph_name_that_is_much_longer_than_sixty_three_bytes_in_total";

/// A glyph in the test font.
pub struct TestGlyph {
    pub name: &'static str,
    pub code_point: Option<char>,
    pub advance: u16,
    pub path: BezPath,
}

impl TestGlyph {
    fn x_min(&self) -> i16 {
        if self.path.elements().is_empty() {
            return 0;
        }
        self.path.bounding_box().x0 as i16
    }
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(0.1)
}

/// A quadratic bump from (0, 0) to (200, 0) whose control point is at
/// (100, 200). The curve itself only reaches y = 100.
fn bump() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.quad_to((100.0, 200.0), (200.0, 0.0));
    path.close_path();
    path
}

/// The glyphs of the test font, in glyph id order.
pub fn glyphs() -> Vec<TestGlyph> {
    vec![
        TestGlyph {
            name: ".notdef",
            code_point: None,
            advance: 500,
            path: rect(50.0, 0.0, 450.0, 700.0),
        },
        TestGlyph {
            name: "A",
            code_point: Some('A'),
            advance: 600,
            path: rect(10.0, 0.0, 590.0, 700.0),
        },
        TestGlyph {
            name: "bump",
            code_point: Some('\u{2229}'),
            advance: 250,
            path: bump(),
        },
        TestGlyph {
            name: "space",
            code_point: Some(' '),
            advance: 250,
            path: BezPath::new(),
        },
        TestGlyph {
            name: LONG_NAME,
            code_point: Some('\u{e000}'),
            advance: 100,
            path: rect(0.0, -50.0, 100.0, 100.0),
        },
        TestGlyph {
            name: "mathA",
            code_point: Some('\u{1d434}'),
            advance: 640,
            path: rect(-20.0, 0.0, 700.0, 680.0),
        },
    ]
}

/// Builds the test font. Without a `post` table the font has no glyph names.
pub fn build_font(with_post: bool) -> Vec<u8> {
    build_font_with_mappings(with_post, &[])
}

/// Builds the test font with additional cmap entries, which may point at
/// glyph ids the font doesn't have.
pub fn build_font_with_mappings(with_post: bool, extra_mappings: &[(char, u32)]) -> Vec<u8> {
    let glyphs = glyphs();
    let num_glyphs = glyphs.len() as u16;

    let mut glyf_builder = GlyfLocaBuilder::new();
    for glyph in &glyphs {
        let simple = if glyph.path.elements().is_empty() {
            SimpleGlyph::default()
        } else {
            SimpleGlyph::from_bezpath(&glyph.path).unwrap()
        };
        glyf_builder.add_glyph(&simple).unwrap();
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let mappings = glyphs.iter().enumerate().filter_map(|(gid, glyph)| {
        glyph
            .code_point
            .map(|ch| (ch, GlyphId::new(gid as u32)))
    });
    let extra = extra_mappings
        .iter()
        .map(|(ch, gid)| (*ch, GlyphId::new(*gid)));
    let cmap = Cmap::from_mappings(mappings.chain(extra)).unwrap();

    let hmtx = Hmtx {
        h_metrics: glyphs
            .iter()
            .map(|glyph| LongMetric {
                advance: glyph.advance,
                side_bearing: glyph.x_min(),
            })
            .collect(),
        left_side_bearings: vec![],
    };
    let hhea = Hhea {
        number_of_h_metrics: num_glyphs,
        ..Default::default()
    };
    let maxp = Maxp {
        num_glyphs,
        ..Default::default()
    };
    let head = Head {
        units_per_em: UNITS_PER_EM,
        index_to_loc_format: loca_format as i16,
        ..Default::default()
    };

    let mut builder = FontBuilder::new();
    builder
        .add_table(&head)
        .unwrap()
        .add_table(&hhea)
        .unwrap()
        .add_table(&maxp)
        .unwrap()
        .add_table(&hmtx)
        .unwrap()
        .add_table(&cmap)
        .unwrap()
        .add_table(&glyf)
        .unwrap()
        .add_table(&loca)
        .unwrap();
    if with_post {
        let post = Post::default().with_glyph_names(glyphs.iter().map(|glyph| glyph.name));
        builder.add_table(&post).unwrap();
    }
    builder.build()
}

/// Writes `data` to a temporary file that lives as long as the return value.
pub fn write_temp_font(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

pub fn test_font_file() -> NamedTempFile {
    write_temp_font(&build_font(true))
}

/// The test font, with [`MISSING_GLYPH_CHAR`] mapped to a glyph it doesn't have.
pub fn font_with_missing_glyph() -> NamedTempFile {
    write_temp_font(&build_font_with_mappings(true, &[(MISSING_GLYPH_CHAR, 40)]))
}

/// The header written for `package` with the default import path.
pub fn header(package: &str) -> String {
    format!(
        "package {package}\n\nimport ( \"{}\" )\n\nvar UnitsPerEm = 1000\n\n",
        metrics_codegen::DEFAULT_IMPORT_PATH
    )
}
