use std::{
    fs::File,
    path::{Path, PathBuf},
};

use kurbo::Rect;
use memmap2::Mmap;
use skrifa::{
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    outline::{DrawError, DrawSettings, Engine, HintingInstance, HintingOptions, Target},
    raw::{tables::post::Post, FontRef, TableProvider},
    GlyphId, GlyphNames, MetadataProvider, OutlineGlyphCollection,
};

use crate::{pen::BoundsPen, Error};

/// A font file mapped into memory.
///
/// This owns the font data; faces borrow from it, so the file stays mapped
/// exactly as long as some face may still read from it.
pub struct FontFile {
    path: PathBuf,
    data: Mmap,
}

impl FontFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_owned();
        let open_error = |source| Error::Open {
            path: path.clone(),
            source,
        };
        let file = File::open(&path).map_err(open_error)?;
        // SAFETY: the map is read-only and the file is not modified by us;
        // a concurrent writer could change the bytes under the parser, which
        // read-fonts tolerates as malformed data.
        let data = unsafe { Mmap::map(&file) }.map_err(open_error)?;
        log::info!("opened '{}' ({} bytes)", path.display(), data.len());
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the face at `index`; 0 for anything that isn't a collection.
    pub fn face(&self, index: u32) -> Result<Face<'_>, Error> {
        let read_error = |source| Error::ReadFont {
            path: self.path.clone(),
            index,
            source,
        };
        let font = FontRef::from_index(&self.data, index).map_err(read_error)?;
        let units_per_em = font.head().map_err(read_error)?.units_per_em();
        Ok(Face::new(font, units_per_em))
    }
}

/// How outlines are hinted when they are loaded at a size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hinting {
    /// Hint as a scaler does with its default load flags: the font's own
    /// instructions when it has them, the autohinter otherwise.
    #[default]
    Default,
    /// Load outlines unhinted.
    None,
}

/// A single face with the lookups the generator needs.
pub struct Face<'a> {
    units_per_em: u16,
    charmap: Charmap<'a>,
    unscaled_metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
    post: Option<Post<'a>>,
    names: GlyphNames<'a>,
    size: Size,
    hinting: Hinting,
    hinter: Option<HintingInstance>,
}

impl<'a> Face<'a> {
    fn new(font: FontRef<'a>, units_per_em: u16) -> Self {
        Self {
            units_per_em,
            charmap: font.charmap(),
            unscaled_metrics: font.glyph_metrics(Size::unscaled(), LocationRef::default()),
            outlines: font.outline_glyphs(),
            post: font.post().ok(),
            names: GlyphNames::new(&font),
            size: Size::unscaled(),
            hinting: Hinting::default(),
            hinter: None,
        }
    }

    /// Design units per em, straight from the `head` table.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn glyph_count(&self) -> u32 {
        self.unscaled_metrics.glyph_count()
    }

    /// Sets the nominal size used when loading outlines.
    ///
    /// As with a typographic point size, `points` at `dpi` dots per inch
    /// gives `points * dpi / 72` pixels per em.
    pub fn set_char_size(&mut self, points: f32, dpi: u32) -> Result<(), Error> {
        let ppem = points * dpi as f32 / 72.0;
        if !ppem.is_finite() || ppem <= 0.0 {
            return Err(Error::CharSize { points, dpi });
        }
        log::debug!("char size {points}pt at {dpi} dpi, {ppem} ppem");
        self.size = Size::new(ppem);
        self.update_hinter();
        Ok(())
    }

    pub fn set_hinting(&mut self, hinting: Hinting) {
        self.hinting = hinting;
        self.update_hinter();
    }

    fn update_hinter(&mut self) {
        self.hinter = None;
        if self.hinting == Hinting::None || self.size.ppem().is_none() {
            return;
        }
        let options = if self.outlines.require_interpreter() {
            // tricky fonts only render correctly with their own instructions
            HintingOptions {
                engine: Engine::Interpreter,
                target: Target::Mono,
            }
        } else {
            HintingOptions::default()
        };
        match HintingInstance::new(&self.outlines, self.size, LocationRef::default(), options) {
            Ok(hinter) => self.hinter = Some(hinter),
            Err(e) => log::warn!("failed to set up hinting, loading outlines unhinted: {e}"),
        }
    }

    /// Returns true if outlines are hinted at the current size.
    pub fn is_hinted(&self) -> bool {
        self.hinter.is_some()
    }

    /// The current size, in pixels per em, or `None` if unscaled.
    pub fn ppem(&self) -> Option<f32> {
        self.size.ppem()
    }

    /// Maps a code point through the character map.
    ///
    /// Returns `None` for code points the font doesn't cover.
    pub fn glyph_id(&self, code_point: u32) -> Option<GlyphId> {
        self.charmap.map(code_point)
    }

    /// Returns the advance width in design units, unscaled and unhinted.
    pub fn advance_width(&self, glyph_id: GlyphId) -> Option<i32> {
        self.unscaled_metrics
            .advance_width(glyph_id)
            .map(|advance| advance as i32)
    }

    /// Returns the tight bounds of the glyph outline at the current size and
    /// hinting, in the font's y-up coordinate system.
    ///
    /// Glyphs without an outline (spaces, or any glyph of a font that has
    /// no outline tables) have `None` bounds.
    pub fn outline_bounds(&self, glyph_id: GlyphId) -> Result<Option<Rect>, DrawError> {
        if glyph_id.to_u32() >= self.glyph_count() {
            return Err(DrawError::GlyphNotFound(glyph_id));
        }
        let Some(outline) = self.outlines.get(glyph_id) else {
            log::debug!("glyph {} has no outline", glyph_id.to_u32());
            return Ok(None);
        };
        let settings = match self.hinter.as_ref() {
            Some(hinter) => DrawSettings::hinted(hinter, false),
            None => DrawSettings::unhinted(self.size, LocationRef::default()),
        };
        let mut pen = BoundsPen::new();
        outline.draw(settings, &mut pen)?;
        Ok(pen.bounds())
    }

    /// Returns the name of the glyph.
    ///
    /// Names from the `post` table are returned in full; a font without them
    /// falls back to the CFF charset. Returns `None` for glyph ids outside
    /// the font and for fonts that carry no glyph names at all.
    pub fn glyph_name(&self, glyph_id: GlyphId) -> Option<String> {
        if glyph_id.to_u32() >= self.glyph_count() {
            return None;
        }
        let from_post = self.post.as_ref().and_then(|post| {
            glyph_id
                .try_into()
                .ok()
                .and_then(|id| post.glyph_name(id))
                .filter(|name| !name.is_empty())
        });
        if let Some(name) = from_post {
            return Some(name.to_owned());
        }
        let name = self.names.get(glyph_id)?;
        if name.is_synthesized() {
            log::debug!("no name for glyph {}", glyph_id.to_u32());
            return None;
        }
        Some(name.as_str().to_owned())
    }
}
