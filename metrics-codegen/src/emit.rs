//! Writing the generated Go source.
//!
//! The output is a single Go file:
//!
//! ```text
//! package <name>
//!
//! import ( "<bounding box package>" )
//!
//! var UnitsPerEm = 1000
//!
//! var AdvanceWidths = map[int]int{
//!   0x41 :  600, // A
//! }
//! var Bounds = map[int]boundingbox.BB{
//!   0x41 :  boundingbox.NewBB(10,-700,590,0), // A
//! }
//! ```
//!
//! Entries are written as they are produced, so a failure part way through
//! leaves every line written so far in place.

use std::io::{self, Write};

use crate::metrics::BoundingBox;

/// Writes the tables of a generated Go file, one line at a time.
pub struct GoWriter<W> {
    out: W,
}

impl<W: Write> GoWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the package clause, the import and the `UnitsPerEm` constant.
    pub fn header(
        &mut self,
        package: &str,
        import_path: &str,
        units_per_em: u16,
    ) -> io::Result<()> {
        writeln!(self.out, "package {package}")?;
        writeln!(self.out)?;
        writeln!(self.out, "import ( \"{import_path}\" )")?;
        writeln!(self.out)?;
        writeln!(self.out, "var UnitsPerEm = {units_per_em}")?;
        writeln!(self.out)
    }

    pub fn begin_advance_widths(&mut self) -> io::Result<()> {
        writeln!(self.out, "var AdvanceWidths = map[int]int{{")
    }

    pub fn advance_width(&mut self, code_point: u32, advance: i32, name: &str) -> io::Result<()> {
        writeln!(self.out, "  0x{code_point:x} :  {advance}, // {name}")
    }

    pub fn begin_bounds(&mut self) -> io::Result<()> {
        writeln!(self.out, "var Bounds = map[int]boundingbox.BB{{")
    }

    pub fn bounds(&mut self, code_point: u32, bbox: &BoundingBox, name: &str) -> io::Result<()> {
        let BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        } = bbox;
        writeln!(
            self.out,
            "  0x{code_point:x} :  boundingbox.NewBB({x_min},{y_min},{x_max},{y_max}), // {name}"
        )
    }

    pub fn end_table(&mut self) -> io::Result<()> {
        writeln!(self.out, "}}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
