//! Character grid assembly and row-major text output

use crate::io::configuration::FALLBACK_GLYPH;
use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;
use std::fmt;
use std::io::Write;

/// Grid of glyphs indexed `[column, row]`
///
/// Cells start as the fallback glyph and are overwritten as regions are
/// mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGrid {
    cells: Array2<char>,
}

impl OutputGrid {
    /// Create a grid of `columns` x `rows` fallback glyphs
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: Array2::from_elem((columns, rows), FALLBACK_GLYPH),
        }
    }

    /// Number of columns (characters per line)
    pub fn columns(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows (lines)
    pub fn rows(&self) -> usize {
        self.cells.dim().1
    }

    /// Glyph at `(column, row)`
    pub fn get(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get([column, row]).copied()
    }

    /// Place a glyph at `(column, row)`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the coordinates are outside the
    /// grid
    pub fn set(&mut self, column: usize, row: usize, glyph: char) -> Result<()> {
        let (columns, rows) = self.cells.dim();
        let cell = self.cells.get_mut([column, row]).ok_or_else(|| {
            invalid_parameter(
                "grid_cell",
                &format!("({column}, {row})"),
                &format!("outside the {columns}x{rows} output grid"),
            )
        })?;
        *cell = glyph;
        Ok(())
    }

    /// Rendered lines from top to bottom, without line terminators
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.columns().into_iter().map(|line| line.iter().collect())
    }

    /// Write every row as one line terminated by `\n`
    ///
    /// # Errors
    ///
    /// Returns an output error if writing or flushing fails
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for OutputGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
