//! Framebuffer and style types for terminal rendering.

use anyhow::Result;

use crate::core::DrawSurface;

/// Per-cell styling. The grid is monochrome; only weight varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Also a headless [`DrawSurface`]: writes outside the buffer are clipped and
/// `flush` is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).and_then(|i| self.cells.get(i).copied())
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.idx(x, y).and_then(|i| self.cells.get_mut(i)) {
            *slot = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Cells of row `y`; empty when `y` is outside the buffer.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let width = self.width as usize;
        let start = (y as usize) * width;
        self.cells.get(start..start + width).unwrap_or(&[])
    }

    /// Characters of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let row: String = self.row(y).iter().map(|c| c.ch).collect();
        row.trim_end().to_string()
    }

    /// True when no cell holds anything but a blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.ch == ' ')
    }
}

impl DrawSurface for FrameBuffer {
    fn clear(&mut self) {
        self.fill(Cell::default());
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) {
        self.put_char(x, y, ch, CellStyle::default());
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
