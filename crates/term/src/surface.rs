//! TerminalSurface: the grid-sized draw surface backed by the real terminal.

use anyhow::Result;

use crate::core::DrawSurface;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::renderer::TerminalRenderer;

/// Composes one frame into a grid-sized back buffer, then flushes it through a
/// diffing [`TerminalRenderer`].
pub struct TerminalSurface {
    renderer: TerminalRenderer,
    frame: FrameBuffer,
    style: CellStyle,
}

impl TerminalSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            frame: FrameBuffer::new(width, height),
            style: CellStyle { bold: true },
        }
    }

    /// Raw mode + alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Release the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl DrawSurface for TerminalSurface {
    fn clear(&mut self) {
        self.frame.fill(Cell::default());
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) {
        self.frame.put_char(x, y, ch, self.style);
    }

    fn flush(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.frame)
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}
