//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after `invalidate`) is a full redraw; later
//! frames only emit the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Every frame ends with an attribute reset, so encoding always starts from
/// normal weight.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut bold = false;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        bold = print_cells(out, fb.row(y), bold)?;
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Falls back to a full redraw when the sizes differ.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut bold = false;
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_spans(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            bold = print_cells(out, &row[start..end], bold)?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Print `cells`, switching weight only where it changes. Returns the weight
/// left active.
fn print_cells(out: &mut Vec<u8>, cells: &[Cell], mut bold: bool) -> Result<bool> {
    for cell in cells {
        if cell.style.bold != bold {
            bold = cell.style.bold;
            let weight = if bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(bold)
}

/// Half-open column spans where two equally sized rows differ.
fn changed_spans(old: &[Cell], new: &[Cell]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut open = None;
    for (i, (a, b)) in old.iter().zip(new).enumerate() {
        match (a == b, open) {
            (false, None) => open = Some(i),
            (true, Some(start)) => {
                spans.push((start, i));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        spans.push((start, new.len()));
    }
    spans
}
