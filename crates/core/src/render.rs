//! Frame composition against an abstract draw surface.
//!
//! This module is pure (no I/O). The terminal-backed surface lives in the term
//! crate; tests draw into a framebuffer.

use anyhow::Result;

use crate::registry::WordRegistry;
use crate::types::Word;

/// Something that accepts one character per cell and can present a frame.
///
/// Out-of-bounds `set_cell` writes are the surface's concern: clip or ignore.
pub trait DrawSurface {
    fn clear(&mut self);

    fn set_cell(&mut self, x: u16, y: u16, ch: char);

    /// Present the composed frame. Errors are fatal.
    fn flush(&mut self) -> Result<()>;

    /// Force the next flush to redraw everything (e.g. after a resize).
    fn invalidate(&mut self) {}
}

/// Draw the untyped suffix of every word at `(column + i, row)`.
///
/// Characters before `progress` are never drawn.
pub fn draw_words<S: DrawSurface + ?Sized>(surface: &mut S, words: &[Word]) {
    for word in words {
        for (i, ch) in word.chars().iter().enumerate().skip(word.progress) {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            let Some(x) = word.column.checked_add(offset) else {
                break;
            };
            surface.set_cell(x, word.row, *ch);
        }
    }
}

/// Clear, draw a registry snapshot, flush.
pub fn render_frame<S: DrawSurface + ?Sized>(surface: &mut S, registry: &WordRegistry) -> Result<()> {
    let words = registry.snapshot();
    surface.clear();
    draw_words(surface, &words);
    surface.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Cells {
        cells: HashMap<(u16, u16), char>,
        flushes: usize,
    }

    impl DrawSurface for Cells {
        fn clear(&mut self) {
            self.cells.clear();
        }

        fn set_cell(&mut self, x: u16, y: u16, ch: char) {
            self.cells.insert((x, y), ch);
        }

        fn flush(&mut self) -> Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn draws_untyped_suffix_only() {
        let mut word = Word::new("cat", 10, 1).unwrap();
        word.row = 4;
        word.progress = 1;

        let mut surface = Cells::default();
        draw_words(&mut surface, &[word]);

        assert_eq!(surface.cells.get(&(10, 4)), None);
        assert_eq!(surface.cells.get(&(11, 4)), Some(&'a'));
        assert_eq!(surface.cells.get(&(12, 4)), Some(&'t'));
        assert_eq!(surface.cells.len(), 2);
    }

    #[test]
    fn render_frame_clears_then_flushes() {
        let registry = WordRegistry::new();
        let _lease = registry.insert(Word::new("dog", 0, 1).unwrap()).unwrap();

        let mut surface = Cells::default();
        surface.set_cell(50, 20, '#');
        render_frame(&mut surface, &registry).unwrap();

        assert_eq!(surface.flushes, 1);
        assert_eq!(surface.cells.get(&(50, 20)), None);
        assert_eq!(surface.cells.get(&(0, 0)), Some(&'d'));
    }

    #[test]
    fn columns_near_u16_max_do_not_overflow() {
        let word = Word::new("abc", u16::MAX - 1, 1).unwrap();
        let mut surface = Cells::default();
        draw_words(&mut surface, &[word]);
        assert_eq!(surface.cells.len(), 2);
    }
}
