//! WordFactory: builds new words for the spawner.
//!
//! Text comes from a configured word list, picked in one of three orders.
//! Columns are uniform in `[0, grid_width)`.

use std::str::FromStr;

use crate::rng::{IndexBag, SimpleRng};
use crate::types::Word;

/// How the next word is picked from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    /// Uniformly random, repeats allowed.
    #[default]
    Random,
    /// List order, wrapping around.
    Cycle,
    /// Every word once per shuffled round.
    Bag,
}

impl FromStr for WordOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "cycle" => Ok(Self::Cycle),
            "bag" => Ok(Self::Bag),
            other => Err(format!("unknown word order: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordFactory {
    words: Vec<String>,
    order: WordOrder,
    cursor: usize,
    bag: IndexBag,
    rng: SimpleRng,
    grid_width: u16,
    velocity: u32,
}

impl WordFactory {
    /// Empty entries are dropped from `words`.
    pub fn new(
        words: impl IntoIterator<Item = impl Into<String>>,
        order: WordOrder,
        grid_width: u16,
        velocity: u32,
        mut rng: SimpleRng,
    ) -> Self {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        let bag = IndexBag::new(words.len(), &mut rng);
        Self {
            words,
            order,
            cursor: 0,
            bag,
            rng,
            grid_width: grid_width.max(1),
            velocity: velocity.max(1),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn next_index(&mut self) -> Option<usize> {
        if self.words.is_empty() {
            return None;
        }
        match self.order {
            WordOrder::Random => Some(self.rng.next_range(self.words.len() as u32) as usize),
            WordOrder::Cycle => {
                let idx = self.cursor % self.words.len();
                self.cursor = idx + 1;
                Some(idx)
            }
            WordOrder::Bag => self.bag.draw(&mut self.rng),
        }
    }

    /// Build the next word at row 0. `None` only for an empty list.
    pub fn next_word(&mut self) -> Option<Word> {
        let idx = self.next_index()?;
        let column = self.rng.next_range(u32::from(self.grid_width)) as u16;
        let text = self.words.get(idx)?;
        Word::new(text, column, self.velocity)
    }
}
