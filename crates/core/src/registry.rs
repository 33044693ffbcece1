//! WordRegistry: the shared collection of live words.
//!
//! One mutex guards the whole map. Every operation is a single short critical
//! section, so callers never hold the lock across a sleep or an await, and a
//! word is never observed half-updated.
//!
//! # Liveness
//!
//! Each entry owns the sending half of a `oneshot` channel. Insertion hands the
//! receiving half to the caller inside a [`WordLease`]. Removal for any reason
//! drops the entry, which closes the channel and wakes whoever holds the lease.
//!
//! Entries are also stamped with a generation number. Per-word operations take
//! a [`WordTicket`] (key + generation), so a holder of an old ticket can never
//! mutate a newer word that happens to reuse the same key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

use crate::error::RegistryError;
use crate::types::{Word, WordKey};

/// Address of one specific live word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordTicket {
    pub key: WordKey,
    pub generation: u64,
}

/// Returned by a successful insert: the word's ticket plus its removal signal.
#[derive(Debug)]
pub struct WordLease {
    ticket: WordTicket,
    removed: oneshot::Receiver<()>,
    closed: bool,
}

impl WordLease {
    pub fn ticket(&self) -> WordTicket {
        self.ticket
    }

    /// Resolves once the word has left the registry (or the registry is gone).
    ///
    /// Returns immediately on every call after the first observed removal.
    pub async fn removed(&mut self) {
        if self.closed {
            return;
        }
        // Nothing is ever sent; the channel only closes.
        let _ = (&mut self.removed).await;
        self.closed = true;
    }

    /// Non-blocking liveness check.
    pub fn is_live(&mut self) -> bool {
        if self.closed {
            return false;
        }
        match self.removed.try_recv() {
            Err(oneshot::error::TryRecvError::Empty) => true,
            _ => {
                // The receiver is spent now; never poll it again.
                self.closed = true;
                false
            }
        }
    }
}

/// Result of one motion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAdvance {
    /// The word moved down and is still live.
    Moved(u16),
    /// The word fell past the grid and was removed.
    Expired(Word),
}

/// Result of applying one typed character to a bound word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOutcome {
    /// Matched; `progress` is the new count of typed characters.
    Advanced { progress: usize },
    /// Matched the last character; the word was removed.
    Completed(Word),
    /// Did not match; nothing changed.
    Missed { expected: char },
}

/// Result of a successful bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// The first character was consumed and the word stays live.
    Bound { ticket: WordTicket, progress: usize },
    /// The word was one character long and is already removed.
    Completed(Word),
}

#[derive(Debug)]
struct Entry {
    word: Word,
    generation: u64,
    _alive: oneshot::Sender<()>,
}

#[derive(Debug, Default)]
struct Inner {
    words: HashMap<WordKey, Entry>,
    next_generation: u64,
}

impl Inner {
    fn live_mut(&mut self, ticket: WordTicket) -> Result<&mut Entry, RegistryError> {
        match self.words.get_mut(&ticket.key) {
            Some(entry) if entry.generation == ticket.generation => Ok(entry),
            _ => Err(RegistryError::StaleReference(ticket.key)),
        }
    }

    fn take(&mut self, key: WordKey) -> Option<Word> {
        self.words.remove(&key).map(|entry| entry.word)
    }
}

/// Cloneable handle to the shared word map.
#[derive(Debug, Clone, Default)]
pub struct WordRegistry {
    inner: Arc<Mutex<Inner>>,
}

impl WordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every critical section leaves the map consistent, so a panic in
        // another holder does not invalidate it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert `word` unless its key is already live.
    pub fn insert(&self, word: Word) -> Result<WordLease, RegistryError> {
        let key = word.key();
        let mut inner = self.lock();
        if inner.words.contains_key(&key) {
            return Err(RegistryError::KeyCollision(key));
        }

        inner.next_generation += 1;
        let generation = inner.next_generation;
        let (alive_tx, alive_rx) = oneshot::channel();
        inner.words.insert(
            key,
            Entry {
                word,
                generation,
                _alive: alive_tx,
            },
        );

        Ok(WordLease {
            ticket: WordTicket { key, generation },
            removed: alive_rx,
            closed: false,
        })
    }

    /// Copy of the live word with this key.
    pub fn get(&self, key: WordKey) -> Option<Word> {
        self.lock().words.get(&key).map(|entry| entry.word.clone())
    }

    pub fn contains(&self, key: WordKey) -> bool {
        self.lock().words.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.lock().words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().words.is_empty()
    }

    /// Atomic read-modify-write of one word.
    pub fn update<R>(
        &self,
        ticket: WordTicket,
        f: impl FnOnce(&mut Word) -> R,
    ) -> Result<R, RegistryError> {
        let mut inner = self.lock();
        let entry = inner.live_mut(ticket)?;
        Ok(f(&mut entry.word))
    }

    /// Move a word down one row; remove it once `row` exceeds `grid_height`.
    pub fn advance_row(
        &self,
        ticket: WordTicket,
        grid_height: u16,
    ) -> Result<RowAdvance, RegistryError> {
        let mut inner = self.lock();
        let entry = inner.live_mut(ticket)?;
        entry.word.row = entry.word.row.saturating_add(1);
        let row = entry.word.row;
        if row <= grid_height {
            return Ok(RowAdvance::Moved(row));
        }
        match inner.take(ticket.key) {
            Some(word) => Ok(RowAdvance::Expired(word)),
            None => Err(RegistryError::StaleReference(ticket.key)),
        }
    }

    /// Bind the untouched live word whose first character is `ch`.
    ///
    /// Binding consumes that first character. Returns `None` when no live word
    /// starts with `ch` or that word already has progress.
    pub fn bind(&self, ch: char) -> Option<BindOutcome> {
        let key = WordKey::new(ch);
        let mut inner = self.lock();
        let entry = inner.words.get_mut(&key)?;
        if entry.word.progress != 0 || entry.word.expected() != Some(ch) {
            return None;
        }

        entry.word.progress = 1;
        if entry.word.is_complete() {
            return inner.take(key).map(BindOutcome::Completed);
        }
        Some(BindOutcome::Bound {
            ticket: WordTicket {
                key,
                generation: entry.generation,
            },
            progress: entry.word.progress,
        })
    }

    /// Apply one typed character to the bound word.
    pub fn type_char(&self, ticket: WordTicket, ch: char) -> Result<TypeOutcome, RegistryError> {
        let mut inner = self.lock();
        let entry = inner.live_mut(ticket)?;
        let word = &mut entry.word;

        match word.expected() {
            Some(expected) if expected == ch => {
                word.progress += 1;
                if !word.is_complete() {
                    return Ok(TypeOutcome::Advanced {
                        progress: word.progress,
                    });
                }
            }
            Some(expected) => return Ok(TypeOutcome::Missed { expected }),
            // Already complete; fall through to removal.
            None => {}
        }

        match inner.take(ticket.key) {
            Some(word) => Ok(TypeOutcome::Completed(word)),
            None => Err(RegistryError::StaleReference(ticket.key)),
        }
    }

    /// Reset a word's progress to 0, leaving it live.
    pub fn reset_progress(&self, ticket: WordTicket) -> Result<(), RegistryError> {
        self.update(ticket, |word| word.progress = 0)
    }

    /// Remove the word addressed by `ticket`.
    pub fn remove(&self, ticket: WordTicket) -> Result<Word, RegistryError> {
        let mut inner = self.lock();
        inner.live_mut(ticket)?;
        inner
            .take(ticket.key)
            .ok_or(RegistryError::StaleReference(ticket.key))
    }

    /// Remove every word, waking all lease holders.
    pub fn clear(&self) -> usize {
        let drained: Vec<Entry> = {
            let mut inner = self.lock();
            inner.words.drain().map(|(_, entry)| entry).collect()
        };
        // Senders drop here, outside the lock.
        drained.len()
    }

    /// Point-in-time copy of every live word, ordered by key.
    pub fn snapshot(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .lock()
            .words
            .values()
            .map(|entry| entry.word.clone())
            .collect();
        words.sort_by_key(Word::key);
        words
    }
}
