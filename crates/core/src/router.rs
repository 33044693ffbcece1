//! InputRouter: routes keystrokes to at most one active word.
//!
//! The router is a two-state machine (`Idle` / `Matching`). Its state is owned
//! by the router alone; movers and the spawner never see it. Every step that
//! touches the bound word goes through the registry and re-checks liveness, so
//! a word that expired underneath the router just drops it back to `Idle`.

use tracing::{debug, trace};

use crate::registry::{BindOutcome, TypeOutcome, WordRegistry, WordTicket};
use crate::types::{InputEvent, WordKey};

/// Router state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Idle,
    Matching(WordTicket),
}

/// What a single event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterOutcome {
    /// A new word became active; its first character is consumed.
    Bound { key: WordKey, progress: usize },
    /// The active word accepted one more character.
    Advanced { key: WordKey, progress: usize },
    /// A word was fully typed and removed.
    Completed { key: WordKey, text: String },
    /// The keystroke did not match the active word's next character.
    Missed { key: WordKey, expected: char, got: char },
    /// Idle and no untouched live word starts with this character.
    Unmatched(char),
    /// The active word had already left the registry; keystroke discarded.
    Released(WordKey),
    /// The active word was abandoned; its progress is back to 0.
    Cancelled(WordKey),
    /// Event has no effect on matching.
    Ignored,
    /// The player asked to quit.
    Exit,
}

pub struct InputRouter {
    registry: WordRegistry,
    state: RouterState,
}

impl InputRouter {
    pub fn new(registry: WordRegistry) -> Self {
        Self {
            registry,
            state: RouterState::Idle,
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Key of the active word, if any.
    pub fn active_key(&self) -> Option<WordKey> {
        match self.state {
            RouterState::Idle => None,
            RouterState::Matching(ticket) => Some(ticket.key),
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> RouterOutcome {
        match event {
            InputEvent::Key(ch) => self.handle_key(ch),
            InputEvent::Cancel => self.cancel(),
            InputEvent::Resize { .. } => RouterOutcome::Ignored,
            InputEvent::Exit => RouterOutcome::Exit,
        }
    }

    pub fn handle_key(&mut self, ch: char) -> RouterOutcome {
        match self.state {
            RouterState::Idle => self.bind(ch),
            RouterState::Matching(ticket) => self.feed(ticket, ch),
        }
    }

    fn bind(&mut self, ch: char) -> RouterOutcome {
        match self.registry.bind(ch) {
            Some(BindOutcome::Bound { ticket, progress }) => {
                debug!(key = %ticket.key, "word bound");
                self.state = RouterState::Matching(ticket);
                RouterOutcome::Bound {
                    key: ticket.key,
                    progress,
                }
            }
            Some(BindOutcome::Completed(word)) => {
                debug!(key = %word.key(), "single-character word completed");
                RouterOutcome::Completed {
                    key: word.key(),
                    text: word.text(),
                }
            }
            None => {
                trace!(ch = ?ch, "no word to bind");
                RouterOutcome::Unmatched(ch)
            }
        }
    }

    fn feed(&mut self, ticket: WordTicket, ch: char) -> RouterOutcome {
        match self.registry.type_char(ticket, ch) {
            Ok(TypeOutcome::Advanced { progress }) => RouterOutcome::Advanced {
                key: ticket.key,
                progress,
            },
            Ok(TypeOutcome::Completed(word)) => {
                debug!(key = %ticket.key, "word completed");
                self.state = RouterState::Idle;
                RouterOutcome::Completed {
                    key: ticket.key,
                    text: word.text(),
                }
            }
            Ok(TypeOutcome::Missed { expected }) => RouterOutcome::Missed {
                key: ticket.key,
                expected,
                got: ch,
            },
            Err(err) => {
                debug!(%err, "active word vanished");
                self.state = RouterState::Idle;
                RouterOutcome::Released(ticket.key)
            }
        }
    }

    /// Abandon the active word, resetting its progress.
    pub fn cancel(&mut self) -> RouterOutcome {
        let RouterState::Matching(ticket) = self.state else {
            return RouterOutcome::Ignored;
        };
        self.state = RouterState::Idle;

        match self.registry.reset_progress(ticket) {
            Ok(()) => {
                debug!(key = %ticket.key, "match cancelled");
                RouterOutcome::Cancelled(ticket.key)
            }
            Err(_) => RouterOutcome::Released(ticket.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Word;

    fn setup(texts: &[&str]) -> (WordRegistry, InputRouter, Vec<crate::registry::WordLease>) {
        let registry = WordRegistry::new();
        let leases = texts
            .iter()
            .map(|t| registry.insert(Word::new(t, 10, 1).unwrap()).unwrap())
            .collect();
        let router = InputRouter::new(registry.clone());
        (registry, router, leases)
    }

    #[test]
    fn typing_a_word_binds_advances_and_completes() {
        let (registry, mut router, leases) = setup(&["cat"]);
        let c = WordKey::new('c');

        assert_eq!(
            router.handle_key('c'),
            RouterOutcome::Bound {
                key: c,
                progress: 1
            }
        );
        assert_eq!(router.state(), RouterState::Matching(leases[0].ticket()));

        assert_eq!(
            router.handle_key('a'),
            RouterOutcome::Advanced {
                key: c,
                progress: 2
            }
        );
        assert_eq!(
            router.handle_key('t'),
            RouterOutcome::Completed {
                key: c,
                text: "cat".to_string()
            }
        );
        assert_eq!(router.state(), RouterState::Idle);
        assert!(registry.is_empty());
    }

    #[test]
    fn unmatched_key_stays_idle() {
        let (_registry, mut router, _leases) = setup(&["cat"]);
        assert_eq!(router.handle_key('x'), RouterOutcome::Unmatched('x'));
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn miss_leaves_progress_unchanged() {
        let (registry, mut router, _leases) = setup(&["cat", "dog"]);
        router.handle_key('c');

        // 'd' starts another live word but the router stays on "cat".
        assert_eq!(
            router.handle_key('d'),
            RouterOutcome::Missed {
                key: WordKey::new('c'),
                expected: 'a',
                got: 'd'
            }
        );
        assert_eq!(registry.get(WordKey::new('c')).unwrap().progress, 1);
        assert_eq!(registry.get(WordKey::new('d')).unwrap().progress, 0);
        assert_eq!(router.active_key(), Some(WordKey::new('c')));
    }

    #[test]
    fn cancel_resets_progress_and_keeps_word() {
        let (registry, mut router, _leases) = setup(&["cat"]);
        router.handle_key('c');
        router.handle_key('a');

        assert_eq!(
            router.handle(InputEvent::Cancel),
            RouterOutcome::Cancelled(WordKey::new('c'))
        );
        assert_eq!(router.state(), RouterState::Idle);
        let word = registry.get(WordKey::new('c')).unwrap();
        assert_eq!(word.progress, 0);

        // It can be bound again from scratch.
        assert!(matches!(
            router.handle_key('c'),
            RouterOutcome::Bound { progress: 1, .. }
        ));
    }

    #[test]
    fn cancel_while_idle_is_ignored() {
        let (_registry, mut router, _leases) = setup(&["cat"]);
        assert_eq!(router.cancel(), RouterOutcome::Ignored);
    }

    #[test]
    fn expiry_under_router_degrades_to_idle() {
        let (registry, mut router, leases) = setup(&["cat"]);
        router.handle_key('c');

        // The mover removes the word concurrently.
        registry.remove(leases[0].ticket()).unwrap();

        assert_eq!(
            router.handle_key('a'),
            RouterOutcome::Released(WordKey::new('c'))
        );
        assert_eq!(router.state(), RouterState::Idle);
        // Next keystroke is an ordinary idle lookup.
        assert_eq!(router.handle_key('c'), RouterOutcome::Unmatched('c'));
    }

    #[test]
    fn respawned_key_is_not_inherited() {
        let (registry, mut router, leases) = setup(&["cat"]);
        router.handle_key('c');
        registry.remove(leases[0].ticket()).unwrap();
        let _cow = registry.insert(Word::new("cow", 0, 1).unwrap()).unwrap();

        assert_eq!(
            router.handle_key('o'),
            RouterOutcome::Released(WordKey::new('c'))
        );
        assert_eq!(registry.get(WordKey::new('c')).unwrap().progress, 0);
    }

    #[test]
    fn cancel_after_expiry_reports_release() {
        let (registry, mut router, leases) = setup(&["cat"]);
        router.handle_key('c');
        registry.remove(leases[0].ticket()).unwrap();

        assert_eq!(router.cancel(), RouterOutcome::Released(WordKey::new('c')));
        assert_eq!(router.state(), RouterState::Idle);
    }

    #[test]
    fn single_character_word_completes_on_bind() {
        let (registry, mut router, _leases) = setup(&["a"]);
        assert_eq!(
            router.handle_key('a'),
            RouterOutcome::Completed {
                key: WordKey::new('a'),
                text: "a".to_string()
            }
        );
        assert_eq!(router.state(), RouterState::Idle);
        assert!(registry.is_empty());
    }

    #[test]
    fn resize_and_exit_do_not_touch_state() {
        let (_registry, mut router, _leases) = setup(&["cat"]);
        router.handle_key('c');
        assert_eq!(
            router.handle(InputEvent::Resize {
                width: 80,
                height: 24
            }),
            RouterOutcome::Ignored
        );
        assert_eq!(router.handle(InputEvent::Exit), RouterOutcome::Exit);
        assert_eq!(router.active_key(), Some(WordKey::new('c')));
    }
}
