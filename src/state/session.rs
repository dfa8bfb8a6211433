//! The single word-building session behind the wheel.
//!
//! `Session` owns the token set, the click history, the measured positions and
//! the random source, and is the only place they change. Every change goes
//! through one of a handful of methods:
//!
//! - `set_input`: new text, new letters, progress reset
//! - `shuffle`: same text, new arrangement, progress reset
//! - `click`: grow or rewind the word
//! - `apply_measurement`: feed back rendered letter positions
//!
//! Each of them emits a [`SessionEvent`] on the session's event bus.
//!
//! # Example
//!
//! ```rust
//! use letter_wheel::state::Session;
//!
//! let mut session = Session::with_seed(42);
//! session.set_input("Cat!");
//! assert_eq!(session.input(), "cat");
//!
//! let first = session.tokens()[0].id();
//! session.click(first);
//! assert_eq!(session.built_word().len(), 1);
//! ```
use std::collections::HashSet;

use egui::Rect;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::measurement::{MeasurementScheduler, MeasurementTicket};
use super::word::{ClickOutcome, WordState};
use crate::event::{EventBus, SessionEvent};
use crate::geometry::{LayoutProvider, PathGeometry, PositionMap, measure_positions, resolve_path};
use crate::placement;
use crate::token::{LetterToken, TokenId};

#[derive(Debug)]
pub struct Session {
    /// Working input, already filtered to `a`..=`z`
    input: String,
    tokens: Vec<LetterToken>,
    word: WordState,
    positions: PositionMap,
    /// Derived from `word` and `positions`, refreshed whenever either changes
    geometry: PathGeometry,
    /// Container rect of the last applied measurement
    measured_container: Option<Rect>,
    rng: StdRng,
    scheduler: MeasurementScheduler,
    event_bus: EventBus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session shuffling with OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A session whose shuffles are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            input: String::new(),
            tokens: Vec::new(),
            word: WordState::new(),
            positions: PositionMap::new(),
            geometry: PathGeometry::default(),
            measured_container: None,
            rng,
            scheduler: MeasurementScheduler::new(),
            event_bus: EventBus::new(),
        }
    }

    /// Replaces the working input and lays out its letters from scratch.
    ///
    /// Every call resets progress, even when the filtered text is unchanged.
    pub fn set_input(&mut self, raw: &str) {
        self.input = placement::filter_letters(raw);
        self.place(false);
    }

    /// Clears the input, which drops every letter and all progress
    pub fn clear(&mut self) {
        self.set_input("");
    }

    /// Re-arranges the current letters with new ids.
    ///
    /// Returns `false` without touching anything when there is no input.
    pub fn shuffle(&mut self) -> bool {
        if !self.can_shuffle() {
            return false;
        }
        self.place(true);
        true
    }

    pub fn can_shuffle(&self) -> bool {
        !self.input.is_empty()
    }

    fn place(&mut self, reshuffle: bool) {
        self.tokens = placement::place(&self.input, &mut self.rng);
        self.word = WordState::new();
        self.positions.clear();
        self.geometry = PathGeometry::default();
        self.measured_container = None;
        // Any measurement still pending refers to the old letters
        self.scheduler.schedule();

        if self.tokens.is_empty() {
            self.event_bus.emit(SessionEvent::LettersCleared);
        } else {
            self.event_bus.emit(SessionEvent::LettersPlaced {
                count: self.tokens.len(),
                reshuffle,
            });
        }
    }

    /// Handles a click on letter `id`: append when unused, rewind when used.
    pub fn click(&mut self, id: TokenId) -> ClickOutcome {
        let (next, outcome) = self.word.click(&self.tokens, id);
        self.word = next;

        match outcome {
            ClickOutcome::Appended => {
                self.refresh_geometry();
                let letter = self.word.letters().last().copied().unwrap_or_default();
                self.event_bus.emit(SessionEvent::LetterAdded {
                    id,
                    letter,
                    word: self.word.word(),
                });
            }
            ClickOutcome::Rewound { discarded } => {
                self.refresh_geometry();
                self.event_bus.emit(SessionEvent::Rewound {
                    id,
                    discarded,
                    word: self.word.word(),
                });
            }
            ClickOutcome::Ignored => {
                self.event_bus.emit(SessionEvent::ClickIgnored { id });
            }
        }
        outcome
    }

    /// Asks for a fresh measurement, e.g. after the wheel was resized
    pub fn request_measurement(&mut self) -> MeasurementTicket {
        self.scheduler.schedule()
    }

    pub fn pending_measurement(&self) -> Option<MeasurementTicket> {
        self.scheduler.pending()
    }

    /// Applies rendered positions if `ticket` is still the latest request.
    ///
    /// Stale tickets are dropped and `false` is returned.
    pub fn apply_measurement(&mut self, ticket: MeasurementTicket, layout: &dyn LayoutProvider) -> bool {
        if !self.scheduler.complete(ticket) {
            self.event_bus.emit(SessionEvent::MeasurementDiscarded {
                generation: ticket.generation(),
            });
            return false;
        }

        self.positions = measure_positions(&self.tokens, layout);
        self.measured_container = layout.container_rect();
        self.refresh_geometry();

        self.event_bus.emit(SessionEvent::LayoutMeasured {
            generation: ticket.generation(),
            known: self.positions.len(),
            total: self.tokens.len(),
        });
        true
    }

    fn refresh_geometry(&mut self) {
        self.geometry = resolve_path(self.word.click_order(), self.tokens.len(), &self.positions);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tokens(&self) -> &[LetterToken] {
        &self.tokens
    }

    pub fn click_order(&self) -> &[TokenId] {
        self.word.click_order()
    }

    pub fn built_word(&self) -> String {
        self.word.word()
    }

    pub fn used_ids(&self) -> HashSet<TokenId> {
        self.word.used_ids()
    }

    pub fn is_used(&self, id: TokenId) -> bool {
        self.word.is_used(id)
    }

    pub fn is_complete(&self) -> bool {
        self.word.is_complete(self.tokens.len())
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    pub fn measured_container(&self) -> Option<Rect> {
        self.measured_container
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_without_input_is_noop() {
        let mut session = Session::with_seed(1);
        assert!(!session.can_shuffle());
        assert!(!session.shuffle());
        assert!(session.tokens().is_empty());
    }

    #[test]
    fn test_placement_schedules_measurement() {
        let mut session = Session::with_seed(1);
        assert!(session.pending_measurement().is_none());
        session.set_input("abc");
        assert!(session.pending_measurement().is_some());
    }

    #[test]
    fn test_click_after_reshuffle_uses_new_ids() {
        let mut session = Session::with_seed(3);
        session.set_input("abc");
        let stale = session.tokens()[0].id();
        session.shuffle();

        assert_eq!(session.click(stale), ClickOutcome::Ignored);
        assert!(session.click_order().is_empty());
    }
}
