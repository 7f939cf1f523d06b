use std::collections::VecDeque;

use crate::model::{RememberedWords, WordEntry};
use crate::shuffle::Shuffler;

/// Where the active list currently is in its word rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No word to show: the list is empty or fully remembered.
    #[default]
    Empty,
    /// A word is shown with its definition hidden.
    ShowingWord,
    /// A word is shown together with its definition.
    ShowingDefinition,
}

//
// ─── ROUND STATE ───────────────────────────────────────────────────────────────
//

/// Rotation state of one active list.
///
/// Words are presented in randomized rounds: each round holds every word not
/// yet remembered, in a fresh permutation, and a new round is built only when
/// the previous one runs dry. Remembered words are purged from the pending
/// round lazily, the next time a word is requested.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    words: Vec<WordEntry>,
    remembered: RememberedWords,
    queue: VecDeque<WordEntry>,
    current: Option<WordEntry>,
    revealed: bool,
    rounds: usize,
}

impl RoundState {
    /// Activates a list: builds the first round and shows its first word.
    #[must_use]
    pub fn start(
        words: Vec<WordEntry>,
        remembered: RememberedWords,
        shuffler: &mut Shuffler,
    ) -> Self {
        let mut state = Self {
            words,
            remembered,
            queue: VecDeque::new(),
            current: None,
            revealed: false,
            rounds: 0,
        };
        state.advance(shuffler);
        state
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn remembered(&self) -> &RememberedWords {
        &self.remembered
    }

    #[must_use]
    pub fn current(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Entries still pending in the current round, in presentation order.
    pub fn queued(&self) -> impl Iterator<Item = &WordEntry> {
        self.queue.iter()
    }

    /// Number of non-empty rounds built so far.
    #[must_use]
    pub fn rounds_started(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match (&self.current, self.revealed) {
            (None, _) => RoundPhase::Empty,
            (Some(_), false) => RoundPhase::ShowingWord,
            (Some(_), true) => RoundPhase::ShowingDefinition,
        }
    }

    /// Moves to the next word, starting a new round when the current one is
    /// exhausted. Returns the new current word, or `None` once every word is
    /// remembered.
    pub fn advance(&mut self, shuffler: &mut Shuffler) -> Option<&WordEntry> {
        let remembered = &self.remembered;
        self.queue.retain(|entry| !remembered.contains(entry.word()));

        if self.queue.is_empty() {
            let mut round = self.unremembered();
            shuffler.shuffle(&mut round);
            if !round.is_empty() {
                self.rounds += 1;
            }
            self.queue = round.into();
        }

        self.current = self.queue.pop_front();
        self.revealed = false;
        self.current.as_ref()
    }

    /// Shows the definition of the current word.
    ///
    /// Returns `false` (and changes nothing) unless a word is shown with its
    /// definition still hidden.
    pub fn reveal(&mut self) -> bool {
        if self.phase() != RoundPhase::ShowingWord {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Moves on without remembering the current word; it stays in the pool
    /// for a later round. Only allowed once the definition is shown.
    pub fn skip(&mut self, shuffler: &mut Shuffler) -> bool {
        if self.phase() != RoundPhase::ShowingDefinition {
            return false;
        }
        self.advance(shuffler);
        true
    }

    /// Marks the current word as remembered without moving on.
    ///
    /// Returns the marked word, or `None` if nothing is shown.
    pub fn mark_current_remembered(&mut self) -> Option<String> {
        let word = self.current.as_ref()?.word().to_owned();
        self.remembered.insert(word.clone());
        Some(word)
    }

    /// Replaces the remembered set, discards the pending round and shows the
    /// first word of a fresh one.
    pub fn restart(&mut self, remembered: RememberedWords, shuffler: &mut Shuffler) {
        self.remembered = remembered;
        self.queue.clear();
        self.advance(shuffler);
    }

    fn unremembered(&self) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|entry| !self.remembered.contains(entry.word()))
            .cloned()
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(word: &str, definition: &str) -> WordEntry {
        WordEntry::new(word, definition).unwrap()
    }

    fn words(n: usize) -> Vec<WordEntry> {
        (0..n)
            .map(|i| entry(&format!("w{i}"), &format!("d{i}")))
            .collect()
    }

    fn current_word(state: &RoundState) -> Option<String> {
        state.current().map(|e| e.word().to_owned())
    }

    #[test]
    fn start_shows_first_word_of_round() {
        let mut shuffler = Shuffler::identity();
        let state = RoundState::start(words(3), RememberedWords::new(), &mut shuffler);

        assert_eq!(current_word(&state).as_deref(), Some("w0"));
        assert_eq!(state.phase(), RoundPhase::ShowingWord);
        assert_eq!(state.queued().count(), 2);
    }

    #[test]
    fn start_skips_remembered_words() {
        let mut shuffler = Shuffler::identity();
        let remembered = RememberedWords::from_words(["w0"]);
        let state = RoundState::start(words(3), remembered, &mut shuffler);

        assert_eq!(current_word(&state).as_deref(), Some("w1"));
        assert!(state.queued().all(|e| e.word() != "w0"));
    }

    #[test]
    fn empty_list_is_empty_phase() {
        let mut shuffler = Shuffler::thread();
        let mut state = RoundState::start(Vec::new(), RememberedWords::new(), &mut shuffler);

        assert_eq!(state.phase(), RoundPhase::Empty);
        assert!(state.advance(&mut shuffler).is_none());
        assert!(!state.reveal());
        assert!(!state.skip(&mut shuffler));
        assert_eq!(state.mark_current_remembered(), None);
    }

    #[test]
    fn fully_remembered_list_starts_empty() {
        let mut shuffler = Shuffler::thread();
        let remembered = RememberedWords::from_words(["w0", "w1"]);
        let state = RoundState::start(words(2), remembered, &mut shuffler);

        assert_eq!(state.current(), None);
        assert_eq!(state.phase(), RoundPhase::Empty);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut shuffler = Shuffler::seeded(3);
        let mut state = RoundState::start(words(4), RememberedWords::new(), &mut shuffler);
        let before = current_word(&state);

        assert!(state.reveal());
        assert!(!state.reveal());

        assert!(state.is_revealed());
        assert_eq!(state.phase(), RoundPhase::ShowingDefinition);
        assert_eq!(current_word(&state), before);
    }

    #[test]
    fn advance_hides_definition() {
        let mut shuffler = Shuffler::seeded(5);
        let mut state = RoundState::start(words(4), RememberedWords::new(), &mut shuffler);
        state.reveal();

        state.advance(&mut shuffler);

        assert!(!state.is_revealed());
        assert_eq!(state.phase(), RoundPhase::ShowingWord);
    }

    #[test]
    fn skip_requires_revealed_definition() {
        let mut shuffler = Shuffler::identity();
        let mut state = RoundState::start(words(3), RememberedWords::new(), &mut shuffler);

        assert!(!state.skip(&mut shuffler));
        assert_eq!(current_word(&state).as_deref(), Some("w0"));

        state.reveal();
        assert!(state.skip(&mut shuffler));
        assert_eq!(current_word(&state).as_deref(), Some("w1"));
    }

    #[test]
    fn skip_does_not_remember_word() {
        let mut shuffler = Shuffler::seeded(11);
        let mut state = RoundState::start(words(2), RememberedWords::new(), &mut shuffler);
        let skipped = current_word(&state).unwrap();

        state.reveal();
        state.skip(&mut shuffler);

        assert!(!state.remembered().contains(&skipped));
        assert_ne!(current_word(&state).unwrap(), skipped);
    }

    #[test]
    fn marking_does_not_advance() {
        let mut shuffler = Shuffler::identity();
        let mut state = RoundState::start(words(3), RememberedWords::new(), &mut shuffler);

        let marked = state.mark_current_remembered();

        assert_eq!(marked.as_deref(), Some("w0"));
        assert_eq!(current_word(&state).as_deref(), Some("w0"));
        assert!(state.remembered().contains("w0"));
    }

    #[test]
    fn marked_words_are_purged_from_pending_round() {
        let mut shuffler = Shuffler::identity();
        let list = vec![entry("cat", "猫"), entry("dog", "狗"), entry("cat", "猫")];
        let mut state = RoundState::start(list, RememberedWords::new(), &mut shuffler);
        assert_eq!(state.queued().count(), 2);

        // the second "cat" row is still pending in this round
        state.mark_current_remembered();
        state.advance(&mut shuffler);

        assert_eq!(current_word(&state).as_deref(), Some("dog"));
        assert_eq!(state.queued().count(), 0);
        state.advance(&mut shuffler);
        assert_eq!(current_word(&state).as_deref(), Some("dog"));
    }

    #[test]
    fn remembered_words_never_shown_again() {
        let mut shuffler = Shuffler::seeded(42);
        let mut state = RoundState::start(words(6), RememberedWords::new(), &mut shuffler);
        let mut marked = HashSet::new();

        for step in 0..60 {
            let word = current_word(&state).unwrap_or_default();
            assert!(!marked.contains(&word), "{word} shown after being remembered");
            if step % 7 == 0 {
                if let Some(word) = state.mark_current_remembered() {
                    marked.insert(word);
                }
            }
            if state.advance(&mut shuffler).is_none() {
                break;
            }
        }
        assert!(state.queued().all(|e| !marked.contains(e.word())));
    }

    #[test]
    fn marking_everything_empties_the_rotation() {
        let mut shuffler = Shuffler::seeded(9);
        let mut state = RoundState::start(words(4), RememberedWords::new(), &mut shuffler);

        while state.current().is_some() {
            state.mark_current_remembered();
            state.advance(&mut shuffler);
        }

        assert_eq!(state.remembered().len(), 4);
        assert_eq!(state.phase(), RoundPhase::Empty);
        assert!(state.advance(&mut shuffler).is_none());
        assert_eq!(state.phase(), RoundPhase::Empty);
    }

    #[test]
    fn each_round_presents_every_word_once() {
        let mut shuffler = Shuffler::seeded(2024);
        let mut state = RoundState::start(words(5), RememberedWords::new(), &mut shuffler);

        for _ in 0..3 {
            let mut seen = vec![current_word(&state).unwrap()];
            for _ in 1..5 {
                state.advance(&mut shuffler);
                seen.push(current_word(&state).unwrap());
            }
            seen.sort();
            assert_eq!(seen, vec!["w0", "w1", "w2", "w3", "w4"]);
            assert_eq!(state.queued().count(), 0);
            state.advance(&mut shuffler);
        }
    }

    #[test]
    fn duplicate_rows_share_remembered_state() {
        let mut shuffler = Shuffler::identity();
        let list = vec![entry("cat", "猫"), entry("cat", "猫科"), entry("dog", "狗")];
        let mut state = RoundState::start(list, RememberedWords::new(), &mut shuffler);

        state.mark_current_remembered();
        state.advance(&mut shuffler);

        assert_eq!(current_word(&state).as_deref(), Some("dog"));
        assert_eq!(state.remembered().len(), 1);
        assert_eq!(state.words().len(), 3);
    }

    #[test]
    fn counts_rounds_as_they_are_built() {
        let mut shuffler = Shuffler::identity();
        let mut state = RoundState::start(words(2), RememberedWords::new(), &mut shuffler);
        assert_eq!(state.rounds_started(), 1);

        state.advance(&mut shuffler);
        assert_eq!(state.rounds_started(), 1);
        state.advance(&mut shuffler);
        assert_eq!(state.rounds_started(), 2);

        while state.current().is_some() {
            state.mark_current_remembered();
            state.advance(&mut shuffler);
        }
        let exhausted = state.rounds_started();
        state.advance(&mut shuffler);
        assert_eq!(state.rounds_started(), exhausted);
    }

    #[test]
    fn restart_with_cleared_set_brings_words_back() {
        let mut shuffler = Shuffler::identity();
        let remembered = RememberedWords::from_words(["w0", "w1"]);
        let mut state = RoundState::start(words(2), remembered, &mut shuffler);
        assert_eq!(state.phase(), RoundPhase::Empty);

        state.restart(RememberedWords::new(), &mut shuffler);

        assert_eq!(current_word(&state).as_deref(), Some("w0"));
        assert_eq!(state.queued().count(), 1);
        assert!(state.remembered().is_empty());
    }
}
