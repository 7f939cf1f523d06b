use std::fmt;
use std::sync::Arc;

use storage::WordSource;
use wordcards_core::model::{ListId, RememberedWords, WordEntry};
use wordcards_core::{RoundPhase, RoundState, Shuffler};

use super::command::SessionCommand;
use super::view::DisplayState;
use crate::config::ListCatalog;
use crate::error::SessionError;
use crate::progress_store::ProgressStore;

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// The active list and its rotation.
#[derive(Debug, Clone)]
pub struct SessionState {
    list_id: ListId,
    round: RoundState,
}

impl SessionState {
    #[must_use]
    pub fn list_id(&self) -> &ListId {
        &self.list_id
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Keeps the active list's rotation and the persisted progress in step.
///
/// All mutation goes through these methods. Commands that make no sense in
/// the current state (revealing twice, skipping a hidden word, marking with
/// nothing shown) are ignored and report `false`.
pub struct SessionController {
    catalog: ListCatalog,
    words: Arc<dyn WordSource>,
    progress: ProgressStore,
    shuffler: Shuffler,
    state: Option<SessionState>,
}

impl SessionController {
    #[must_use]
    pub fn new(catalog: ListCatalog, words: Arc<dyn WordSource>, progress: ProgressStore) -> Self {
        Self {
            catalog,
            words,
            progress,
            shuffler: Shuffler::default(),
            state: None,
        }
    }

    /// Replace the round shuffler, e.g. with a seeded one for tests.
    #[must_use]
    pub fn with_shuffler(mut self, shuffler: Shuffler) -> Self {
        self.shuffler = shuffler;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &ListCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn active_list(&self) -> Option<&ListId> {
        self.state.as_ref().map(SessionState::list_id)
    }

    /// Activate a list and start a fresh round for it.
    ///
    /// The previous list's pending round is discarded; its remembered words
    /// were already saved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownList` if `list` is not in the catalog;
    /// the current session is left untouched.
    pub fn select_list(&mut self, list: ListId) -> Result<(), SessionError> {
        if !self.catalog.contains(&list) {
            return Err(SessionError::UnknownList(list));
        }

        let words = self.load_words(&list);
        self.progress.ensure_list(&list);
        let remembered = self.progress.remembered(&list);
        log::info!(
            "selected {list}: {} words, {} remembered",
            words.len(),
            remembered.len()
        );

        let round = RoundState::start(words, remembered, &mut self.shuffler);
        self.state = Some(SessionState {
            list_id: list,
            round,
        });
        Ok(())
    }

    /// Show the next word, starting a new round when needed.
    pub fn advance(&mut self) -> bool {
        self.with_round(|round, shuffler| {
            round.advance(shuffler);
            true
        })
    }

    /// Show the current word's definition.
    pub fn reveal(&mut self) -> bool {
        self.state
            .as_mut()
            .is_some_and(|state| state.round.reveal())
    }

    /// Move on without remembering the current word.
    pub fn skip(&mut self) -> bool {
        self.with_round(|round, shuffler| round.skip(shuffler))
    }

    /// Reveal the definition if hidden, otherwise advance.
    pub fn reveal_or_advance(&mut self) -> bool {
        self.with_round(|round, shuffler| match round.phase() {
            RoundPhase::Empty => false,
            RoundPhase::ShowingWord => round.reveal(),
            RoundPhase::ShowingDefinition => {
                round.advance(shuffler);
                true
            }
        })
    }

    /// Remember the current word and save. The word stays on screen until the
    /// next advance.
    pub fn mark_remembered(&mut self) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        let Some(word) = state.round.mark_current_remembered() else {
            return false;
        };
        log::debug!("remembered {word:?} in {}", state.list_id);
        self.progress
            .set_remembered(state.list_id.clone(), state.round.remembered().to_vec());
        true
    }

    /// Forget the active list's remembered words, save, and show a word from
    /// a fresh round.
    pub fn reset_current_list(&mut self) -> bool {
        let Some(list) = self.active_list().cloned() else {
            return false;
        };
        log::info!("resetting progress of {list}");
        self.progress.set_remembered(list, Vec::new());
        self.with_round(|round, shuffler| {
            round.restart(RememberedWords::new(), shuffler);
            true
        })
    }

    /// Forget remembered words of every known list and save. Only the active
    /// list's round is rebuilt; other lists start fresh when selected.
    pub fn reset_all_lists(&mut self) -> bool {
        log::info!("resetting progress of all lists");
        self.progress.clear_all();
        self.with_round(|round, shuffler| {
            round.restart(RememberedWords::new(), shuffler);
            true
        });
        true
    }

    /// Apply one command and return the refreshed display state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownList` if a `SelectList` names a list
    /// outside the catalog.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<DisplayState, SessionError> {
        let applied = match command {
            SessionCommand::SelectList(list) => {
                self.select_list(list)?;
                true
            }
            SessionCommand::Advance => self.advance(),
            SessionCommand::Reveal => self.reveal(),
            SessionCommand::Skip => self.skip(),
            SessionCommand::Next => self.reveal_or_advance(),
            SessionCommand::MarkRemembered => self.mark_remembered(),
            SessionCommand::ResetCurrentList => self.reset_current_list(),
            SessionCommand::ResetAllLists => self.reset_all_lists(),
        };
        if !applied {
            log::debug!("command ignored in phase {:?}", self.phase());
        }
        Ok(self.display())
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state
            .as_ref()
            .map_or(RoundPhase::Empty, |state| state.round.phase())
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        let Some(state) = self.state.as_ref() else {
            return DisplayState::default();
        };
        let round = &state.round;
        let current = round.current();
        DisplayState {
            list_id: Some(state.list_id.clone()),
            phase: round.phase(),
            remembered: round.remembered().len(),
            total: round.words().len(),
            current_word: current.map(|entry| entry.word().to_owned()),
            current_definition: current
                .filter(|_| round.is_revealed())
                .map(|entry| entry.definition().to_owned()),
        }
    }

    /// Apply `step` to the active round, logging when it starts a new round.
    fn with_round(&mut self, step: impl FnOnce(&mut RoundState, &mut Shuffler) -> bool) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        let before = state.round.rounds_started();
        let applied = step(&mut state.round, &mut self.shuffler);
        if state.round.rounds_started() != before {
            log::debug!(
                "{}: round {} started with {} words",
                state.list_id,
                state.round.rounds_started(),
                state.round.queued().count() + 1
            );
        }
        applied
    }

    fn load_words(&self, list: &ListId) -> Vec<WordEntry> {
        match self.words.load_words(list) {
            Ok(words) => words,
            Err(e) if e.is_not_found() => {
                log::warn!("word list {list} not found ({e}); no words available");
                Vec::new()
            }
            Err(e) => {
                log::warn!("could not read word list {list}: {e}; no words available");
                Vec::new()
            }
        }
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("lists", &self.catalog.len())
            .field("active", &self.active_list())
            .field("phase", &self.phase())
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
