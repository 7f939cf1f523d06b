use wordcards_core::model::ListId;
use wordcards_core::RoundPhase;

/// Presentation-agnostic snapshot of what to show after a command.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// `current_definition` is only set while the definition is revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub list_id: Option<ListId>,
    pub phase: RoundPhase,
    pub remembered: usize,
    pub total: usize,
    pub current_word: Option<String>,
    pub current_definition: Option<String>,
}

impl DisplayState {
    /// True when a list is active but has nothing left to show.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.list_id.is_some() && self.current_word.is_none()
    }
}
