use wordcards_core::model::ListId;

/// One user intent, as mapped by a presentation layer from its own input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Switch to another list, starting a fresh round.
    SelectList(ListId),
    /// Show the next word.
    Advance,
    /// Show the current word's definition.
    Reveal,
    /// Move on without remembering; only once the definition is shown.
    Skip,
    /// Reveal if hidden, otherwise advance.
    Next,
    /// Remember the current word without moving on.
    MarkRemembered,
    /// Forget everything remembered in the active list.
    ResetCurrentList,
    /// Forget everything remembered in every list.
    ResetAllLists,
}

impl SessionCommand {
    /// True for commands that discard remembered words.
    ///
    /// Presentation layers are expected to confirm these with the user first.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::ResetCurrentList | Self::ResetAllLists)
    }
}
