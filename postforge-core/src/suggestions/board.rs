//! Latest suggestion set and the status of the suggestion action

use super::{Suggestion, SuggestionError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Done(usize),
    Failed(SuggestionError),
}

/// Holds whatever the last successful fetch returned.
///
/// Results are applied in the order they are handed to [`finish`], so when
/// two requests race the one that resolves last wins. A failed fetch leaves
/// the previous suggestions in place.
///
/// [`finish`]: SuggestionBoard::finish
#[derive(Debug, Clone, Default)]
pub struct SuggestionBoard {
    suggestions: Vec<Suggestion>,
    status: FetchStatus,
}

impl SuggestionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn finish(&mut self, result: Result<Vec<Suggestion>, SuggestionError>) {
        match result {
            Ok(ideas) => {
                self.status = FetchStatus::Done(ideas.len());
                self.suggestions = ideas;
            }
            Err(err) => self.status = FetchStatus::Failed(err),
        }
    }

    /// Pick a suggestion by 1-based position, as shown to the user
    pub fn pick(&self, position: usize) -> Option<&Suggestion> {
        position
            .checked_sub(1)
            .and_then(|idx| self.suggestions.get(idx))
    }
}
