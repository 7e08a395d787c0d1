use serde::Serialize;

/// Lifecycle of a single match. Finished is terminal; an engine instance
/// runs through the machine exactly once and is then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    NotStarted,
    Playing,
    Paused,
    Finished,
}

impl MatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchState::Finished)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, MatchState::Playing | MatchState::Paused)
    }
}
