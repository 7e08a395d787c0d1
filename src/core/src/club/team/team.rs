use crate::club::player::EnginePlayer;
use crate::club::team::tactics::TeamTactics;

/// Match-day input for one side: identity, reputation and the full
/// player pool the engine selects starters and bench from.
#[derive(Debug, Clone)]
pub struct TeamSheet {
    pub id: u32,
    pub name: String,
    pub reputation: u16,
    pub tactics: TeamTactics,
    pub players: Vec<EnginePlayer>,
}

impl TeamSheet {
    pub fn new(id: u32, name: String, reputation: u16, players: Vec<EnginePlayer>) -> Self {
        TeamSheet {
            id,
            name,
            reputation,
            tactics: TeamTactics::default(),
            players,
        }
    }

    pub fn with_tactics(mut self, tactics: TeamTactics) -> Self {
        self.tactics = tactics;
        self
    }
}
