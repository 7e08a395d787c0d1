use crate::club::player::EnginePlayer;
use crate::club::team::{TeamSheet, TeamTactics};
use crate::r#match::squad::selector::SquadSelector;

/// One side's match-day squad after selection.
#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub team_id: u32,
    pub team_name: String,
    pub reputation: u16,
    pub tactics: TeamTactics,
    pub main_squad: Vec<EnginePlayer>,
    pub substitutes: Vec<EnginePlayer>,
}

impl MatchSquad {
    pub fn from_sheet(sheet: &TeamSheet) -> Self {
        let selection = SquadSelector::select(sheet);

        MatchSquad {
            team_id: sheet.id,
            team_name: sheet.name.clone(),
            reputation: sheet.reputation,
            tactics: sheet.tactics,
            main_squad: selection.main_squad,
            substitutes: selection.substitutes,
        }
    }
}
