use crate::r#match::events::MatchEvent;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Score {
            home_team_id,
            away_team_id,
            home: 0,
            away: 0,
        }
    }

    pub fn add_goal(&mut self, is_home: bool) {
        if is_home {
            self.home += 1;
        } else {
            self.away += 1;
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SideStats {
    pub possession: u8,
    pub shots: u16,
    pub shots_on_target: u16,
    pub corners: u16,
    pub fouls: u16,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MatchStats {
    pub home: SideStats,
    pub away: SideStats,
}

/// Condition delta the persistence layer applies after the match.
/// The engine itself never writes back into the caller's player records.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerConditionUpdate {
    pub player_id: u32,
    pub energy_delta: f32,
    pub moral_delta: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: Score,
    pub events: Vec<MatchEvent>,
    pub stats: MatchStats,
    pub player_updates: Vec<PlayerConditionUpdate>,
}

/// Normalize two possession-minute counters into percentages that sum
/// to exactly 100. An unplayed match splits evenly.
pub fn normalize_possession(home_minutes: u16, away_minutes: u16) -> (u8, u8) {
    let total = home_minutes + away_minutes;

    if total == 0 {
        return (50, 50);
    }

    let home = (home_minutes as f32 / total as f32 * 100.0).round() as u8;

    (home, 100 - home)
}
