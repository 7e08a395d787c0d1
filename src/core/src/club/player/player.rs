use crate::club::player::condition::PlayerCondition;
use crate::club::player::position::PlayerPosition;
use crate::club::player::skills::PlayerSkills;

#[derive(Debug, Copy, Clone, Default)]
pub struct PlayerAvailability {
    pub is_injured: bool,
    pub is_banned: bool,
}

/// Player view owned by the match engine for the duration of one match.
///
/// The engine works on its own copies: condition mutation during a match
/// is never visible to the caller except through snapshots and the
/// condition deltas in the final result.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    pub id: u32,
    pub name: String,
    pub team_id: u32,
    pub position: PlayerPosition,
    pub overall: u8,
    pub skills: PlayerSkills,
    pub condition: PlayerCondition,
    pub availability: PlayerAvailability,
}

impl EnginePlayer {
    pub fn is_eligible(&self) -> bool {
        !self.availability.is_injured && !self.availability.is_banned
    }
}
