pub mod club;
pub mod r#match;
pub mod shared;

// Player and team exports
pub use club::{
    EnginePlayer, MarkingStyle, Mentality, PassingDirectness, PlayStyle, PlayerAvailability,
    PlayerCondition, PlayerPosition, PlayerSkills, TeamSheet, TeamTactics, CONDITION_MAX_VALUE,
};

// Match engine exports
pub use r#match::{
    simulate_fixtures, EventSeverity, MatchBalance, MatchConfig, MatchEngine, MatchEvent,
    MatchEventType, MatchResult, MatchSquad, MatchState, MatchStats, PlayerConditionUpdate,
    PlayerSelectionResult, Score, SideStats, SquadSelector, TeamStrength, TeamStrengthCalculator,
    Weather, MATCH_MINUTES,
};

pub use shared::{seeded_random, std_random, RandomEngine};
