use core::{
    EnginePlayer, MarkingStyle, MatchConfig, MatchEngine, Mentality, PlayerAvailability,
    PlayerCondition, PlayerPosition, PlayerSkills, TeamSheet, TeamTactics, Weather,
};
use env_logger::Env;
use log::info;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = MatchConfig {
        home: demo_sheet(1, "North End", 620).with_tactics(TeamTactics {
            marking: MarkingStyle::PressingHigh,
            mentality: Mentality::Attacking,
            ..TeamTactics::default()
        }),
        away: demo_sheet(2, "Harbour City", 540),
        weather: Weather::Cloudy,
    };

    let mut engine = MatchEngine::new(config);
    engine.simulate_to_completion();

    let result = engine.match_result();

    info!(
        "final score: {} - {}",
        result.score.home, result.score.away
    );
    info!(
        "possession: {}% - {}%, shots: {} ({} on target) - {} ({} on target)",
        result.stats.home.possession,
        result.stats.away.possession,
        result.stats.home.shots,
        result.stats.home.shots_on_target,
        result.stats.away.shots,
        result.stats.away.shots_on_target
    );

    for event in &result.events {
        info!("{}' {}", event.minute, event.description);
    }
}

/// An 18-man demo squad with a plausible spread of roles and ratings.
fn demo_sheet(team_id: u32, name: &str, reputation: u16) -> TeamSheet {
    let layout = [
        (PlayerPosition::Goalkeeper, 74),
        (PlayerPosition::Defender, 73),
        (PlayerPosition::Defender, 72),
        (PlayerPosition::Defender, 75),
        (PlayerPosition::Defender, 71),
        (PlayerPosition::Midfielder, 76),
        (PlayerPosition::Midfielder, 72),
        (PlayerPosition::Midfielder, 74),
        (PlayerPosition::Midfielder, 70),
        (PlayerPosition::Forward, 77),
        (PlayerPosition::Forward, 73),
        (PlayerPosition::Goalkeeper, 64),
        (PlayerPosition::Defender, 63),
        (PlayerPosition::Defender, 62),
        (PlayerPosition::Midfielder, 65),
        (PlayerPosition::Midfielder, 61),
        (PlayerPosition::Forward, 66),
        (PlayerPosition::Forward, 60),
    ];

    let players = layout
        .iter()
        .enumerate()
        .map(|(i, &(position, overall))| {
            let skill = overall as f32;

            EnginePlayer {
                id: team_id * 100 + i as u32,
                name: format!("{} #{}", name, i + 1),
                team_id,
                position,
                overall,
                skills: PlayerSkills {
                    finishing: skill - 4.0,
                    passing: skill,
                    dribbling: skill - 2.0,
                    defending: skill - 6.0,
                    physical: skill - 1.0,
                    pace: skill + 2.0,
                    shooting: skill - 3.0,
                },
                condition: PlayerCondition::default(),
                availability: PlayerAvailability::default(),
            }
        })
        .collect();

    TeamSheet::new(team_id, String::from(name), reputation, players)
}
