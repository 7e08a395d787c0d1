use crate::club::player::EnginePlayer;
use crate::club::team::TeamSheet;
use itertools::Itertools;
use log::{debug, warn};
use std::cmp::Reverse;

pub struct SquadSelector;

pub const DEFAULT_SQUAD_SIZE: usize = 11;
pub const DEFAULT_BENCH_SIZE: usize = 7;

pub struct PlayerSelectionResult {
    pub main_squad: Vec<EnginePlayer>,
    pub substitutes: Vec<EnginePlayer>,
}

impl SquadSelector {
    /// Pick the eleven highest-rated eligible players as starters and up
    /// to seven of the remaining eligible players as substitutes.
    ///
    /// The sort is stable, so players with equal overall keep their pool
    /// order. Excess players stay out of the match-day squad entirely.
    pub fn select(sheet: &TeamSheet) -> PlayerSelectionResult {
        let available_players: Vec<&EnginePlayer> = sheet
            .players
            .iter()
            .filter(|p| p.is_eligible())
            .collect();

        debug!(
            "{}: available players for selection: {}",
            sheet.name,
            available_players.len()
        );

        if available_players.len() < DEFAULT_SQUAD_SIZE {
            warn!(
                "{}: not enough available players for full squad: {}",
                sheet.name,
                available_players.len()
            );
        }

        let ranked: Vec<&EnginePlayer> = available_players
            .into_iter()
            .sorted_by_key(|p| Reverse(p.overall))
            .collect();

        let main_squad: Vec<EnginePlayer> = ranked
            .iter()
            .take(DEFAULT_SQUAD_SIZE)
            .map(|&p| p.clone())
            .collect();

        let substitutes: Vec<EnginePlayer> = ranked
            .iter()
            .skip(DEFAULT_SQUAD_SIZE)
            .take(DEFAULT_BENCH_SIZE)
            .map(|&p| p.clone())
            .collect();

        debug!(
            "{}: selected squad - main: {}, subs: {}",
            sheet.name,
            main_squad.len(),
            substitutes.len()
        );

        PlayerSelectionResult {
            main_squad,
            substitutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::{PlayerAvailability, PlayerCondition, PlayerPosition, PlayerSkills};

    fn generate_player(id: u32, overall: u8) -> EnginePlayer {
        EnginePlayer {
            id,
            name: format!("Player {}", id),
            team_id: 1,
            position: PlayerPosition::Midfielder,
            overall,
            skills: PlayerSkills::default(),
            condition: PlayerCondition::default(),
            availability: PlayerAvailability::default(),
        }
    }

    fn generate_sheet(players: Vec<EnginePlayer>) -> TeamSheet {
        TeamSheet::new(1, String::from("Test Team"), 500, players)
    }

    #[test]
    fn test_selects_eleven_highest_rated() {
        let players: Vec<EnginePlayer> =
            (0..20).map(|i| generate_player(i, 50 + i as u8)).collect();

        let result = SquadSelector::select(&generate_sheet(players));

        assert_eq!(result.main_squad.len(), DEFAULT_SQUAD_SIZE);
        assert_eq!(result.substitutes.len(), DEFAULT_BENCH_SIZE);

        // Highest overall (69) starts, lowest starter is 59.
        assert!(result.main_squad.iter().all(|p| p.overall >= 59));
        assert!(result.substitutes.iter().all(|p| p.overall < 59));
    }

    #[test]
    fn test_excludes_injured_and_banned() {
        let mut players: Vec<EnginePlayer> =
            (0..15).map(|i| generate_player(i, 90)).collect();
        players[0].availability.is_injured = true;
        players[1].availability.is_banned = true;

        let result = SquadSelector::select(&generate_sheet(players));
        let selected_ids: Vec<u32> = result
            .main_squad
            .iter()
            .chain(result.substitutes.iter())
            .map(|p| p.id)
            .collect();

        assert!(!selected_ids.contains(&0));
        assert!(!selected_ids.contains(&1));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let players: Vec<EnginePlayer> = (0..12).map(|i| generate_player(i, 70)).collect();

        let result = SquadSelector::select(&generate_sheet(players));

        let starter_ids: Vec<u32> = result.main_squad.iter().map(|p| p.id).collect();
        assert_eq!(starter_ids, (0..11).collect::<Vec<u32>>());
        assert_eq!(result.substitutes[0].id, 11);
    }

    #[test]
    fn test_bench_capped_at_seven() {
        let players: Vec<EnginePlayer> =
            (0..30).map(|i| generate_player(i, 60)).collect();

        let result = SquadSelector::select(&generate_sheet(players));

        assert_eq!(result.substitutes.len(), DEFAULT_BENCH_SIZE);
    }

    #[test]
    fn test_short_pool_selects_what_it_can() {
        let players: Vec<EnginePlayer> = (0..9).map(|i| generate_player(i, 60)).collect();

        let result = SquadSelector::select(&generate_sheet(players));

        assert_eq!(result.main_squad.len(), 9);
        assert!(result.substitutes.is_empty());
    }
}
