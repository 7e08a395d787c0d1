use crate::club::player::EnginePlayer;
use crate::club::team::{TeamSheet, TeamTactics};
use crate::r#match::engine::balance::{MatchBalance, Weather};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::strength::{TeamStrength, TeamStrengthCalculator};
use crate::r#match::events::{EventSeverity, MatchEvent, MatchEventType};
use crate::r#match::result::{
    normalize_possession, MatchResult, MatchStats, PlayerConditionUpdate, Score, SideStats,
};
use crate::r#match::squad::MatchSquad;
use crate::shared::random::{std_random, RandomEngine};
use log::debug;
use rand::rngs::StdRng;

pub const MATCH_MINUTES: u8 = 90;

/// Immutable construction input, consumed once.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub home: TeamSheet,
    pub away: TeamSheet,
    pub weather: Weather,
}

/// Per-side bookkeeping owned by the engine for one match.
struct SideState {
    team_id: u32,
    team_name: String,
    reputation: u16,
    tactics: TeamTactics,
    on_field: Vec<EnginePlayer>,
    bench: Vec<EnginePlayer>,
    strength: TeamStrength,
    substitutions_used: u8,
    possession_minutes: u16,
    shots: u16,
    shots_on_target: u16,
    corners: u16,
    fouls: u16,
    booked: Vec<u32>,
}

impl SideState {
    fn from_squad(squad: MatchSquad) -> Self {
        let strength =
            TeamStrengthCalculator::calculate(&squad.main_squad, squad.tactics.strength_bonus());

        SideState {
            team_id: squad.team_id,
            team_name: squad.team_name,
            reputation: squad.reputation,
            tactics: squad.tactics,
            on_field: squad.main_squad,
            bench: squad.substitutes,
            strength,
            substitutions_used: 0,
            possession_minutes: 0,
            shots: 0,
            shots_on_target: 0,
            corners: 0,
            fouls: 0,
            booked: Vec::new(),
        }
    }

    fn recompute_strength(&mut self) {
        self.strength =
            TeamStrengthCalculator::calculate(&self.on_field, self.tactics.strength_bonus());
    }

    fn side_stats(&self, possession: u8) -> SideStats {
        SideStats {
            possession,
            shots: self.shots,
            shots_on_target: self.shots_on_target,
            corners: self.corners,
            fouls: self.fouls,
        }
    }
}

/// Minute-by-minute match simulation state machine.
///
/// One instance per match; every public method is synchronous and runs to
/// completion. The caller decides the cadence: a timer for live viewing
/// or back-to-back calls to fast-forward.
pub struct MatchEngine<R = StdRng> {
    state: MatchState,
    minute: u8,
    score: Score,
    events: Vec<MatchEvent>,
    home: SideState,
    away: SideState,
    weather: Weather,
    balance: MatchBalance,
    random: R,
}

impl MatchEngine<StdRng> {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_random(config, std_random())
    }
}

impl<R: RandomEngine> MatchEngine<R> {
    pub fn with_random(config: MatchConfig, random: R) -> Self {
        let home_squad = MatchSquad::from_sheet(&config.home);
        let away_squad = MatchSquad::from_sheet(&config.away);

        MatchEngine {
            state: MatchState::NotStarted,
            minute: 0,
            score: Score::new(config.home.id, config.away.id),
            events: Vec::new(),
            home: SideState::from_squad(home_squad),
            away: SideState::from_squad(away_squad),
            weather: config.weather,
            balance: MatchBalance::default(),
            random,
        }
    }

    pub fn with_balance(mut self, balance: MatchBalance) -> Self {
        self.balance = balance;
        self
    }

    pub fn start(&mut self) {
        if self.state != MatchState::NotStarted {
            return;
        }

        self.state = MatchState::Playing;

        debug!(
            "kickoff: {} vs {}",
            self.home.team_name, self.away.team_name
        );

        self.events.push(MatchEvent::new(
            0,
            MatchEventType::Kickoff,
            self.home.team_id,
            format!("Kickoff: {} vs {}", self.home.team_name, self.away.team_name),
        ));
    }

    pub fn pause(&mut self) {
        if self.state == MatchState::Playing {
            self.state = MatchState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == MatchState::Paused {
            self.state = MatchState::Playing;
        }
    }

    /// Advance the match by one minute. No-op unless the match is
    /// currently playing and the 90 minutes are not up.
    pub fn simulate_minute(&mut self) {
        if self.state != MatchState::Playing || self.minute >= MATCH_MINUTES {
            return;
        }

        self.minute += 1;

        let home_pull = self.home.strength.possession_pull(self.balance.home_advantage);
        let away_pull = self.away.strength.possession_pull(1.0);
        let total_pull = home_pull + away_pull;

        let home_possession = if total_pull > 0.0 {
            self.random.chance(home_pull / total_pull * 100.0)
        } else {
            self.random.chance(50.0)
        };

        if home_possession {
            self.home.possession_minutes += 1;
        } else {
            self.away.possession_minutes += 1;
        }

        if self.random.chance(self.balance.attack_chance) {
            self.run_attack(home_possession);
        }

        if self.random.chance(self.balance.incident_chance) {
            self.run_incident(home_possession);
        }

        self.drain_energy();

        if self.minute >= MATCH_MINUTES {
            self.finish();
        }
    }

    /// Fast-forward: up to 90 minute ticks, stopping early once finished.
    /// Starts the match if it has not kicked off yet.
    pub fn simulate_to_completion(&mut self) {
        if self.state == MatchState::NotStarted {
            self.start();
        }

        for _ in 0..MATCH_MINUTES {
            if self.state == MatchState::Finished {
                break;
            }

            self.simulate_minute();
        }
    }

    /// Swap an on-field player for a bench player. Validation happens
    /// before any mutation: an invalid request leaves lineups, counters
    /// and the event log untouched and returns false.
    pub fn substitute(&mut self, is_home: bool, player_out_id: u32, player_in_id: u32) -> bool {
        let max_substitutions = self.balance.max_substitutions;
        let minute = self.minute;

        let side = if is_home { &mut self.home } else { &mut self.away };

        if side.substitutions_used >= max_substitutions {
            return false;
        }

        let Some(out_index) = side.on_field.iter().position(|p| p.id == player_out_id) else {
            return false;
        };

        let Some(in_index) = side.bench.iter().position(|p| p.id == player_in_id) else {
            return false;
        };

        let incoming_name = side.bench[in_index].name.clone();
        let outgoing_name = side.on_field[out_index].name.clone();

        std::mem::swap(&mut side.on_field[out_index], &mut side.bench[in_index]);

        side.substitutions_used += 1;
        side.recompute_strength();

        let team_id = side.team_id;

        self.events.push(
            MatchEvent::new(
                minute,
                MatchEventType::Substitution,
                team_id,
                format!("Substitution: {} replaces {}", incoming_name, outgoing_name),
            )
            .with_player(player_in_id),
        );

        true
    }

    /// Force a strength recomputation for both sides, e.g. after the
    /// caller edited conditions through a snapshot round-trip.
    pub fn update_team_strengths(&mut self) {
        self.home.recompute_strength();
        self.away.recompute_strength();
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn current_minute(&self) -> u8 {
        self.minute
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn players_on_field(&self, is_home: bool) -> &[EnginePlayer] {
        if is_home {
            &self.home.on_field
        } else {
            &self.away.on_field
        }
    }

    pub fn bench(&self, is_home: bool) -> &[EnginePlayer] {
        if is_home {
            &self.home.bench
        } else {
            &self.away.bench
        }
    }

    pub fn team_strength(&self, is_home: bool) -> TeamStrength {
        if is_home {
            self.home.strength
        } else {
            self.away.strength
        }
    }

    pub fn substitutions_used(&self, is_home: bool) -> u8 {
        if is_home {
            self.home.substitutions_used
        } else {
            self.away.substitutions_used
        }
    }

    /// Snapshot of the match outcome. Valid once finished, but callable
    /// at any point to inspect the current state of affairs.
    pub fn match_result(&mut self) -> MatchResult {
        let (home_possession, away_possession) =
            normalize_possession(self.home.possession_minutes, self.away.possession_minutes);

        let stats = MatchStats {
            home: self.home.side_stats(home_possession),
            away: self.away.side_stats(away_possession),
        };

        let home_moral = Self::moral_delta(
            &self.score,
            true,
            self.home.reputation,
            self.away.reputation,
            &self.balance,
        );
        let away_moral = Self::moral_delta(
            &self.score,
            false,
            self.away.reputation,
            self.home.reputation,
            &self.balance,
        );

        let Self {
            home,
            away,
            random,
            balance,
            ..
        } = self;

        let mut player_updates = Vec::new();

        for (side, moral_delta) in [(&*home, home_moral), (&*away, away_moral)] {
            for player in side.on_field.iter().chain(side.bench.iter()) {
                let fatigue = random
                    .get_int(balance.full_time_fatigue_min, balance.full_time_fatigue_max)
                    as f32;

                // Clamp so the applied delta never takes energy below zero.
                let energy_delta = -fatigue.min(player.condition.energy);

                let new_moral = (player.condition.moral + moral_delta).clamp(0.0, 100.0).round();

                player_updates.push(PlayerConditionUpdate {
                    player_id: player.id,
                    energy_delta,
                    moral_delta: new_moral - player.condition.moral,
                });
            }
        }

        MatchResult {
            score: self.score.clone(),
            events: self.events.clone(),
            stats,
            player_updates,
        }
    }

    fn run_attack(&mut self, home_possession: bool) {
        let Self {
            home,
            away,
            events,
            score,
            random,
            balance,
            weather,
            minute,
            ..
        } = self;
        let minute = *minute;

        let (attacking, defending) = if home_possession {
            (&mut *home, &mut *away)
        } else {
            (&mut *away, &mut *home)
        };

        if random.chance(balance.shot_chance) {
            attacking.shots += 1;

            let shooter = Self::pick_shooter(random, balance, &attacking.on_field);

            if let Some((shooter_id, shooter_name, shot_quality)) = shooter {
                let on_target_chance = shot_quality / 100.0 * balance.on_target_scale;

                if random.chance(on_target_chance) {
                    attacking.shots_on_target += 1;

                    let keeper = defending
                        .on_field
                        .iter()
                        .find(|p| p.position.is_goalkeeper());

                    let save_chance = keeper
                        .map(|gk| (gk.skills.defending + gk.overall as f32) / 200.0 * 100.0)
                        .unwrap_or(50.0);
                    let keeper_id = keeper.map(|gk| gk.id);

                    let attack_power =
                        attacking.strength.attack * attacking.strength.fitness_multiplier;
                    let defense_power =
                        defending.strength.defense * defending.strength.fitness_multiplier;
                    let power_total = attack_power + defense_power;

                    let goal_chance = if power_total > 0.0 {
                        attack_power / power_total * 100.0 * weather.goal_multiplier()
                    } else {
                        50.0
                    };

                    if random.chance(goal_chance) && !random.chance(save_chance) {
                        score.add_goal(home_possession);

                        events.push(
                            MatchEvent::new(
                                minute,
                                MatchEventType::Goal,
                                attacking.team_id,
                                format!(
                                    "GOAL! {} scores for {}",
                                    shooter_name, attacking.team_name
                                ),
                            )
                            .with_player(shooter_id)
                            .with_severity(EventSeverity::High),
                        );
                    } else {
                        let mut event = MatchEvent::new(
                            minute,
                            MatchEventType::Save,
                            defending.team_id,
                            format!("Shot by {} is kept out", shooter_name),
                        );

                        if let Some(keeper_id) = keeper_id {
                            event = event.with_player(keeper_id);
                        }

                        events.push(event);
                    }
                } else {
                    events.push(
                        MatchEvent::new(
                            minute,
                            MatchEventType::Shot,
                            attacking.team_id,
                            format!("{} shoots wide of the target", shooter_name),
                        )
                        .with_player(shooter_id),
                    );
                }
            }
        }

        // Corners are rolled independently of the shot outcome.
        if random.chance(balance.corner_chance) {
            attacking.corners += 1;

            events.push(MatchEvent::new(
                minute,
                MatchEventType::Corner,
                attacking.team_id,
                format!("Corner for {}", attacking.team_name),
            ));
        }
    }

    /// Weighted scorer selection: forwards first, then midfielders, then
    /// anyone on the field. A bias, not a hard rule.
    fn pick_shooter(
        random: &mut R,
        balance: &MatchBalance,
        on_field: &[EnginePlayer],
    ) -> Option<(u32, String, f32)> {
        let forwards: Vec<&EnginePlayer> =
            on_field.iter().filter(|p| p.position.is_forward()).collect();

        if !forwards.is_empty() && random.chance(balance.forward_shooter_chance) {
            let shooter = random.pick_one(&forwards)?;
            return Some((shooter.id, shooter.name.clone(), shooter.skills.shot_quality()));
        }

        let midfielders: Vec<&EnginePlayer> = on_field
            .iter()
            .filter(|p| p.position.is_midfielder())
            .collect();

        if !midfielders.is_empty() && random.chance(balance.midfielder_shooter_chance) {
            let shooter = random.pick_one(&midfielders)?;
            return Some((shooter.id, shooter.name.clone(), shooter.skills.shot_quality()));
        }

        let shooter = random.pick_one(on_field)?;
        Some((shooter.id, shooter.name.clone(), shooter.skills.shot_quality()))
    }

    fn run_incident(&mut self, home_possession: bool) {
        let Self {
            home,
            away,
            events,
            random,
            balance,
            minute,
            ..
        } = self;
        let minute = *minute;

        // Incidents lean toward the side without the ball.
        let target_is_home = if random.chance(balance.defending_side_incident_chance) {
            !home_possession
        } else {
            home_possession
        };

        let side = if target_is_home { &mut *home } else { &mut *away };

        let (player_id, player_name) = match random.pick_one(&side.on_field) {
            Some(player) => (player.id, player.name.clone()),
            None => return,
        };

        match random.get_int(0, 2) {
            0 => {
                side.fouls += 1;

                events.push(
                    MatchEvent::new(
                        minute,
                        MatchEventType::Foul,
                        side.team_id,
                        format!("{} commits a foul", player_name),
                    )
                    .with_player(player_id)
                    .with_severity(EventSeverity::Low),
                );
            }
            1 => {
                side.fouls += 1;

                events.push(
                    MatchEvent::new(
                        minute,
                        MatchEventType::YellowCard,
                        side.team_id,
                        format!("{} is booked", player_name),
                    )
                    .with_player(player_id)
                    .with_severity(EventSeverity::Medium),
                );

                if side.booked.contains(&player_id) {
                    // Second booking is logged as a red card, but the
                    // player stays on: dismissals do not thin the lineup.
                    events.push(
                        MatchEvent::new(
                            minute,
                            MatchEventType::RedCard,
                            side.team_id,
                            format!("{} is shown a second yellow", player_name),
                        )
                        .with_player(player_id)
                        .with_severity(EventSeverity::High),
                    );
                } else {
                    side.booked.push(player_id);
                }
            }
            _ => {
                events.push(
                    MatchEvent::new(
                        minute,
                        MatchEventType::Injury,
                        side.team_id,
                        format!("{} is down with a knock", player_name),
                    )
                    .with_player(player_id)
                    .with_severity(EventSeverity::Medium),
                );
            }
        }
    }

    /// Unconditional per-minute drain for the 22 players on the field.
    /// Bench players are never touched.
    fn drain_energy(&mut self) {
        let base_drain = self.balance.base_energy_drain;

        for side in [&mut self.home, &mut self.away] {
            let rate = base_drain * side.tactics.marking.intensity_multiplier();

            for player in side.on_field.iter_mut() {
                player.condition.drain_energy(rate);
            }
        }
    }

    fn finish(&mut self) {
        self.state = MatchState::Finished;

        debug!(
            "full-time: {} {} - {} {}",
            self.home.team_name, self.score.home, self.score.away, self.away.team_name
        );

        self.events.push(MatchEvent::new(
            MATCH_MINUTES,
            MatchEventType::FullTime,
            self.home.team_id,
            format!(
                "Full-time: {} {} - {} {}",
                self.home.team_name, self.score.home, self.score.away, self.away.team_name
            ),
        ));
    }

    fn moral_delta(
        score: &Score,
        is_home: bool,
        own_reputation: u16,
        opponent_reputation: u16,
        balance: &MatchBalance,
    ) -> f32 {
        let (own_goals, opponent_goals) = if is_home {
            (score.home, score.away)
        } else {
            (score.away, score.home)
        };

        if own_goals > opponent_goals {
            let gain = balance.moral_swing
                + Self::reputation_bonus(own_reputation, opponent_reputation, balance);
            gain.max(0.0)
        } else if own_goals < opponent_goals {
            // Symmetric to what the winner gained.
            let winner_gain = balance.moral_swing
                + Self::reputation_bonus(opponent_reputation, own_reputation, balance);
            -winner_gain.max(0.0)
        } else if opponent_reputation > own_reputation {
            balance.draw_moral_nudge
        } else if opponent_reputation < own_reputation {
            -balance.draw_moral_nudge
        } else {
            0.0
        }
    }

    /// Scales with how big the opponent's name is relative to ours,
    /// contribution capped either way.
    fn reputation_bonus(own_reputation: u16, opponent_reputation: u16, balance: &MatchBalance) -> f32 {
        let own = own_reputation.max(1) as f32;

        ((opponent_reputation as f32 / own - 1.0) * 10.0)
            .clamp(-balance.moral_reputation_cap, balance.moral_reputation_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::{PlayerAvailability, PlayerCondition, PlayerPosition, PlayerSkills};
    use crate::shared::random::seeded_random;

    fn generate_player(
        id: u32,
        team_id: u32,
        position: PlayerPosition,
        overall: u8,
    ) -> EnginePlayer {
        let skill = overall as f32;

        EnginePlayer {
            id,
            name: format!("Player {}", id),
            team_id,
            position,
            overall,
            skills: PlayerSkills {
                finishing: skill,
                passing: skill,
                dribbling: skill,
                defending: skill,
                physical: skill,
                pace: skill,
                shooting: skill,
            },
            condition: PlayerCondition::default(),
            availability: PlayerAvailability::default(),
        }
    }

    fn generate_sheet(team_id: u32, name: &str, reputation: u16) -> TeamSheet {
        use PlayerPosition::*;

        // Eleven clear starters (overall >= 71) and seven weaker reserves.
        let layout: [(PlayerPosition, u8); 18] = [
            (Goalkeeper, 76),
            (Defender, 75),
            (Defender, 74),
            (Defender, 73),
            (Defender, 72),
            (Midfielder, 74),
            (Midfielder, 73),
            (Midfielder, 72),
            (Midfielder, 71),
            (Forward, 75),
            (Forward, 74),
            (Goalkeeper, 60),
            (Defender, 59),
            (Defender, 58),
            (Midfielder, 57),
            (Midfielder, 56),
            (Forward, 55),
            (Forward, 54),
        ];

        let base = team_id * 100;
        let players = layout
            .iter()
            .enumerate()
            .map(|(i, &(position, overall))| {
                generate_player(base + i as u32, team_id, position, overall)
            })
            .collect();

        TeamSheet::new(team_id, String::from(name), reputation, players)
    }

    fn generate_config() -> MatchConfig {
        MatchConfig {
            home: generate_sheet(1, "Home FC", 500),
            away: generate_sheet(2, "Away United", 500),
            weather: Weather::default(),
        }
    }

    fn generate_engine(seed: u64) -> MatchEngine<rand::rngs::StdRng> {
        MatchEngine::with_random(generate_config(), seeded_random(seed))
    }

    #[test]
    fn test_initial_lineups() {
        let engine = generate_engine(1);

        assert_eq!(engine.players_on_field(true).len(), 11);
        assert_eq!(engine.players_on_field(false).len(), 11);
        assert_eq!(engine.bench(true).len(), 7);
        assert_eq!(engine.bench(false).len(), 7);
        assert_eq!(engine.state(), MatchState::NotStarted);
        assert_eq!(engine.current_minute(), 0);
    }

    #[test]
    fn test_injured_player_not_selected() {
        let mut config = generate_config();
        config.home.players[0].availability.is_injured = true;
        let injured_id = config.home.players[0].id;

        let engine = MatchEngine::with_random(config, seeded_random(1));

        assert!(engine
            .players_on_field(true)
            .iter()
            .chain(engine.bench(true).iter())
            .all(|p| p.id != injured_id));
    }

    #[test]
    fn test_start_appends_single_kickoff_event() {
        let mut engine = generate_engine(2);

        engine.start();
        engine.start();

        let kickoffs = engine
            .events()
            .iter()
            .filter(|e| e.event_type == MatchEventType::Kickoff)
            .count();

        assert_eq!(kickoffs, 1);
        assert_eq!(engine.state(), MatchState::Playing);
    }

    #[test]
    fn test_simulate_before_start_is_noop() {
        let mut engine = generate_engine(3);

        engine.simulate_minute();

        assert_eq!(engine.current_minute(), 0);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_pause_blocks_minute_advance() {
        let mut engine = generate_engine(4);

        engine.start();
        engine.simulate_minute();
        assert_eq!(engine.current_minute(), 1);

        engine.pause();
        engine.simulate_minute();
        engine.simulate_minute();
        assert_eq!(engine.current_minute(), 1);

        engine.resume();
        engine.simulate_minute();
        assert_eq!(engine.current_minute(), 2);
    }

    #[test]
    fn test_pause_and_resume_are_noops_outside_their_states() {
        let mut engine = generate_engine(5);

        engine.pause();
        assert_eq!(engine.state(), MatchState::NotStarted);

        engine.resume();
        assert_eq!(engine.state(), MatchState::NotStarted);

        engine.simulate_to_completion();
        engine.pause();
        assert_eq!(engine.state(), MatchState::Finished);
    }

    #[test]
    fn test_simulate_to_completion_reaches_full_time() {
        let mut engine = generate_engine(6);

        engine.simulate_to_completion();

        assert_eq!(engine.state(), MatchState::Finished);
        assert_eq!(engine.current_minute(), MATCH_MINUTES);
        assert!(engine
            .events()
            .iter()
            .any(|e| e.event_type == MatchEventType::FullTime));
    }

    #[test]
    fn test_terminal_state_is_idempotent() {
        let mut engine = generate_engine(7);

        engine.simulate_to_completion();

        let events_before = engine.events().len();
        engine.simulate_minute();
        engine.simulate_minute();

        assert_eq!(engine.current_minute(), MATCH_MINUTES);
        assert_eq!(engine.events().len(), events_before);
    }

    #[test]
    fn test_energy_bounds_and_bench_untouched() {
        let mut engine = generate_engine(8);

        engine.simulate_to_completion();

        for is_home in [true, false] {
            for player in engine.players_on_field(is_home) {
                assert!(player.condition.energy >= 0.0);
                assert!(player.condition.energy < 100.0);
            }

            for player in engine.bench(is_home) {
                assert_eq!(player.condition.energy, 100.0);
            }
        }
    }

    #[test]
    fn test_pressing_drains_more_than_zonal() {
        use crate::club::team::MarkingStyle;

        let total_home_energy = |marking: MarkingStyle| {
            let mut config = generate_config();
            config.home.tactics.marking = marking;

            let mut engine = MatchEngine::with_random(config, seeded_random(9));
            engine.start();

            for _ in 0..20 {
                engine.simulate_minute();
            }

            engine
                .players_on_field(true)
                .iter()
                .map(|p| p.condition.energy)
                .sum::<f32>()
        };

        let pressing = total_home_energy(MarkingStyle::PressingHigh);
        let zonal = total_home_energy(MarkingStyle::Zonal);

        assert!(pressing < zonal);
    }

    #[test]
    fn test_substitution_success() {
        let mut engine = generate_engine(10);
        engine.start();

        let strength_before = engine.team_strength(true);
        let out_id = 101; // starting defender, overall 75
        let in_id = 112; // reserve defender, overall 59

        assert!(engine.substitute(true, out_id, in_id));
        assert_eq!(engine.substitutions_used(true), 1);

        assert!(engine.players_on_field(true).iter().any(|p| p.id == in_id));
        assert!(engine.players_on_field(true).iter().all(|p| p.id != out_id));
        assert!(engine.bench(true).iter().any(|p| p.id == out_id));

        let substitution_event = engine
            .events()
            .iter()
            .find(|e| e.event_type == MatchEventType::Substitution)
            .expect("substitution event");
        assert!(substitution_event.description.contains("Substitution"));

        // Bringing a weaker reserve on cannot raise the side's overall.
        assert!(engine.team_strength(true).overall <= strength_before.overall);
    }

    #[test]
    fn test_substitution_limit_is_hard() {
        let mut engine = generate_engine(11);
        engine.start();

        for (out_id, in_id) in [(101, 112), (102, 113), (105, 114), (106, 115), (109, 116)] {
            assert!(engine.substitute(true, out_id, in_id));
        }

        assert_eq!(engine.substitutions_used(true), 5);

        // Sixth attempt with otherwise-valid ids.
        assert!(!engine.substitute(true, 103, 117));
        assert_eq!(engine.substitutions_used(true), 5);
    }

    #[test]
    fn test_substitution_validation_has_no_partial_effects() {
        let mut engine = generate_engine(12);
        engine.start();

        let events_before = engine.events().len();

        // Outgoing player not on the field.
        assert!(!engine.substitute(true, 9999, 112));
        // Incoming player not on the bench.
        assert!(!engine.substitute(true, 101, 102));
        // Incoming player does not exist.
        assert!(!engine.substitute(true, 101, 9999));
        // Wrong side entirely.
        assert!(!engine.substitute(false, 101, 112));

        assert_eq!(engine.substitutions_used(true), 0);
        assert_eq!(engine.substitutions_used(false), 0);
        assert_eq!(engine.events().len(), events_before);
        assert_eq!(engine.players_on_field(true).len(), 11);
        assert_eq!(engine.bench(true).len(), 7);
    }

    #[test]
    fn test_score_matches_goal_events() {
        let mut engine = generate_engine(13);

        engine.simulate_to_completion();
        let result = engine.match_result();

        let home_goals = result
            .events
            .iter()
            .filter(|e| e.event_type == MatchEventType::Goal && e.team_id == 1)
            .count() as u8;
        let away_goals = result
            .events
            .iter()
            .filter(|e| e.event_type == MatchEventType::Goal && e.team_id == 2)
            .count() as u8;

        assert_eq!(result.score.home, home_goals);
        assert_eq!(result.score.away, away_goals);
        assert_eq!(result.score.home, engine.score().home);
        assert_eq!(result.score.away, engine.score().away);
    }

    #[test]
    fn test_events_are_chronological() {
        let mut engine = generate_engine(14);

        engine.simulate_to_completion();

        let minutes: Vec<u8> = engine.events().iter().map(|e| e.minute).collect();
        assert!(minutes.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_possession_sums_to_hundred() {
        let mut engine = generate_engine(15);

        engine.simulate_to_completion();
        let result = engine.match_result();

        assert_eq!(
            result.stats.home.possession as u16 + result.stats.away.possession as u16,
            100
        );
    }

    #[test]
    fn test_match_result_is_callable_mid_match() {
        let mut engine = generate_engine(16);
        engine.start();

        for _ in 0..10 {
            engine.simulate_minute();
        }

        let result = engine.match_result();

        assert_eq!(result.score.home, engine.score().home);
        assert_eq!(result.score.away, engine.score().away);
        assert_eq!(result.player_updates.len(), 36);
    }

    #[test]
    fn test_player_updates_respect_bounds() {
        let mut engine = generate_engine(17);

        engine.simulate_to_completion();
        let result = engine.match_result();

        assert_eq!(result.player_updates.len(), 36);

        for update in &result.player_updates {
            assert!(update.energy_delta <= 0.0);
            assert!(update.energy_delta >= -50.0);
            assert!(update.moral_delta.abs() <= 100.0);
        }
    }

    #[test]
    fn test_update_team_strengths_tracks_fatigue() {
        let mut engine = generate_engine(18);
        engine.start();

        let initial = engine.team_strength(true).fitness_multiplier;
        assert_eq!(initial, 1.0);

        for _ in 0..30 {
            engine.simulate_minute();
        }

        // Strength is a snapshot: unchanged until explicitly recomputed.
        assert_eq!(engine.team_strength(true).fitness_multiplier, initial);

        engine.update_team_strengths();
        assert!(engine.team_strength(true).fitness_multiplier < initial);
    }

    #[test]
    fn test_moral_delta_for_win_loss_and_draw() {
        let balance = MatchBalance::default();

        let mut score = Score::new(1, 2);
        score.add_goal(true);

        // Equal reputations: flat swing either way.
        let home_gain =
            MatchEngine::<StdRng>::moral_delta(&score, true, 500, 500, &balance);
        let away_loss =
            MatchEngine::<StdRng>::moral_delta(&score, false, 500, 500, &balance);
        assert_eq!(home_gain, 5.0);
        assert_eq!(away_loss, -5.0);

        // Beating a bigger name pays out more, capped contribution.
        let upset_gain =
            MatchEngine::<StdRng>::moral_delta(&score, true, 500, 1000, &balance);
        let upset_loss =
            MatchEngine::<StdRng>::moral_delta(&score, false, 1000, 500, &balance);
        assert_eq!(upset_gain, 15.0);
        assert_eq!(upset_loss, -15.0);

        // Draw nudges toward the side that faced the bigger name.
        let draw = Score::new(1, 2);
        let draw_underdog =
            MatchEngine::<StdRng>::moral_delta(&draw, true, 500, 1000, &balance);
        let draw_favourite =
            MatchEngine::<StdRng>::moral_delta(&draw, false, 1000, 500, &balance);
        assert_eq!(draw_underdog, 2.0);
        assert_eq!(draw_favourite, -2.0);
    }
}
