use crate::club::player::{EnginePlayer, PlayerPosition, PlayerSkills};
use serde::Serialize;

const NEUTRAL_STRENGTH: f32 = 50.0;

/// Derived snapshot of one side's current on-field quality. Never
/// persisted; recomputed at kickoff and after every substitution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamStrength {
    pub overall: f32,
    pub attack: f32,
    pub midfield: f32,
    pub defense: f32,
    pub moral_bonus: f32,
    pub fitness_multiplier: f32,
}

impl TeamStrength {
    pub fn neutral() -> Self {
        TeamStrength {
            overall: NEUTRAL_STRENGTH,
            attack: NEUTRAL_STRENGTH,
            midfield: NEUTRAL_STRENGTH,
            defense: NEUTRAL_STRENGTH,
            moral_bonus: 0.0,
            fitness_multiplier: 1.0,
        }
    }

    /// Weight of this side in the per-minute possession roll.
    pub fn possession_pull(&self, home_advantage: f32) -> f32 {
        self.overall * home_advantage + self.moral_bonus
    }
}

struct SkillWeights {
    finishing: f32,
    passing: f32,
    dribbling: f32,
    defending: f32,
    physical: f32,
    pace: f32,
    shooting: f32,
}

impl SkillWeights {
    fn for_position(position: PlayerPosition) -> SkillWeights {
        match position {
            PlayerPosition::Forward => SkillWeights {
                finishing: 0.25,
                shooting: 0.20,
                pace: 0.15,
                dribbling: 0.15,
                passing: 0.10,
                physical: 0.10,
                defending: 0.05,
            },
            PlayerPosition::Midfielder => SkillWeights {
                passing: 0.25,
                dribbling: 0.20,
                pace: 0.15,
                finishing: 0.10,
                shooting: 0.10,
                physical: 0.10,
                defending: 0.10,
            },
            PlayerPosition::Defender => SkillWeights {
                defending: 0.30,
                physical: 0.25,
                pace: 0.15,
                passing: 0.12,
                dribbling: 0.08,
                finishing: 0.05,
                shooting: 0.05,
            },
            PlayerPosition::Goalkeeper => SkillWeights {
                defending: 0.40,
                physical: 0.25,
                passing: 0.10,
                pace: 0.10,
                dribbling: 0.05,
                finishing: 0.05,
                shooting: 0.05,
            },
        }
    }

    fn composite(&self, skills: &PlayerSkills) -> f32 {
        skills.finishing * self.finishing
            + skills.passing * self.passing
            + skills.dribbling * self.dribbling
            + skills.defending * self.defending
            + skills.physical * self.physical
            + skills.pace * self.pace
            + skills.shooting * self.shooting
    }
}

pub struct TeamStrengthCalculator;

impl TeamStrengthCalculator {
    /// Map the current on-field roster and a signed tactical percentage
    /// into a strength snapshot.
    ///
    /// An empty roster yields the neutral default instead of failing:
    /// the simulation must never block on degraded input.
    pub fn calculate(roster: &[EnginePlayer], tactical_bonus: f32) -> TeamStrength {
        if roster.is_empty() {
            return TeamStrength::neutral();
        }

        let attack = Self::bucket_mean(roster, |p| p.position.is_forward());
        let midfield = Self::bucket_mean(roster, |p| p.position.is_midfielder());
        let defense = Self::bucket_mean(roster, |p| {
            p.position.is_defender() || p.position.is_goalkeeper()
        });

        let tactical_multiplier = 1.0 + tactical_bonus / 100.0;

        let overall = roster.iter().map(|p| p.overall as f32).sum::<f32>() / roster.len() as f32;

        let mean_moral =
            roster.iter().map(|p| p.condition.moral).sum::<f32>() / roster.len() as f32;
        let mean_energy =
            roster.iter().map(|p| p.condition.energy).sum::<f32>() / roster.len() as f32;

        TeamStrength {
            overall,
            attack: attack * tactical_multiplier,
            midfield: midfield * tactical_multiplier,
            defense: defense * tactical_multiplier,
            moral_bonus: ((mean_moral - 50.0) / 10.0).round(),
            fitness_multiplier: Self::round2(0.7 + mean_energy / 100.0 * 0.3),
        }
    }

    fn bucket_mean<F: Fn(&EnginePlayer) -> bool>(roster: &[EnginePlayer], filter: F) -> f32 {
        let composites: Vec<f32> = roster
            .iter()
            .filter(|p| filter(p))
            .map(|p| SkillWeights::for_position(p.position).composite(&p.skills))
            .collect();

        if composites.is_empty() {
            return NEUTRAL_STRENGTH;
        }

        composites.iter().sum::<f32>() / composites.len() as f32
    }

    fn round2(value: f32) -> f32 {
        (value * 100.0).round() / 100.0
    }
}
