/// Match-day weather. Only scoring probability cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weather {
    #[default]
    Sunny,
    Cloudy,
    Windy,
    Rainy,
}

impl Weather {
    pub fn goal_multiplier(&self) -> f32 {
        match self {
            Weather::Sunny | Weather::Cloudy => 1.0,
            Weather::Windy => 0.95,
            Weather::Rainy => 0.90,
        }
    }
}

/// Tuning table for the simulation. All probabilities are percentages.
///
/// Keeping these out of the control flow lets balance iteration happen
/// without touching the engine itself.
#[derive(Debug, Clone)]
pub struct MatchBalance {
    /// Multiplier on the home side's possession pull.
    pub home_advantage: f32,
    /// Chance per minute that possession turns into an attack.
    pub attack_chance: f32,
    /// Chance per minute of an off-the-ball incident.
    pub incident_chance: f32,
    /// Chance that an incident lands on the defending side.
    pub defending_side_incident_chance: f32,
    /// Chance that an attack produces a shot.
    pub shot_chance: f32,
    /// Chance the shooter is a forward.
    pub forward_shooter_chance: f32,
    /// Chance the shooter is a midfielder when no forward was picked.
    pub midfielder_shooter_chance: f32,
    /// Scale from shot quality to the on-target percentage.
    pub on_target_scale: f32,
    /// Chance the attacking side wins a corner, independent of the shot.
    pub corner_chance: f32,
    /// Energy lost per simulated minute before the marking multiplier.
    pub base_energy_drain: f32,
    pub max_substitutions: u8,
    /// Full-match fatigue subtracted from every player in the result.
    pub full_time_fatigue_min: i32,
    pub full_time_fatigue_max: i32,
    /// Base moral swing for a win or a loss.
    pub moral_swing: f32,
    /// Cap on the reputation-derived part of the moral swing.
    pub moral_reputation_cap: f32,
    /// Moral nudge for the side that drew against the stronger name.
    pub draw_moral_nudge: f32,
}

impl Default for MatchBalance {
    fn default() -> Self {
        MatchBalance {
            home_advantage: 1.05,
            attack_chance: 20.0,
            incident_chance: 1.0,
            defending_side_incident_chance: 60.0,
            shot_chance: 40.0,
            forward_shooter_chance: 70.0,
            midfielder_shooter_chance: 50.0,
            on_target_scale: 60.0,
            corner_chance: 8.0,
            base_energy_drain: 0.4,
            max_substitutions: 5,
            full_time_fatigue_min: 30,
            full_time_fatigue_max: 50,
            moral_swing: 5.0,
            moral_reputation_cap: 15.0,
            draw_moral_nudge: 2.0,
        }
    }
}
