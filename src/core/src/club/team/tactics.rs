/// Defensive scheme. Higher-intensity schemes drain on-field energy faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkingStyle {
    Zonal,
    ManToMan,
    PressingHigh,
}

impl MarkingStyle {
    /// Scales the per-minute energy drain of every on-field player.
    /// Ordering is strict: Zonal < ManToMan < PressingHigh.
    pub fn intensity_multiplier(&self) -> f32 {
        match self {
            MarkingStyle::Zonal => 1.0,
            MarkingStyle::ManToMan => 1.15,
            MarkingStyle::PressingHigh => 1.35,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mentality {
    Defensive,
    Balanced,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStyle {
    Possession,
    Direct,
    CounterAttack,
    WingPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassingDirectness {
    Short,
    Mixed,
    Long,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamTactics {
    pub marking: MarkingStyle,
    pub mentality: Mentality,
    pub style: PlayStyle,
    pub passing_directness: PassingDirectness,
}

impl Default for TeamTactics {
    fn default() -> Self {
        TeamTactics {
            marking: MarkingStyle::Zonal,
            mentality: Mentality::Balanced,
            style: PlayStyle::Possession,
            passing_directness: PassingDirectness::Mixed,
        }
    }
}

impl TeamTactics {
    /// Signed percentage modifier applied to the computed team strength.
    pub fn strength_bonus(&self) -> f32 {
        let mentality_bonus = match self.mentality {
            Mentality::Attacking => 5.0,
            Mentality::Balanced => 0.0,
            Mentality::Defensive => -3.0,
        };

        let marking_bonus = match self.marking {
            MarkingStyle::PressingHigh => 2.0,
            MarkingStyle::ManToMan => 1.0,
            MarkingStyle::Zonal => 0.0,
        };

        let style_bonus = match self.style {
            PlayStyle::Possession => 1.0,
            PlayStyle::CounterAttack => 1.5,
            PlayStyle::WingPlay => 0.5,
            PlayStyle::Direct => 0.0,
        };

        mentality_bonus + marking_bonus + style_bonus
    }
}
