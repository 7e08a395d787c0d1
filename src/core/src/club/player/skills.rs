/// Technical skill set used by the match engine, each value on a 0..99 scale.
#[derive(Debug, Copy, Clone, Default)]
pub struct PlayerSkills {
    pub finishing: f32,
    pub passing: f32,
    pub dribbling: f32,
    pub defending: f32,
    pub physical: f32,
    pub pace: f32,
    pub shooting: f32,
}

impl PlayerSkills {
    pub fn average(&self) -> f32 {
        (self.finishing
            + self.passing
            + self.dribbling
            + self.defending
            + self.physical
            + self.pace
            + self.shooting)
            / 7.0
    }

    /// Composite used when resolving whether a shot goes on target.
    pub fn shot_quality(&self) -> f32 {
        (self.shooting + self.finishing) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let skills = PlayerSkills {
            finishing: 10.0,
            passing: 20.0,
            dribbling: 30.0,
            defending: 40.0,
            physical: 50.0,
            pace: 60.0,
            shooting: 70.0,
        };

        assert_eq!(skills.average(), 40.0); // (10 + 20 + 30 + 40 + 50 + 60 + 70) / 7
    }

    #[test]
    fn test_shot_quality() {
        let skills = PlayerSkills {
            finishing: 80.0,
            shooting: 60.0,
            ..PlayerSkills::default()
        };

        assert_eq!(skills.shot_quality(), 70.0);
    }
}
