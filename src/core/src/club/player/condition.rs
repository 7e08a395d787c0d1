pub const CONDITION_MAX_VALUE: f32 = 100.0;

/// Mutable per-match condition. Energy and moral change during a match;
/// fitness is read-only input from the training layer.
#[derive(Debug, Copy, Clone)]
pub struct PlayerCondition {
    pub energy: f32,
    pub fitness: f32,
    pub moral: f32,
}

impl Default for PlayerCondition {
    fn default() -> Self {
        PlayerCondition {
            energy: CONDITION_MAX_VALUE,
            fitness: CONDITION_MAX_VALUE,
            moral: 50.0,
        }
    }
}

impl PlayerCondition {
    pub fn drain_energy(&mut self, amount: f32) {
        self.energy = (self.energy - amount).clamp(0.0, CONDITION_MAX_VALUE);
    }

    pub fn energy_percentage(&self) -> u32 {
        (self.energy * 100.0 / CONDITION_MAX_VALUE).floor() as u32
    }

    pub fn is_tired(&self, threshold: f32) -> bool {
        self.energy < threshold
    }
}
