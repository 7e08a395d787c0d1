use crate::r#match::engine::{MatchConfig, MatchEngine};
use crate::r#match::result::MatchResult;
use rayon::prelude::*;

/// Simulate a slate of independent fixtures in parallel.
///
/// Each fixture gets its own engine and randomness; nothing is shared
/// across matches. Results come back in input order.
pub fn simulate_fixtures(configs: Vec<MatchConfig>) -> Vec<MatchResult> {
    configs
        .into_par_iter()
        .map(|config| {
            let mut engine = MatchEngine::new(config);
            engine.simulate_to_completion();
            engine.match_result()
        })
        .collect()
}
