/// Closed set of on-field roles. Scorer selection and the strength
/// weight tables match on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPosition::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, PlayerPosition::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, PlayerPosition::Midfielder)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, PlayerPosition::Forward)
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DF",
            PlayerPosition::Midfielder => "MF",
            PlayerPosition::Forward => "FW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names() {
        assert_eq!(PlayerPosition::Goalkeeper.get_short_name(), "GK");
        assert_eq!(PlayerPosition::Defender.get_short_name(), "DF");
        assert_eq!(PlayerPosition::Midfielder.get_short_name(), "MF");
        assert_eq!(PlayerPosition::Forward.get_short_name(), "FW");
    }

    #[test]
    fn test_role_predicates() {
        assert!(PlayerPosition::Goalkeeper.is_goalkeeper());
        assert!(PlayerPosition::Defender.is_defender());
        assert!(PlayerPosition::Midfielder.is_midfielder());
        assert!(PlayerPosition::Forward.is_forward());
        assert!(!PlayerPosition::Forward.is_goalkeeper());
    }
}
