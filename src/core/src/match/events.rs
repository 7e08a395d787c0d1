use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchEventType {
    Kickoff,
    Goal,
    Shot,
    Save,
    Corner,
    Foul,
    YellowCard,
    RedCard,
    Injury,
    Substitution,
    FullTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventSeverity {
    Low,
    Medium,
    High,
}

/// Append-only log entry. Ordering in the event log is emission order,
/// which is chronological by minute.
#[derive(Debug, Clone, Serialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub event_type: MatchEventType,
    pub team_id: u32,
    pub player_id: Option<u32>,
    pub description: String,
    pub severity: Option<EventSeverity>,
}

impl MatchEvent {
    pub fn new(minute: u8, event_type: MatchEventType, team_id: u32, description: String) -> Self {
        MatchEvent {
            minute,
            event_type,
            team_id,
            player_id: None,
            description,
            severity: None,
        }
    }

    pub fn with_player(mut self, player_id: u32) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_severity(mut self, severity: EventSeverity) -> Self {
        self.severity = Some(severity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builders() {
        let event = MatchEvent::new(12, MatchEventType::Goal, 3, String::from("Goal"))
            .with_player(44)
            .with_severity(EventSeverity::High);

        assert_eq!(event.minute, 12);
        assert_eq!(event.event_type, MatchEventType::Goal);
        assert_eq!(event.team_id, 3);
        assert_eq!(event.player_id, Some(44));
        assert_eq!(event.severity, Some(EventSeverity::High));
    }

    #[test]
    fn test_plain_event_has_no_player_or_severity() {
        let event = MatchEvent::new(1, MatchEventType::Corner, 3, String::from("Corner"));

        assert_eq!(event.player_id, None);
        assert_eq!(event.severity, None);
    }
}
