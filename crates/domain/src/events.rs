//! Events emitted by game operations.
//!
//! Operations return the events they caused instead of calling outward;
//! the presentation layer reacts to them (scheduling the heal timer,
//! logging) after the mutation has already happened.

use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeKind;
use crate::ids::SessionId;
use crate::part::PartId;

/// Something observable that a game operation caused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    /// A part's detail overlay became the active one.
    OverlayOpened { part: PartId },
    /// A part's detail overlay closed; any unfinished challenge in it
    /// was discarded.
    OverlayClosed { part: PartId },
    /// A fresh challenge session opened inside the active overlay.
    ChallengeStarted {
        part: PartId,
        session_id: SessionId,
        kind: ChallengeKind,
    },
    /// The player backed out of a challenge without finishing it.
    ChallengeCancelled { part: PartId, session_id: SessionId },
    /// The challenge reached its won state.
    ChallengeWon { part: PartId, session_id: SessionId },
    /// The part left `Damaged` and its heal transition is running.
    HealingStarted { part: PartId },
    /// The heal transition finished; the part is permanently healed.
    PartHealed { part: PartId },
    /// Every part is healed.
    AllPartsHealed,
    /// The game returned to its initial all-damaged state.
    GameReset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_camel_case_tags() {
        let event = GameEvent::HealingStarted {
            part: PartId::LeftArm,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"healingStarted":{"part":"leftArm"}}"#);
    }

    #[test]
    fn test_events_round_trip() {
        let event = GameEvent::ChallengeStarted {
            part: PartId::Head,
            session_id: crate::ids::SessionId::new(),
            kind: ChallengeKind::Quiz,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
