//! Body part identity and lifecycle.
//!
//! The monster is a closed set of five parts; there is no runtime creation or
//! deletion. Lifecycle moves one way only: `Damaged` -> `Transitioning` ->
//! `Healed`.

use serde::{Deserialize, Serialize};

/// One of the five independently repairable body parts.
///
/// Serialized in camelCase (`head`, `leftArm`, ...) to match the content
/// catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartId {
    Head,
    Torso,
    LeftArm,
    RightArm,
    Legs,
}

impl PartId {
    /// Number of parts on the monster.
    pub const COUNT: usize = 5;

    /// All parts, in catalog order.
    pub const ALL: [PartId; PartId::COUNT] = [
        PartId::Head,
        PartId::Torso,
        PartId::LeftArm,
        PartId::RightArm,
        PartId::Legs,
    ];

    /// Stable index into per-part tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PartId::Head => 0,
            PartId::Torso => 1,
            PartId::LeftArm => 2,
            PartId::RightArm => 3,
            PartId::Legs => 4,
        }
    }

    /// Canonical camelCase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PartId::Head => "head",
            PartId::Torso => "torso",
            PartId::LeftArm => "leftArm",
            PartId::RightArm => "rightArm",
            PartId::Legs => "legs",
        }
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repair state of a single part.
///
/// # Invariants
///
/// - `Healed` is terminal: a healed part never re-enters `Damaged` or
///   `Transitioning`.
/// - At most one part across the whole game is `Transitioning` at any
///   instant; the [`Game`](crate::game::Game) operations enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartLifecycle {
    /// Initial state; the part still shows its monster form.
    #[default]
    Damaged,
    /// Challenge won, timed visual change in progress.
    Transitioning,
    /// Terminal state; the part shows its human form.
    Healed,
}

impl PartLifecycle {
    #[inline]
    pub fn is_damaged(self) -> bool {
        self == PartLifecycle::Damaged
    }

    #[inline]
    pub fn is_transitioning(self) -> bool {
        self == PartLifecycle::Transitioning
    }

    #[inline]
    pub fn is_healed(self) -> bool {
        self == PartLifecycle::Healed
    }
}
