//! Reward constants and node classification.
//!
//! Rewards are observed by the learner on *entering* a node.  The constants
//! are ordered `TERMINAL < TRAFFIC < DEFAULT < NEAR_GOAL < GOAL` and must stay
//! pairwise distinct; traffic eligibility keys off `DEFAULT` exactly.

/// Perimeter nodes.  Entering one ends the episode.
pub const TERMINAL: i32 = -100;

/// Ordinary interior intersection.
pub const DEFAULT: i32 = -1;

/// Congested interior intersection.
pub const TRAFFIC: i32 = -10;

/// Non-perimeter neighbor of the destination.
pub const NEAR_GOAL: i32 = 10;

/// The destination.  Entering it ends the episode.
pub const GOAL: i32 = 100;

/// Added to the observed reward when the learner re-enters a node during the
/// same episode (only when the revisit penalty is enabled).
pub const REVISIT_PENALTY: i32 = -50;

/// Structural role of a node.
///
/// Terminal detection uses this tag, never the reward value, so a custom
/// reward that happens to equal `GOAL` does not end episodes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Plain interior node (including near-goal neighbors).
    #[default]
    Interior,
    /// Outer boundary.  Fixed at build time, never reclassified.
    Perimeter,
    /// Interior node marked as congested.
    Traffic,
    /// The single interior destination.
    Destination,
}

impl NodeKind {
    /// `true` for the kinds that end an episode or a greedy walk.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::Perimeter | NodeKind::Destination)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Interior    => "interior",
            NodeKind::Perimeter   => "perimeter",
            NodeKind::Traffic     => "traffic",
            NodeKind::Destination => "destination",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
