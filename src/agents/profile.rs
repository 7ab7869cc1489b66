// src/agents/profile.rs

//! Per-agent behavior parameters, attached at creation time instead of being
//! looked up by name at decision time.

use crate::config::DEFAULT_AGGRESSIVENESS;
use serde::{Deserialize, Serialize};

/// How a trader behaves: how eager it is to open positions, and whether it
/// overlays a mean-reversion read of RSI extremes on top of trend following.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub aggressiveness: f64,
    pub mean_reversion: bool,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            aggressiveness: DEFAULT_AGGRESSIVENESS,
            mean_reversion: false,
        }
    }
}

/// One entry of the fixed starting roster.
pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub personality: &'static str,
    pub profile: AgentProfile,
}

/// The fixed six-trader roster the arena starts (and resets) with.
pub const DEFAULT_ROSTER: [RosterEntry; 6] = [
    RosterEntry {
        id: "claude",
        name: "Claude",
        personality: "Thoughtful contrarian, fades crowded extremes",
        profile: AgentProfile {
            aggressiveness: 0.8,
            mean_reversion: true,
        },
    },
    RosterEntry {
        id: "hos-v3",
        name: "HOS v3",
        personality: "House model, aggressive and counter-trend at extremes",
        profile: AgentProfile {
            aggressiveness: 1.2,
            mean_reversion: true,
        },
    },
    RosterEntry {
        id: "deepseek",
        name: "Deepseek",
        personality: "Patient trend follower",
        profile: AgentProfile {
            aggressiveness: 0.6,
            mean_reversion: false,
        },
    },
    RosterEntry {
        id: "gemini",
        name: "Gemini",
        personality: "Cautious, trades only clear trends",
        profile: AgentProfile {
            aggressiveness: 0.5,
            mean_reversion: false,
        },
    },
    RosterEntry {
        id: "qwen",
        name: "Qwen",
        personality: "Active momentum chaser",
        profile: AgentProfile {
            aggressiveness: 0.9,
            mean_reversion: false,
        },
    },
    RosterEntry {
        id: "mistral",
        name: "Mistral",
        personality: "Balanced, middle-of-the-road risk taker",
        profile: AgentProfile {
            aggressiveness: 0.7,
            mean_reversion: false,
        },
    },
];

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_six_unique_ids() {
        let mut ids: Vec<&str> = DEFAULT_ROSTER.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn only_the_designated_pair_mean_reverts() {
        let reverting: Vec<&str> = DEFAULT_ROSTER
            .iter()
            .filter(|e| e.profile.mean_reversion)
            .map(|e| e.name)
            .collect();
        assert_eq!(reverting, vec!["Claude", "HOS v3"]);
    }

    #[test]
    fn default_profile_matches_the_fallback_aggressiveness() {
        let profile = AgentProfile::default();
        assert_eq!(profile.aggressiveness, DEFAULT_AGGRESSIVENESS);
        assert!(!profile.mean_reversion);
    }
}
