//! Tunable economy parameters.

use serde::{Deserialize, Serialize};

/// Product-tunable economy constants.
///
/// The curve shapes are fixed in `valuation` (cost grows cubically,
/// salary quadratically); the flat amounts below are balance knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EconomyConfig {
    /// Fee charged when the scouting network is queried. Refunded if the
    /// profile source fails.
    pub scout_cost: u32,
    /// Payday fires after every N-th match.
    pub payday_interval: u32,
    /// Credits awarded for a home win.
    pub win_payout: u32,
    /// Credits awarded for a draw.
    pub draw_payout: u32,
    /// Consolation credits for a loss.
    pub loss_payout: u32,
    /// Opening balance for a new campaign.
    pub starting_credits: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            scout_cost: 50,
            payday_interval: 3,
            win_payout: 400,
            draw_payout: 150,
            loss_payout: 75,
            starting_credits: 1500,
        }
    }
}
