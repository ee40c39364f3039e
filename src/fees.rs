// 💵 Fee Schedule - balance bands and their flat monthly fee
// Each band is closed at the bottom and open at the top.

use crate::error::{Result, Violation};
use serde::{Deserialize, Serialize};

// ============================================================================
// FEE TIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeTier {
    /// Below the reduced threshold
    Standard,

    /// Between the reduced and waived thresholds
    Reduced,

    /// At or above the waived threshold
    Waived,
}

impl FeeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeTier::Standard => "Standard",
            FeeTier::Reduced => "Reduced",
            FeeTier::Waived => "Waived",
        }
    }

    /// Tier for a balance under the standard schedule
    pub fn for_balance(balance: f64) -> Result<FeeTier> {
        FeeSchedule::default().tier_for(balance)
    }

    /// Fee charged for this tier under the standard schedule
    pub fn fee(&self) -> f64 {
        FeeSchedule::default().fee_of(*self)
    }
}

// ============================================================================
// FEE SCHEDULE
// ============================================================================

/// Thresholds and fees for the three tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Balances at or above this pay the reduced fee
    pub reduced_from: f64,

    /// Balances at or above this pay nothing
    pub waived_from: f64,

    pub standard_fee: f64,
    pub reduced_fee: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            reduced_from: 1000.0,
            waived_from: 5000.0,
            standard_fee: 5.0,
            reduced_fee: 2.5,
        }
    }
}

impl FeeSchedule {
    /// Which tier a balance falls into. Negative balances are rejected.
    pub fn tier_for(&self, balance: f64) -> Result<FeeTier> {
        if balance < 0.0 {
            return Err(Violation::NegativeFeeBalance.into());
        }

        if balance < self.reduced_from {
            Ok(FeeTier::Standard)
        } else if balance < self.waived_from {
            Ok(FeeTier::Reduced)
        } else {
            Ok(FeeTier::Waived)
        }
    }

    pub fn fee_of(&self, tier: FeeTier) -> f64 {
        match tier {
            FeeTier::Standard => self.standard_fee,
            FeeTier::Reduced => self.reduced_fee,
            FeeTier::Waived => 0.0,
        }
    }

    /// Monthly fee for a balance
    pub fn fee_for(&self, balance: f64) -> Result<f64> {
        let tier = self.tier_for(balance)?;
        Ok(self.fee_of(tier))
    }
}

// ============================================================================
// TESTS
// ============================================================================
