use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::portfolio::{IncludeFlag, PortfolioKind};

/// Scale used for all monetary results.
pub const MONEY_DP: u32 = 2;

/// Round a monetary amount to the fixed 2-decimal scale, half-up.
///
/// `MidpointAwayFromZero` matches the half-up rounding the trade ledger
/// figures are recorded with. Rounding happens at every derived figure
/// (quantity, average cost, asset value, gain, gain rate), never only at
/// the end, so results are reproducible.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Quantity and average unit cost derived from a holding's trade ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBasis {
    /// Units held (sum of buy quantities), 2 dp
    pub quantity: Decimal,

    /// Average unit cost: sum of recorded unit prices / quantity, 2 dp.
    /// Zero when the ledger is empty.
    pub average_cost: Decimal,
}

impl CostBasis {
    pub const ZERO: CostBasis = CostBasis {
        quantity: Decimal::ZERO,
        average_cost: Decimal::ZERO,
    };

    /// Total money paid into the position: average cost × quantity, 2 dp.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        round_money(self.average_cost * self.quantity)
    }

    /// True when nothing was paid for the position (no events, or a
    /// zero-cost position). Gain rate degrades to zero in that case.
    #[must_use]
    pub fn is_zero_basis(&self) -> bool {
        self.total_cost().is_zero()
    }
}

/// Unrealized gain rate of a position, in percent of its cost basis.
///
/// A position with no cost basis has no meaningful ratio; instead of a
/// division error the rate carries an explicit `ZeroBasis` marker that
/// resolves to 0.00. The marker is observable in tests and serializes as
/// the resolved percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GainRate {
    /// (asset value / total cost) × 100 − 100, rounded to 2 dp
    Computed(Decimal),
    /// Defined zero for an empty or zero-cost basis
    ZeroBasis,
}

impl GainRate {
    /// Derive the rate from an asset value and the total cost basis.
    #[must_use]
    pub fn from_totals(asset_value: Decimal, total_cost: Decimal) -> Self {
        if total_cost.is_zero() {
            GainRate::ZeroBasis
        } else {
            let rate = asset_value / total_cost * Decimal::ONE_HUNDRED - Decimal::ONE_HUNDRED;
            GainRate::Computed(round_money(rate))
        }
    }

    /// The rate as a percentage; `ZeroBasis` resolves to 0.00.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        match self {
            GainRate::Computed(rate) => *rate,
            GainRate::ZeroBasis => Decimal::ZERO,
        }
    }

    /// True when the rate is the zero-basis degradation, not a computed 0.
    #[must_use]
    pub fn is_zero_basis(&self) -> bool {
        matches!(self, GainRate::ZeroBasis)
    }
}

impl Serialize for GainRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.percent(), serializer)
    }
}

/// Fully valued view of one holding, combining ledger-derived figures
/// with a live quote. Recomputed on every request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationResult {
    pub holding_id: Uuid,
    pub stock_code: String,
    pub name: String,
    pub sector: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,

    /// Current price × quantity, 2 dp
    pub asset_value: Decimal,

    /// (Current price − average cost) × quantity, 2 dp
    pub gain: Decimal,

    pub gain_rate: GainRate,
    pub image_url: String,
}

/// Aggregate valuation of one portfolio.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub portfolio_id: Uuid,

    /// Sum of per-holding asset values
    pub total_asset_value: Decimal,

    /// Sum of per-holding gains
    pub total_gain: Decimal,

    /// Sum of per-holding total cost bases
    pub total_cost_basis: Decimal,

    /// (Total asset value / total cost basis) × 100 − 100
    pub total_gain_rate: GainRate,

    /// Per-holding detail rows
    pub holdings: Vec<ValuationResult>,
}

/// One row in a member's portfolio list.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioListItem {
    pub id: Uuid,
    pub name: String,
    pub kind: PortfolioKind,
    pub include_flag: IncludeFlag,
    pub gain: Decimal,
    pub gain_rate: GainRate,
}

/// Member-level rollup across all portfolios flagged for inclusion.
#[derive(Debug, Clone, Serialize)]
pub struct TotalSummary {
    pub total_asset_value: Decimal,
    pub total_gain: Decimal,
    pub total_gain_rate: GainRate,
}
