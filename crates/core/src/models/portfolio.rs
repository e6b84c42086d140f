use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a portfolio participates in the member-level total rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncludeFlag {
    /// Counted in the member's total summary
    Y,
    /// Excluded from the member's total summary
    N,
}

impl std::fmt::Display for IncludeFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncludeFlag::Y => write!(f, "Y"),
            IncludeFlag::N => write!(f, "N"),
        }
    }
}

/// Kind of portfolio being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioKind {
    /// Backed by a real brokerage account
    Real,
    /// Paper portfolio for simulation
    Fake,
}

impl std::fmt::Display for PortfolioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioKind::Real => write!(f, "Real"),
            PortfolioKind::Fake => write!(f, "Fake"),
        }
    }
}

/// One member-owned portfolio. A portfolio exclusively owns its holdings;
/// deleting it removes them and their trade events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique identifier
    pub id: Uuid,

    /// Owning member
    pub member_id: Uuid,

    /// Display name (non-empty)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// 3-letter display currency code (e.g., "KRW", "USD")
    pub currency: String,

    /// Whether the portfolio counts toward the member's totals
    pub include_flag: IncludeFlag,

    /// Real or paper portfolio
    pub kind: PortfolioKind,
}

/// Fields supplied when creating a portfolio.
/// New portfolios always start included in the member's totals.
#[derive(Debug, Clone)]
pub struct PortfolioCreate {
    pub name: String,
    pub description: String,
    pub currency: String,
    pub kind: PortfolioKind,
}

/// Fields supplied when updating a portfolio.
/// The id and owning member never change.
#[derive(Debug, Clone)]
pub struct PortfolioUpdate {
    pub name: String,
    pub description: String,
    pub currency: String,
    pub kind: PortfolioKind,
    pub include_flag: IncludeFlag,
}

impl Portfolio {
    /// Build a new portfolio for a member from creation fields.
    #[must_use]
    pub fn of(create: PortfolioCreate, member_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            name: create.name,
            description: create.description,
            currency: create.currency.trim().to_uppercase(),
            include_flag: IncludeFlag::Y,
            kind: create.kind,
        }
    }

    /// Apply an update, keeping the id and owning member.
    #[must_use]
    pub fn apply(&self, update: PortfolioUpdate) -> Self {
        Self {
            id: self.id,
            member_id: self.member_id,
            name: update.name,
            description: update.description,
            currency: update.currency.trim().to_uppercase(),
            include_flag: update.include_flag,
            kind: update.kind,
        }
    }
}
