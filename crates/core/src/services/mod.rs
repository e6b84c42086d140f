pub mod cost_basis;
pub mod holdings;
pub mod portfolio;
pub mod trades;
pub mod valuation;
