// ═══════════════════════════════════════════════════════════════════
// Model Tests — domain types, money rounding, gain-rate marker
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use stock_portfolio_core::models::holding::Holding;
use stock_portfolio_core::models::portfolio::{
    IncludeFlag, Portfolio, PortfolioCreate, PortfolioKind, PortfolioUpdate,
};
use stock_portfolio_core::models::trade::{TradeEvent, TradeLogView, TradeType};
use stock_portfolio_core::models::valuation::{round_money, CostBasis, GainRate};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn sample_create() -> PortfolioCreate {
    PortfolioCreate {
        name: "Growth".into(),
        description: "Long-term picks".into(),
        currency: "usd".into(),
        kind: PortfolioKind::Real,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Display impls
// ═══════════════════════════════════════════════════════════════════

mod display {
    use super::*;

    #[test]
    fn include_flag() {
        assert_eq!(IncludeFlag::Y.to_string(), "Y");
        assert_eq!(IncludeFlag::N.to_string(), "N");
    }

    #[test]
    fn portfolio_kind() {
        assert_eq!(PortfolioKind::Real.to_string(), "Real");
        assert_eq!(PortfolioKind::Fake.to_string(), "Fake");
    }

    #[test]
    fn trade_type() {
        assert_eq!(TradeType::Buy.to_string(), "Buy");
        assert_eq!(TradeType::Sell.to_string(), "Sell");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn of_starts_included_in_totals() {
        let member = Uuid::new_v4();
        let portfolio = Portfolio::of(sample_create(), member);
        assert_eq!(portfolio.include_flag, IncludeFlag::Y);
        assert_eq!(portfolio.member_id, member);
    }

    #[test]
    fn of_uppercases_currency() {
        let portfolio = Portfolio::of(sample_create(), Uuid::new_v4());
        assert_eq!(portfolio.currency, "USD");
    }

    #[test]
    fn of_assigns_unique_ids() {
        let a = Portfolio::of(sample_create(), Uuid::new_v4());
        let b = Portfolio::of(sample_create(), Uuid::new_v4());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn apply_keeps_id_and_member() {
        let member = Uuid::new_v4();
        let original = Portfolio::of(sample_create(), member);
        let updated = original.apply(PortfolioUpdate {
            name: "Dividends".into(),
            description: "Income picks".into(),
            currency: "krw".into(),
            kind: PortfolioKind::Fake,
            include_flag: IncludeFlag::N,
        });

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.member_id, member);
        assert_eq!(updated.name, "Dividends");
        assert_eq!(updated.currency, "KRW");
        assert_eq!(updated.kind, PortfolioKind::Fake);
        assert_eq!(updated.include_flag, IncludeFlag::N);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn new_uppercases_and_trims_code() {
        let holding = Holding::new("  aapl ", Uuid::new_v4());
        assert_eq!(holding.stock_code, "AAPL");
    }

    #[test]
    fn new_links_portfolio() {
        let portfolio_id = Uuid::new_v4();
        let holding = Holding::new("005930", portfolio_id);
        assert_eq!(holding.portfolio_id, portfolio_id);
    }

    #[test]
    fn numeric_codes_survive_normalization() {
        let holding = Holding::new("005930", Uuid::new_v4());
        assert_eq!(holding.stock_code, "005930");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TradeEvent & TradeLogView
// ═══════════════════════════════════════════════════════════════════

mod trade {
    use super::*;

    #[test]
    fn buy_sets_type_and_fields() {
        let holding_id = Uuid::new_v4();
        let event = TradeEvent::buy(holding_id, dec!(1000), dec!(2), dt(2023, 10, 26), dec!(990));

        assert_eq!(event.trade_type, TradeType::Buy);
        assert_eq!(event.holding_id, holding_id);
        assert_eq!(event.unit_price, dec!(1000));
        assert_eq!(event.quantity, dec!(2));
        assert_eq!(event.market_price, dec!(990));
    }

    #[test]
    fn total_price_is_unit_price_times_quantity() {
        let event = TradeEvent::buy(Uuid::new_v4(), dec!(1000), dec!(2), dt(2023, 10, 26), dec!(0));
        assert_eq!(event.total_price(), dec!(2000.00));
    }

    #[test]
    fn total_price_rounds_half_up() {
        let event = TradeEvent::buy(Uuid::new_v4(), dec!(0.335), dec!(0.1), dt(2024, 1, 2), dec!(0));
        // 0.0335 rounds to 0.03; 0.035 would round to 0.04
        assert_eq!(event.total_price(), dec!(0.03));

        let event = TradeEvent::buy(Uuid::new_v4(), dec!(0.35), dec!(0.1), dt(2024, 1, 2), dec!(0));
        assert_eq!(event.total_price(), dec!(0.04));
    }

    #[test]
    fn log_view_mirrors_event() {
        let event = TradeEvent::buy(Uuid::new_v4(), dec!(1000), dec!(2), dt(2023, 10, 26), dec!(0));
        let view = TradeLogView::from_event(&event);

        assert_eq!(view.id, event.id);
        assert_eq!(view.trade_type, TradeType::Buy);
        assert_eq!(view.unit_price, dec!(1000));
        assert_eq!(view.quantity, dec!(2));
        assert_eq!(view.total_price, dec!(2000.00));
        assert_eq!(view.traded_at, event.traded_at);
    }

    #[test]
    fn log_view_profit_is_zero_for_buys() {
        let event = TradeEvent::buy(Uuid::new_v4(), dec!(500), dec!(3), dt(2023, 10, 26), dec!(0));
        let view = TradeLogView::from_event(&event);
        assert_eq!(view.profit, Decimal::ZERO);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Money rounding
// ═══════════════════════════════════════════════════════════════════

mod rounding {
    use super::*;

    #[test]
    fn rounds_half_up_at_two_decimals() {
        assert_eq!(round_money(dec!(2.005)), dec!(2.01));
        assert_eq!(round_money(dec!(2.004)), dec!(2.00));
        assert_eq!(round_money(dec!(1234.567)), dec!(1234.57));
    }

    #[test]
    fn negative_midpoint_rounds_away_from_zero() {
        // Matches HALF_UP on losses: -2.005 becomes -2.01
        assert_eq!(round_money(dec!(-2.005)), dec!(-2.01));
    }

    #[test]
    fn is_idempotent() {
        let once = round_money(dec!(99.995));
        assert_eq!(round_money(once), once);
    }

    #[test]
    fn leaves_already_scaled_values_alone() {
        assert_eq!(round_money(dec!(10.25)), dec!(10.25));
        assert_eq!(round_money(dec!(0)), dec!(0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CostBasis
// ═══════════════════════════════════════════════════════════════════

mod cost_basis {
    use super::*;

    #[test]
    fn total_cost_is_average_times_quantity() {
        let basis = CostBasis {
            quantity: dec!(2.00),
            average_cost: dec!(1000.00),
        };
        assert_eq!(basis.total_cost(), dec!(2000.00));
    }

    #[test]
    fn zero_const_is_zero_basis() {
        assert!(CostBasis::ZERO.is_zero_basis());
        assert_eq!(CostBasis::ZERO.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn zero_cost_position_is_zero_basis() {
        let basis = CostBasis {
            quantity: dec!(5.00),
            average_cost: Decimal::ZERO,
        };
        assert!(basis.is_zero_basis());
    }

    #[test]
    fn funded_position_is_not_zero_basis() {
        let basis = CostBasis {
            quantity: dec!(1.00),
            average_cost: dec!(0.01),
        };
        assert!(!basis.is_zero_basis());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GainRate
// ═══════════════════════════════════════════════════════════════════

mod gain_rate {
    use super::*;

    #[test]
    fn computed_from_totals() {
        let rate = GainRate::from_totals(dec!(3000.00), dec!(2000.00));
        assert_eq!(rate, GainRate::Computed(dec!(50.00)));
        assert_eq!(rate.percent(), dec!(50.00));
        assert!(!rate.is_zero_basis());
    }

    #[test]
    fn loss_is_negative() {
        let rate = GainRate::from_totals(dec!(500.00), dec!(1000.00));
        assert_eq!(rate.percent(), dec!(-50.00));
    }

    #[test]
    fn zero_cost_basis_degrades_to_marker() {
        let rate = GainRate::from_totals(dec!(3000.00), Decimal::ZERO);
        assert!(rate.is_zero_basis());
        assert_eq!(rate.percent(), Decimal::ZERO);
    }

    #[test]
    fn zero_basis_for_any_asset_value() {
        for value in [dec!(0), dec!(0.01), dec!(1000000)] {
            assert!(GainRate::from_totals(value, Decimal::ZERO).is_zero_basis());
        }
    }

    #[test]
    fn computed_zero_differs_from_zero_basis() {
        // A break-even position is a computed 0, not a degraded one
        let rate = GainRate::from_totals(dec!(1000.00), dec!(1000.00));
        assert_eq!(rate, GainRate::Computed(dec!(0.00)));
        assert!(!rate.is_zero_basis());
    }

    #[test]
    fn rate_rounds_half_up() {
        // 1001/1000 → 0.1% exactly; 1000.05/1000 → 0.005% rounds to 0.01
        let rate = GainRate::from_totals(dec!(1000.05), dec!(1000.00));
        assert_eq!(rate.percent(), dec!(0.01));
    }

    #[test]
    fn serializes_as_resolved_percentage() {
        let computed = serde_json::to_value(GainRate::Computed(dec!(50.00))).unwrap();
        assert_eq!(computed, serde_json::json!("50.00"));

        let degraded = serde_json::to_value(GainRate::ZeroBasis).unwrap();
        assert_eq!(degraded, serde_json::json!("0"));
    }
}
