//! Shared test fixtures.

use std::collections::BTreeMap;

use crate::types::*;

/// Bare income statement with no optional detail fields.
pub(crate) fn income(revenue: Money, pat: Money) -> IncomeStatement {
    IncomeStatement {
        revenue,
        other_income: 0.0,
        total_expenses: revenue - pat,
        pbt: pat,
        pat,
        gross_income: None,
        cost_of_goods_sold: None,
        gross_profit: None,
        operating_expenses: None,
        selling_general_admin: None,
        research_development: None,
        depreciation_amortization: None,
        operating_income: None,
        interest_expense: None,
        interest_income: None,
        other_non_operating: None,
        income_tax: None,
        tax_rate: None,
        ebitda: None,
        net_income_from_continuing_ops: None,
        basic_eps: None,
        dividend_per_share: None,
    }
}

/// The worked reference scenario: revenue 10L, PAT 1L, current assets 5L
/// against 4L current liabilities, 2L long-term debt on 6L equity. The
/// balance sheet balances (12L assets = 6L equity + 6L liabilities).
pub(crate) fn sample_data() -> FinancialData {
    let mut fixed_assets = BTreeMap::new();
    fixed_assets.insert("property_equipment".to_string(), 500_000.0);
    fixed_assets.insert("intangible_assets".to_string(), 120_000.0);
    fixed_assets.insert("other_non_current".to_string(), 80_000.0);

    let mut equity = BTreeMap::new();
    equity.insert("share_capital".to_string(), 150_000.0);
    equity.insert("reserves_surplus".to_string(), 450_000.0);

    FinancialData {
        company_name: "Sample Manufacturing Ltd".to_string(),
        income_statement: income(1_000_000.0, 100_000.0),
        assets: Assets {
            fixed_assets,
            current_assets: CurrentAssets {
                inventories: 100_000.0,
                trade_receivables: 150_000.0,
                cash: 50_000.0,
                other_current: 200_000.0,
            },
        },
        liabilities: Liabilities {
            equity,
            non_current_liabilities: NonCurrentLiabilities {
                long_term_borrowings: 200_000.0,
                deferred_tax: 0.0,
                long_term_provisions: 0.0,
            },
            current_liabilities: CurrentLiabilities {
                trade_payables: 80_000.0,
                other_current_liabilities: 280_000.0,
                short_term_provisions: 20_000.0,
                current_liability: 20_000.0,
            },
        },
        shareholding: BTreeMap::new(),
        pending_allotment: BTreeMap::new(),
        forex_exposure_usd: None,
        usd_to_inr_rate: None,
        market_cap: None,
        share_price: None,
        eps: None,
        diluted_eps: None,
        total_shares: None,
    }
}
