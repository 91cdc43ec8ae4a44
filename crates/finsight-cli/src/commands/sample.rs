use serde_json::json;

/// A complete sample `FinancialData` document, for trying the tool out and
/// as a template for preparing real statements.
pub fn sample_json() -> String {
    let sample = json!({
        "company_name": "Bharat Precision Components Pvt Ltd",
        "income_statement": {
            "revenue": 48_500_000,
            "other_income": 650_000,
            "total_expenses": 43_200_000,
            "pbt": 5_950_000,
            "pat": 4_380_000,
            "operating_income": 6_100_000,
            "ebitda": 7_400_000,
            "depreciation_amortization": 1_300_000,
            "interest_expense": 850_000,
            "tax_rate": 26.4
        },
        "assets": {
            "fixed_assets": {
                "property_equipment": 18_600_000,
                "intangible_assets": 2_100_000,
                "other_non_current": 3_800_000
            },
            "current_assets": {
                "inventories": 6_900_000,
                "trade_receivables": 8_200_000,
                "cash": 2_750_000,
                "other_current": 1_850_000
            }
        },
        "liabilities": {
            "equity": {
                "share_capital": 5_000_000,
                "reserves_surplus": 21_400_000
            },
            "non_current_liabilities": {
                "long_term_borrowings": 9_500_000,
                "deferred_tax": 1_100_000,
                "long_term_provisions": 600_000
            },
            "current_liabilities": {
                "trade_payables": 4_300_000,
                "other_current_liabilities": 1_700_000,
                "short_term_provisions": 500_000,
                "current_liability": 100_000
            }
        },
        "shareholding": {
            "Arvind Mehta": 3_050_000,
            "Sunita Mehta": 1_200_000,
            "Public": 750_000
        },
        "pending_allotment": {},
        "market_cap": 86_000_000,
        "share_price": 17.2,
        "eps": 0.88,
        "total_shares": 5_000_000
    });
    serde_json::to_string_pretty(&sample).expect("static sample serializes")
}
