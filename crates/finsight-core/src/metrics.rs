use crate::types::{FinancialData, Metrics, Money};

/// Assumed cost of goods sold as a percentage of revenue, used when no COGS
/// line item is reported.
pub const DEFAULT_COGS_PERCENTAGE: f64 = 85.0;

const DAYS_PER_YEAR: f64 = 365.0;

/// Derive the full ratio set from a financial statement record.
///
/// Pure function: the input is never mutated and the output depends only on
/// `data` and `cogs_percentage`. Zero denominators propagate as IEEE
/// Infinity/NaN per standard float division; downstream threshold checks
/// treat NaN as neither low nor high, so no sentinel substitution happens
/// here.
pub fn calculate_metrics(data: &FinancialData, cogs_percentage: f64) -> Metrics {
    let income = &data.income_statement;
    let current = &data.assets.current_assets;
    let non_current_liab = &data.liabilities.non_current_liabilities;
    let current_liab = &data.liabilities.current_liabilities;

    // Totals. Sub-account mappings are summed order-independently.
    let total_fixed_assets: Money = data.assets.fixed_assets.values().sum();
    let total_current_assets = current.inventories
        + current.trade_receivables
        + current.cash
        + current.other_current;
    let total_assets = total_fixed_assets + total_current_assets;

    let total_equity: Money = data.liabilities.equity.values().sum();
    let total_non_current_liab = non_current_liab.long_term_borrowings
        + non_current_liab.deferred_tax
        + non_current_liab.long_term_provisions;
    let total_current_liab = current_liab.trade_payables
        + current_liab.other_current_liabilities
        + current_liab.short_term_provisions
        + current_liab.current_liability;
    let total_liabilities = total_non_current_liab + total_current_liab;

    // Profitability
    let net_margin = income.pat / income.revenue * 100.0;
    let roe = income.pat / total_equity * 100.0;
    let roa = income.pat / total_assets * 100.0;

    // Liquidity
    let current_ratio = total_current_assets / total_current_liab;
    let quick_ratio = (total_current_assets - current.inventories) / total_current_liab;
    let cash_ratio = current.cash / total_current_liab;

    // Leverage. Only long-term borrowings count as debt here; current
    // liabilities are deliberately excluded.
    let debt_to_equity = non_current_liab.long_term_borrowings / total_equity;
    let debt_to_assets = non_current_liab.long_term_borrowings / total_assets;

    // Efficiency
    let asset_turnover = income.revenue / total_assets;

    let working_capital = total_current_assets - total_current_liab;

    // Cash-conversion cycle on estimated COGS
    let estimated_cogs = income.revenue * cogs_percentage / 100.0;
    let dio = current.inventories / estimated_cogs * DAYS_PER_YEAR;
    let dso = current.trade_receivables / income.revenue * DAYS_PER_YEAR;
    let dpo = current_liab.trade_payables / estimated_cogs * DAYS_PER_YEAR;
    let ccc = dio + dso - dpo;

    Metrics {
        total_assets,
        total_equity,
        total_liabilities,
        total_current_assets,
        total_current_liab,
        working_capital,
        net_margin,
        roe,
        roa,
        current_ratio,
        quick_ratio,
        cash_ratio,
        debt_to_equity,
        debt_to_assets,
        asset_turnover,
        dio,
        dso,
        dpo,
        ccc,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_data;
    use crate::types::CurrentLiabilities;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_scenario() {
        let m = calculate_metrics(&sample_data(), 85.0);

        assert_eq!(m.total_current_assets, 500_000.0);
        assert_eq!(m.total_current_liab, 400_000.0);
        assert_eq!(m.total_assets, 1_200_000.0);
        assert_eq!(m.total_equity, 600_000.0);
        assert_eq!(m.total_liabilities, 600_000.0);

        assert_eq!(m.net_margin, 10.0);
        assert_eq!(m.current_ratio, 1.25);
        assert_eq!(m.quick_ratio, 1.0);
        assert_eq!(m.cash_ratio, 0.125);
        assert!((m.debt_to_equity - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(m.working_capital, 100_000.0);
    }

    #[test]
    fn test_cash_conversion_cycle() {
        let m = calculate_metrics(&sample_data(), 85.0);
        // estimated COGS = 850,000
        let dio = 100_000.0 / 850_000.0 * 365.0;
        let dso = 150_000.0 / 1_000_000.0 * 365.0;
        let dpo = 80_000.0 / 850_000.0 * 365.0;

        assert!((m.dio - dio).abs() < 1e-9);
        assert!((m.dso - dso).abs() < 1e-9);
        assert!((m.dpo - dpo).abs() < 1e-9);
        assert!((m.ccc - (dio + dso - dpo)).abs() < 1e-9);
    }

    #[test]
    fn test_cogs_assumption_moves_days_ratios() {
        let base = calculate_metrics(&sample_data(), 85.0);
        let lean = calculate_metrics(&sample_data(), 50.0);
        // Lower assumed COGS stretches inventory and payable days
        assert!(lean.dio > base.dio);
        assert!(lean.dpo > base.dpo);
        // DSO is COGS-independent
        assert_eq!(lean.dso, base.dso);
    }

    #[test]
    fn test_loss_making_company() {
        let mut data = sample_data();
        data.income_statement.pat = -50_000.0;
        let m = calculate_metrics(&data, 85.0);
        assert_eq!(m.net_margin, -5.0);
        assert!(m.roe < 0.0);
        assert!(m.roa < 0.0);
    }

    #[test]
    fn test_current_ratio_dominates_quick_ratio() {
        let m = calculate_metrics(&sample_data(), 85.0);
        assert!(m.current_ratio >= m.quick_ratio);
    }

    #[test]
    fn test_zero_current_liabilities_give_infinity() {
        let mut data = sample_data();
        data.liabilities.current_liabilities = CurrentLiabilities {
            trade_payables: 0.0,
            other_current_liabilities: 0.0,
            short_term_provisions: 0.0,
            current_liability: 0.0,
        };
        let m = calculate_metrics(&data, 85.0);
        assert!(m.current_ratio.is_infinite() && m.current_ratio > 0.0);
        assert!(m.quick_ratio.is_infinite());
        assert!(m.cash_ratio.is_infinite());
        assert_eq!(m.working_capital, 500_000.0);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let mut data = sample_data();
        data.income_statement.revenue = 0.0;
        data.income_statement.pat = 0.0;
        data.assets.current_assets.inventories = 0.0;
        let m = calculate_metrics(&data, 85.0);
        // 0 / 0 revenue and 0 / 0 estimated COGS
        assert!(m.net_margin.is_nan());
        assert!(m.dio.is_nan());
        // NaN fails every threshold comparison
        assert!(!(m.net_margin < 0.0) && !(m.net_margin >= 0.0));
    }

    #[test]
    fn test_zero_equity_roe_infinite() {
        let mut data = sample_data();
        data.liabilities.equity.clear();
        let m = calculate_metrics(&data, 85.0);
        assert!(m.roe.is_infinite());
        assert!(m.debt_to_equity.is_infinite());
        assert_eq!(m.total_equity, 0.0);
    }

    #[test]
    fn test_determinism() {
        let data = sample_data();
        let a = calculate_metrics(&data, 85.0);
        let b = calculate_metrics(&data, 85.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_optional_fields_do_not_change_ratios() {
        let mut data = sample_data();
        let base = calculate_metrics(&data, 85.0);
        data.income_statement.cost_of_goods_sold = Some(700_000.0);
        data.income_statement.ebitda = Some(250_000.0);
        data.income_statement.gross_profit = Some(300_000.0);
        let with_detail = calculate_metrics(&data, 85.0);
        assert_eq!(base, with_detail);
    }
}
