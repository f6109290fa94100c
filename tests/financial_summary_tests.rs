use sitemetrics::config::VarianceThresholds;
use sitemetrics::core::{ActualItem, BudgetItem};
use sitemetrics::{
    budget_risk_level, summarize_actuals, summarize_budget, variance_percent, BudgetRiskLevel,
};

fn budget_item(ref_code: &str, amount: f64) -> BudgetItem {
    BudgetItem {
        ref_code: ref_code.to_string(),
        description: String::new(),
        amount,
    }
}

fn actual_item(ref_code: &str, invoice_amount: f64, paid_amount: f64) -> ActualItem {
    ActualItem {
        ref_code: ref_code.to_string(),
        description: String::new(),
        company: String::new(),
        invoice_date: String::new(),
        invoice_no: String::new(),
        invoice_amount,
        paid_date: String::new(),
        paid_ref: String::new(),
        paid_amount,
    }
}

#[test]
fn test_budget_only_scenario() {
    let professional = vec![budget_item("P1", 1000.0), budget_item("P2", 2000.0)];
    let contractor = vec![budget_item("Lot 01", 500.0)];

    let summary = summarize_budget(&professional, &contractor);
    assert_eq!(summary.budgeted.opex, 3000.0);
    assert_eq!(summary.budgeted.capex, 500.0);
    assert_eq!(summary.budgeted.total, 3500.0);

    // No actuals entered yet: the actual block stays all-zero and the
    // variance is the negated budget.
    assert_eq!(summary.actual.total, 0.0);
    assert_eq!(summary.variance.opex, -3000.0);
    assert_eq!(summary.variance.capex, -500.0);
    assert_eq!(summary.variance.total, -3500.0);
}

#[test]
fn test_actuals_summary_uses_invoice_and_paid_amounts() {
    let professional = vec![
        actual_item("P1", 1000.0, 900.0),
        actual_item("P2", 2000.0, 2500.0),
    ];
    let contractor = vec![actual_item("Lot 01", 500.0, 500.0)];

    let summary = summarize_actuals(&professional, &contractor);
    assert_eq!(
        summary.budgeted.opex, 3000.0,
        "Budgeted side comes from invoices"
    );
    assert_eq!(
        summary.actual.opex, 3400.0,
        "Actual side comes from payments"
    );
    assert_eq!(summary.actual.capex, 500.0);
    assert_eq!(
        summary.variance.opex, 400.0,
        "Positive variance means overspend"
    );
    assert_eq!(summary.variance.capex, 0.0);
    assert_eq!(summary.variance.total, 400.0);
}

#[test]
fn test_group_invariants_hold_for_negative_and_fractional_amounts() {
    let professional = vec![
        actual_item("P1", 1234.56, -78.9),
        actual_item("P2", -0.125, 3.5),
    ];
    let contractor = vec![actual_item("Lot 01", 99.99, 0.01)];

    let summary = summarize_actuals(&professional, &contractor);
    assert_eq!(
        summary.budgeted.total,
        summary.budgeted.opex + summary.budgeted.capex
    );
    assert_eq!(
        summary.actual.total,
        summary.actual.opex + summary.actual.capex
    );
    assert_eq!(
        summary.variance.total,
        summary.actual.total - summary.budgeted.total,
        "Total variance is defined against the totals, not summed per category"
    );
}

#[test]
fn test_variance_percent_guards_zero_budget() {
    let empty = summarize_budget(&[], &[]);
    assert_eq!(
        variance_percent(&empty),
        None,
        "Percentage is undefined without a budget to divide by"
    );

    let summary = summarize_actuals(&[actual_item("P1", 1000.0, 1200.0)], &[]);
    assert_eq!(variance_percent(&summary), Some(20.0));
}

#[test]
fn test_budget_risk_levels() {
    let thresholds = VarianceThresholds::default();
    let overspend = |paid: f64| summarize_actuals(&[actual_item("P1", 1000.0, paid)], &[]);

    assert_eq!(
        budget_risk_level(&overspend(1250.0), &thresholds),
        BudgetRiskLevel::High
    );
    assert_eq!(
        budget_risk_level(&overspend(1150.0), &thresholds),
        BudgetRiskLevel::Medium
    );
    assert_eq!(
        budget_risk_level(&overspend(1200.0), &thresholds),
        BudgetRiskLevel::Medium,
        "Exactly 20% is not above the high threshold"
    );
    assert_eq!(
        budget_risk_level(&overspend(1050.0), &thresholds),
        BudgetRiskLevel::Low
    );
    assert_eq!(
        budget_risk_level(&summarize_budget(&[], &[]), &thresholds),
        BudgetRiskLevel::Low,
        "Undefined percentage reads as low"
    );
}

#[test]
fn test_summaries_are_idempotent() {
    let professional = vec![actual_item("P1", 1000.0 / 3.0, 0.1 + 0.2)];
    let contractor = vec![actual_item("Lot 01", 7.0 / 11.0, 2.5)];

    let first = summarize_actuals(&professional, &contractor);
    let second = summarize_actuals(&professional, &contractor);
    assert_eq!(first, second, "Same inputs must produce bit-identical output");
}
