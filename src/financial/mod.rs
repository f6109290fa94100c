//! Budget and actual-spend roll-ups. Professional lines sum into opex,
//! contractor lines into capex; variance is actual minus budgeted with
//! positive meaning overspend. Amounts are plain f64 currency units with no
//! rounding until display time.

use crate::config::VarianceThresholds;
use crate::core::{ActualItem, BudgetItem, CostBreakdown, FinancialSummary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary for budget-only screens: no actuals have been entered yet, so the
/// actual block is all zeros and every variance is the negated budget.
pub fn summarize_budget(
    professional: &[BudgetItem],
    contractor: &[BudgetItem],
) -> FinancialSummary {
    let budgeted = CostBreakdown::from_parts(
        professional.iter().map(|item| item.amount).sum(),
        contractor.iter().map(|item| item.amount).sum(),
    );
    let actual = CostBreakdown::default();
    FinancialSummary {
        budgeted,
        actual,
        variance: variance_between(&actual, &budgeted),
    }
}

/// Summary from the actual-spend tables: invoiced amounts are the budgeted
/// side, paid amounts the actual side.
pub fn summarize_actuals(
    professional: &[ActualItem],
    contractor: &[ActualItem],
) -> FinancialSummary {
    let budgeted = CostBreakdown::from_parts(
        professional.iter().map(|item| item.invoice_amount).sum(),
        contractor.iter().map(|item| item.invoice_amount).sum(),
    );
    let actual = CostBreakdown::from_parts(
        professional.iter().map(|item| item.paid_amount).sum(),
        contractor.iter().map(|item| item.paid_amount).sum(),
    );
    FinancialSummary {
        budgeted,
        actual,
        variance: variance_between(&actual, &budgeted),
    }
}

// variance.total is actual.total - budgeted.total, not the sum of the
// per-category variances; the two can differ in floating point.
fn variance_between(actual: &CostBreakdown, budgeted: &CostBreakdown) -> CostBreakdown {
    CostBreakdown {
        opex: actual.opex - budgeted.opex,
        capex: actual.capex - budgeted.capex,
        total: actual.total - budgeted.total,
    }
}

/// Total variance as a percentage of the total budget. Undefined when there
/// is no budget to divide by.
pub fn variance_percent(summary: &FinancialSummary) -> Option<f64> {
    if summary.budgeted.total > 0.0 {
        Some(summary.variance.total / summary.budgeted.total * 100.0)
    } else {
        None
    }
}

/// Overspend band shown on the dashboard risk card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRiskLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl fmt::Display for BudgetRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetRiskLevel::High => "High",
            BudgetRiskLevel::Medium => "Medium",
            BudgetRiskLevel::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

pub fn budget_risk_level(
    summary: &FinancialSummary,
    thresholds: &VarianceThresholds,
) -> BudgetRiskLevel {
    match variance_percent(summary) {
        Some(percent) if percent > thresholds.high => BudgetRiskLevel::High,
        Some(percent) if percent > thresholds.medium => BudgetRiskLevel::Medium,
        _ => BudgetRiskLevel::Low,
    }
}
