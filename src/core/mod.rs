pub mod input;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work inside a phase. `baseline` is the subphase's relative
/// weight within the phase (0-100); `completed` is its own percent done
/// (0-100). The two are edited independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subphase {
    pub id: String,
    pub name: String,
    pub baseline: f64,
    pub completed: f64,
}

impl Subphase {
    pub fn new(id: impl Into<String>, name: impl Into<String>, baseline: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            baseline,
            completed: 0.0,
        }
    }
}

/// A top-level work breakdown phase. `completion` is always derived from the
/// subphases (see `phases::weighted_completion`) and is overwritten on every
/// recompute; it is never an independent source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub subphases: Vec<Subphase>,
    #[serde(default)]
    pub completion: f64,
}

impl Phase {
    pub fn new(id: impl Into<String>, name: impl Into<String>, subphases: Vec<Subphase>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subphases,
            completion: 0.0,
        }
    }
}

/// A single budget line. `ref_code` ties the line to its actual-spend
/// counterpart by convention only; nothing validates the correlation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    #[serde(rename = "ref")]
    pub ref_code: String,
    pub description: String,
    pub amount: f64,
}

/// A single actual-spend line. Invoice and payment dates are free-text as
/// entered on the form; only the amounts feed the aggregation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActualItem {
    #[serde(rename = "ref")]
    pub ref_code: String,
    pub description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub invoice_date: String,
    #[serde(default)]
    pub invoice_no: String,
    #[serde(default)]
    pub invoice_amount: f64,
    #[serde(default)]
    pub paid_date: String,
    #[serde(default)]
    pub paid_ref: String,
    #[serde(default)]
    pub paid_amount: f64,
}

/// One opex/capex/total grouping of a financial summary. `total` is always
/// `opex + capex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub opex: f64,
    pub capex: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn from_parts(opex: f64, capex: f64) -> Self {
        Self {
            opex,
            capex,
            total: opex + capex,
        }
    }
}

/// The derived financial roll-up read by every dashboard view. Positive
/// variance means overspend; the UI color-codes from the sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub budgeted: CostBreakdown,
    pub actual: CostBreakdown,
    pub variance: CostBreakdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Active,
    Resolved,
}

/// An entry in the active risk register. Severity is derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub description: String,
    pub manager: String,
    /// 1-5.
    pub impact: u8,
    /// 1-5.
    pub probability: u8,
    pub mitigation: String,
    pub date: NaiveDate,
    pub status: RiskStatus,
}

impl Risk {
    /// Impact x probability, range 1-25 for in-domain inputs. The widening
    /// keeps the product well defined for out-of-range values that have not
    /// passed through `ProjectRecords::sanitize` yet.
    pub fn severity(&self) -> u16 {
        u16::from(self.impact) * u16::from(self.probability)
    }
}

/// Project-level risk counts. Note the three buckets: the dashboard summary
/// uses only the 15 and 8 cut points, so the per-risk Low and Very Low bands
/// both land in `low_risk`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub total: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub due_date: NaiveDate,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub actual_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMilestone {
    pub name: String,
    pub due_date: NaiveDate,
}

/// Derived milestone counts for the schedule card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub delayed: usize,
    pub next_milestone: Option<NextMilestone>,
}

/// The raw record bundle as edited by the forms, and the on-disk project
/// file format consumed by the CLI. Professional lines roll into opex,
/// contractor lines into capex.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecords {
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub professional_budget: Vec<BudgetItem>,
    #[serde(default)]
    pub contractor_budget: Vec<BudgetItem>,
    #[serde(default)]
    pub professional_actuals: Vec<ActualItem>,
    #[serde(default)]
    pub contractor_actuals: Vec<ActualItem>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl ProjectRecords {
    /// Coerce every numeric field back into its domain. The forms clamp on
    /// entry, but a hand-edited project file can carry anything JSON allows;
    /// this runs on load so the aggregators see only in-range values.
    pub fn sanitize(&mut self) {
        for phase in &mut self.phases {
            for subphase in &mut phase.subphases {
                subphase.baseline = input::clamp_percent(subphase.baseline);
                subphase.completed = input::clamp_percent(subphase.completed);
            }
        }
        for risk in &mut self.risks {
            risk.impact = input::clamp_scale(risk.impact);
            risk.probability = input::clamp_scale(risk.probability);
        }
    }
}
