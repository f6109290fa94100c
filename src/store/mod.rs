//! The shared metrics holder. One writer, many readers: every mutator
//! replaces the raw records it covers and synchronously recomputes the whole
//! derived bundle from scratch before the lock is released. Readers get
//! cloned snapshots, never references into the store.

pub mod autosave;

use crate::config;
use crate::core::input;
use crate::core::{
    ActualItem, BudgetItem, FinancialSummary, Milestone, Phase, ProjectRecords, Risk, RiskMetrics,
    ScheduleMetrics,
};
use crate::errors::MetricsError;
use crate::financial::{self, BudgetRiskLevel};
use crate::phases;
use crate::risk::history::RiskHistoryEntry;
use crate::risk::register::RiskRegister;
use crate::schedule;
use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Which budget table a form edit addresses. Professional lines roll into
/// opex, contractor lines into capex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetSection {
    Professional,
    Contractor,
}

/// Derived completion for one phase, as read by dashboards and reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseCompletion {
    pub id: String,
    pub name: String,
    pub completion: f64,
}

/// The full derived bundle. Pure data: recomputing on unchanged records
/// yields a bit-identical value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub overall_completion: u32,
    pub phases: Vec<PhaseCompletion>,
    pub financial: FinancialSummary,
    pub variance_percent: Option<f64>,
    pub budget_risk: BudgetRiskLevel,
    pub risks: RiskMetrics,
    pub schedule: ScheduleMetrics,
}

struct StoreInner {
    records: ProjectRecords,
    register: RiskRegister,
    metrics: ProjectMetrics,
    today: NaiveDate,
    dirty: bool,
}

pub struct MetricsStore {
    inner: RwLock<StoreInner>,
}

impl MetricsStore {
    pub fn new(today: NaiveDate) -> Self {
        Self::load(ProjectRecords::default(), today)
    }

    /// Seed the store from a record bundle. Numeric fields are clamped back
    /// into their domains first, the risks list moves into the register, and
    /// everything derived is computed up front.
    pub fn load(mut records: ProjectRecords, today: NaiveDate) -> Self {
        records.sanitize();
        let register = RiskRegister::from_risks(records.risks.clone());
        let mut inner = StoreInner {
            records,
            register,
            metrics: ProjectMetrics::default(),
            today,
            dirty: false,
        };
        recompute(&mut inner);
        inner.dirty = false;
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub fn set_phases(&self, phases: Vec<Phase>) {
        let mut inner = self.inner.write();
        inner.records.phases = phases;
        recompute(&mut inner);
    }

    /// Apply one completion edit straight off a form field. The raw text is
    /// coerced (empty/garbage to 0, anything else clamped to 0-100) before
    /// the phase recomputes. Unknown ids are ignored, matching a form that
    /// can only edit rows it renders.
    pub fn set_subphase_completion(&self, phase_id: &str, subphase_id: &str, raw: &str) {
        let value = input::parse_percent(raw);
        let mut inner = self.inner.write();
        let Some(phase) = inner.records.phases.iter_mut().find(|p| p.id == phase_id) else {
            return;
        };
        let Some(subphase) = phase.subphases.iter_mut().find(|s| s.id == subphase_id) else {
            return;
        };
        subphase.completed = value;
        recompute(&mut inner);
    }

    pub fn set_budget(&self, professional: Vec<BudgetItem>, contractor: Vec<BudgetItem>) {
        let mut inner = self.inner.write();
        inner.records.professional_budget = professional;
        inner.records.contractor_budget = contractor;
        recompute(&mut inner);
    }

    /// Apply one budget-amount edit off a form field. Raw text coerces to 0;
    /// unknown refs are ignored.
    pub fn set_budget_amount(&self, section: BudgetSection, ref_code: &str, raw: &str) {
        let amount = input::parse_amount(raw);
        let mut inner = self.inner.write();
        let items = match section {
            BudgetSection::Professional => &mut inner.records.professional_budget,
            BudgetSection::Contractor => &mut inner.records.contractor_budget,
        };
        let Some(item) = items.iter_mut().find(|item| item.ref_code == ref_code) else {
            return;
        };
        item.amount = amount;
        recompute(&mut inner);
    }

    pub fn set_actuals(&self, professional: Vec<ActualItem>, contractor: Vec<ActualItem>) {
        let mut inner = self.inner.write();
        inner.records.professional_actuals = professional;
        inner.records.contractor_actuals = contractor;
        recompute(&mut inner);
    }

    pub fn set_milestones(&self, milestones: Vec<Milestone>) {
        let mut inner = self.inner.write();
        inner.records.milestones = milestones;
        recompute(&mut inner);
    }

    pub fn next_risk_id(&self) -> String {
        self.inner.read().register.next_id()
    }

    pub fn add_risk(&self, risk: Risk) {
        let mut inner = self.inner.write();
        inner.register.add(risk);
        recompute(&mut inner);
    }

    pub fn resolve_risk(&self, risk_id: &str, at: DateTime<Utc>) -> Result<(), MetricsError> {
        let mut inner = self.inner.write();
        inner.register.resolve(risk_id, at)?;
        recompute(&mut inner);
        Ok(())
    }

    pub fn delete_risk(&self, risk_id: &str, at: DateTime<Utc>) -> Result<(), MetricsError> {
        let mut inner = self.inner.write();
        inner.register.delete(risk_id, at)?;
        recompute(&mut inner);
        Ok(())
    }

    pub fn edit_risk(&self, risk: Risk, at: DateTime<Utc>) -> Result<(), MetricsError> {
        let mut inner = self.inner.write();
        inner.register.edit(risk, at)?;
        recompute(&mut inner);
        Ok(())
    }

    /// Latest derived bundle.
    pub fn metrics(&self) -> ProjectMetrics {
        self.inner.read().metrics.clone()
    }

    /// Latest raw records, with phase completions already recomputed.
    pub fn records(&self) -> ProjectRecords {
        self.inner.read().records.clone()
    }

    pub fn risk_history(&self) -> Vector<RiskHistoryEntry> {
        self.inner.read().register.history().clone()
    }

    /// True when an edit has happened since the last `mark_saved`.
    pub fn is_dirty(&self) -> bool {
        self.inner.read().dirty
    }

    pub fn mark_saved(&self) {
        self.inner.write().dirty = false;
    }
}

fn recompute(inner: &mut StoreInner) {
    phases::recompute_phases(&mut inner.records.phases);
    inner.records.risks = inner.register.active().to_vec();

    // Budget-only edits never populate the actual block; the summary comes
    // from the actual tables once any actual rows exist.
    let financial = if inner.records.professional_actuals.is_empty()
        && inner.records.contractor_actuals.is_empty()
    {
        financial::summarize_budget(
            &inner.records.professional_budget,
            &inner.records.contractor_budget,
        )
    } else {
        financial::summarize_actuals(
            &inner.records.professional_actuals,
            &inner.records.contractor_actuals,
        )
    };

    let thresholds = &config::get_config().variance;
    inner.metrics = ProjectMetrics {
        overall_completion: phases::overall_completion(&inner.records.phases),
        phases: inner
            .records
            .phases
            .iter()
            .map(|phase| PhaseCompletion {
                id: phase.id.clone(),
                name: phase.name.clone(),
                completion: phase.completion,
            })
            .collect(),
        variance_percent: financial::variance_percent(&financial),
        budget_risk: financial::budget_risk_level(&financial, thresholds),
        financial,
        risks: inner.register.metrics(),
        schedule: schedule::compute(&inner.records.milestones, inner.today),
    };
    inner.dirty = true;
    log::debug!(
        "recomputed project metrics: {}% complete, {} active risks",
        inner.metrics.overall_completion,
        inner.metrics.risks.total
    );
}
