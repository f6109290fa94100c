//! The active risk register and its audit history. Removal and the matching
//! history insert are one logical unit: the entry is built before the risk
//! leaves the register, and an unknown id fails without touching either
//! list.

use super::history::{RiskAction, RiskHistoryEntry};
use super::{aggregate, next_risk_id};
use crate::core::{Risk, RiskMetrics};
use crate::errors::MetricsError;
use chrono::{DateTime, Utc};
use im::Vector;

#[derive(Clone, Debug, Default)]
pub struct RiskRegister {
    active: Vec<Risk>,
    history: Vector<RiskHistoryEntry>,
}

impl RiskRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_risks(risks: Vec<Risk>) -> Self {
        Self {
            active: risks,
            history: Vector::new(),
        }
    }

    pub fn active(&self) -> &[Risk] {
        &self.active
    }

    pub fn history(&self) -> &Vector<RiskHistoryEntry> {
        &self.history
    }

    /// Sequential id for the next new risk (`R001` when empty).
    pub fn next_id(&self) -> String {
        next_risk_id(&self.active)
    }

    pub fn add(&mut self, risk: Risk) {
        self.active.push(risk);
    }

    /// Resolve a risk: remove it from the register and append a `resolved`
    /// history entry carrying its full snapshot.
    pub fn resolve(&mut self, risk_id: &str, at: DateTime<Utc>) -> Result<(), MetricsError> {
        self.remove_with_action(risk_id, RiskAction::Resolved, at)
    }

    /// Delete a risk: same transition as resolve, recorded as `deleted`.
    pub fn delete(&mut self, risk_id: &str, at: DateTime<Utc>) -> Result<(), MetricsError> {
        self.remove_with_action(risk_id, RiskAction::Deleted, at)
    }

    fn remove_with_action(
        &mut self,
        risk_id: &str,
        action: RiskAction,
        at: DateTime<Utc>,
    ) -> Result<(), MetricsError> {
        let index = self
            .active
            .iter()
            .position(|risk| risk.id == risk_id)
            .ok_or_else(|| MetricsError::RiskNotFound(risk_id.to_string()))?;

        let snapshot = self.active[index].clone();
        self.history
            .push_back(RiskHistoryEntry::removal(action, at, snapshot));
        self.active.remove(index);
        Ok(())
    }

    /// Replace a risk's fields in place and record an `edited` entry. The id
    /// of the replacement selects the register slot.
    pub fn edit(&mut self, risk: Risk, at: DateTime<Utc>) -> Result<(), MetricsError> {
        let index = self
            .active
            .iter()
            .position(|existing| existing.id == risk.id)
            .ok_or_else(|| MetricsError::RiskNotFound(risk.id.clone()))?;

        self.history.push_back(RiskHistoryEntry::edit(risk.id.clone(), at));
        self.active[index] = risk;
        Ok(())
    }

    pub fn metrics(&self) -> RiskMetrics {
        aggregate(&self.active)
    }
}
