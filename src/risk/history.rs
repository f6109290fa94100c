//! Append-only audit trail for register transitions. One entry per
//! transition; entries are never mutated after insertion.

use crate::core::Risk;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Resolved,
    Deleted,
    Edited,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskHistoryEntry {
    pub risk_id: String,
    pub action: RiskAction,
    pub date: DateTime<Utc>,
    /// Full field snapshot at the moment of removal. Edits record no
    /// snapshot; the live register still holds the risk.
    pub snapshot: Option<Risk>,
}

impl RiskHistoryEntry {
    pub fn removal(action: RiskAction, at: DateTime<Utc>, risk: Risk) -> Self {
        Self {
            risk_id: risk.id.clone(),
            action,
            date: at,
            snapshot: Some(risk),
        }
    }

    pub fn edit(risk_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            risk_id: risk_id.into(),
            action: RiskAction::Edited,
            date: at,
            snapshot: None,
        }
    }
}
