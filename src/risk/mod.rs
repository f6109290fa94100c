//! Risk scoring and register maintenance. A risk's severity is its impact
//! times its probability (1-25); the per-risk band and the project-level
//! bucket counts both derive from that single number.

pub mod history;
pub mod register;

use crate::core::{Risk, RiskMetrics, RiskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

pub fn severity(impact: u8, probability: u8) -> u16 {
    u16::from(impact) * u16::from(probability)
}

/// Per-risk classification band, as shown in the 5x5 risk matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    High,
    Medium,
    Low,
    VeryLow,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::High => "High Risk",
            RiskBand::Medium => "Medium Risk",
            RiskBand::Low => "Low Risk",
            RiskBand::VeryLow => "Very Low Risk",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Band thresholds are checked highest first; boundaries are inclusive, so
/// severity 8 is Medium and severity 15 is High.
pub fn classify(impact: u8, probability: u8) -> RiskBand {
    let severity = severity(impact, probability);
    if severity >= 15 {
        RiskBand::High
    } else if severity >= 8 {
        RiskBand::Medium
    } else if severity >= 4 {
        RiskBand::Low
    } else {
        RiskBand::VeryLow
    }
}

/// Project-level bucket counts over the active register.
///
/// The summary uses only the 15 and 8 cut points, so the Low and Very Low
/// bands share the `low_risk` bucket. That asymmetry with the 4-band
/// `classify` is the dashboard's observed behavior and is kept as-is.
pub fn aggregate(risks: &[Risk]) -> RiskMetrics {
    risks
        .iter()
        .filter(|risk| risk.status == RiskStatus::Active)
        .fold(RiskMetrics::default(), |mut acc, risk| {
            let severity = risk.severity();
            acc.total += 1;
            if severity >= 15 {
                acc.high_risk += 1;
            } else if severity >= 8 {
                acc.medium_risk += 1;
            } else {
                acc.low_risk += 1;
            }
            acc
        })
}

/// Next sequential register id: `R` plus a zero-padded counter one past the
/// highest numeric suffix already present. An empty register starts at R001.
pub fn next_risk_id(risks: &[Risk]) -> String {
    let max = risks
        .iter()
        .filter_map(|risk| risk.id.strip_prefix('R')?.parse::<u32>().ok())
        .max();
    format!("R{:03}", max.map_or(1, |n| n + 1))
}
