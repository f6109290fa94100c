// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod financial;
pub mod io;
pub mod phases;
pub mod risk;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    ActualItem, BudgetItem, CostBreakdown, FinancialSummary, Milestone, MilestoneStatus,
    NextMilestone, Phase, ProjectRecords, Risk, RiskMetrics, RiskStatus, ScheduleMetrics, Subphase,
};

pub use crate::errors::MetricsError;

pub use crate::financial::{
    budget_risk_level, summarize_actuals, summarize_budget, variance_percent, BudgetRiskLevel,
};

pub use crate::phases::{
    completion_status, overall_completion, recompute_phases, weighted_completion, CompletionStatus,
};

pub use crate::risk::{
    classify, next_risk_id,
    history::{RiskAction, RiskHistoryEntry},
    register::RiskRegister,
    RiskBand,
};

pub use crate::store::{
    autosave::AutosaveTimer, BudgetSection, MetricsStore, PhaseCompletion, ProjectMetrics,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
