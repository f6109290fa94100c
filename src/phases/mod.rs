//! Phase completion roll-up. Subphase completion rolls into phase
//! completion by weight, and phase completion rolls into the overall
//! project figure by plain mean.

use crate::core::Phase;
use serde::{Deserialize, Serialize};

/// Weight-normalized completion percentage for one phase.
///
/// A subphase with baseline 45 contributes 45x more than one with baseline 1
/// at the same completion level. Zero total weight means no subphase carries
/// real weight, so the phase reports 0.
pub fn weighted_completion(phase: &Phase) -> f64 {
    let total_weight: f64 = phase.subphases.iter().map(|s| s.baseline).sum();
    if total_weight == 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = phase
        .subphases
        .iter()
        .map(|s| s.completed * s.baseline / 100.0)
        .sum();

    weighted_sum / total_weight * 100.0
}

/// Overwrite every `completion` in place from its subphases. Full
/// recomputation on each call; there are no incremental updates.
pub fn recompute_phases(phases: &mut [Phase]) {
    for phase in phases.iter_mut() {
        phase.completion = weighted_completion(phase);
    }
}

/// Overall project completion: arithmetic mean of phase completions, every
/// phase counted equally, rounded to the nearest whole percent. An empty
/// project is 0% complete.
pub fn overall_completion(phases: &[Phase]) -> u32 {
    if phases.is_empty() {
        return 0;
    }
    let sum: f64 = phases.iter().map(|p| p.completion).sum();
    (sum / phases.len() as f64).round() as u32
}

/// Display band for progress bars and status labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Complete,
    OnTrack,
    AtRisk,
}

pub fn completion_status(completion: f64) -> CompletionStatus {
    if completion >= 100.0 {
        CompletionStatus::Complete
    } else if completion > 40.0 {
        CompletionStatus::OnTrack
    } else {
        CompletionStatus::AtRisk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Subphase;

    fn phase_with(subphases: Vec<(f64, f64)>) -> Phase {
        let subphases = subphases
            .into_iter()
            .enumerate()
            .map(|(i, (baseline, completed))| Subphase {
                id: format!("1.{}", i + 1),
                name: format!("Subphase {}", i + 1),
                baseline,
                completed,
            })
            .collect();
        Phase::new("1.00", "PROJECT CONCEPTION", subphases)
    }

    #[test]
    fn weighting_is_normalized_not_averaged() {
        // 20% of the weight at 50% done, 80% at 0% done.
        let phase = phase_with(vec![(20.0, 50.0), (80.0, 0.0)]);
        assert_eq!(weighted_completion(&phase), 10.0);
    }

    #[test]
    fn zero_total_weight_reports_zero() {
        let phase = phase_with(vec![(0.0, 100.0), (0.0, 100.0)]);
        assert_eq!(weighted_completion(&phase), 0.0);
    }

    #[test]
    fn completion_status_bands() {
        assert_eq!(completion_status(100.0), CompletionStatus::Complete);
        assert_eq!(completion_status(41.0), CompletionStatus::OnTrack);
        assert_eq!(completion_status(40.0), CompletionStatus::AtRisk);
        assert_eq!(completion_status(0.0), CompletionStatus::AtRisk);
    }
}
