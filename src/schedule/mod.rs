//! Milestone roll-up for the schedule card.

use crate::core::{Milestone, MilestoneStatus, NextMilestone, ScheduleMetrics};
use chrono::NaiveDate;

/// Single pass over the milestone list. A non-completed milestone is
/// pending; it also counts as delayed when its due date has passed and no
/// actual date was recorded. The next milestone is the first non-completed
/// one due today or later.
///
/// The caller supplies milestones sorted ascending by due date; the order is
/// assumed, not enforced, and the first qualifying candidate wins.
pub fn compute(milestones: &[Milestone], today: NaiveDate) -> ScheduleMetrics {
    milestones
        .iter()
        .fold(ScheduleMetrics::default(), |mut acc, milestone| {
            acc.total += 1;
            if milestone.status == MilestoneStatus::Completed {
                acc.completed += 1;
            } else {
                acc.pending += 1;
                if milestone.due_date < today && milestone.actual_date.is_none() {
                    acc.delayed += 1;
                }
                if acc.next_milestone.is_none() && milestone.due_date >= today {
                    acc.next_milestone = Some(NextMilestone {
                        name: milestone.name.clone(),
                        due_date: milestone.due_date,
                    });
                }
            }
            acc
        })
}
