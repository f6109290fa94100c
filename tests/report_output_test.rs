use sitemetrics::core::{BudgetItem, RiskMetrics};
use sitemetrics::io::output::{JsonWriter, MarkdownWriter, TerminalWriter};
use sitemetrics::store::{PhaseCompletion, ProjectMetrics};
use sitemetrics::{summarize_budget, OutputWriter};

fn sample_metrics() -> ProjectMetrics {
    let professional = vec![BudgetItem {
        ref_code: "P1".to_string(),
        description: "Architect".to_string(),
        amount: 3000.0,
    }];
    let contractor = vec![BudgetItem {
        ref_code: "Lot 01".to_string(),
        description: "Demolition".to_string(),
        amount: 500.0,
    }];

    ProjectMetrics {
        overall_completion: 42,
        phases: vec![PhaseCompletion {
            id: "1.00".to_string(),
            name: "PROJECT CONCEPTION".to_string(),
            completion: 42.0,
        }],
        financial: summarize_budget(&professional, &contractor),
        risks: RiskMetrics {
            total: 3,
            high_risk: 1,
            medium_risk: 1,
            low_risk: 1,
        },
        ..Default::default()
    }
}

#[test]
fn test_json_report_is_parseable_and_timestamped() {
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer)
        .write_report(&sample_metrics())
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["overall_completion"], 42);
    assert_eq!(value["financial"]["budgeted"]["total"], 3500.0);
    assert_eq!(value["risks"]["high_risk"], 1);
    assert!(value["generated"].is_string(), "Reports carry a timestamp");
}

#[test]
fn test_markdown_report_sections_and_display_rounding() {
    let mut buffer = Vec::new();
    MarkdownWriter::new(&mut buffer)
        .write_report(&sample_metrics())
        .unwrap();

    let report = String::from_utf8(buffer).unwrap();
    assert!(report.contains("# Project Metrics Report"));
    assert!(report.contains("Overall completion: 42%"));
    assert!(report.contains("| PROJECT CONCEPTION | 42% |"));
    // Amounts render as whole currency units.
    assert!(report.contains("| Budgeted | 3000 | 500 | 3500 |"));
    assert!(report.contains("| Variance | -3000 | -500 | -3500 |"));
    assert!(report.contains("3 active (1 high, 1 medium, 1 low)"));
}

#[test]
fn test_terminal_report_mentions_every_section() {
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_report(&sample_metrics())
        .unwrap();

    let report = String::from_utf8(buffer).unwrap();
    assert!(report.contains("Overall completion: 42%"));
    assert!(report.contains("Financial"));
    assert!(report.contains("Risks"));
    assert!(report.contains("0 milestones: 0 completed, 0 pending, 0 delayed"));
}
