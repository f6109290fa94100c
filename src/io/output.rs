use crate::core::{CostBreakdown, FinancialSummary};
use crate::phases::{completion_status, CompletionStatus};
use crate::store::ProjectMetrics;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()>;
}

/// Build a writer over stdout or a file.
pub fn create_writer(
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

#[derive(Serialize)]
struct Report<'a> {
    generated: DateTime<Utc>,
    #[serde(flatten)]
    metrics: &'a ProjectMetrics,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        let report = Report {
            generated: Utc::now(),
            metrics,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Project Metrics Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_progress(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "## Progress")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Overall completion: {}%",
            metrics.overall_completion
        )?;
        writeln!(self.writer)?;
        if !metrics.phases.is_empty() {
            writeln!(self.writer, "| Phase | Completion |")?;
            writeln!(self.writer, "|-------|-----------|")?;
            for phase in &metrics.phases {
                writeln!(
                    self.writer,
                    "| {} | {:.0}% |",
                    phase.name,
                    phase.completion.round()
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_financial(&mut self, summary: &FinancialSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Financial Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | OPEX | CAPEX | Total |")?;
        writeln!(self.writer, "|---|------|-------|-------|")?;
        for (label, group) in [
            ("Budgeted", &summary.budgeted),
            ("Actual", &summary.actual),
            ("Variance", &summary.variance),
        ] {
            writeln!(
                self.writer,
                "| {} | {:.0} | {:.0} | {:.0} |",
                label, group.opex, group.capex, group.total
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risks(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "## Risks")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} active ({} high, {} medium, {} low), budget risk {}",
            metrics.risks.total,
            metrics.risks.high_risk,
            metrics.risks.medium_risk,
            metrics.risks.low_risk,
            metrics.budget_risk
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_schedule(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "## Schedule")?;
        writeln!(self.writer)?;
        let schedule = &metrics.schedule;
        writeln!(
            self.writer,
            "{} milestones: {} completed, {} pending, {} delayed",
            schedule.total, schedule.completed, schedule.pending, schedule.delayed
        )?;
        if let Some(next) = &schedule.next_milestone {
            writeln!(self.writer, "Next: {} (due {})", next.name, next.due_date)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_progress(metrics)?;
        self.write_financial(&metrics.financial)?;
        self.write_risks(metrics)?;
        self.write_schedule(metrics)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn completion_color(completion: f64) -> Color {
        match completion_status(completion) {
            CompletionStatus::Complete => Color::Green,
            CompletionStatus::OnTrack => Color::Yellow,
            CompletionStatus::AtRisk => Color::Red,
        }
    }

    fn write_breakdown(&mut self, label: &str, group: &CostBreakdown) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<10} opex {:>12.0}  capex {:>12.0}  total {:>12.0}",
            label, group.opex, group.capex, group.total
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, metrics: &ProjectMetrics) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Overall completion: {}%", metrics.overall_completion).bold()
        )?;
        for phase in &metrics.phases {
            let line = format!("  {:<32} {:>5.0}%", phase.name, phase.completion.round());
            writeln!(
                self.writer,
                "{}",
                line.color(Self::completion_color(phase.completion))
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Financial".bold())?;
        self.write_breakdown("budgeted", &metrics.financial.budgeted)?;
        self.write_breakdown("actual", &metrics.financial.actual)?;
        // Overspend reads red, underspend green.
        let variance = &metrics.financial.variance;
        let variance_line = format!(
            "  {:<10} opex {:>12.0}  capex {:>12.0}  total {:>12.0}",
            "variance", variance.opex, variance.capex, variance.total
        );
        let colored_line = if variance.total > 0.0 {
            variance_line.red()
        } else {
            variance_line.green()
        };
        writeln!(self.writer, "{}", colored_line)?;
        if let Some(percent) = metrics.variance_percent {
            writeln!(
                self.writer,
                "  variance {:.1}% of budget (risk: {})",
                percent, metrics.budget_risk
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Risks".bold())?;
        writeln!(
            self.writer,
            "  {} active: {} {} / {} {} / {} {}",
            metrics.risks.total,
            metrics.risks.high_risk,
            "high".red(),
            metrics.risks.medium_risk,
            "medium".yellow(),
            metrics.risks.low_risk,
            "low".green()
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Schedule".bold())?;
        let schedule = &metrics.schedule;
        writeln!(
            self.writer,
            "  {} milestones: {} completed, {} pending, {} delayed",
            schedule.total, schedule.completed, schedule.pending, schedule.delayed
        )?;
        if let Some(next) = &schedule.next_milestone {
            writeln!(self.writer, "  next: {} (due {})", next.name, next.due_date)?;
        }
        Ok(())
    }
}
