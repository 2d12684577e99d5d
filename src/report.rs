//! Console rendering of analysis results

use crate::pipeline::RunReport;
use crate::sentiment::{AnalysisSummary, Category, FeedbackResult};
use colored::{ColoredString, Colorize};
use std::path::Path;

/// Longest feedback excerpt shown per entry
const MAX_EXCERPT_CHARS: usize = 60;

fn paint(category: Category, text: &str) -> ColoredString {
    match category {
        Category::Happy => text.green(),
        Category::Sad => text.red(),
        Category::Mild => text.yellow(),
    }
}

/// Single-line excerpt of the feedback text
pub fn excerpt(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let flat = flat.trim();

    if flat.chars().count() > MAX_EXCERPT_CHARS {
        let cut: String = flat.chars().take(MAX_EXCERPT_CHARS - 3).collect();
        format!("{}...", cut)
    } else {
        flat.to_string()
    }
}

/// Numbered per-entry listing
pub fn render_results(results: &[FeedbackResult]) -> String {
    let mut lines = vec![
        "Feedback Analysis Results".bold().to_string(),
        "=".repeat(60),
    ];

    lines.extend(results.iter().enumerate().map(|(i, result)| {
        let label = format!("{:<5}", result.category().as_str());
        format!(
            "{:>3}. [{}] {:>7.3}  {}",
            i + 1,
            paint(result.category(), &label),
            result.sentiment_score(),
            excerpt(result.feedback_text())
        )
    }));

    lines.join("\n") + "\n"
}

/// Category breakdown with counts and percentages
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut lines = vec![
        format!("\n{}", "Summary".bold()),
        "=".repeat(60),
        format!("Total feedback analyzed: {}", summary.total_count()),
    ];

    lines.extend(Category::ALL.into_iter().map(|category| {
        let label = format!("{:<5}", category.as_str());
        format!(
            "  {}: {:>4} ({:.2}%)",
            paint(category, &label),
            summary.count(category),
            summary.percentage(category)
        )
    }));

    lines.join("\n") + "\n"
}

/// Warnings about entries that did not make it into the results
pub fn render_notices(report: &RunReport, input: &Path) -> String {
    let mut lines = Vec::new();

    if report.results.is_empty() {
        let reason = if report.skipped_failed > 0 {
            format!(
                "None of the {} feedback entries in {} could be scored",
                report.skipped_failed,
                input.display()
            )
        } else {
            format!("No valid feedback entries found in {}", input.display())
        };
        lines.push(format!("{} {}", "Warning:".yellow().bold(), reason));
    } else if report.skipped_failed > 0 {
        lines.push(format!(
            "{} {} entries could not be scored and were skipped",
            "Note:".yellow().bold(),
            report.skipped_failed
        ));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}
