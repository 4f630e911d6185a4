//! Terminal formatting for records and reports.

use colored::{ColoredString, Colorize};

use crate::student::{RecordReport, SubjectReport};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("GRADEBOOK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color a single grade by its mark.
///
/// - 5: green
/// - 4: cyan
/// - 3: yellow
/// - 2: red
pub fn grade(value: u8) -> ColoredString {
    let text = value.to_string();
    match value {
        5 => text.green(),
        4 => text.cyan(),
        3 => text.yellow(),
        _ => text.red(),
    }
}

/// Color an average grade by the mark it rounds towards.
pub fn average_grade(value: f64) -> ColoredString {
    let text = format::average(value);
    if value == 0.0 {
        text.dimmed()
    } else if value >= 4.5 {
        text.green()
    } else if value >= 3.5 {
        text.cyan()
    } else if value >= 2.5 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Color an average test result by score band.
pub fn average_test_result(value: f64) -> ColoredString {
    let text = format::average(value);
    if value == 0.0 {
        text.dimmed()
    } else if value >= 85.0 {
        text.green()
    } else if value >= 60.0 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Render one report row: subject, grades, tests, and both averages.
pub fn subject_line(subject: &SubjectReport, name_width: usize) -> String {
    let grades = if subject.grades.is_empty() {
        "-".dimmed().to_string()
    } else {
        subject
            .grades
            .iter()
            .map(|&g| grade(g).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let tests = format::values(&subject.test_results);

    format!(
        "  {:<width$}  avg grade {}  avg test {}  grades: {}  tests: {}",
        subject.name,
        average_grade(subject.average_grade),
        average_test_result(subject.average_test_result),
        grades,
        tests,
        width = name_width
    )
}

/// Render the full report as lines of text.
pub fn report_lines(report: &RecordReport) -> Vec<String> {
    let name_width = report
        .subjects
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(report.subjects.len() + 3);
    lines.push(format!("{}", "Subjects".bold()));
    lines.push(format::separator(name_width + 2).dimmed().to_string());
    lines.extend(
        report
            .subjects
            .iter()
            .map(|subject| subject_line(subject, name_width)),
    );
    lines.push(format!(
        "{} {}",
        "Average grade across all subjects:".bold(),
        average_grade(report.average_grade)
    ));
    lines
}

/// Plain text formatting helpers
pub mod format {
    /// Two decimal places, the precision used for every average shown.
    pub fn average(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// Space-separated values, or `-` when there are none.
    pub fn values(values: &[u8]) -> String {
        if values.is_empty() {
            return "-".to_string();
        }
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
