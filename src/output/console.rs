use crate::domain::model::{RankedReport, RankedSchool};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

pub const NO_CENTERS_MESSAGE: &str = "No school centers were found for the selected filters.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Multi-line block for one ranked school. Code is yellow, distance and duration green.
pub fn format_school(entry: &RankedSchool, use_colors: bool) -> String {
    let school = &entry.school;
    let distance = school.distance_text().unwrap_or("-");
    let duration = school.duration_text().unwrap_or("-");

    let (code, distance, duration) = if use_colors {
        (
            school.code.yellow().to_string(),
            distance.green().to_string(),
            duration.green().to_string(),
        )
    } else {
        (
            school.code.clone(),
            distance.to_string(),
            duration.to_string(),
        )
    };

    format!(
        "##-- Code: {} - Center {} {} {} - {} || {}, {} --##\n- Distance: {}\n- Estimated duration: {}",
        code,
        school.ownership,
        school.center_type,
        school.language_program,
        school.name,
        school.municipality,
        school.province,
        distance,
        duration
    )
}

pub fn format_report(report: &RankedReport, use_colors: bool) -> String {
    report
        .schools
        .iter()
        .map(|entry| format_school(entry, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}
