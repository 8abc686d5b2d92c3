use crate::domain::model::format_amount;
use crate::domain::report::{MemberSummary, OrgReport};
use crate::utils::error::{OrgError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Console listing
    #[default]
    Text,
    /// Whole report as pretty JSON
    Json,
    /// Raised team as CSV rows
    Csv,
}

pub fn render(report: &OrgReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(&report.analysis.raised),
    }
}

pub fn render_text(report: &OrgReport) -> String {
    let overview = &report.overview;
    let analysis = &report.analysis;
    let mut lines: Vec<String> = overview.roster.clone();

    for team in &overview.teams {
        push_team_block(&mut lines, &team.details);
    }

    for director in &overview.directors {
        lines.push(director.director.clone());
        lines.push("All Team Members:".to_string());
        for team in &director.teams {
            lines.push(team.manager.clone());
            push_team_block(&mut lines, &team.details);
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    lines.push("-- Application Examples --".to_string());

    lines.push("Team Members sorted by salary (descending):".to_string());
    push_descriptions(&mut lines, &analysis.sorted);

    lines.push(String::new());
    lines.push(match &analysis.highest_paid {
        Some(top) => format!("Highest paid employee: {}", top.description),
        None => "Highest paid employee: none, the team is empty".to_string(),
    });

    lines.push(String::new());
    lines.push(format!(
        "Total salary expenses for manager's team: {}",
        format_amount(analysis.total_salary)
    ));

    lines.push(String::new());
    lines.push("Interns in the team:".to_string());
    push_descriptions(&mut lines, &analysis.interns);

    lines.push(String::new());
    lines.push(format!(
        "Average salary of the team: {}",
        format_amount(analysis.average_salary)
    ));

    lines.push(String::new());
    lines.push(format!(
        "Searching for employee named '{}':",
        analysis.search.name
    ));
    lines.push(match &analysis.search.found {
        Some(member) => member.description.clone(),
        None => "Employee not found".to_string(),
    });

    lines.push(String::new());
    lines.push("Employees grouped by role:".to_string());
    for group in analysis.groups.iter() {
        lines.push(format!("Role: {}", group.role));
        for member in &group.members {
            lines.push(format!("  {}", member.description));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Giving a {}% raise to all team members:",
        analysis.raise_percent
    ));
    push_descriptions(&mut lines, &analysis.raised);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

// "Team Members:" header, one line per member, then a blank line
fn push_team_block(lines: &mut Vec<String>, details: &str) {
    lines.push("Team Members:".to_string());
    lines.extend(details.lines().map(str::to_string));
    lines.push(String::new());
}

fn push_descriptions(lines: &mut Vec<String>, members: &[MemberSummary]) {
    lines.extend(members.iter().map(|member| member.description.clone()));
}

pub fn render_json(report: &OrgReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    kind: &'a str,
    role: &'a str,
    salary: f64,
}

pub fn render_csv(members: &[MemberSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for member in members {
        writer.serialize(CsvRow {
            name: &member.name,
            kind: &member.kind,
            role: &member.role,
            salary: member.salary,
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OrgError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
