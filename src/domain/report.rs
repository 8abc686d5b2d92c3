use crate::core::transforms::RoleGroups;
use crate::domain::model::Employee;
use crate::domain::ports::{Person, StaffMember};
use serde::Serialize;

/// Flattened view of one employee as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberSummary {
    pub name: String,
    pub kind: String,
    pub role: String,
    pub salary: f64,
    pub description: String,
}

impl From<&Employee> for MemberSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            kind: employee.kind().label().to_string(),
            role: employee.role().to_string(),
            salary: employee.salary(),
            description: employee.describe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamListing {
    pub manager: String,
    /// Newline-joined member descriptions, empty for an empty team.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorListing {
    pub director: String,
    pub teams: Vec<TeamListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Every non-director in roster order.
    pub roster: Vec<String>,
    pub teams: Vec<TeamListing>,
    pub directors: Vec<DirectorListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub found: Option<MemberSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAnalysis {
    pub manager: String,
    pub sorted: Vec<MemberSummary>,
    /// Absent when the team is empty.
    pub highest_paid: Option<MemberSummary>,
    pub total_salary: f64,
    pub interns: Vec<MemberSummary>,
    pub average_salary: f64,
    pub search: SearchResult,
    pub groups: RoleGroups<MemberSummary>,
    pub raise_percent: f64,
    pub raised: Vec<MemberSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgReport {
    pub organization: String,
    pub overview: Overview,
    pub analysis: TeamAnalysis,
}
