use crate::core::transforms;
use crate::domain::model::{Employee, EmployeeKind, ManagerId};
use crate::domain::organization::Organization;
use crate::domain::ports::{Person, ReportSettings};
use crate::domain::report::{
    DirectorListing, MemberSummary, OrgReport, Overview, SearchResult, TeamAnalysis, TeamListing,
};
use crate::utils::error::{OrgError, Result};

/// Settings for library callers that do not go through the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub manager: Option<String>,
    pub search: String,
    pub raise_percent: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            manager: None,
            search: "Ayse".to_string(),
            raise_percent: 10.0,
        }
    }
}

impl ReportSettings for ReportOptions {
    fn manager_name(&self) -> Option<&str> {
        self.manager.as_deref()
    }

    fn search_name(&self) -> &str {
        &self.search
    }

    fn raise_percent(&self) -> f64 {
        self.raise_percent
    }
}

pub struct ReportEngine<C: ReportSettings> {
    settings: C,
}

impl<C: ReportSettings> ReportEngine<C> {
    pub fn new(settings: C) -> Self {
        Self { settings }
    }

    /// Builds the overview, then runs every team query in order on a private
    /// copy of the chosen manager's team. The organization is left untouched.
    pub fn run(&self, org: &Organization) -> Result<OrgReport> {
        tracing::info!("Building report for {} ({} people)", org.name(), org.len());

        let overview = self.overview(org)?;
        let manager = self.select_manager(org)?;
        let analysis = self.analyze(org, manager)?;

        tracing::info!("Report for {}'s team complete", analysis.manager);
        Ok(OrgReport {
            organization: org.name().to_string(),
            overview,
            analysis,
        })
    }

    fn overview(&self, org: &Organization) -> Result<Overview> {
        let roster = org
            .members()
            .filter(|(_, employee)| !matches!(employee.kind(), EmployeeKind::Director(_)))
            .map(|(_, employee)| employee.describe())
            .collect();

        let teams = org
            .managers()
            .map(|manager| team_listing(org, manager))
            .collect::<Result<Vec<_>>>()?;

        let mut directors = Vec::new();
        for director in org.directors() {
            let teams = org
                .managed_by(director)?
                .iter()
                .map(|manager| team_listing(org, *manager))
                .collect::<Result<Vec<_>>>()?;
            directors.push(DirectorListing {
                director: org.get(director)?.describe(),
                teams,
            });
        }

        tracing::debug!(
            "Overview: {} roster lines, {} teams, {} directors",
            org.len() - directors.len(),
            teams.len(),
            directors.len()
        );
        Ok(Overview {
            roster,
            teams,
            directors,
        })
    }

    fn select_manager(&self, org: &Organization) -> Result<ManagerId> {
        match self.settings.manager_name() {
            Some(name) => org
                .find_id_by_name(name)
                .and_then(|id| org.as_manager(id).ok())
                .ok_or_else(|| OrgError::UnknownManager {
                    name: name.to_string(),
                }),
            None => org.managers().next().ok_or(OrgError::NoManager),
        }
    }

    fn analyze(&self, org: &Organization, manager: ManagerId) -> Result<TeamAnalysis> {
        let manager_name = org.get(manager)?.name().to_string();
        let mut team: Vec<Employee> = org.team_snapshot(manager)?;
        tracing::debug!("Analyzing {} members of {}'s team", team.len(), manager_name);

        transforms::sort_by_salary_desc(&mut team);
        let sorted = summarize(&team);

        let highest_paid = match transforms::max_by_salary(&team) {
            Ok(top) => Some(MemberSummary::from(top)),
            Err(OrgError::EmptyCollection) => {
                tracing::warn!("{}'s team is empty, no highest paid member", manager_name);
                None
            }
            Err(e) => return Err(e),
        };

        let total_salary = transforms::total_salary(&team);
        let interns = transforms::interns(&team)
            .into_iter()
            .map(MemberSummary::from)
            .collect();
        let average_salary = transforms::average_salary(&team);

        let search_name = self.settings.search_name();
        let found = transforms::find_by_name(&team, search_name).map(MemberSummary::from);
        if found.is_none() {
            tracing::debug!("No member named '{}' in {}'s team", search_name, manager_name);
        }

        let groups = transforms::group_by_role(&team).map(MemberSummary::from);

        let raise_percent = self.settings.raise_percent();
        transforms::apply_raise(&mut team, raise_percent / 100.0);
        tracing::debug!("Applied {}% raise to {} members", raise_percent, team.len());

        Ok(TeamAnalysis {
            manager: manager_name,
            sorted,
            highest_paid,
            total_salary,
            interns,
            average_salary,
            search: SearchResult {
                name: search_name.to_string(),
                found,
            },
            groups,
            raise_percent,
            raised: summarize(&team),
        })
    }
}

fn team_listing(org: &Organization, manager: ManagerId) -> Result<TeamListing> {
    Ok(TeamListing {
        manager: org.get(manager)?.describe(),
        details: org.team_details(manager)?,
    })
}

fn summarize(team: &[Employee]) -> Vec<MemberSummary> {
    team.iter().map(MemberSummary::from).collect()
}
