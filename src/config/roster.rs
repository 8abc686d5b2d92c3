use crate::domain::model::EmployeeId;
use crate::domain::organization::Organization;
use crate::utils::error::{OrgError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_ROSTER: &str = include_str!("../../rosters/default.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub organization: OrganizationSection,
    #[serde(default)]
    pub employees: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub role: String,
    pub salary: f64,
    #[serde(flatten)]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryKind {
    Employee,
    Manager {
        #[serde(default)]
        team: Vec<String>,
    },
    Director {
        bonus: f64,
        #[serde(default)]
        managers: Vec<String>,
    },
    Intern {
        duration_months: u32,
    },
}

impl RosterFile {
    /// The roster the binary falls back to without `--roster`.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading roster from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrgError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrgError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_roster(&self) -> Result<()> {
        validate_non_empty_string("organization.name", &self.organization.name)?;

        for entry in &self.employees {
            validate_non_empty_string("employees.name", &entry.name)?;
            validate_non_negative(&format!("{}.salary", entry.name), entry.salary)?;
            if let EntryKind::Director { bonus, .. } = &entry.kind {
                validate_non_negative(&format!("{}.bonus", entry.name), *bonus)?;
            }
        }

        validate_unique_names(self.employees.iter().map(|entry| entry.name.as_str()))?;

        let kinds: HashMap<&str, &EntryKind> = self
            .employees
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.kind))
            .collect();

        for entry in &self.employees {
            match &entry.kind {
                EntryKind::Manager { team } => {
                    for member in team {
                        if !kinds.contains_key(member.as_str()) {
                            return Err(OrgError::UnknownReference {
                                owner: entry.name.clone(),
                                name: member.clone(),
                            });
                        }
                    }
                }
                EntryKind::Director { managers, .. } => {
                    for manager in managers {
                        match kinds.get(manager.as_str()) {
                            Some(EntryKind::Manager { .. }) => {}
                            Some(_) => {
                                return Err(OrgError::WrongReferenceKind {
                                    owner: entry.name.clone(),
                                    name: manager.clone(),
                                    expected: "manager".to_string(),
                                })
                            }
                            None => {
                                return Err(OrgError::UnknownReference {
                                    owner: entry.name.clone(),
                                    name: manager.clone(),
                                })
                            }
                        }
                    }
                }
                EntryKind::Employee | EntryKind::Intern { .. } => {}
            }
        }

        Ok(())
    }

    /// Validates, hires everyone in file order, then links teams and managers.
    pub fn build(&self) -> Result<Organization> {
        self.validate()?;

        let mut org = Organization::new(&self.organization.name);
        for entry in &self.employees {
            match &entry.kind {
                EntryKind::Employee => {
                    org.hire_employee(&entry.name, &entry.role, entry.salary);
                }
                EntryKind::Manager { .. } => {
                    org.hire_manager(&entry.name, &entry.role, entry.salary);
                }
                EntryKind::Director { bonus, .. } => {
                    org.hire_director(&entry.name, &entry.role, entry.salary, *bonus);
                }
                EntryKind::Intern { duration_months } => {
                    org.hire_intern(&entry.name, &entry.role, entry.salary, *duration_months);
                }
            }
        }

        for entry in &self.employees {
            match &entry.kind {
                EntryKind::Manager { team } => {
                    let manager = org.as_manager(resolve(&org, &entry.name, &entry.name)?)?;
                    for member in team {
                        let member = resolve(&org, &entry.name, member)?;
                        org.add_member(manager, member)?;
                    }
                }
                EntryKind::Director { managers, .. } => {
                    let director = org.as_director(resolve(&org, &entry.name, &entry.name)?)?;
                    for manager in managers {
                        let manager = org.as_manager(resolve(&org, &entry.name, manager)?)?;
                        org.add_manager(director, manager)?;
                    }
                }
                EntryKind::Employee | EntryKind::Intern { .. } => {}
            }
        }

        tracing::info!("Loaded roster '{}' with {} people", org.name(), org.len());
        Ok(org)
    }
}

fn resolve(org: &Organization, owner: &str, name: &str) -> Result<EmployeeId> {
    org.find_id_by_name(name)
        .ok_or_else(|| OrgError::UnknownReference {
            owner: owner.to_string(),
            name: name.to_string(),
        })
}

impl Validate for RosterFile {
    fn validate(&self) -> Result<()> {
        self.validate_roster()
    }
}
