use crate::domain::ports::{Person, StaffMember};
use std::fmt;

/// Index of an employee inside the [`Organization`](crate::domain::organization::Organization)
/// arena that hired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub(crate) usize);

/// An [`EmployeeId`] known to point at a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerId(pub(crate) EmployeeId);

/// An [`EmployeeId`] known to point at a director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectorId(pub(crate) EmployeeId);

impl From<ManagerId> for EmployeeId {
    fn from(id: ManagerId) -> Self {
        id.0
    }
}

impl From<DirectorId> for EmployeeId {
    fn from(id: DirectorId) -> Self {
        id.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerDetails {
    pub team: Vec<EmployeeId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorDetails {
    pub managers: Vec<ManagerId>,
    pub bonus: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternDetails {
    pub duration_months: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeKind {
    Plain,
    Manager(ManagerDetails),
    Director(DirectorDetails),
    Intern(InternDetails),
}

impl EmployeeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Plain => "Employee",
            EmployeeKind::Manager(_) => "Manager",
            EmployeeKind::Director(_) => "Director",
            EmployeeKind::Intern(_) => "Intern",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    role: String,
    salary: f64,
    kind: EmployeeKind,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self::with_kind(name, role, salary, EmployeeKind::Plain)
    }

    pub fn manager(name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self::with_kind(
            name,
            role,
            salary,
            EmployeeKind::Manager(ManagerDetails::default()),
        )
    }

    pub fn director(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        bonus: f64,
    ) -> Self {
        Self::with_kind(
            name,
            role,
            salary,
            EmployeeKind::Director(DirectorDetails {
                managers: Vec::new(),
                bonus,
            }),
        )
    }

    pub fn intern(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        duration_months: u32,
    ) -> Self {
        Self::with_kind(
            name,
            role,
            salary,
            EmployeeKind::Intern(InternDetails { duration_months }),
        )
    }

    fn with_kind(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        kind: EmployeeKind,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            salary,
            kind,
        }
    }

    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut EmployeeKind {
        &mut self.kind
    }

    pub fn bonus(&self) -> Option<f64> {
        match &self.kind {
            EmployeeKind::Director(details) => Some(details.bonus),
            _ => None,
        }
    }

    pub fn duration_months(&self) -> Option<u32> {
        match &self.kind {
            EmployeeKind::Intern(details) => Some(details.duration_months),
            _ => None,
        }
    }
}

/// Shortest text that round-trips the value, always with a fractional part
/// for finite whole numbers (`5000.0`, `5500.000000000001`).
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Role: {}, Salary: {}",
            self.kind.label(),
            self.name,
            self.role,
            format_amount(self.salary)
        )?;
        match &self.kind {
            EmployeeKind::Director(details) => {
                write!(f, ", Bonus: {}", format_amount(details.bonus))
            }
            EmployeeKind::Intern(details) => {
                write!(f, ", Duration: {} months", details.duration_months)
            }
            EmployeeKind::Plain | EmployeeKind::Manager(_) => Ok(()),
        }
    }
}

impl Person for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl StaffMember for Employee {
    fn role(&self) -> &str {
        &self.role
    }

    fn salary(&self) -> f64 {
        self.salary
    }

    fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    fn is_intern(&self) -> bool {
        matches!(self.kind, EmployeeKind::Intern(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_per_kind() {
        assert_eq!(
            Employee::new("Ahmet", "Software Engineer", 5000.0).describe(),
            "Employee: Ahmet, Role: Software Engineer, Salary: 5000.0"
        );
        assert_eq!(
            Employee::manager("Elif", "Engineering Manager", 8000.0).describe(),
            "Manager: Elif, Role: Engineering Manager, Salary: 8000.0"
        );
        assert_eq!(
            Employee::director("Selin", "Director of Engineering", 15000.0, 2000.0).describe(),
            "Director: Selin, Role: Director of Engineering, Salary: 15000.0, Bonus: 2000.0"
        );
        assert_eq!(
            Employee::intern("Mehmet", "Intern", 2000.0, 6).describe(),
            "Intern: Mehmet, Role: Intern, Salary: 2000.0, Duration: 6 months"
        );
    }

    #[test]
    fn test_describe_is_stable_until_mutated() {
        let mut employee = Employee::new("Ayse", "Data Scientist", 6000.0);
        let first = employee.describe();
        assert_eq!(first, employee.describe());

        employee.set_salary(6000.0 * 1.10);
        assert_ne!(first, employee.describe());
        assert!(employee.describe().ends_with("Salary: 6600.000000000001"));
    }

    #[test]
    fn test_set_salary_is_unchecked() {
        let mut employee = Employee::new("Ahmet", "Software Engineer", 5000.0);
        employee.set_salary(-1.0);
        assert_eq!(employee.salary(), -1.0);
    }

    #[test]
    fn test_kind_accessors() {
        let intern = Employee::intern("Mehmet", "Intern", 2000.0, 6);
        assert!(intern.is_intern());
        assert_eq!(intern.duration_months(), Some(6));
        assert_eq!(intern.bonus(), None);

        let director = Employee::director("Selin", "Director", 15000.0, 2000.0);
        assert!(!director.is_intern());
        assert_eq!(director.bonus(), Some(2000.0));
    }
}
