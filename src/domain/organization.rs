use crate::domain::model::{DirectorId, Employee, EmployeeId, EmployeeKind, ManagerId};
use crate::domain::ports::Person;
use crate::utils::error::{OrgError, Result};

/// Arena owning every employee record. Managers and directors refer to the
/// people they own by id, so one record can sit in several lists without
/// being copied.
#[derive(Debug, Clone, Default)]
pub struct Organization {
    name: String,
    members: Vec<Employee>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hire(&mut self, employee: Employee) -> EmployeeId {
        let id = EmployeeId(self.members.len());
        tracing::debug!("Hired {} as #{}", employee.name(), id.0);
        self.members.push(employee);
        id
    }

    pub fn hire_employee(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
    ) -> EmployeeId {
        self.hire(Employee::new(name, role, salary))
    }

    pub fn hire_manager(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
    ) -> ManagerId {
        ManagerId(self.hire(Employee::manager(name, role, salary)))
    }

    pub fn hire_director(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        bonus: f64,
    ) -> DirectorId {
        DirectorId(self.hire(Employee::director(name, role, salary, bonus)))
    }

    pub fn hire_intern(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        duration_months: u32,
    ) -> EmployeeId {
        self.hire(Employee::intern(name, role, salary, duration_months))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: impl Into<EmployeeId>) -> Result<&Employee> {
        let id = id.into();
        self.members
            .get(id.0)
            .ok_or(OrgError::UnknownEmployee { id: id.0 })
    }

    pub fn get_mut(&mut self, id: impl Into<EmployeeId>) -> Result<&mut Employee> {
        let id = id.into();
        self.members
            .get_mut(id.0)
            .ok_or(OrgError::UnknownEmployee { id: id.0 })
    }

    /// Members with their ids, in hiring order.
    pub fn members(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> {
        self.members
            .iter()
            .enumerate()
            .map(|(index, employee)| (EmployeeId(index), employee))
    }

    pub fn managers(&self) -> impl Iterator<Item = ManagerId> + '_ {
        self.members().filter_map(|(id, employee)| match employee.kind() {
            EmployeeKind::Manager(_) => Some(ManagerId(id)),
            _ => None,
        })
    }

    pub fn directors(&self) -> impl Iterator<Item = DirectorId> + '_ {
        self.members().filter_map(|(id, employee)| match employee.kind() {
            EmployeeKind::Director(_) => Some(DirectorId(id)),
            _ => None,
        })
    }

    pub fn find_id_by_name(&self, name: &str) -> Option<EmployeeId> {
        self.members()
            .find(|(_, employee)| employee.name() == name)
            .map(|(id, _)| id)
    }

    /// Narrows an id to a manager id when the record is a manager.
    pub fn as_manager(&self, id: EmployeeId) -> Result<ManagerId> {
        let employee = self.get(id)?;
        match employee.kind() {
            EmployeeKind::Manager(_) => Ok(ManagerId(id)),
            _ => Err(OrgError::NotAManager {
                name: employee.name().to_string(),
            }),
        }
    }

    /// Narrows an id to a director id when the record is a director.
    pub fn as_director(&self, id: EmployeeId) -> Result<DirectorId> {
        let employee = self.get(id)?;
        match employee.kind() {
            EmployeeKind::Director(_) => Ok(DirectorId(id)),
            _ => Err(OrgError::NotADirector {
                name: employee.name().to_string(),
            }),
        }
    }

    /// Appends to the manager's team. No duplicate or self-containment check.
    pub fn add_member(&mut self, manager: ManagerId, member: impl Into<EmployeeId>) -> Result<()> {
        let member = member.into();
        self.get(member)?;
        let record = self.get_mut(manager)?;
        let name = record.name().to_string();
        match record.kind_mut() {
            EmployeeKind::Manager(details) => {
                details.team.push(member);
                tracing::debug!("Added #{} to {}'s team", member.0, name);
                Ok(())
            }
            _ => Err(OrgError::NotAManager { name }),
        }
    }

    /// Appends to the director's list of managers.
    pub fn add_manager(&mut self, director: DirectorId, manager: ManagerId) -> Result<()> {
        self.as_manager(manager.into())?;
        let record = self.get_mut(director)?;
        let name = record.name().to_string();
        match record.kind_mut() {
            EmployeeKind::Director(details) => {
                details.managers.push(manager);
                tracing::debug!("{} now manages manager #{}", name, manager.0 .0);
                Ok(())
            }
            _ => Err(OrgError::NotADirector { name }),
        }
    }

    pub fn team_ids(&self, manager: ManagerId) -> Result<&[EmployeeId]> {
        let record = self.get(manager)?;
        match record.kind() {
            EmployeeKind::Manager(details) => Ok(&details.team),
            _ => Err(OrgError::NotAManager {
                name: record.name().to_string(),
            }),
        }
    }

    pub fn managed_by(&self, director: DirectorId) -> Result<&[ManagerId]> {
        let record = self.get(director)?;
        match record.kind() {
            EmployeeKind::Director(details) => Ok(&details.managers),
            _ => Err(OrgError::NotADirector {
                name: record.name().to_string(),
            }),
        }
    }

    pub fn team(&self, manager: ManagerId) -> Result<Vec<&Employee>> {
        self.team_ids(manager)?
            .iter()
            .map(|id| self.get(*id))
            .collect()
    }

    /// Deep copy of the team, detached from the arena.
    pub fn team_snapshot(&self, manager: ManagerId) -> Result<Vec<Employee>> {
        Ok(self.team(manager)?.into_iter().cloned().collect())
    }

    /// `describe()` of each team member, newline-joined, in insertion order.
    pub fn team_details(&self, manager: ManagerId) -> Result<String> {
        Ok(self
            .team(manager)?
            .iter()
            .map(|member| member.describe())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Each managed manager's own line followed by its team details.
    pub fn all_team_details(&self, director: DirectorId) -> Result<String> {
        let mut blocks = Vec::new();
        for manager in self.managed_by(director)? {
            blocks.push(self.get(*manager)?.describe());
            let details = self.team_details(*manager)?;
            if !details.is_empty() {
                blocks.push(details);
            }
        }
        Ok(blocks.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::StaffMember;

    fn sample() -> (Organization, ManagerId, DirectorId) {
        let mut org = Organization::new("Engineering");
        let ahmet = org.hire_employee("Ahmet", "Software Engineer", 5000.0);
        let ayse = org.hire_employee("Ayse", "Data Scientist", 6000.0);
        let elif = org.hire_manager("Elif", "Engineering Manager", 8000.0);
        let mehmet = org.hire_intern("Mehmet", "Intern", 2000.0, 6);
        let selin = org.hire_director("Selin", "Director of Engineering", 15000.0, 2000.0);
        org.add_member(elif, ahmet).unwrap();
        org.add_member(elif, ayse).unwrap();
        org.add_member(elif, mehmet).unwrap();
        org.add_manager(selin, elif).unwrap();
        (org, elif, selin)
    }

    #[test]
    fn test_team_details_in_insertion_order() {
        let (org, elif, _) = sample();
        assert_eq!(
            org.team_details(elif).unwrap(),
            "Employee: Ahmet, Role: Software Engineer, Salary: 5000.0\n\
             Employee: Ayse, Role: Data Scientist, Salary: 6000.0\n\
             Intern: Mehmet, Role: Intern, Salary: 2000.0, Duration: 6 months"
        );
    }

    #[test]
    fn test_all_team_details_starts_with_manager() {
        let (org, _, selin) = sample();
        let details = org.all_team_details(selin).unwrap();
        let lines: Vec<&str> = details.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Manager: Elif, Role: Engineering Manager, Salary: 8000.0"
        );
        assert!(lines[3].starts_with("Intern: Mehmet"));
    }

    #[test]
    fn test_empty_team_is_allowed() {
        let mut org = Organization::new("Empty");
        let lead = org.hire_manager("Lead", "Manager", 1.0);
        assert!(org.team(lead).unwrap().is_empty());
        assert_eq!(org.team_details(lead).unwrap(), "");
    }

    #[test]
    fn test_manager_can_join_another_team() {
        let mut org = Organization::new("Nested");
        let outer = org.hire_manager("Outer", "Manager", 9000.0);
        let inner = org.hire_manager("Inner", "Manager", 8000.0);
        org.add_member(outer, inner).unwrap();
        // no self-containment check
        org.add_member(outer, outer).unwrap();

        let team = org.team(outer).unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(team[0].name(), "Inner");
        assert_eq!(team[1].name(), "Outer");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let (mut org, elif, _) = sample();
        let mut snapshot = org.team_snapshot(elif).unwrap();
        snapshot[0].set_salary(1.0);

        let ahmet = org.find_id_by_name("Ahmet").unwrap();
        assert_eq!(org.get(ahmet).unwrap().salary(), 5000.0);

        org.get_mut(ahmet).unwrap().set_salary(7000.0);
        assert_eq!(snapshot[0].salary(), 1.0);
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let (mut org, _, _) = sample();
        let ahmet = org.find_id_by_name("Ahmet").unwrap();
        assert!(matches!(
            org.as_manager(ahmet),
            Err(OrgError::NotAManager { name }) if name == "Ahmet"
        ));
        assert!(org.as_director(ahmet).is_err());

        let fake = ManagerId(ahmet);
        assert!(org.add_member(fake, ahmet).is_err());
    }

    #[test]
    fn test_foreign_id_is_unknown() {
        let (org, _, _) = sample();
        let mut other = Organization::new("Other");
        for i in 0..10 {
            other.hire_employee(format!("E{}", i), "Engineer", 1.0);
        }
        let foreign = other.find_id_by_name("E9").unwrap();
        assert!(matches!(
            org.get(foreign),
            Err(OrgError::UnknownEmployee { id: 9 })
        ));
    }

    #[test]
    fn test_managers_and_directors_in_roster_order() {
        let (org, elif, selin) = sample();
        assert_eq!(org.managers().collect::<Vec<_>>(), vec![elif]);
        assert_eq!(org.directors().collect::<Vec<_>>(), vec![selin]);
        assert_eq!(org.len(), 5);
    }
}
