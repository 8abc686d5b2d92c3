use org_roster::core::transforms::{
    apply_raise, average_salary, find_by_name, group_by_role, interns, max_by_salary,
    sort_by_salary_desc, total_salary,
};
use org_roster::{Employee, OrgError, Organization, Person, StaffMember};

fn scenario_team() -> Vec<Employee> {
    vec![
        Employee::new("Ahmet", "Software Engineer", 5000.0),
        Employee::new("Ayse", "Data Scientist", 6000.0),
        Employee::intern("Mehmet", "Intern", 2000.0, 6),
    ]
}

#[test]
fn test_ten_percent_raise_scenario() {
    let mut team = scenario_team();
    apply_raise(&mut team, 0.10);

    let expected = [5500.0, 6600.0, 2200.0];
    for (member, salary) in team.iter().zip(expected) {
        assert!((member.salary() - salary).abs() < 1e-6, "{}", member.name());
    }
    assert!((total_salary(&team) - 14300.0).abs() < 1e-6);
    assert!((average_salary(&team) - 4766.67).abs() < 0.005);

    let top = max_by_salary(&team).unwrap();
    assert_eq!(top.name(), "Ayse");
    assert!((top.salary() - 6600.0).abs() < 1e-6);
}

#[test]
fn test_find_returns_the_exact_record() {
    let team = scenario_team();
    let ayse = find_by_name(&team, "Ayse").unwrap();
    assert_eq!(ayse, &team[1]);
    assert_eq!(ayse.role(), "Data Scientist");
    assert!(find_by_name(&team, "NoOne").is_none());
}

#[test]
fn test_groups_partition_the_team() {
    let team = vec![
        Employee::new("A", "Engineer", 1.0),
        Employee::intern("B", "Intern", 2.0, 1),
        Employee::manager("C", "Engineer", 3.0),
        Employee::new("D", "Analyst", 4.0),
        Employee::intern("E", "Intern", 5.0, 2),
    ];
    let groups = group_by_role(&team);

    let mut flattened: Vec<&str> = groups
        .iter()
        .flat_map(|group| group.members.iter().map(|m| m.name()))
        .collect();
    flattened.sort_unstable();
    assert_eq!(flattened, vec!["A", "B", "C", "D", "E"]);

    for group in groups.iter() {
        assert!(group.members.iter().all(|m| m.role() == group.role));
    }
}

#[test]
fn test_interns_on_homogeneous_teams() {
    let staff = vec![
        Employee::new("A", "Engineer", 1.0),
        Employee::manager("B", "Lead", 2.0),
    ];
    assert!(interns(&staff).is_empty());

    let cohort = vec![
        Employee::intern("X", "Intern", 1.0, 3),
        Employee::intern("Y", "Intern", 1.0, 6),
    ];
    let kept = interns(&cohort);
    assert_eq!(kept.len(), 2);
    assert!(std::ptr::eq(kept[0], &cohort[0]));
    assert!(std::ptr::eq(kept[1], &cohort[1]));
}

#[test]
fn test_empty_team_queries() {
    let mut team: Vec<Employee> = Vec::new();
    sort_by_salary_desc(&mut team);
    apply_raise(&mut team, 0.10);
    assert!(matches!(max_by_salary(&team), Err(OrgError::EmptyCollection)));
    assert_eq!(total_salary(&team), 0.0);
    assert_eq!(average_salary(&team), 0.0);
    assert!(group_by_role(&team).is_empty());
}

#[test]
fn test_hierarchy_through_the_arena() {
    let mut org = Organization::new("Engineering");
    let ahmet = org.hire_employee("Ahmet", "Software Engineer", 5000.0);
    let elif = org.hire_manager("Elif", "Engineering Manager", 8000.0);
    let selin = org.hire_director("Selin", "Director of Engineering", 15000.0, 2000.0);
    let cto = org.hire_manager("Cem", "CTO", 20000.0);

    org.add_member(elif, ahmet).unwrap();
    org.add_manager(selin, elif).unwrap();
    // a manager is usable wherever an employee is
    org.add_member(cto, elif).unwrap();

    assert_eq!(
        org.team_details(cto).unwrap(),
        "Manager: Elif, Role: Engineering Manager, Salary: 8000.0"
    );
    assert_eq!(
        org.all_team_details(selin).unwrap(),
        "Manager: Elif, Role: Engineering Manager, Salary: 8000.0\n\
         Employee: Ahmet, Role: Software Engineer, Salary: 5000.0"
    );

    // raises on a snapshot never reach the arena
    let mut snapshot = org.team_snapshot(elif).unwrap();
    apply_raise(&mut snapshot, 1.0);
    assert_eq!(snapshot[0].salary(), 10000.0);
    assert_eq!(org.get(ahmet).unwrap().salary(), 5000.0);

    org.get_mut(ahmet).unwrap().set_salary(5100.0);
    assert!(org
        .team_details(elif)
        .unwrap()
        .ends_with("Salary: 5100.0"));
}
