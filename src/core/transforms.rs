//! Collection queries over a flat team of [`StaffMember`]s.
//!
//! Everything here is order-preserving unless stated otherwise. Only
//! [`sort_by_salary_desc`] and [`apply_raise`] mutate, and they do so in
//! place on the caller's slice.

use crate::domain::ports::StaffMember;
use crate::utils::error::{OrgError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Stable sort, highest salary first. Ties keep their relative order.
pub fn sort_by_salary_desc<T: StaffMember>(members: &mut [T]) {
    members.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
}

/// The highest-paid member; the first one wins a tie.
///
/// Fails with [`OrgError::EmptyCollection`] on an empty slice.
pub fn max_by_salary<T: StaffMember>(members: &[T]) -> Result<&T> {
    members
        .iter()
        .reduce(|best, candidate| {
            if candidate.salary() > best.salary() {
                candidate
            } else {
                best
            }
        })
        .ok_or(OrgError::EmptyCollection)
}

pub fn total_salary<T: StaffMember>(members: &[T]) -> f64 {
    members.iter().map(StaffMember::salary).sum()
}

/// Mean salary, `0.0` for an empty slice.
pub fn average_salary<T: StaffMember>(members: &[T]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    total_salary(members) / members.len() as f64
}

pub fn interns<T: StaffMember>(members: &[T]) -> Vec<&T> {
    members.iter().filter(|member| member.is_intern()).collect()
}

/// First member whose name matches exactly (case-sensitive).
pub fn find_by_name<'a, T: StaffMember>(members: &'a [T], name: &str) -> Option<&'a T> {
    members.iter().find(|member| member.name() == name)
}

/// Multiplies every salary by `1 + fraction`. No bounds check on either side.
pub fn apply_raise<T: StaffMember>(members: &mut [T], fraction: f64) {
    let factor = 1.0 + fraction;
    for member in members.iter_mut() {
        let raised = member.salary() * factor;
        member.set_salary(raised);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleGroup<T> {
    pub role: String,
    pub members: Vec<T>,
}

/// Members partitioned by role. Groups come out in order of each role's
/// first appearance; members keep their input order within a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoleGroups<T> {
    groups: Vec<RoleGroup<T>>,
}

impl<T> RoleGroups<T> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleGroup<T>> {
        self.groups.iter()
    }

    pub fn get(&self, role: &str) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|group| group.role == role)
            .map(|group| group.members.as_slice())
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.role.as_str())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> RoleGroups<U> {
        RoleGroups {
            groups: self
                .groups
                .into_iter()
                .map(|group| RoleGroup {
                    role: group.role,
                    members: group.members.into_iter().map(&mut f).collect(),
                })
                .collect(),
        }
    }
}

impl<T> IntoIterator for RoleGroups<T> {
    type Item = RoleGroup<T>;
    type IntoIter = std::vec::IntoIter<RoleGroup<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

pub fn group_by_role<T: StaffMember>(members: &[T]) -> RoleGroups<&T> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<RoleGroup<&T>> = Vec::new();

    for member in members {
        let slot = *positions.entry(member.role()).or_insert_with(|| {
            groups.push(RoleGroup {
                role: member.role().to_string(),
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(member);
    }

    RoleGroups { groups }
}
