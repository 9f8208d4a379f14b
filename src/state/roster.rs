//! Employees-page state: the employee table and the team roster.
//!
//! DESIGN
//! ======
//! Teams live on the backend and are loaded per page visit; employee
//! rows are browser-side drafts persisted to localStorage until a list
//! endpoint exists. Mutations are plain methods so roster rules test
//! natively.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use uuid::Uuid;

use crate::net::types::{Employee, Team, TeamMember};

/// localStorage key for employee drafts.
pub const EMPLOYEES_KEY: &str = "staffboard_employees";

/// Shared state for the employees page.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub employees: Vec<Employee>,
    pub teams: Vec<Team>,
    /// True while the team list request is in flight.
    pub teams_loading: bool,
}

impl RosterState {
    /// Append an employee draft; duplicate ids are ignored.
    pub fn add_employee(&mut self, employee: Employee) -> bool {
        if self.employees.iter().any(|e| e.id == employee.id) {
            return false;
        }
        self.employees.push(employee);
        true
    }

    /// Replace the team list with a fresh fetch result.
    pub fn set_teams(&mut self, teams: Vec<Team>) {
        self.teams = teams;
        self.teams_loading = false;
    }

    /// Append a newly created team.
    pub fn add_team(&mut self, team: Team) {
        self.teams.push(team);
    }

    /// Rename a team in place; unknown ids are a no-op.
    pub fn rename_team(&mut self, id: Uuid, name: &str) {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == id) {
            team.name = name.to_owned();
        }
    }

    /// Drop a team; unknown ids are a no-op.
    pub fn remove_team(&mut self, id: Uuid) {
        self.teams.retain(|t| t.id != id);
    }

    /// Add an employee to a team roster.
    ///
    /// Returns false when the team is unknown or the member is already
    /// on it.
    pub fn add_member(&mut self, team_id: Uuid, member: TeamMember) -> bool {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            return false;
        };
        if team.members.iter().any(|m| m.id == member.id) {
            return false;
        }
        team.members.push(member);
        true
    }

    /// Look up an employee draft by id.
    #[must_use]
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Placeholder teams shown when the backend is unreachable, so the page
/// stays usable against a cold environment.
#[must_use]
pub fn sample_teams() -> Vec<Team> {
    ["PHP", "Designing", "IOS", "Android", "Java", "Python"]
        .into_iter()
        .map(|name| Team {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            members: Vec::new(),
        })
        .collect()
}
