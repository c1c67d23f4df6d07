//! The closed set of menu actions and the commands they become once their
//! follow-up answers are collected.

use crate::org::types::{NewDepartment, NewEmployee, NewRole, RoleChange};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 8] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewDepartments => "View all departments",
            Self::ViewRoles => "View all roles",
            Self::ViewEmployees => "View all employees",
            Self::AddDepartment => "Add a department",
            Self::AddRole => "Add a role",
            Self::AddEmployee => "Add an employee",
            Self::UpdateEmployeeRole => "Update an employee role",
            Self::Exit => "Exit",
        }
    }

    /// Resolve a menu answer: either the 1-based position or the label,
    /// ignoring case and surrounding whitespace.
    pub fn from_selection(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(input))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully specified request, ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment(NewDepartment),
    AddRole(NewRole),
    AddEmployee(NewEmployee),
    UpdateEmployeeRole(RoleChange),
    Exit,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Self::ViewDepartments => Action::ViewDepartments,
            Self::ViewRoles => Action::ViewRoles,
            Self::ViewEmployees => Action::ViewEmployees,
            Self::AddDepartment(_) => Action::AddDepartment,
            Self::AddRole(_) => Action::AddRole,
            Self::AddEmployee(_) => Action::AddEmployee,
            Self::UpdateEmployeeRole(_) => Action::UpdateEmployeeRole,
            Self::Exit => Action::Exit,
        }
    }
}
