//! Row and input types for departments, roles, and employees.
//!
//! Listing types ([`Department`], [`RoleListing`], [`EmployeeListing`]) mirror
//! the projected columns of the list queries. Input types ([`NewDepartment`],
//! [`NewRole`], [`NewEmployee`], [`RoleChange`]) carry already-validated
//! values collected by the menu.

use serde::Serialize;

/// A row of the `department` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// A role joined with the name of its department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department: String,
}

/// An employee joined with role, department, and manager name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Title of the employee's role.
    pub role: String,
    pub department: String,
    pub salary: f64,
    /// "First Last" of the manager, or `None` when the employee has no manager.
    pub manager: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    /// Id of another employee. Only a key; the store resolves it.
    pub manager_id: Option<i64>,
}

/// Move one employee to a different role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleChange {
    pub employee_id: i64,
    pub role_id: i64,
}
