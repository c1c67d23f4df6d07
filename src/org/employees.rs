use rusqlite::params;

use crate::db::Gateway;
use crate::error::StoreError;
use crate::org::types::{EmployeeListing, NewEmployee, RoleChange};

// `||` yields NULL when there is no manager row, so the column stays absent
// instead of becoming a lone space.
const LIST_EMPLOYEES_SQL: &str = "\
SELECT employee.id, employee.first_name, employee.last_name,
       role.title AS role, department.name AS department, role.salary,
       manager.first_name || ' ' || manager.last_name AS manager
FROM employee
INNER JOIN role ON employee.role_id = role.id
INNER JOIN department ON role.department_id = department.id
LEFT JOIN employee manager ON employee.manager_id = manager.id
ORDER BY employee.id";

/// All employees with role title, department, salary, and manager name.
pub fn list_employees(gw: &Gateway) -> Result<Vec<EmployeeListing>, StoreError> {
    gw.query(LIST_EMPLOYEES_SQL, [], |row| {
        Ok(EmployeeListing {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            role: row.get(3)?,
            department: row.get(4)?,
            salary: row.get(5)?,
            manager: row.get(6)?,
        })
    })
}

/// Insert an employee. A `None` manager is stored as NULL.
pub fn add_employee(gw: &Gateway, employee: &NewEmployee) -> Result<i64, StoreError> {
    gw.execute(
        "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)",
        params![
            employee.first_name,
            employee.last_name,
            employee.role_id,
            employee.manager_id
        ],
    )?;
    Ok(gw.last_insert_id())
}

/// Point one employee at a new role. Returns the number of rows changed,
/// which is 0 when no employee has the given id.
pub fn update_employee_role(gw: &Gateway, change: RoleChange) -> Result<usize, StoreError> {
    gw.execute(
        "UPDATE employee SET role_id = ?1 WHERE id = ?2",
        params![change.role_id, change.employee_id],
    )
}
