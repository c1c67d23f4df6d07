use rusqlite::params;

use crate::db::Gateway;
use crate::error::StoreError;
use crate::org::types::{NewRole, RoleListing};

const LIST_ROLES_SQL: &str = "\
SELECT role.id, role.title, role.salary, department.name AS department
FROM role
INNER JOIN department ON role.department_id = department.id
ORDER BY role.id";

/// All roles with their department name.
pub fn list_roles(gw: &Gateway) -> Result<Vec<RoleListing>, StoreError> {
    gw.query(LIST_ROLES_SQL, [], |row| {
        Ok(RoleListing {
            id: row.get(0)?,
            title: row.get(1)?,
            salary: row.get(2)?,
            department: row.get(3)?,
        })
    })
}

/// Insert a role. The department id is not checked here; the store rejects
/// one that does not exist.
pub fn add_role(gw: &Gateway, role: &NewRole) -> Result<i64, StoreError> {
    gw.execute(
        "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
        params![role.title, role.salary, role.department_id],
    )?;
    Ok(gw.last_insert_id())
}
