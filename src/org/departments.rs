use rusqlite::params;

use crate::db::Gateway;
use crate::error::StoreError;
use crate::org::types::{Department, NewDepartment};

/// All departments, in id order.
pub fn list_departments(gw: &Gateway) -> Result<Vec<Department>, StoreError> {
    gw.query("SELECT id, name FROM department ORDER BY id", [], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })
}

/// Insert a department and return its new id.
pub fn add_department(gw: &Gateway, department: &NewDepartment) -> Result<i64, StoreError> {
    gw.execute(
        "INSERT INTO department (name) VALUES (?1)",
        params![department.name],
    )?;
    Ok(gw.last_insert_id())
}
