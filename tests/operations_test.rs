mod helpers;

use employee_tracker::error::StoreError;
use employee_tracker::org;
use employee_tracker::org::types::{NewDepartment, NewEmployee, NewRole, RoleChange};
use helpers::{seeded_db, test_db};

#[test]
fn added_department_is_listed_by_name() {
    let gw = test_db();
    for name in ["Finance", "R&D", "Ops 'n' Support", ""] {
        let id = org::add_department(&gw, &NewDepartment { name: name.into() }).unwrap();
        let listed = org::list_departments(&gw).unwrap();
        let row = listed.iter().find(|d| d.id == id).unwrap();
        assert_eq!(row.name, name);
    }
}

#[test]
fn roles_list_joins_department_name() {
    let (gw, seed) = seeded_db();
    let roles = org::list_roles(&gw).unwrap();
    assert_eq!(roles.len(), 2);

    let engineer = roles.iter().find(|r| r.id == seed.engineer).unwrap();
    assert_eq!(engineer.title, "Engineer");
    assert_eq!(engineer.salary, 120000.0);
    assert_eq!(engineer.department, "Engineering");
}

#[test]
fn manager_column_is_absent_without_manager() {
    let (gw, seed) = seeded_db();
    let employees = org::list_employees(&gw).unwrap();

    let ada = employees.iter().find(|e| e.id == seed.ada).unwrap();
    assert_eq!(ada.manager, None);

    let grace = employees.iter().find(|e| e.id == seed.grace).unwrap();
    assert_eq!(grace.manager.as_deref(), Some("Ada Lovelace"));
    assert_eq!(grace.role, "Engineer");
    assert_eq!(grace.department, "Engineering");
    assert_eq!(grace.salary, 120000.0);
}

#[test]
fn update_changes_only_the_target_employee() {
    let (gw, seed) = seeded_db();

    let changed = org::update_employee_role(
        &gw,
        RoleChange { employee_id: seed.grace, role_id: seed.salesperson },
    )
    .unwrap();
    assert_eq!(changed, 1);

    let employees = org::list_employees(&gw).unwrap();
    let grace = employees.iter().find(|e| e.id == seed.grace).unwrap();
    assert_eq!(grace.role, "Salesperson");
    assert_eq!(grace.department, "Sales");
    assert_eq!(grace.salary, 80000.0);

    let ada = employees.iter().find(|e| e.id == seed.ada).unwrap();
    assert_eq!(ada.role, "Engineer");
}

#[test]
fn update_of_unknown_employee_touches_nothing() {
    let (gw, seed) = seeded_db();
    let changed = org::update_employee_role(
        &gw,
        RoleChange { employee_id: 999, role_id: seed.salesperson },
    )
    .unwrap();
    assert_eq!(changed, 0);
}

#[test]
fn update_to_unknown_role_is_rejected() {
    let (gw, seed) = seeded_db();
    let result = org::update_employee_role(&gw, RoleChange { employee_id: seed.ada, role_id: 999 });
    assert!(matches!(result, Err(StoreError::Rejected(_))));

    let ada = org::list_employees(&gw)
        .unwrap()
        .into_iter()
        .find(|e| e.id == seed.ada)
        .unwrap();
    assert_eq!(ada.role, "Engineer");
}

#[test]
fn employee_with_unknown_manager_is_rejected() {
    let (gw, seed) = seeded_db();
    let result = org::add_employee(
        &gw,
        &NewEmployee {
            first_name: "Nobody".into(),
            last_name: "Reports".into(),
            role_id: seed.engineer,
            manager_id: Some(4242),
        },
    );
    assert!(result.is_err());
    assert_eq!(org::list_employees(&gw).unwrap().len(), 2);
}

#[test]
fn role_for_missing_department_is_rejected() {
    let (gw, seed) = seeded_db();
    let ok = org::add_role(
        &gw,
        &NewRole { title: "Account Exec".into(), salary: 95000.0, department_id: seed.sales },
    );
    assert!(ok.is_ok());

    let bad = org::add_role(
        &gw,
        &NewRole { title: "Phantom".into(), salary: 1.0, department_id: 77 },
    );
    assert!(bad.is_err());
    assert_eq!(org::list_roles(&gw).unwrap().len(), 3);
}

#[test]
fn an_employee_can_manage_themselves() {
    // Cycles are the store's business; the tool forwards whatever it is given.
    let (gw, seed) = seeded_db();
    gw.execute(
        "UPDATE employee SET manager_id = ?1 WHERE id = ?1",
        [seed.ada],
    )
    .unwrap();

    let ada = org::list_employees(&gw)
        .unwrap()
        .into_iter()
        .find(|e| e.id == seed.ada)
        .unwrap();
    assert_eq!(ada.manager.as_deref(), Some("Ada Lovelace"));
}
