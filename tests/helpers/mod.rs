#![allow(dead_code)]

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use employee_tracker::db::Gateway;
use employee_tracker::menu::Menu;
use employee_tracker::org;
use employee_tracker::org::types::{NewDepartment, NewEmployee, NewRole};

/// Ids of the rows created by [`seeded_db`].
pub struct Seed {
    pub engineering: i64,
    pub sales: i64,
    pub engineer: i64,
    pub salesperson: i64,
    /// Has no manager.
    pub ada: i64,
    /// Reports to Ada.
    pub grace: i64,
}

/// Open a fresh in-memory store with tables in place.
pub fn test_db() -> Gateway {
    Gateway::open_in_memory().unwrap()
}

/// Two departments, one role in each, and a manager/report pair.
pub fn seeded_db() -> (Gateway, Seed) {
    let gw = test_db();

    let engineering = org::add_department(&gw, &NewDepartment { name: "Engineering".into() }).unwrap();
    let sales = org::add_department(&gw, &NewDepartment { name: "Sales".into() }).unwrap();

    let engineer = org::add_role(
        &gw,
        &NewRole { title: "Engineer".into(), salary: 120000.0, department_id: engineering },
    )
    .unwrap();
    let salesperson = org::add_role(
        &gw,
        &NewRole { title: "Salesperson".into(), salary: 80000.0, department_id: sales },
    )
    .unwrap();

    let ada = org::add_employee(
        &gw,
        &NewEmployee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role_id: engineer,
            manager_id: None,
        },
    )
    .unwrap();
    let grace = org::add_employee(
        &gw,
        &NewEmployee {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            role_id: engineer,
            manager_id: Some(ada),
        },
    )
    .unwrap();

    let seed = Seed { engineering, sales, engineer, salesperson, ada, grace };
    (gw, seed)
}

/// Drive a whole menu session from scripted input and return everything it
/// printed.
pub fn run_session(gw: &Gateway, script: &str) -> String {
    run_session_bytes(gw, script.as_bytes())
}

/// Like [`run_session`], for input that is not necessarily UTF-8.
pub fn run_session_bytes(gw: &Gateway, script: &[u8]) -> String {
    let mut menu = Menu::new(gw, Cursor::new(script.to_vec()), Vec::new());
    menu.run().unwrap();
    String::from_utf8(menu.into_output()).unwrap()
}

/// Run a session with a tracing subscriber installed and return the menu
/// output together with everything that was logged.
pub fn run_logged_session(gw: &Gateway, script: &str) -> (String, String) {
    let log = LogBuffer::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, || run_session(gw, script));
    (out, log.contents())
}

/// Shared in-memory sink for captured log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
