//! The interactive menu loop.
//!
//! [`Menu::run`] shows the menu, turns the chosen [`Action`] into a
//! [`Command`] by asking its follow-up questions, dispatches it to the
//! matching operation in [`crate::org`], and repeats until "Exit" or end of
//! input. A failed operation is reported and the loop carries on.

pub mod command;
pub mod prompt;
pub mod table;

use std::io::{self, BufRead, Write};

use crate::db::Gateway;
use crate::org;
use crate::org::types::{NewDepartment, NewEmployee, NewRole, RoleChange};

pub use command::{Action, Command};
pub use prompt::{validate_number, Presence, Prompter};
pub use table::{render_table, Tabular};

const WELCOME: &str = "Welcome to Employee Tracker";
const FAREWELL: &str = "Exiting Employee Tracker";

/// What the loop does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'g, R, W> {
    gateway: &'g Gateway,
    prompt: Prompter<R, W>,
}

impl<'g, R: BufRead, W: Write> Menu<'g, R, W> {
    pub fn new(gateway: &'g Gateway, input: R, output: W) -> Self {
        Self {
            gateway,
            prompt: Prompter::new(input, output),
        }
    }

    /// Run until the operator picks "Exit" or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.prompt.output(), "{WELCOME}")?;
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("input closed, leaving menu");
                    writeln!(self.prompt.output())?;
                    writeln!(self.prompt.output(), "{FAREWELL}")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu once and handle one selection.
    pub fn step(&mut self) -> io::Result<Flow> {
        let out = self.prompt.output();
        writeln!(out)?;
        writeln!(out, "What would you like to do?")?;
        for (i, action) in Action::ALL.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, action)?;
        }

        let selection = self.prompt.ask(">")?;
        match Action::from_selection(&selection) {
            Some(action) => {
                let command = self.gather(action)?;
                self.dispatch(command)
            }
            None => {
                tracing::debug!(selection = %selection, "unrecognized menu selection");
                writeln!(self.prompt.output(), "Invalid action")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Ask the follow-up questions an action needs.
    fn gather(&mut self, action: Action) -> io::Result<Command> {
        let p = &mut self.prompt;
        let command = match action {
            Action::ViewDepartments => Command::ViewDepartments,
            Action::ViewRoles => Command::ViewRoles,
            Action::ViewEmployees => Command::ViewEmployees,
            Action::AddDepartment => Command::AddDepartment(NewDepartment {
                name: p.ask("Enter the name of the department:")?,
            }),
            Action::AddRole => Command::AddRole(NewRole {
                title: p.ask("Enter the title of the role:")?,
                salary: p.ask_number("Enter the salary for this role:")?,
                department_id: p.ask_number("Enter the department ID for this role:")?,
            }),
            Action::AddEmployee => Command::AddEmployee(NewEmployee {
                first_name: p.ask("Enter the first name of the employee:")?,
                last_name: p.ask("Enter the last name of the employee:")?,
                role_id: p.ask_number("Enter the role ID for this employee:")?,
                manager_id: p.ask_optional_number(
                    "Enter the manager ID for this employee (leave blank if none):",
                )?,
            }),
            Action::UpdateEmployeeRole => Command::UpdateEmployeeRole(RoleChange {
                employee_id: p.ask_number("Enter the ID of the employee you want to update:")?,
                role_id: p.ask_number("Enter the new role ID for this employee:")?,
            }),
            Action::Exit => Command::Exit,
        };
        Ok(command)
    }

    /// Run one command against the store and print its result.
    ///
    /// Store errors are logged and reported on one line; they never end the
    /// loop. Only I/O errors on the console itself are returned.
    pub fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        let action = command.action();
        tracing::debug!(action = %action, "dispatching");

        let gw = self.gateway;
        let result = match command {
            Command::ViewDepartments => org::list_departments(gw).map(|rows| render_table(&rows)),
            Command::ViewRoles => org::list_roles(gw).map(|rows| render_table(&rows)),
            Command::ViewEmployees => org::list_employees(gw).map(|rows| render_table(&rows)),
            Command::AddDepartment(department) => org::add_department(gw, &department)
                .map(|_| "Department added successfully".to_string()),
            Command::AddRole(role) => {
                org::add_role(gw, &role).map(|_| "Role added successfully".to_string())
            }
            Command::AddEmployee(employee) => org::add_employee(gw, &employee)
                .map(|_| "Employee added successfully".to_string()),
            Command::UpdateEmployeeRole(change) => {
                org::update_employee_role(gw, change).map(|changed| {
                    if changed == 0 {
                        format!("No employee found with id {}", change.employee_id)
                    } else {
                        "Employee role updated successfully".to_string()
                    }
                })
            }
            Command::Exit => {
                writeln!(self.prompt.output(), "{FAREWELL}")?;
                return Ok(Flow::Exit);
            }
        };

        let out = self.prompt.output();
        match result {
            Ok(report) => writeln!(out, "{report}")?,
            Err(e) => {
                tracing::error!(action = %action, error = %e, "operation failed");
                writeln!(out, "Error executing query: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Consume the menu and hand back its output sink.
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}
