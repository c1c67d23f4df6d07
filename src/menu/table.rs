//! Plain-text tables for list results.

use crate::org::types::{Department, EmployeeListing, RoleListing};

/// A row type that can be shown as a table.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for RoleListing {
    const HEADERS: &'static [&'static str] = &["id", "title", "salary", "department"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            format!("{:.2}", self.salary),
            self.department.clone(),
        ]
    }
}

impl Tabular for EmployeeListing {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "role",
        "department",
        "salary",
        "manager",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.role.clone(),
            self.department.clone(),
            format!("{:.2}", self.salary),
            self.manager.clone().unwrap_or_default(),
        ]
    }
}

/// Render rows under a header line and a dashed rule, columns padded to the
/// widest cell. No trailing newline.
pub fn render_table<T: Tabular>(rows: &[T]) -> String {
    let body: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_row(&header, &widths));
    lines.push(format_row(&rule, &widths));
    for row in &body {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pad_to_widest_cell() {
        let rows = vec![
            Department { id: 1, name: "Engineering".into() },
            Department { id: 12, name: "HR".into() },
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id  name");
        assert_eq!(lines[1], "--  -----------");
        assert_eq!(lines[2], "1   Engineering");
        assert_eq!(lines[3], "12  HR");
    }

    #[test]
    fn empty_result_still_has_headers() {
        let table = render_table::<RoleListing>(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("id  title  salary  department"));
    }

    #[test]
    fn missing_manager_is_an_empty_cell() {
        let row = EmployeeListing {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: "Engineer".into(),
            department: "Engineering".into(),
            salary: 100000.0,
            manager: None,
        };
        assert_eq!(row.cells().last().unwrap(), "");
        assert_eq!(row.cells()[5], "100000.00");
    }
}
