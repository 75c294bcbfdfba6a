//! Employee Storage
//! Mission: Persist employee records with SQLite

use crate::employees::models::Employee;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::info;

/// Employee store with SQLite backend
pub struct EmployeeStore {
    db_path: String,
}

impl EmployeeStore {
    /// Create a new employee store, initialize the schema, and seed the
    /// table on first run.
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                role TEXT NOT NULL,
                salary REAL NOT NULL
            )",
            [],
        )?;

        self.seed_if_empty(&conn)?;

        Ok(())
    }

    /// Seed two starter records the first time the service runs against an
    /// empty table.
    fn seed_if_empty(&self, conn: &Connection) -> Result<()> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
            .context("Failed to count employees")?;

        if count == 0 {
            conn.execute(
                "INSERT INTO employees (name, role, salary) VALUES (?1, ?2, ?3)",
                params!["Alice", "Manager", 60000.0],
            )?;
            conn.execute(
                "INSERT INTO employees (name, role, salary) VALUES (?1, ?2, ?3)",
                params!["Bob", "Developer", 40000.0],
            )?;
            info!("🌱 Seeded employee table with starter records");
        }

        Ok(())
    }

    /// List all employees in storage order
    pub fn list(&self) -> Result<Vec<Employee>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare("SELECT id, name, role, salary FROM employees")?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    role: row.get(2)?,
                    salary: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    /// Insert a new employee, assigning a fresh id
    pub fn create(&self, name: &str, role: &str, salary: f64) -> Result<Employee> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "INSERT INTO employees (name, role, salary) VALUES (?1, ?2, ?3)",
            params![name, role, salary],
        )
        .context("Failed to insert employee")?;

        Ok(Employee {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            role: role.to_string(),
            salary,
        })
    }

    /// Replace name/role/salary for the given id.
    ///
    /// A missing id is a silent no-op that still reports success.
    pub fn update(&self, id: i64, name: &str, role: &str, salary: f64) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "UPDATE employees SET name = ?1, role = ?2, salary = ?3 WHERE id = ?4",
            params![name, role, salary, id],
        )
        .context("Failed to update employee")?;

        Ok(())
    }

    /// Delete the record with the given id; missing ids are a no-op.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute("DELETE FROM employees WHERE id = ?1", params![id])
            .context("Failed to delete employee")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (EmployeeStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = EmployeeStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_seed_records_on_first_run() {
        let (store, _temp) = create_test_store();

        let employees = store.list().unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Alice");
        assert_eq!(employees[0].role, "Manager");
        assert_eq!(employees[0].salary, 60000.0);
        assert_eq!(employees[1].name, "Bob");
    }

    #[test]
    fn test_seed_does_not_duplicate_on_reopen() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();

        let _first = EmployeeStore::new(db_path).unwrap();
        let second = EmployeeStore::new(db_path).unwrap();

        assert_eq!(second.list().unwrap().len(), 2);
    }

    #[test]
    fn test_create_assigns_unique_id() {
        let (store, _temp) = create_test_store();

        let carol = store.create("Carol", "Tester", 50000.0).unwrap();
        let dave = store.create("Dave", "Designer", 45000.0).unwrap();
        assert_ne!(carol.id, dave.id);

        let employees = store.list().unwrap();
        assert_eq!(employees.len(), 4);
        assert!(employees.iter().any(|e| e.name == "Carol" && e.salary == 50000.0));
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let (store, _temp) = create_test_store();

        let carol = store.create("Carol", "Tester", 50000.0).unwrap();
        store.update(carol.id, "Carol", "Lead Tester", 55000.0).unwrap();

        let employees = store.list().unwrap();
        let updated = employees.iter().find(|e| e.id == carol.id).unwrap();
        assert_eq!(updated.role, "Lead Tester");
        assert_eq!(updated.salary, 55000.0);
    }

    #[test]
    fn test_update_missing_id_is_silent_noop() {
        let (store, _temp) = create_test_store();

        let before = store.list().unwrap();
        store.update(9999, "Ghost", "Phantom", 1.0).unwrap();
        let after = store.list().unwrap();

        assert_eq!(before.len(), after.len());
        assert!(!after.iter().any(|e| e.name == "Ghost"));
    }

    #[test]
    fn test_delete_removes_record() {
        let (store, _temp) = create_test_store();

        let carol = store.create("Carol", "Tester", 50000.0).unwrap();
        store.delete(carol.id).unwrap();

        assert!(!store.list().unwrap().iter().any(|e| e.id == carol.id));
    }

    #[test]
    fn test_delete_missing_id_is_silent_noop() {
        let (store, _temp) = create_test_store();

        store.delete(9999).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
