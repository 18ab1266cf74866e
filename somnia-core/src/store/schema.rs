//! Schema setup and versioning
//!
//! The numbered SQL files under `migrations/` are applied at most once
//! each; SQLite's `user_version` pragma records how far a given database
//! file has advanced. Opening a store fast-forwards it to the latest step.

use rusqlite::Connection;

use super::StoreError;

/// Ordered schema steps. Shipped entries are frozen; new work is appended.
const STEPS: &[(&str, &str)] = &[("v001_initial", include_str!("migrations/v001_initial.sql"))];

/// The step count an up-to-date database reports.
pub fn latest_version() -> i32 {
    STEPS.len() as i32
}

/// Read the applied-step counter out of the database.
pub fn applied_version(conn: &Connection) -> Result<i32, StoreError> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Bring the database up to the latest schema step. Already-applied steps
/// are skipped, so this is safe to call on every open.
pub fn apply_pending(conn: &Connection) -> Result<(), StoreError> {
    let mut applied = applied_version(conn)?;
    while applied < latest_version() {
        let (name, sql) = STEPS[applied as usize];
        conn.execute_batch(sql)
            .map_err(|e| StoreError::Migration(format!("{name}: {e}")))?;
        applied += 1;
        conn.pragma_update(None, "user_version", applied)?;
        tracing::info!(step = name, version = applied, "applied schema step");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_fast_forwards_to_latest() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(applied_version(&conn).unwrap(), 0);
        apply_pending(&conn).unwrap();
        assert_eq!(applied_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn up_to_date_database_skips_every_step() {
        let conn = Connection::open_in_memory().unwrap();
        apply_pending(&conn).unwrap();
        conn.execute(
            "INSERT INTO questions (id, text, ord, kind) VALUES ('q', 't', 1, 'input')",
            [],
        )
        .unwrap();

        // A second pass must not re-run v001 and recreate the tables.
        apply_pending(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(applied_version(&conn).unwrap(), latest_version());
    }
}
