use const_format::concatcp;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params, Result, Transaction};

const STORAGE_TABLE: &'static str = "storage";

const CREATE_STORAGE_TABLE: &'static str = concatcp!(
    "CREATE TABLE IF NOT EXISTS ", STORAGE_TABLE, " (
        key TEXT NOT NULL PRIMARY KEY,
        value TEXT NOT NULL
    )");

const UPSERT_ITEM: &'static str = concatcp!(
    "INSERT INTO ", STORAGE_TABLE, " (key, value) VALUES (?, ?)
        ON CONFLICT(key) DO
        UPDATE SET value = excluded.value");

const SELECT_ITEM: &'static str =
    concatcp!("SELECT value FROM ", STORAGE_TABLE, " WHERE key = ?");

const DELETE_ITEM: &'static str =
    concatcp!("DELETE FROM ", STORAGE_TABLE, " WHERE key = ?");

// This is just a namespace to keep method names short
pub struct StorageTable;

impl StorageTable {
    pub fn create_table(conn: &Connection) -> Result<()> {
        debug!("Execute\n{}", CREATE_STORAGE_TABLE);
        conn.execute(CREATE_STORAGE_TABLE, [])?;
        Ok(())
    }

    pub fn upsert(tx: &Transaction, key: &str, value: &str) -> Result<()> {
        // Values hold entire workout collections, so only their size is logged
        debug!("Execute\n{} with: {}, <{} bytes>", UPSERT_ITEM, key, value.len());
        tx.execute(UPSERT_ITEM, params![key, value])?;
        Ok(())
    }

    pub fn select(tx: &Transaction, key: &str) -> Result<Option<String>> {
        debug!("Execute\n{} with: {}", SELECT_ITEM, key);
        let mut stmt = tx.prepare(SELECT_ITEM)?;
        stmt.query_row([key], |row | {
            Ok(row.get(0)?)
        }).optional()
    }

    pub fn delete(tx: &Transaction, key: &str) -> Result<bool> {
        debug!("Execute\n{} with: {}", DELETE_ITEM, key);
        let row_count = tx.execute(DELETE_ITEM, params![key])?;
        Ok(row_count == 1)
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use crate::database::storage_table::StorageTable;

    #[test]
    fn test_upsert_initial() {
        let mut conn = create_connection_and_table();
        let tx = conn.transaction().unwrap();
        assert!(StorageTable::upsert(&tx, "workouts", "foo").is_ok());
        assert!(tx.commit().is_ok());

        check_result(&mut conn, "workouts", Some("foo"));
    }

    #[test]
    fn test_upsert_conflict() {
        let mut conn = create_connection_and_table();
        let tx = conn.transaction().unwrap();
        assert!(StorageTable::upsert(&tx, "workouts", "foo").is_ok());
        assert!(StorageTable::upsert(&tx, "other", "baz").is_ok());
        assert!(StorageTable::upsert(&tx, "workouts", "bar").is_ok());
        assert!(tx.commit().is_ok());

        check_result(&mut conn, "workouts", Some("bar"));
        check_result(&mut conn, "other", Some("baz"));
    }

    #[test]
    fn test_select_empty() {
        let mut conn = create_connection_and_table();
        check_result(&mut conn, "workouts", None);
    }

    #[test]
    fn test_delete() {
        let mut conn = create_connection_and_table();
        let tx = conn.transaction().unwrap();
        assert!(StorageTable::upsert(&tx, "workouts", "foo").is_ok());
        let result = StorageTable::delete(&tx, "workouts");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), true);
        assert!(tx.commit().is_ok());

        check_result(&mut conn, "workouts", None);
    }

    #[test]
    fn test_delete_missing() {
        let mut conn = create_connection_and_table();
        let tx = conn.transaction().unwrap();
        let result = StorageTable::delete(&tx, "workouts");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), false);
        assert!(tx.commit().is_ok());
    }

    fn create_connection_and_table() -> Connection {
        let conn = Connection::open(":memory:");
        assert!(conn.is_ok());
        let conn = conn.unwrap();
        assert!(StorageTable::create_table(&conn).is_ok());
        conn
    }

    fn check_result(conn: &mut Connection, key: &str, reference: Option<&str>) {
        let tx = conn.transaction().unwrap();
        let value = StorageTable::select(&tx, key);
        assert!(tx.commit().is_ok());
        assert!(value.is_ok());
        assert_eq!(value.unwrap().as_deref(), reference);
    }
}
