use log::{debug, info};
use rusqlite::Connection;
use crate::database::storage_table::StorageTable;
use crate::error::TrackerError;
use crate::storage::key_value::KeyValueStorage;

/// [KeyValueStorage] backed by a single SQLite table
pub struct SqliteStorage {
    connection: Connection
}

impl SqliteStorage {
    pub fn new(db_path: &str) -> Result<Self, TrackerError> {
        info!("Open storage at {db_path}");
        let connection = Connection::open(db_path)?;
        StorageTable::create_table(&connection)?;
        Ok(Self { connection })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, TrackerError> {
        let tx = self.connection.transaction()?;
        let value = StorageTable::select(&tx, key)?;
        tx.commit()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        let tx = self.connection.transaction()?;
        StorageTable::upsert(&tx, key, value)?;
        tx.commit()?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), TrackerError> {
        let tx = self.connection.transaction()?;
        let removed = StorageTable::delete(&tx, key)?;
        tx.commit()?;
        debug!("Removed item {key}: {removed}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::key_value::KeyValueStorage;
    use crate::storage::sqlite_storage::SqliteStorage;

    #[test]
    fn test_set_get_remove() {
        let mut storage = create_storage();
        assert_eq!(storage.get_item("workouts").unwrap(), None);
        assert!(storage.set_item("workouts", "[]").is_ok());
        assert_eq!(storage.get_item("workouts").unwrap(), Some("[]".to_string()));
        assert!(storage.set_item("workouts", "[1]").is_ok());
        assert_eq!(storage.get_item("workouts").unwrap(), Some("[1]".to_string()));
        assert!(storage.remove_item("workouts").is_ok());
        assert_eq!(storage.get_item("workouts").unwrap(), None);
    }

    #[test]
    fn test_remove_missing() {
        let mut storage = create_storage();
        assert!(storage.remove_item("workouts").is_ok());
    }

    fn create_storage() -> SqliteStorage {
        let storage = SqliteStorage::new(":memory:");
        assert!(storage.is_ok());
        storage.unwrap()
    }
}
