use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::error::TrackerError;

/// A string key-value store in the manner of the browser's localStorage
pub trait KeyValueStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, TrackerError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), TrackerError>;
    fn remove_item(&mut self, key: &str) -> Result<(), TrackerError>;
}

/// In-memory store. Clones share their content, so a store handed to one session
/// can be inspected or reused by another one.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), TrackerError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}
