//! Key-value persistence for theme preferences.
//!
//! The theme store only ever needs string values under a handful of fixed
//! keys, so storage is a minimal [`KvStore`] capability. Two implementations
//! ship with the crate:
//! - [`MemoryStore`]: process-local, shared between clones
//! - [`RedbStore`]: ACID file-backed store using redb

use std::sync::Arc;

use crate::error::GardenResult;

mod file;
mod memory;

pub use file::RedbStore;
pub use memory::MemoryStore;

/// Minimal string key-value capability.
///
/// Methods take `&self`; implementations provide their own interior locking.
pub trait KvStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> GardenResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> GardenResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> GardenResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GardenResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> GardenResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GardenResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> GardenResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GardenResult<()> {
        (**self).set(key, value)
    }
}
