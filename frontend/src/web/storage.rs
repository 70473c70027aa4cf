//! LocalStorage 封装模块
//!
//! 会话以纯字符串保存（不做 JSON 编码），所以这里走 `raw()` 接口。

use gloo_storage::{LocalStorage, Storage};
use orbit::{KeyValueStore, PersistentSessionStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

pub type BrowserSessionStore = PersistentSessionStore<BrowserStorage>;
