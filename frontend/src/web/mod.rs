//! 浏览器 API 适配层
//!
//! `orbit` 核心中的各个能力在浏览器里的实现。

pub mod file;
mod http;
pub mod logger;
pub mod route;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use storage::{BrowserSessionStore, BrowserStorage};
