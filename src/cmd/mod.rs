//! 命令子模块
//!
//! 按功能域组织：目录页与详情页

pub mod catalog;
pub mod detail;

// Re-export AppState from the main commands module
pub use crate::commands::AppState;
