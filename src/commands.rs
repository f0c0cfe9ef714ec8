//! 应用全局状态
//!
//! 题库与目录筛选状态在应用启动时构造一次，由 Tauri 托管。

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::filter::CatalogFilter;
use crate::catalog::repo::{QuestionRepo, StaticQuestionRepo};
use crate::catalog::service::CatalogService;

pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    /// 目录页会话级筛选状态：交互命令同步改写并全量重算视图
    pub catalog_filter: RwLock<CatalogFilter>,
}

impl AppState {
    pub fn new() -> Self {
        let repo: Arc<dyn QuestionRepo> = Arc::new(StaticQuestionRepo::new());
        info!("[AppState] 静态题库加载完成，共 {} 题", repo.all().len());
        Self {
            catalog_service: Arc::new(CatalogService::new(repo)),
            catalog_filter: RwLock::new(CatalogFilter::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
