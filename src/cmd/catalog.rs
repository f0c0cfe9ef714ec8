//! 目录页命令模块
//!
//! 每个交互命令同步改写会话筛选状态并全量重算整页视图，
//! 返回值由前端原样渲染。

use tauri::State;
use tracing::info;

use crate::catalog::error::CatalogError;
use crate::catalog::service::{CatalogPageView, TaxonomyView};
use crate::commands::AppState;
use crate::models::{AppError, Difficulty};

type Result<T> = std::result::Result<T, AppError>;

/// 当前筛选条件下的目录页视图
#[tauri::command]
pub async fn catalog_page(state: State<'_, AppState>) -> Result<CatalogPageView> {
    let filter = state.catalog_filter.read().await;
    Ok(state.catalog_service.page(&filter))
}

/// 更新搜索词并重算目录页（每次按键触发，无防抖）
#[tauri::command]
pub async fn catalog_set_search(
    state: State<'_, AppState>,
    query: String,
) -> Result<CatalogPageView> {
    let mut filter = state.catalog_filter.write().await;
    filter.set_search(query);
    Ok(state.catalog_service.page(&filter))
}

/// 分类筛选切换：再次选择已选分类即取消
#[tauri::command]
pub async fn catalog_toggle_category(
    state: State<'_, AppState>,
    value: String,
) -> Result<CatalogPageView> {
    let mut filter = state.catalog_filter.write().await;
    filter.toggle_category(&value);
    info!("[Catalog] 分类筛选: {:?}", filter.category);
    Ok(state.catalog_service.page(&filter))
}

/// 难度筛选切换：同样单选可反选。取值大小写不敏感，表外取值报参数错误。
#[tauri::command]
pub async fn catalog_toggle_difficulty(
    state: State<'_, AppState>,
    value: String,
) -> Result<CatalogPageView> {
    let difficulty = Difficulty::parse(&value)
        .ok_or_else(|| AppError::from(CatalogError::UnknownDifficulty(value)))?;
    let mut filter = state.catalog_filter.write().await;
    filter.toggle_difficulty(difficulty);
    info!("[Catalog] 难度筛选: {:?}", filter.difficulty);
    Ok(state.catalog_service.page(&filter))
}

/// 清空全部筛选条件（空态里的重置动作也走这里）
#[tauri::command]
pub async fn catalog_clear_filters(state: State<'_, AppState>) -> Result<CatalogPageView> {
    let mut filter = state.catalog_filter.write().await;
    filter.clear();
    Ok(state.catalog_service.page(&filter))
}

/// 分类/难度选项表（前端下拉渲染用）
#[tauri::command]
pub async fn catalog_taxonomy(state: State<'_, AppState>) -> Result<TaxonomyView> {
    Ok(state.catalog_service.taxonomy())
}
