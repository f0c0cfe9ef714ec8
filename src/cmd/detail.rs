//! 详情页命令模块

use tauri::State;
use tauri_plugin_opener::OpenerExt;
use tracing::info;

use crate::commands::AppState;
use crate::detail::view::DetailView;
use crate::models::AppError;

type Result<T> = std::result::Result<T, AppError>;

/// 按题目 id 获取详情视图
#[tauri::command]
pub async fn question_detail(state: State<'_, AppState>, id: String) -> Result<DetailView> {
    let view = state.catalog_service.detail(&id)?;
    info!("[Detail] 打开题目 {} ({})", view.id, view.header.title);
    Ok(view)
}

/// 按标题 slug 获取详情视图
///
/// 兼容旧导航链接。slug 映射有损（大小写/空白差异会碰撞），
/// 命中目录顺序首个；新链接一律走 id。
#[tauri::command]
pub async fn question_detail_by_slug(
    state: State<'_, AppState>,
    slug: String,
) -> Result<DetailView> {
    Ok(state.catalog_service.detail_by_slug(&slug)?)
}

/// 打开参考资料链接（交给系统默认处理器）
#[tauri::command]
pub async fn open_resource(app: tauri::AppHandle, url: String) -> Result<()> {
    info!("[Detail] 打开参考资料: {}", url);
    app.opener()
        .open_url(url, None::<String>)
        .map_err(|e| AppError::unknown(format!("打开链接失败: {}", e)))
}
