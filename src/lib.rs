// Interview Hub library entry

pub mod catalog;
pub mod cmd;
pub mod commands;
pub mod detail;
pub mod models;

use tauri_plugin_log::{Target, TargetKind};
use tracing::info;

use crate::commands::AppState;

/// 启动 Tauri 应用
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        // 统一日志插件：落盘到各平台推荐目录；开发期输出到 Stdout/Webview
        .plugin(
            tauri_plugin_log::Builder::new()
                .clear_targets()
                .target(Target::new(TargetKind::LogDir {
                    file_name: Some("interview-hub".to_string()),
                }))
                .target(Target::new(TargetKind::Stdout))
                .target(Target::new(TargetKind::Webview))
                .level(log::LevelFilter::Info)
                .level_for("interview_hub_lib", log::LevelFilter::Info)
                .build(),
        )
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            cmd::catalog::catalog_page,
            cmd::catalog::catalog_set_search,
            cmd::catalog::catalog_toggle_category,
            cmd::catalog::catalog_toggle_difficulty,
            cmd::catalog::catalog_clear_filters,
            cmd::catalog::catalog_taxonomy,
            cmd::detail::question_detail,
            cmd::detail::question_detail_by_slug,
            cmd::detail::open_resource,
        ])
        .setup(|_app| {
            info!("interview-hub 启动完成（题库为静态数据，运行期只读）");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
