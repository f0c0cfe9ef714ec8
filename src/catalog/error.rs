//! 目录域错误类型

use serde::Serialize;
use thiserror::Error;

use crate::models::AppError;

/// 目录域操作结果类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;

/// 目录域错误
#[derive(Debug, Error, Serialize)]
pub enum CatalogError {
    /// 题目未找到（按 id 或 slug 查找均可能触发）
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    /// 未知难度取值（筛选参数校验）
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::QuestionNotFound(_) => AppError::not_found(err.to_string()),
            CatalogError::UnknownDifficulty(_) => AppError::validation(err.to_string()),
        }
    }
}
