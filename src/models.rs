use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// 数据类型定义
// ============================================================================

/// 难度等级
///
/// 序列化统一为小写（`easy`/`medium`/`hard`）。历史数据里目录页用大写、
/// 详情页用小写，解析入口 `parse` 做大小写归一，之后全程只有这一种写法。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 大小写不敏感解析；未知取值返回 None，由展示层走兜底分支
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 题目类型
///
/// 详情页按 `Algorithm` 与否选择内容块：算法题走示例/约束/题解路径，
/// 其余类型走直接作答路径。新增类型时穷尽匹配会在编译期报缺。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Algorithm,
    Business,
    Theory,
    SystemDesign,
    Database,
    Frontend,
    Devops,
    MachineLearning,
    Behavioral,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Algorithm => "algorithm",
            QuestionType::Business => "business",
            QuestionType::Theory => "theory",
            QuestionType::SystemDesign => "system-design",
            QuestionType::Database => "database",
            QuestionType::Frontend => "frontend",
            QuestionType::Devops => "devops",
            QuestionType::MachineLearning => "machine-learning",
            QuestionType::Behavioral => "behavioral",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "algorithm" => QuestionType::Algorithm,
            "business" => QuestionType::Business,
            "theory" => QuestionType::Theory,
            "system-design" => QuestionType::SystemDesign,
            "database" => QuestionType::Database,
            "frontend" => QuestionType::Frontend,
            "devops" => QuestionType::Devops,
            "machine-learning" => QuestionType::MachineLearning,
            "behavioral" => QuestionType::Behavioral,
            _ => QuestionType::Theory,
        }
    }
}

/// 算法题示例
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// 参考资料链接
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

/// 相关题目引用
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedQuestion {
    pub id: String,
    pub title: String,
}

/// 题目完整记录
///
/// 构造期一次性载入，运行期只读。可选序列字段以空 Vec 表示缺失。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub id: String,
    pub title: String,
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_questions: Vec<RelatedQuestion>,
    pub updated_at: NaiveDate,
}

impl QuestionDetail {
    /// 目录卡片投影
    pub fn summary(&self) -> QuestionSummary {
        QuestionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone().unwrap_or_default(),
            difficulty: self.difficulty,
            tags: self.tags.clone(),
        }
    }
}

/// 目录卡片记录（title/category/difficulty/tags 的轻量投影）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionSummary {
    pub id: String,
    pub title: String,
    /// 未登记分类的记录此处为空串，展示层走图标兜底
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

// ============================================================================
// 结构化错误处理
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppErrorType {
    Validation,
    NotFound,
    Configuration,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppError {
    pub error_type: AppErrorType,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn new(error_type: AppErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_type: AppErrorType,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_type,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorType::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorType::NotFound, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(AppErrorType::Configuration, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(AppErrorType::Unknown, message)
    }
}

// 为AppError实现From trait以支持自动转换
impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::validation(message)
    }
}

impl From<&str> for AppError {
    fn from(message: &str) -> Self {
        AppError::validation(message.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::unknown(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::validation(format!("JSON序列化错误: {}", err))
    }
}
