//! 分类与难度的静态选项表
//!
//! 目录页下拉框、卡片图标与难度圆点都从这里取值。
//! 对表外键的查询一律给出兜底值，不存在未处理的失败路径。

use serde::Serialize;

use crate::models::Difficulty;

/// 分类选项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    /// lucide 图标名，由前端解析
    pub icon: &'static str,
    pub description: &'static str,
}

/// 难度选项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DifficultyOption {
    pub value: Difficulty,
    pub label: &'static str,
    /// 目录卡片难度圆点颜色
    pub color: &'static str,
}

/// 全部分类选项（顺序即下拉框展示顺序）
pub const CATEGORIES: &[CategoryOption] = &[
    CategoryOption {
        value: "algorithms",
        label: "算法与数据结构",
        icon: "brain-circuit",
        description: "包含常见算法问题和数据结构应用",
    },
    CategoryOption {
        value: "frontend",
        label: "前端开发",
        icon: "code",
        description: "HTML, CSS, JavaScript, React等前端技术",
    },
    CategoryOption {
        value: "backend",
        label: "后端开发",
        icon: "server",
        description: "服务器端开发、API设计与实现",
    },
    CategoryOption {
        value: "database",
        label: "数据库",
        icon: "database",
        description: "SQL, NoSQL数据库设计与优化",
    },
    CategoryOption {
        value: "system-design",
        label: "系统设计",
        icon: "network",
        description: "大型系统架构设计与分布式系统",
    },
    CategoryOption {
        value: "devops",
        label: "DevOps",
        icon: "layers",
        description: "CI/CD, 容器化, 云服务等",
    },
    CategoryOption {
        value: "machine-learning",
        label: "机器学习",
        icon: "sparkles",
        description: "AI与机器学习相关问题",
    },
    CategoryOption {
        value: "behavioral",
        label: "行为面试",
        icon: "book-open",
        description: "软技能与行为问题",
    },
];

/// 全部难度选项
pub const DIFFICULTIES: &[DifficultyOption] = &[
    DifficultyOption {
        value: Difficulty::Easy,
        label: "简单",
        color: "green",
    },
    DifficultyOption {
        value: Difficulty::Medium,
        label: "中等",
        color: "yellow",
    },
    DifficultyOption {
        value: Difficulty::Hard,
        label: "困难",
        color: "red",
    },
];

/// 表外分类的图标兜底
pub const FALLBACK_CATEGORY_ICON: &str = "file-code";

/// 缺失难度的圆点颜色兜底
pub const FALLBACK_DIFFICULTY_COLOR: &str = "gray";

/// 按取值查分类选项
pub fn category_option(value: &str) -> Option<&'static CategoryOption> {
    CATEGORIES.iter().find(|c| c.value == value)
}

/// 分类展示名；表外分类无标签
pub fn category_label(value: &str) -> Option<&'static str> {
    category_option(value).map(|c| c.label)
}

/// 分类图标；表外分类落到 file-code
pub fn category_icon(value: &str) -> &'static str {
    category_option(value).map_or(FALLBACK_CATEGORY_ICON, |c| c.icon)
}

/// 难度展示名
pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "简单",
        Difficulty::Medium => "中等",
        Difficulty::Hard => "困难",
    }
}

/// 难度圆点颜色；缺失难度落到 gray
pub fn difficulty_color(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        Some(Difficulty::Easy) => "green",
        Some(Difficulty::Medium) => "yellow",
        Some(Difficulty::Hard) => "red",
        None => FALLBACK_DIFFICULTY_COLOR,
    }
}
