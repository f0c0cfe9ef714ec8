//! 目录页筛选
//!
//! 三个筛选条件相互独立，取逻辑与：
//! - 分类：精确匹配，可反选
//! - 难度：精确匹配，可反选
//! - 搜索词：标题或任一标签的大小写不敏感子串匹配
//!
//! 筛选是稳定的：保持来源顺序，不重排、不合成记录；同一条件重复
//! 应用结果不变。每次交互全量重算，不做防抖也不做缓存。

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, QuestionSummary};

/// 目录页筛选状态
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub search: String,
}

impl CatalogFilter {
    /// 单条记录是否通过全部谓词
    pub fn matches(&self, question: &QuestionSummary) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| question.category == c);

        let difficulty_ok = self
            .difficulty
            .map_or(true, |d| question.difficulty == Some(d));

        let search_ok = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            question.title.to_lowercase().contains(&needle)
                || question
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        };

        category_ok && difficulty_ok && search_ok
    }

    /// 对来源序列做稳定筛选
    pub fn apply(&self, source: &[QuestionSummary]) -> Vec<QuestionSummary> {
        source.iter().filter(|q| self.matches(q)).cloned().collect()
    }

    /// 分类单选可反选：再次选择已选分类即清除
    pub fn toggle_category(&mut self, value: &str) {
        if self.category.as_deref() == Some(value) {
            self.category = None;
        } else {
            self.category = Some(value.to_string());
        }
    }

    /// 难度单选可反选
    pub fn toggle_difficulty(&mut self, value: Difficulty) {
        if self.difficulty == Some(value) {
            self.difficulty = None;
        } else {
            self.difficulty = Some(value);
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// 清空全部筛选条件
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.category.is_none() && self.difficulty.is_none() && self.search.is_empty()
    }
}
