//! 目录页服务
//!
//! 持有题库访问接口，按当前筛选条件组装整页视图模型。
//! 视图模型由前端原样消费：分类标签/图标、难度文案/圆点颜色都在
//! 这里解析完毕，表外取值全部走兜底。

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::filter::CatalogFilter;
use crate::catalog::repo::{slug_for_title, QuestionRepo};
use crate::catalog::taxonomy::{
    self, CategoryOption, DifficultyOption, CATEGORIES, DIFFICULTIES,
};
use crate::detail::view::DetailView;
use crate::models::{Difficulty, QuestionSummary};

// ============================================================================
// 视图模型
// ============================================================================

/// 目录卡片视图
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuestionCardView {
    pub id: String,
    pub title: String,
    /// 标题 slug，详情页导航兼容入口
    pub slug: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_label: Option<&'static str>,
    pub category_icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_label: Option<&'static str>,
    pub difficulty_color: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// 空结果展示块：零命中不是错误，渲染带重置动作的空态
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmptyState {
    pub message: &'static str,
    pub reset_label: &'static str,
}

const EMPTY_STATE: EmptyState = EmptyState {
    message: "未找到匹配的面试题",
    reset_label: "清除所有筛选条件",
};

/// 目录整页视图
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageView {
    /// 当前筛选条件回显
    pub filter: CatalogFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_label: Option<&'static str>,
    pub questions: Vec<QuestionCardView>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// 筛选下拉选项表
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyView {
    pub categories: &'static [CategoryOption],
    pub difficulties: &'static [DifficultyOption],
}

// ============================================================================
// 服务结构
// ============================================================================

/// 目录页服务
pub struct CatalogService {
    repo: Arc<dyn QuestionRepo>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn QuestionRepo>) -> Self {
        Self { repo }
    }

    /// 按筛选条件重算整页视图。每次交互全量重算，不做缓存。
    pub fn page(&self, filter: &CatalogFilter) -> CatalogPageView {
        let summaries = self.repo.summaries();
        let visible = filter.apply(&summaries);
        debug!(
            "[Catalog] 筛选结果 {}/{} 条 (filter={:?})",
            visible.len(),
            summaries.len(),
            filter
        );

        let questions: Vec<QuestionCardView> = visible.iter().map(card_view).collect();
        let empty_state = if questions.is_empty() {
            Some(EMPTY_STATE)
        } else {
            None
        };

        CatalogPageView {
            filter: filter.clone(),
            category_label: filter
                .category
                .as_deref()
                .and_then(taxonomy::category_label),
            difficulty_label: filter.difficulty.map(taxonomy::difficulty_label),
            total: questions.len(),
            questions,
            empty_state,
        }
    }

    /// 筛选下拉选项表
    pub fn taxonomy(&self) -> TaxonomyView {
        TaxonomyView {
            categories: CATEGORIES,
            difficulties: DIFFICULTIES,
        }
    }

    /// 按 id 取详情视图
    pub fn detail(&self, id: &str) -> CatalogResult<DetailView> {
        let question = self
            .repo
            .by_id(id)
            .ok_or_else(|| CatalogError::QuestionNotFound(id.to_string()))?;
        Ok(DetailView::build(question))
    }

    /// 按标题 slug 取详情视图（旧导航链接兼容）
    pub fn detail_by_slug(&self, slug: &str) -> CatalogResult<DetailView> {
        let question = self
            .repo
            .by_slug(slug)
            .ok_or_else(|| CatalogError::QuestionNotFound(slug.to_string()))?;
        Ok(DetailView::build(question))
    }
}

fn card_view(q: &QuestionSummary) -> QuestionCardView {
    QuestionCardView {
        id: q.id.clone(),
        title: q.title.clone(),
        slug: slug_for_title(&q.title),
        category: q.category.clone(),
        category_label: taxonomy::category_label(&q.category),
        category_icon: taxonomy::category_icon(&q.category),
        difficulty: q.difficulty,
        difficulty_label: q.difficulty.map(taxonomy::difficulty_label),
        difficulty_color: taxonomy::difficulty_color(q.difficulty),
        tags: q.tags.clone(),
    }
}
