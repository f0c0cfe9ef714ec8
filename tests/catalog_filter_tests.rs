//! 目录筛选的集成测试
//!
//! 覆盖筛选契约：子序列性、幂等性、大小写不敏感搜索、单选反选、
//! 组合条件与空态路径。

use std::sync::Arc;

use interview_hub_lib::catalog::filter::CatalogFilter;
use interview_hub_lib::catalog::repo::{QuestionRepo, StaticQuestionRepo};
use interview_hub_lib::catalog::service::CatalogService;
use interview_hub_lib::models::{Difficulty, QuestionSummary};

fn seeded_service() -> CatalogService {
    CatalogService::new(Arc::new(StaticQuestionRepo::new()))
}

/// 三条记录的最小样本：两数之和/防抖/分布式缓存
fn three_record_sample() -> Vec<QuestionSummary> {
    StaticQuestionRepo::new()
        .summaries()
        .into_iter()
        .filter(|q| ["1", "2", "3"].contains(&q.id.as_str()))
        .collect()
}

#[test]
fn filtered_result_is_subsequence_of_source() {
    let repo = StaticQuestionRepo::new();
    let source = repo.summaries();
    let source_ids: Vec<&str> = source.iter().map(|q| q.id.as_str()).collect();

    let filters = [
        CatalogFilter::default(),
        CatalogFilter {
            category: Some("frontend".to_string()),
            ..Default::default()
        },
        CatalogFilter {
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        },
        CatalogFilter {
            search: "系统".to_string(),
            ..Default::default()
        },
    ];

    for filter in &filters {
        let result = filter.apply(&source);
        // 结果是来源的子序列：保持相对顺序，不合成新记录
        let mut cursor = 0usize;
        for item in &result {
            let pos = source_ids[cursor..]
                .iter()
                .position(|id| *id == item.id)
                .unwrap_or_else(|| panic!("结果包含来源之外或乱序的记录: {}", item.id));
            cursor += pos + 1;
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let source = StaticQuestionRepo::new().summaries();
    let filter = CatalogFilter {
        category: Some("frontend".to_string()),
        difficulty: None,
        search: "react".to_string(),
    };
    let once = filter.apply(&source);
    let twice = filter.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn search_is_case_insensitive_across_title_and_tags() {
    let source = StaticQuestionRepo::new().summaries();
    let filter = CatalogFilter {
        search: "react".to_string(),
        ..Default::default()
    };
    let result = filter.apply(&source);
    // "react" 同时命中标题 "React Hooks原理" 与标签 "React"
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "React Hooks原理");

    let upper = CatalogFilter {
        search: "REACT".to_string(),
        ..Default::default()
    };
    assert_eq!(upper.apply(&source), result);
}

#[test]
fn toggling_selected_category_restores_unfiltered_result() {
    let source = StaticQuestionRepo::new().summaries();
    let unfiltered = CatalogFilter::default().apply(&source);

    let mut filter = CatalogFilter::default();
    filter.toggle_category("frontend");
    assert!(filter.apply(&source).len() < unfiltered.len());

    filter.toggle_category("frontend");
    assert_eq!(filter.apply(&source), unfiltered);
}

#[test]
fn three_record_sample_behaves_per_contract() {
    let sample = three_record_sample();
    assert_eq!(sample.len(), 3);

    // category=frontend 唯一命中防抖
    let by_category = CatalogFilter {
        category: Some("frontend".to_string()),
        ..Default::default()
    }
    .apply(&sample);
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].title, "实现防抖函数");

    // search=分布式 经由标签命中缓存设计题
    let by_search = CatalogFilter {
        search: "分布式".to_string(),
        ..Default::default()
    }
    .apply(&sample);
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].title, "设计一个分布式缓存系统");

    // 表外分类 + 空搜索词 → 空结果
    let unmatched = CatalogFilter {
        category: Some("nonexistent".to_string()),
        ..Default::default()
    }
    .apply(&sample);
    assert!(unmatched.is_empty());
}

#[test]
fn empty_result_renders_empty_state_with_reset() {
    let service = seeded_service();
    let filter = CatalogFilter {
        category: Some("machine-learning".to_string()),
        ..Default::default()
    };
    let view = service.page(&filter);
    assert_eq!(view.total, 0);
    let empty = view.empty_state.expect("零命中必须产出空态");
    assert_eq!(empty.message, "未找到匹配的面试题");

    // 空态重置动作清空全部条件后恢复全量
    let mut cleared = filter;
    cleared.clear();
    let view = service.page(&cleared);
    assert_eq!(view.total, 7);
    assert!(view.empty_state.is_none());
}

#[test]
fn interaction_sequence_recomputes_page_each_step() {
    let service = seeded_service();
    let mut filter = CatalogFilter::default();

    filter.toggle_category("frontend");
    let view = service.page(&filter);
    let titles: Vec<&str> = view.questions.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["实现防抖函数", "React Hooks原理"]);

    filter.toggle_difficulty(Difficulty::Hard);
    let view = service.page(&filter);
    let titles: Vec<&str> = view.questions.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["React Hooks原理"]);

    filter.set_search("hooks");
    let view = service.page(&filter);
    assert_eq!(view.total, 1);

    filter.set_search("不存在的关键词");
    let view = service.page(&filter);
    assert_eq!(view.total, 0);
    assert!(view.empty_state.is_some());
}
