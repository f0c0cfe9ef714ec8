//! 详情页视图的集成测试
//!
//! 从题库取记录走完整组装链路，覆盖内容块选择、徽章全覆盖与
//! 未找到路径。

use std::sync::Arc;

use assert_matches::assert_matches;
use interview_hub_lib::catalog::repo::{slug_for_title, StaticQuestionRepo};
use interview_hub_lib::catalog::service::CatalogService;
use interview_hub_lib::catalog::CatalogError;
use interview_hub_lib::detail::view::{
    BadgeVariant, PrimaryContent, SolutionOrAnswer, TabKind,
};

fn service() -> CatalogService {
    CatalogService::new(Arc::new(StaticQuestionRepo::new()))
}

#[test]
fn algorithm_detail_shows_solution_path() {
    let view = service().detail("1").unwrap();
    assert_eq!(view.header.title, "两数之和");
    assert_eq!(view.header.difficulty_badge.label, "简单");
    assert_eq!(view.header.difficulty_badge.variant, BadgeVariant::Secondary);

    // 算法题：示例/约束路径激活，记录里的 answer 字段被忽略
    assert_matches!(
        &view.description_tab.primary,
        PrimaryContent::Algorithm { examples, constraints }
            if !examples.is_empty() && !constraints.is_empty()
    );
    assert_matches!(view.solution_tab, SolutionOrAnswer::Solution { .. });

    let kinds: Vec<TabKind> = view.tabs.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TabKind::Description, TabKind::Solution, TabKind::Discussion]
    );
}

#[test]
fn non_algorithm_detail_shows_answer_path() {
    let view = service().detail("7").unwrap();

    // 无难度记录落在困难分支（与既有展示行为一致）
    assert_eq!(view.header.difficulty_badge.label, "困难");
    assert_eq!(
        view.header.difficulty_badge.variant,
        BadgeVariant::Destructive
    );

    assert_matches!(
        &view.description_tab.primary,
        PrimaryContent::Direct { answer: Some(_) }
    );
    assert_matches!(view.solution_tab, SolutionOrAnswer::Answer { .. });

    let labels: Vec<&str> = view.tabs.iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["题目描述", "参考答案", "讨论"]);
}

#[test]
fn system_design_detail_without_solution_keeps_answer_tab() {
    // 系统设计题（非算法）：examples 即使存在也不进入激活内容块
    let view = service().detail("3").unwrap();
    let json = serde_json::to_value(&view.description_tab).unwrap();
    assert_eq!(json["primary"]["kind"], "direct");
    assert!(json["primary"].get("examples").is_none());
}

#[test]
fn detail_always_renders_ancillary_blocks_when_present() {
    for id in ["1", "3", "7"] {
        let view = service().detail(id).unwrap();
        assert!(view.description_tab.analysis.is_some(), "id={}", id);
        assert!(!view.description_tab.follow_ups.is_empty(), "id={}", id);
        assert!(!view.description_tab.resources.is_empty(), "id={}", id);
    }
}

#[test]
fn unknown_id_and_slug_return_not_found() {
    let svc = service();
    assert_matches!(
        svc.detail("999").unwrap_err(),
        CatalogError::QuestionNotFound(_)
    );
    assert_matches!(
        svc.detail_by_slug("no-such-question").unwrap_err(),
        CatalogError::QuestionNotFound(_)
    );
}

#[test]
fn slug_navigation_resolves_same_record_as_id() {
    let svc = service();
    let by_id = svc.detail("5").unwrap();
    let by_slug = svc
        .detail_by_slug(&slug_for_title("React Hooks原理"))
        .unwrap();
    assert_eq!(by_id.id, by_slug.id);
    assert_eq!(by_id.header.title, by_slug.header.title);
}

#[test]
fn related_questions_only_when_non_empty() {
    let svc = service();
    assert!(!svc.detail("1").unwrap().related_questions.is_empty());
    assert!(svc.detail("7").unwrap().related_questions.is_empty());
}
