//! 详情页视图模型组装
//!
//! 给定一条题目记录，确定性地产出详情页的全部展示数据：头部徽章、
//! 三个标签页、描述页各分块、相关题目。组装是全函数：任何记录都能
//! 产出视图，没有未处理分支，也不做跨字段校验。

use serde::Serialize;

use crate::models::{
    Difficulty, Example, QuestionDetail, QuestionType, RelatedQuestion, Resource,
};

// ============================================================================
// 徽章
// ============================================================================

/// 徽章样式（与前端 Badge variant 对齐）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Secondary,
    Default,
    Destructive,
}

/// 难度徽章
///
/// 对 `Option<Difficulty>` 全覆盖：easy→简单/secondary，medium→中等/default，
/// hard 与缺失难度都落在 困难/destructive（与既有展示行为一致）。
/// 未知字符串在解析边界已归一为 None，这里只剩三种视觉状态。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DifficultyBadge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl DifficultyBadge {
    pub fn for_difficulty(difficulty: Option<Difficulty>) -> Self {
        match difficulty {
            Some(Difficulty::Easy) => Self {
                label: "简单",
                variant: BadgeVariant::Secondary,
            },
            Some(Difficulty::Medium) => Self {
                label: "中等",
                variant: BadgeVariant::Default,
            },
            Some(Difficulty::Hard) | None => Self {
                label: "困难",
                variant: BadgeVariant::Destructive,
            },
        }
    }
}

// ============================================================================
// 标签页
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TabKind {
    Description,
    Solution,
    Answer,
    Discussion,
}

/// 标签页签
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabSpec {
    pub kind: TabKind,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 语义激活的内容块
///
/// 算法题走示例/约束路径，其余题型走直接作答路径，由 `question_type`
/// 的穷尽匹配选定。记录里多余的另一路字段会被忽略：算法题带 answer
/// 不渲染，非算法题带 examples 不渲染。
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimaryContent {
    Algorithm {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        examples: Vec<Example>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        constraints: Vec<String>,
    },
    Direct {
        #[serde(skip_serializing_if = "Option::is_none")]
        answer: Option<String>,
    },
}

/// 第二个标签页内容：算法题为题解，其余为参考答案；缺失时渲染占位块
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolutionOrAnswer {
    Solution { solution: String },
    Answer { answer: String },
    Placeholder {
        title: &'static str,
        hint: &'static str,
    },
}

const SOLUTION_PLACEHOLDER: SolutionOrAnswer = SolutionOrAnswer::Placeholder {
    title: "暂无题解",
    hint: "题解正在编写中，请稍后查看",
};

/// 讨论页恒为静态占位
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscussionPlaceholder {
    pub title: &'static str,
    pub prompt: &'static str,
    pub action_label: &'static str,
}

const DISCUSSION_PLACEHOLDER: DiscussionPlaceholder = DiscussionPlaceholder {
    title: "参与讨论",
    prompt: "分享你的解题思路和见解",
    action_label: "发表评论",
};

/// 描述页分块，字段顺序即展示顺序
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DescriptionTab {
    pub description: String,
    pub primary: PrimaryContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
}

// ============================================================================
// 详情页视图
// ============================================================================

/// 头部块
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailHeader {
    pub title: String,
    pub difficulty_badge: DifficultyBadge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// 详情整页视图
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub id: String,
    pub header: DetailHeader,
    /// 恒为三个页签：题目描述、题解/参考答案、讨论
    pub tabs: Vec<TabSpec>,
    pub description_tab: DescriptionTab,
    pub solution_tab: SolutionOrAnswer,
    pub discussion_tab: DiscussionPlaceholder,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_questions: Vec<RelatedQuestion>,
    /// 最近更新日期（YYYY-MM-DD）
    pub updated_at: String,
}

impl DetailView {
    /// 由题目记录组装详情视图
    pub fn build(question: &QuestionDetail) -> Self {
        let primary = match question.question_type {
            QuestionType::Algorithm => PrimaryContent::Algorithm {
                examples: question.examples.clone(),
                constraints: question.constraints.clone(),
            },
            QuestionType::Business
            | QuestionType::Theory
            | QuestionType::SystemDesign
            | QuestionType::Database
            | QuestionType::Frontend
            | QuestionType::Devops
            | QuestionType::MachineLearning
            | QuestionType::Behavioral => PrimaryContent::Direct {
                answer: question.answer.clone(),
            },
        };

        let (second_tab, solution_tab) = match &primary {
            PrimaryContent::Algorithm { .. } => {
                let content = match &question.solution {
                    Some(solution) => SolutionOrAnswer::Solution {
                        solution: solution.clone(),
                    },
                    None => SOLUTION_PLACEHOLDER,
                };
                (
                    TabSpec {
                        kind: TabKind::Solution,
                        label: "题解",
                        icon: "code",
                    },
                    content,
                )
            }
            PrimaryContent::Direct { answer } => {
                let content = match answer {
                    Some(answer) => SolutionOrAnswer::Answer {
                        answer: answer.clone(),
                    },
                    None => SOLUTION_PLACEHOLDER,
                };
                (
                    TabSpec {
                        kind: TabKind::Answer,
                        label: "参考答案",
                        icon: "code",
                    },
                    content,
                )
            }
        };

        let tabs = vec![
            TabSpec {
                kind: TabKind::Description,
                label: "题目描述",
                icon: "file-text",
            },
            second_tab,
            TabSpec {
                kind: TabKind::Discussion,
                label: "讨论",
                icon: "message-square",
            },
        ];

        DetailView {
            id: question.id.clone(),
            header: DetailHeader {
                title: question.title.clone(),
                difficulty_badge: DifficultyBadge::for_difficulty(question.difficulty),
                category: question.category.clone(),
                tags: question.tags.clone(),
            },
            tabs,
            description_tab: DescriptionTab {
                description: question.description.clone(),
                primary,
                analysis: question.analysis.clone(),
                follow_ups: question.follow_ups.clone(),
                resources: question.resources.clone(),
            },
            solution_tab,
            discussion_tab: DISCUSSION_PLACEHOLDER,
            related_questions: question.related_questions.clone(),
            updated_at: question.updated_at.format("%Y-%m-%d").to_string(),
        }
    }
}
