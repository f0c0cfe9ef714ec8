//! 题库数据访问层
//!
//! 以 trait 隔离数据来源：当前为内置静态题库，后续换成真实内容存储时
//! 不触碰筛选与视图组装逻辑。

use crate::models::{QuestionDetail, QuestionSummary};

/// 标题转 slug：小写化并以连字符连接空白分段。
/// 该映射有损（大小写/空白差异会碰撞），仅作导航兼容入口，主键始终是 id。
pub fn slug_for_title(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// 题库数据访问接口
pub trait QuestionRepo: Send + Sync {
    /// 全量题目（加载期固化，运行期只读）
    fn all(&self) -> &[QuestionDetail];

    /// 目录卡片投影，保持题库顺序
    fn summaries(&self) -> Vec<QuestionSummary> {
        self.all().iter().map(QuestionDetail::summary).collect()
    }

    fn by_id(&self, id: &str) -> Option<&QuestionDetail> {
        self.all().iter().find(|q| q.id == id)
    }

    /// slug 查找：命中题库顺序中的第一个匹配
    fn by_slug(&self, slug: &str) -> Option<&QuestionDetail> {
        self.all().iter().find(|q| slug_for_title(&q.title) == slug)
    }
}

/// 内置静态题库
pub struct StaticQuestionRepo {
    questions: Vec<QuestionDetail>,
}

impl StaticQuestionRepo {
    pub fn new() -> Self {
        Self {
            questions: crate::catalog::data::seed_questions(),
        }
    }

    /// 以指定数据构造（测试用）
    pub fn with_questions(questions: Vec<QuestionDetail>) -> Self {
        Self { questions }
    }
}

impl Default for StaticQuestionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionRepo for StaticQuestionRepo {
    fn all(&self) -> &[QuestionDetail] {
        &self.questions
    }
}
