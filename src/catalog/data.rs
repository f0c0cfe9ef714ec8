//! 内置题库种子数据
//!
//! 数据在编译期以字面量写死，加载后不再变更。
//! 真实内容存储接入后，本模块整体被替换，`QuestionRepo` 接口不动。

use chrono::NaiveDate;

use crate::models::{
    Difficulty, Example, QuestionDetail, QuestionType, RelatedQuestion, Resource,
};

/// 非法日期字面量回退 epoch，保证构造不失败
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn related(items: &[(&str, &str)]) -> Vec<RelatedQuestion> {
    items
        .iter()
        .map(|(id, title)| RelatedQuestion {
            id: id.to_string(),
            title: title.to_string(),
        })
        .collect()
}

fn resource(name: &str, url: &str) -> Resource {
    Resource {
        name: name.to_string(),
        url: url.to_string(),
    }
}

fn example(input: &str, output: &str, explanation: Option<&str>) -> Example {
    Example {
        input: input.to_string(),
        output: output.to_string(),
        explanation: explanation.map(|s| s.to_string()),
    }
}

/// 全部种子题目，目录顺序即此顺序
pub fn seed_questions() -> Vec<QuestionDetail> {
    vec![
        QuestionDetail {
            id: "1".to_string(),
            title: "两数之和".to_string(),
            question_type: QuestionType::Algorithm,
            difficulty: Some(Difficulty::Easy),
            category: Some("algorithms".to_string()),
            tags: strings(&["数组", "哈希表"]),
            description: "给定一个整数数组 nums 和一个整数目标值 target，请你在该数组中找出和为目标值 target 的那两个整数，并返回它们的数组下标。你可以假设每种输入只会对应一个答案。但是，数组中同一个元素在答案里不能重复出现。".to_string(),
            examples: vec![
                example(
                    "nums = [2,7,11,15], target = 9",
                    "[0,1]",
                    Some("因为 nums[0] + nums[1] == 9，所以返回 [0, 1]。"),
                ),
                example("nums = [3,2,4], target = 6", "[1,2]", None),
                example("nums = [3,3], target = 6", "[0,1]", None),
            ],
            constraints: strings(&[
                "2 <= nums.length <= 10^4",
                "-10^9 <= nums[i] <= 10^9",
                "-10^9 <= target <= 10^9",
                "只会存在一个有效答案",
            ]),
            solution: Some("使用哈希表来存储数组中的元素及其索引。遍历数组，对于每个元素，计算其与目标值的差值，并检查该差值是否已经存在于哈希表中。如果存在，则返回当前元素和差值对应的索引；如果不存在，则将当前元素及其索引添加到哈希表中。时间复杂度 O(n)，空间复杂度 O(n)。".to_string()),
            hints: strings(&[
                "尝试使用哈希表来优化查找过程",
                "对于每个元素 x，检查是否存在 target - x",
            ]),
            // 算法题也可能带 answer 字段，展示层会忽略它
            answer: Some("[0,1]".to_string()),
            analysis: Some("该问题的时间复杂度为 O(n)，空间复杂度为 O(n)。哈希表的查找操作是常数时间复杂度的，因此该算法是高效的。".to_string()),
            follow_ups: strings(&[
                "如果数组中存在重复元素，如何处理？",
                "如果数组中存在负数，如何处理？",
            ]),
            resources: vec![
                resource("LeetCode 两数之和", "https://leetcode.com/problems/two-sum/"),
                resource("力扣官方题解", "https://leetcode.cn/problems/two-sum/solution/"),
            ],
            related_questions: related(&[
                ("2", "实现防抖函数"),
                ("3", "设计一个分布式缓存系统"),
            ]),
            updated_at: date(2023, 6, 15),
        },
        QuestionDetail {
            id: "2".to_string(),
            title: "实现防抖函数".to_string(),
            question_type: QuestionType::Algorithm,
            difficulty: Some(Difficulty::Medium),
            category: Some("frontend".to_string()),
            tags: strings(&["JavaScript", "函数式编程"]),
            description: "实现一个防抖函数，用于限制函数在一定时间内的执行次数。".to_string(),
            examples: vec![example(
                "function debounce(func, wait) { ... }",
                "function debounce(func, wait) { ... }",
                None,
            )],
            constraints: strings(&["1 <= wait <= 1000", "1 <= func.length <= 5"]),
            solution: Some("使用闭包和setTimeout来实现防抖函数。在每次函数调用时，清除之前的定时器，并设置一个新的定时器来延迟执行函数。".to_string()),
            hints: strings(&["考虑使用闭包和setTimeout来实现防抖函数。"]),
            answer: None,
            analysis: Some("防抖函数通过清除之前的定时器来限制函数的执行次数，常用于输入框搜索、窗口 resize 等高频事件场景。".to_string()),
            follow_ups: strings(&["如果需要立即执行一次，应该如何修改防抖函数？"]),
            resources: vec![
                resource(
                    "JavaScript 防抖函数",
                    "https://www.freecodecamp.org/news/javascript-debounce-function/",
                ),
            ],
            related_questions: related(&[("1", "两数之和"), ("5", "React Hooks原理")]),
            updated_at: date(2023, 6, 2),
        },
        QuestionDetail {
            id: "3".to_string(),
            title: "设计一个分布式缓存系统".to_string(),
            question_type: QuestionType::SystemDesign,
            difficulty: Some(Difficulty::Hard),
            category: Some("system-design".to_string()),
            tags: strings(&["缓存", "分布式系统"]),
            description: "设计一个分布式缓存系统，考虑高可用性、一致性和扩展性。".to_string(),
            examples: vec![],
            constraints: vec![],
            solution: None,
            hints: strings(&["考虑使用一致性哈希算法来分配缓存服务器。"]),
            answer: Some("设计一个分布式缓存系统，包括缓存服务器、分布式存储和一致性协议。使用一致性哈希算法来分配缓存服务器，使用分布式存储来存储数据，使用一致性协议来保证数据一致性。".to_string()),
            analysis: Some("分布式缓存系统通过一致性哈希算法和分布式存储来保证高可用性、一致性和扩展性。".to_string()),
            follow_ups: strings(&["如果需要支持更多的缓存服务器，应该如何扩展系统？"]),
            resources: vec![
                resource(
                    "分布式缓存系统设计",
                    "https://www.freecodecamp.org/news/distributed-caching-system-design/",
                ),
            ],
            related_questions: related(&[("1", "两数之和"), ("2", "实现防抖函数")]),
            updated_at: date(2023, 5, 20),
        },
        QuestionDetail {
            id: "4".to_string(),
            title: "SQL索引优化".to_string(),
            question_type: QuestionType::Database,
            difficulty: Some(Difficulty::Medium),
            category: Some("database".to_string()),
            tags: strings(&["SQL", "性能优化"]),
            description: "如何优化SQL查询性能，提高数据库访问速度。".to_string(),
            examples: vec![],
            constraints: vec![],
            solution: None,
            hints: strings(&["考虑使用索引、优化查询语句和数据库配置来提高SQL查询性能。"]),
            answer: Some("使用索引、优化查询语句和数据库配置来提高SQL查询性能。组合索引注意最左前缀原则，避免在索引列上做函数运算。".to_string()),
            analysis: Some("通过使用索引、优化查询语句和数据库配置来提高SQL查询性能。".to_string()),
            follow_ups: strings(&["如果需要优化更多的SQL查询，应该如何处理？"]),
            resources: vec![
                resource(
                    "SQL索引优化",
                    "https://www.freecodecamp.org/news/sql-index-optimization/",
                ),
            ],
            related_questions: related(&[("3", "设计一个分布式缓存系统")]),
            updated_at: date(2023, 6, 10),
        },
        QuestionDetail {
            id: "5".to_string(),
            title: "React Hooks原理".to_string(),
            question_type: QuestionType::Frontend,
            difficulty: Some(Difficulty::Hard),
            category: Some("frontend".to_string()),
            tags: strings(&["React", "Hooks"]),
            description: "React Hooks的原理和使用方法。".to_string(),
            examples: vec![],
            constraints: vec![],
            solution: None,
            hints: strings(&["考虑使用函数组件和状态管理来实现组件逻辑复用和状态管理。"]),
            answer: Some("React Hooks的原理是通过函数组件和以链表维护的状态单元来实现组件逻辑复用和状态管理，调用顺序必须稳定。".to_string()),
            analysis: Some("通过函数组件和状态管理来实现组件逻辑复用和状态管理。".to_string()),
            follow_ups: strings(&["如果需要实现更多的React Hooks，应该如何处理？"]),
            resources: vec![
                resource(
                    "React Hooks原理",
                    "https://www.freecodecamp.org/news/react-hooks-tutorial/",
                ),
            ],
            related_questions: related(&[("1", "两数之和"), ("6", "Docker容器编排")]),
            updated_at: date(2023, 6, 12),
        },
        QuestionDetail {
            id: "6".to_string(),
            title: "Docker容器编排".to_string(),
            question_type: QuestionType::Devops,
            difficulty: Some(Difficulty::Medium),
            category: Some("devops".to_string()),
            tags: strings(&["Docker", "Kubernetes"]),
            description: "Docker容器编排和Kubernetes的使用方法。".to_string(),
            examples: vec![],
            constraints: vec![],
            solution: None,
            hints: strings(&["考虑使用Docker和Kubernetes来管理和调度容器。"]),
            answer: Some("通过Docker和Kubernetes来管理和调度容器：以 Deployment 管理副本，以 Service 暴露访问入口，以命名空间隔离环境。".to_string()),
            analysis: Some("通过Docker和Kubernetes来管理和调度容器。".to_string()),
            follow_ups: strings(&["如果需要实现更多的容器编排工具，应该如何处理？"]),
            resources: vec![
                resource(
                    "Docker容器编排",
                    "https://www.freecodecamp.org/news/docker-container-orchestration/",
                ),
            ],
            related_questions: related(&[("1", "两数之和"), ("5", "React Hooks原理")]),
            updated_at: date(2023, 6, 8),
        },
        QuestionDetail {
            id: "7".to_string(),
            title: "请简述微服务架构的优缺点".to_string(),
            question_type: QuestionType::Theory,
            difficulty: None,
            category: None,
            tags: vec![],
            description: "请结合实际项目经验，简要说明微服务架构的主要优点和缺点。".to_string(),
            examples: vec![],
            constraints: vec![],
            solution: None,
            hints: vec![],
            answer: Some("优点包括：易于扩展、技术栈灵活、独立部署、容错性好等。缺点包括：分布式复杂性高、运维成本增加、数据一致性难度大等。".to_string()),
            analysis: Some("微服务适合大型复杂系统，但对团队协作、自动化运维、服务治理等提出更高要求。".to_string()),
            follow_ups: strings(&["请举例说明你在项目中遇到的微服务拆分难点。"]),
            resources: vec![resource(
                "微服务架构设计模式",
                "https://martinfowler.com/microservices/",
            )],
            related_questions: vec![],
            updated_at: date(2023, 6, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let questions = seed_questions();
        assert_eq!(questions.len(), 7);
        // id 唯一
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_algorithm_records_carry_examples() {
        let questions = seed_questions();
        let two_sum = &questions[0];
        assert_eq!(two_sum.question_type, QuestionType::Algorithm);
        assert!(!two_sum.examples.is_empty());
        assert!(two_sum.solution.is_some());
        // 算法题同时带 answer 是合法数据，由展示层忽略
        assert!(two_sum.answer.is_some());
    }

    #[test]
    fn test_theory_record_has_no_optional_blocks() {
        let questions = seed_questions();
        let theory = questions.iter().find(|q| q.id == "7").unwrap();
        assert_eq!(theory.question_type, QuestionType::Theory);
        assert!(theory.difficulty.is_none());
        assert!(theory.category.is_none());
        assert!(theory.examples.is_empty());
        assert!(theory.answer.is_some());
    }

    #[test]
    fn test_related_question_ids_resolve() {
        let questions = seed_questions();
        for q in &questions {
            for related in &q.related_questions {
                assert!(
                    questions.iter().any(|other| other.id == related.id),
                    "相关题目引用悬空: {} -> {}",
                    q.id,
                    related.id
                );
            }
        }
    }
}
