//! 详情页域
//!
//! 单题记录到详情页视图模型的确定性组装。

pub mod view;
