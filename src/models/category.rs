use serde::{Deserialize, Serialize};

/// 题目分类
///
/// 只读数据，生命周期由外部数据层管理。`parent` 为 0 表示顶层分类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub question_count: u64,
    pub context_id: u64,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, context_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            parent: 0,
            sort_order: 0,
            question_count: 0,
            context_id,
        }
    }

    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_question_count(mut self, question_count: u64) -> Self {
        self.question_count = question_count;
        self
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, {} 题)", self.name, self.id, self.question_count)
    }
}
