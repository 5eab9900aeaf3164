use serde::{Deserialize, Serialize};

use crate::models::category::Category;
use crate::models::context::QuestionContext;

/// 导出页面所需的全部数据：有序的上下文列表 + 所有分类
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportDataset {
    #[serde(default)]
    pub contexts: Vec<QuestionContext>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl ExportDataset {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 某个上下文下的分类数量
    pub fn category_count_for(&self, context_id: u64) -> usize {
        self.categories
            .iter()
            .filter(|c| c.context_id == context_id)
            .count()
    }
}
