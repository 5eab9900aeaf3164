//! 单个上下文的分类列表
//!
//! 封装"这个列表属于哪个上下文、按什么排序"，只读取数据，不负责渲染

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::{CategorySource, SortSpec};
use crate::listing::{NestedList, PageCursor, Pagination};
use crate::models::{Category, QuestionContext};

/// 某个上下文的分类列表
#[derive(Debug, Clone)]
pub struct CategoryList {
    context: QuestionContext,
    sort: SortSpec,
}

impl CategoryList {
    /// 使用默认排序（parent, sortorder, name）
    pub fn new(context: QuestionContext) -> Self {
        Self {
            context,
            sort: SortSpec::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn context(&self) -> &QuestionContext {
        &self.context
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// 读取本上下文的全部分类，数据源的错误原样向上传播
    pub fn get_records(&self, source: &dyn CategorySource) -> AppResult<Vec<Category>> {
        let records = source.categories_for_context(self.context.id, &self.sort)?;
        debug!(
            "[上下文 {}] 读取到 {} 个分类",
            self.context.id,
            records.len()
        );
        Ok(records)
    }

    /// 读取记录并组装成树形列表，从 `cursor` 继续编号
    pub fn list_from_records(
        &self,
        source: &dyn CategorySource,
        pagination: &Pagination,
        cursor: PageCursor,
    ) -> AppResult<NestedList<Category>> {
        let records = self.get_records(source)?;
        Ok(NestedList::from_records(records, pagination, cursor))
    }
}
