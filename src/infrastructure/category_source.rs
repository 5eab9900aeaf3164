//! 分类数据源 - 基础设施层
//!
//! 只暴露"按上下文取分类"的能力，不关心渲染和分页

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::sort_spec::SortSpec;
use crate::models::Category;

/// 分类读取能力
pub trait CategorySource {
    /// 返回某个上下文下按 `sort` 排好序的全部分类
    fn categories_for_context(&self, context_id: u64, sort: &SortSpec) -> AppResult<Vec<Category>>;
}

impl<F> CategorySource for F
where
    F: Fn(u64, &SortSpec) -> AppResult<Vec<Category>>,
{
    fn categories_for_context(&self, context_id: u64, sort: &SortSpec) -> AppResult<Vec<Category>> {
        self(context_id, sort)
    }
}

/// 内存数据源，持有全部分类
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategorySource {
    categories: Vec<Category>,
}

impl InMemoryCategorySource {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl CategorySource for InMemoryCategorySource {
    fn categories_for_context(&self, context_id: u64, sort: &SortSpec) -> AppResult<Vec<Category>> {
        let mut found: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.context_id == context_id)
            .cloned()
            .collect();
        sort.sort(&mut found);

        debug!("上下文 {} 读取到 {} 个分类", context_id, found.len());
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn filters_by_context_and_sorts() {
        let source = InMemoryCategorySource::new(vec![
            Category::new(1, "Zeta", 10),
            Category::new(2, "Other", 20),
            Category::new(3, "Alpha", 10),
        ]);

        let found = source
            .categories_for_context(10, &SortSpec::default())
            .unwrap();
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn closures_act_as_sources() {
        let failing = |id: u64, _: &SortSpec| -> AppResult<Vec<Category>> {
            Err(AppError::fetch_failed(
                id,
                std::io::Error::new(std::io::ErrorKind::Other, "boom"),
            ))
        };
        assert!(failing.categories_for_context(4, &SortSpec::default()).is_err());
    }
}
