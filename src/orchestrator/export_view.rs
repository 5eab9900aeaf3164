//! 分类导出页面 - 编排层
//!
//! 构建 → 分页 → 渲染，每个请求执行一次。
//!
//! 每个上下文一个列表，按输入顺序保存在 `Vec` 中；前一个列表结束时的
//! [`PageCursor`] 作为下一个列表的起点，使页码跨上下文连续。

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::infrastructure::CategorySource;
use crate::listing::{NestedList, PageCursor, Pagination};
use crate::models::{Category, QuestionContext};
use crate::services::RenderContext;
use crate::workflow::{CategoryList, CategoryRowRenderer};

/// 盒子的公共 CSS 类，后面追加 `contextlevel{code}`
const BOX_CLASSES: &str = "boxwidthwide boxaligncenter generalbox questioncategories";

/// 一个上下文列表的状态
#[derive(Debug, Clone)]
pub struct ContextListState {
    pub list: CategoryList,
    pub nested: NestedList<Category>,
}

impl ContextListState {
    pub fn context(&self) -> &QuestionContext {
        self.list.context()
    }

    pub fn cursor_in(&self) -> PageCursor {
        self.nested.start_cursor()
    }

    pub fn cursor_out(&self) -> PageCursor {
        self.nested.end_cursor()
    }
}

/// 渲染结果统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub contexts: usize,
    pub rendered_contexts: usize,
    pub categories: usize,
    pub page: usize,
    pub page_count: usize,
    pub paged: bool,
}

/// 分类导出页面
#[derive(Debug, Clone)]
pub struct CategoryExportView {
    pagination: Pagination,
    lists: Vec<ContextListState>,
}

impl CategoryExportView {
    /// 为每个上下文建立列表并依次分页
    ///
    /// 任意一个上下文读取失败都会直接返回错误。
    /// 同一个上下文 id 只建一个列表，保留第一次出现的位置。
    pub fn initialize(
        pagination: Pagination,
        contexts: &[QuestionContext],
        source: &dyn CategorySource,
    ) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(contexts.len());
        let lists: Vec<CategoryList> = contexts
            .iter()
            .filter(|context| {
                let first = seen.insert(context.id);
                if !first {
                    warn!("⚠️ 上下文 {} 重复出现，忽略后一次", context.id);
                }
                first
            })
            .cloned()
            .map(CategoryList::new)
            .collect();

        let mut states = Vec::with_capacity(lists.len());
        let mut cursor = PageCursor::start();
        for list in lists {
            let nested = list.list_from_records(source, &pagination, cursor)?;
            debug!(
                "[上下文 {}] 顶层分类 {} 个, 游标 {:?} -> {:?}",
                list.context().id,
                nested.top_level_count(),
                cursor,
                nested.end_cursor()
            );
            cursor = nested.end_cursor();
            states.push(ContextListState { list, nested });
        }

        Ok(Self {
            pagination,
            lists: states,
        })
    }

    pub fn lists(&self) -> &[ContextListState] {
        &self.lists
    }

    /// 最后一个列表结束时的游标；没有上下文时为起始游标
    pub fn final_cursor(&self) -> PageCursor {
        self.lists
            .last()
            .map(ContextListState::cursor_out)
            .unwrap_or_else(PageCursor::start)
    }

    /// 渲染单个上下文的列表，不含外层盒子
    pub fn render_list(&self, state: &ContextListState, render: &RenderContext<'_>) -> String {
        let renderer = CategoryRowRenderer::new(render.formatter, state.context());
        state.nested.to_html(0, &renderer)
    }

    /// 渲染整个页面
    ///
    /// 列表为空的上下文不输出盒子和标题；页码导航只在最后一个列表之后输出一次。
    pub fn output_edit_lists(&self, render: &RenderContext<'_>) -> String {
        let mut result = String::new();

        for state in &self.lists {
            let list_html = self.render_list(state, render);
            if list_html.is_empty() {
                debug!("[上下文 {}] 当前页没有分类，跳过", state.context().id);
                continue;
            }

            let context = state.context();
            let classes = format!("{} contextlevel{}", BOX_CLASSES, context.level.code());
            let context_name = render.formatter.format_string(&context.display_name(), Some(context));

            result.push_str(&render.output.box_start(&classes));
            result.push_str(
                &render
                    .output
                    .heading(&render.strings.get("questioncatsfor", Some(context_name.as_str())), 3),
            );
            result.push_str(&list_html);
            result.push_str(&render.output.box_end());
        }

        if !self.lists.is_empty() {
            result.push_str(
                &self
                    .pagination
                    .page_numbers_html(self.final_cursor(), &render.strings.get("page", None)),
            );
        }

        result
    }

    /// 统计信息，`rendered_contexts` 与输出中的盒子数量一致
    pub fn summary(&self, render: &RenderContext<'_>) -> ExportSummary {
        let rendered_contexts = self
            .lists
            .iter()
            .filter(|state| !self.render_list(state, render).is_empty())
            .count();
        let categories = self.lists.iter().map(|s| count_items(s.nested.items())).sum();
        let cursor = self.final_cursor();

        let summary = ExportSummary {
            contexts: self.lists.len(),
            rendered_contexts,
            categories,
            page: self.pagination.page,
            page_count: self.pagination.page_count(cursor),
            paged: cursor.paged,
        };
        info!(
            "共 {} 个上下文, 显示 {} 个, 分类 {} 个",
            summary.contexts, summary.rendered_contexts, summary.categories
        );
        summary
    }
}

/// 树中的条目数（含未显示的顶层条目，不含未展开的子节点）
fn count_items(items: &[crate::listing::ListItem<Category>]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_items(item.children()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::{InMemoryCategorySource, SortSpec};
    use crate::listing::PageUrl;
    use crate::models::ContextLevel;
    use crate::services::{HtmlOutputRenderer, HtmlStringFormatter, LangStrings};

    fn pagination(page: usize, per_page: usize) -> Pagination {
        Pagination::new(page, per_page, "cpage", PageUrl::parse("/question/export.php").unwrap())
    }

    fn contexts() -> Vec<QuestionContext> {
        vec![
            QuestionContext::new(1, "A", ContextLevel::Course),
            QuestionContext::new(2, "B", ContextLevel::Module),
            QuestionContext::new(3, "C", ContextLevel::CourseCategory),
        ]
    }

    #[test]
    fn cursor_flows_through_lists() {
        let source = InMemoryCategorySource::new(vec![
            Category::new(10, "a1", 1),
            Category::new(11, "a2", 1),
            Category::new(30, "c1", 3),
        ]);
        let view = CategoryExportView::initialize(pagination(1, 25), &contexts(), &source).unwrap();

        let lists = view.lists();
        assert_eq!(lists[0].cursor_in(), PageCursor::start());
        for pair in lists.windows(2) {
            assert_eq!(pair[1].cursor_in(), pair[0].cursor_out());
        }
        assert_eq!(view.final_cursor().count, 4);
    }

    #[test]
    fn fetch_error_propagates() {
        let source = |id: u64, _: &SortSpec| -> AppResult<Vec<Category>> {
            if id == 2 {
                Err(AppError::fetch_failed(
                    id,
                    std::io::Error::new(std::io::ErrorKind::Other, "timeout"),
                ))
            } else {
                Ok(Vec::new())
            }
        };
        let err = CategoryExportView::initialize(pagination(1, 25), &contexts(), &source).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn no_contexts_renders_nothing() {
        let source = InMemoryCategorySource::default();
        let view = CategoryExportView::initialize(pagination(1, 25), &[], &source).unwrap();

        let formatter = HtmlStringFormatter::new();
        let output = HtmlOutputRenderer;
        let strings = LangStrings::default();
        let render = RenderContext::new(&formatter, &output, &strings);

        assert_eq!(view.output_edit_lists(&render), "");
        assert_eq!(view.final_cursor(), PageCursor::start());
    }

    #[test]
    fn repeated_context_gets_one_list() {
        let source = InMemoryCategorySource::new(vec![
            Category::new(10, "a1", 1),
            Category::new(30, "c1", 3),
        ]);
        let contexts = vec![
            QuestionContext::new(1, "A", ContextLevel::Course),
            QuestionContext::new(3, "C", ContextLevel::CourseCategory),
            QuestionContext::new(1, "A again", ContextLevel::Course),
        ];
        let view = CategoryExportView::initialize(pagination(1, 25), &contexts, &source).unwrap();

        let ids: Vec<u64> = view.lists().iter().map(|s| s.context().id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(view.lists()[0].context().name, "A");
        assert_eq!(view.final_cursor().count, 3);

        let formatter = HtmlStringFormatter::new();
        let output = HtmlOutputRenderer;
        let strings = LangStrings::default();
        let render = RenderContext::new(&formatter, &output, &strings);
        let html = view.output_edit_lists(&render);

        assert_eq!(html.matches("<div class=\"box ").count(), 2);
        assert_eq!(html.matches("<b>a1</b>").count(), 1);
        assert!(!html.contains("A again"));
    }

    #[test]
    fn box_carries_context_level_class() {
        let source = InMemoryCategorySource::new(vec![Category::new(30, "c1", 3)]);
        let view = CategoryExportView::initialize(pagination(1, 25), &contexts(), &source).unwrap();

        let formatter = HtmlStringFormatter::new();
        let output = HtmlOutputRenderer;
        let strings = LangStrings::default();
        let render = RenderContext::new(&formatter, &output, &strings);
        let html = view.output_edit_lists(&render);

        assert!(html.contains("questioncategories contextlevel40\">"));
        assert!(html.contains("<h3>Question categories for Category: C</h3>"));
        assert!(!html.contains("Question categories for Course: A"));
    }
}
