//! 分类行渲染
//!
//! 一行 = 复选框 + 加粗的分类名 + 题目数量

use crate::listing::ItemRenderer;
use crate::models::{Category, QuestionContext};
use crate::services::{html_writer, StringFormatter};

/// 渲染单个分类行
///
/// `context` 是拥有这一行的列表的上下文，而不是分类自己的 `context_id`。
pub struct CategoryRowRenderer<'a> {
    formatter: &'a dyn StringFormatter,
    context: &'a QuestionContext,
}

impl<'a> CategoryRowRenderer<'a> {
    pub fn new(formatter: &'a dyn StringFormatter, context: &'a QuestionContext) -> Self {
        Self { formatter, context }
    }
}

impl ItemRenderer<Category> for CategoryRowRenderer<'_> {
    fn render_item(&self, category: &Category) -> String {
        let name = format!("cat{}", category.id);
        let id = format!("checkcat{}", category.id);

        let mut item = String::new();
        item.push_str(&html_writer::checkbox(&name, "1", false, &[("id", id.as_str())]));
        item.push(' ');
        item.push_str(&html_writer::tag(
            "b",
            &self
                .formatter
                .format_string(&category.name, Some(self.context)),
            &[],
        ));
        item.push(' ');
        item.push_str(
            &self
                .formatter
                .format_string(&format!("({})", category.question_count), None),
        );
        item.push(' ');
        item
    }
}
