//! 页面布局输出 - 业务能力层
//!
//! 只负责盒子和标题的外层结构

/// 页面布局能力
pub trait OutputRenderer {
    /// 打开一个带 CSS 类的盒子
    fn box_start(&self, classes: &str) -> String;
    /// 关闭最近打开的盒子
    fn box_end(&self) -> String;
    /// 标题，`text` 必须已经转义
    fn heading(&self, text: &str, level: u8) -> String;
}

/// 默认 HTML 布局
#[derive(Debug, Clone, Default)]
pub struct HtmlOutputRenderer;

impl OutputRenderer for HtmlOutputRenderer {
    fn box_start(&self, classes: &str) -> String {
        format!("<div class=\"box {}\">\n", classes.trim())
    }

    fn box_end(&self) -> String {
        "</div>\n".to_string()
    }

    fn heading(&self, text: &str, level: u8) -> String {
        let level = level.clamp(1, 6);
        format!("<h{}>{}</h{}>\n", level, text, level)
    }
}
