//! 字符串格式化服务 - 业务能力层
//!
//! 把用户输入的文本转换为可以安全放进 HTML 的片段

use regex::Regex;
use std::sync::OnceLock;

use crate::models::QuestionContext;

/// 文本格式化能力
///
/// `context` 为文本所属的上下文，实现可以据此选择过滤规则或语言。
pub trait StringFormatter {
    fn format_string(&self, text: &str, context: Option<&QuestionContext>) -> String;
}

/// 默认实现：去标签 + HTML 转义，保留数字实体
#[derive(Debug, Clone)]
pub struct HtmlStringFormatter {
    strip_tags: bool,
}

impl HtmlStringFormatter {
    pub fn new() -> Self {
        Self { strip_tags: true }
    }

    /// 保留原文中的标签（仍然会被转义）
    pub fn keep_tags() -> Self {
        Self { strip_tags: false }
    }
}

impl Default for HtmlStringFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StringFormatter for HtmlStringFormatter {
    fn format_string(&self, text: &str, _context: Option<&QuestionContext>) -> String {
        let text = if self.strip_tags {
            tag_pattern().replace_all(text, "")
        } else {
            text.into()
        };
        let escaped = escape_html(text.trim());
        numeric_entity_pattern()
            .replace_all(&escaped, "&#$1;")
            .into_owned()
    }
}

/// HTML 特殊字符转义
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn numeric_entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"&amp;#(\d+|[xX][0-9a-fA-F]+);").expect("valid entity regex")
    })
}
