//! 语言包 - 业务能力层
//!
//! 只负责"按键取字符串"，占位符 `{$a}` 由调用方传入的参数替换

use serde::{Deserialize, Serialize};

/// 界面字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangStrings {
    /// 上下文标题，`{$a}` 为上下文名称
    pub questioncatsfor: String,
    /// 分页栏前缀
    pub page: String,
}

impl Default for LangStrings {
    fn default() -> Self {
        Self {
            questioncatsfor: "Question categories for {$a}".to_string(),
            page: "Page".to_string(),
        }
    }
}

impl LangStrings {
    /// 取字符串并替换 `{$a}`，未知键返回 `[[key]]`
    pub fn get(&self, key: &str, a: Option<&str>) -> String {
        let template = match key {
            "questioncatsfor" => &self.questioncatsfor,
            "page" => &self.page,
            _ => {
                tracing::warn!("未定义的语言字符串: {}", key);
                return format!("[[{}]]", key);
            }
        };

        match a {
            Some(a) => template.replace("{$a}", a),
            None => template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholder() {
        let strings = LangStrings::default();
        assert_eq!(
            strings.get("questioncatsfor", Some("Course: Algebra")),
            "Question categories for Course: Algebra"
        );
        assert_eq!(strings.get("page", None), "Page");
    }

    #[test]
    fn unknown_key_is_bracketed() {
        assert_eq!(LangStrings::default().get("nope", None), "[[nope]]");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let strings: LangStrings = toml::from_str(r#"page = "Seite""#).unwrap();
        assert_eq!(strings.page, "Seite");
        assert_eq!(strings.questioncatsfor, "Question categories for {$a}");
    }
}
