//! HTML 片段构造工具
//!
//! 属性值统一转义，内容由调用方负责（通常已经过 `StringFormatter`）

use crate::services::formatter::escape_html;

fn attributes(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
        .collect()
}

/// `<name attrs>content</name>`
pub fn tag(name: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{}{}>{}</{}>", name, attributes(attrs), content, name)
}

/// `<name attrs />`
pub fn empty_tag(name: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{}{} />", name, attributes(attrs))
}

/// 复选框，`extra` 追加在 type/name/value 之后
pub fn checkbox(name: &str, value: &str, checked: bool, extra: &[(&str, &str)]) -> String {
    let mut attrs: Vec<(&str, &str)> = vec![("type", "checkbox"), ("name", name), ("value", value)];
    if checked {
        attrs.push(("checked", "checked"));
    }
    attrs.extend_from_slice(extra);
    empty_tag("input", &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_attribute_order() {
        assert_eq!(
            checkbox("cat3", "1", false, &[("id", "checkcat3")]),
            r#"<input type="checkbox" name="cat3" value="1" id="checkcat3" />"#
        );
        assert!(checkbox("x", "1", true, &[]).contains(r#"checked="checked""#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(
            tag("a", "go", &[("href", "/x?a=1&b=\"2\"")]),
            r#"<a href="/x?a=1&amp;b=&quot;2&quot;">go</a>"#
        );
    }
}
