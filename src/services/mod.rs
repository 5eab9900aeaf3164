pub mod formatter;
pub mod html_writer;
pub mod output;
pub mod strings;

pub use formatter::{HtmlStringFormatter, StringFormatter};
pub use output::{HtmlOutputRenderer, OutputRenderer};
pub use strings::LangStrings;

/// 渲染时需要的协作者，显式传入而不是使用全局对象
pub struct RenderContext<'a> {
    pub formatter: &'a dyn StringFormatter,
    pub output: &'a dyn OutputRenderer,
    pub strings: &'a LangStrings,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        formatter: &'a dyn StringFormatter,
        output: &'a dyn OutputRenderer,
        strings: &'a LangStrings,
    ) -> Self {
        Self {
            formatter,
            output,
            strings,
        }
    }
}
