//! 分页状态
//!
//! 多个列表共用一套页码：前一个列表结束时的游标就是下一个列表的起点

use serde::Serialize;
use url::{Position, Url};

use crate::error::{AppResult, ConfigError};
use crate::services::html_writer;

/// 跨列表传递的分页游标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    /// 是否有顶层条目落在当前页之外
    pub paged: bool,
    /// 下一个顶层条目的位置
    pub count: usize,
}

impl PageCursor {
    /// 第一个列表的起始游标，位置从 1 开始计数
    pub fn start() -> Self {
        Self {
            paged: false,
            count: 1,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::start()
    }
}

/// 相对地址解析时使用的占位 origin，输出时去掉
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// 页面 URL，只用于生成页码链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
    relative: bool,
}

impl PageUrl {
    /// 解析绝对地址，或以 `/` 开头的站内地址
    pub fn parse(raw: &str) -> AppResult<Self> {
        let invalid = |source: url::ParseError| ConfigError::InvalidPageUrl {
            url: raw.to_string(),
            source,
        };

        match Url::parse(raw) {
            Ok(url) => Ok(Self {
                url,
                relative: false,
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(RELATIVE_BASE).map_err(invalid)?;
                let url = base.join(raw).map_err(invalid)?;
                Ok(Self {
                    url,
                    relative: true,
                })
            }
            Err(e) => Err(invalid(e).into()),
        }
    }

    /// 设置（或覆盖）一个参数后的 URL，参数已编码、未做 HTML 转义
    pub fn out_with(&self, name: &str, value: &str) -> String {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != name)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut url = self.url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(name, value);

        if self.relative {
            url[Position::BeforePath..].to_string()
        } else {
            url.to_string()
        }
    }
}

/// 当前请求的分页设置
#[derive(Debug, Clone)]
pub struct Pagination {
    /// 当前页码，0 表示不分页
    pub page: usize,
    pub items_per_page: usize,
    pub param_name: String,
    pub page_url: PageUrl,
}

impl Pagination {
    pub fn new(
        page: usize,
        items_per_page: usize,
        param_name: impl Into<String>,
        page_url: PageUrl,
    ) -> Self {
        Self {
            page,
            items_per_page,
            param_name: param_name.into(),
            page_url,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.page > 0
    }

    /// 顶层位置是否在当前页内
    pub fn contains(&self, position: usize) -> bool {
        if !self.is_enabled() {
            return true;
        }
        // 页码过大时窗口超出可表示范围，不包含任何位置
        let Some(first) = (self.page - 1).checked_mul(self.items_per_page) else {
            return false;
        };
        let last = first.saturating_add(self.items_per_page.saturating_sub(1));
        position >= first && position <= last
    }

    /// 总页数，由最后一个列表结束时的游标计算
    pub fn page_count(&self, cursor: PageCursor) -> usize {
        if self.items_per_page == 0 {
            return 1;
        }
        cursor.count.div_ceil(self.items_per_page).max(1)
    }

    /// 页码导航；未分页或全部条目都在当前页时为空
    pub fn page_numbers_html(&self, cursor: PageCursor, page_label: &str) -> String {
        if !self.is_enabled() || !cursor.paged {
            return String::new();
        }

        let mut html = format!("<div class=\"paging\">{}:\n", page_label);
        for current in 1..=self.page_count(cursor) {
            if current == self.page {
                html.push_str(&format!(" {} \n", current));
            } else {
                let href = self.page_url.out_with(&self.param_name, &current.to_string());
                html.push_str(&html_writer::tag("a", &format!(" {} ", current), &[("href", href.as_str())]));
                html.push('\n');
            }
        }
        html.push_str("</div>");
        html
    }
}
