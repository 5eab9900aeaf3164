use crate::error::{AppResult, ConfigError};
use crate::listing::PageUrl;

/// 每页显示的顶层分类数量
pub const QUESTION_PAGE_LENGTH: usize = 25;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 分类数据文件（.toml 或 .json）
    pub data_file: String,
    /// 输出的 HTML 文件
    pub output_html_file: String,
    /// 统计信息输出文件（JSON），为空则不输出
    pub summary_file: Option<String>,
    /// 语言包文件（TOML），为空则使用内置字符串
    pub lang_file: Option<String>,
    // --- 分页配置 ---
    /// 当前页码，0 表示不分页
    pub page: usize,
    /// 分页使用的 URL 参数名
    pub page_param_name: String,
    /// 当前页面 URL
    pub page_url: String,
    /// 每页顶层分类数量
    pub page_length: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "categories.toml".to_string(),
            output_html_file: "category_export.html".to_string(),
            summary_file: None,
            lang_file: None,
            page: 1,
            page_param_name: "cpage".to_string(),
            page_url: "/question/export.php".to_string(),
            page_length: QUESTION_PAGE_LENGTH,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            data_file: std::env::var("CATEGORY_DATA_FILE").unwrap_or(default.data_file),
            output_html_file: std::env::var("OUTPUT_HTML_FILE").unwrap_or(default.output_html_file),
            summary_file: std::env::var("SUMMARY_FILE").ok().filter(|v| !v.is_empty()).or(default.summary_file),
            lang_file: std::env::var("LANG_FILE").ok().filter(|v| !v.is_empty()).or(default.lang_file),
            page: std::env::var("PAGE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page),
            page_param_name: std::env::var("PAGE_PARAM_NAME").unwrap_or(default.page_param_name),
            page_url: std::env::var("PAGE_URL").unwrap_or(default.page_url),
            page_length: std::env::var("PAGE_LENGTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_length),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 校验分页相关配置
    pub fn validate(&self) -> AppResult<()> {
        if self.page_length == 0 {
            return Err(ConfigError::InvalidPageLength {
                value: self.page_length,
            }
            .into());
        }
        if self.page_param_name.trim().is_empty() {
            return Err(ConfigError::EmptyPageParamName.into());
        }
        PageUrl::parse(&self.page_url)?;
        Ok(())
    }
}
