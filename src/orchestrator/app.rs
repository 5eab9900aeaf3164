use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::InMemoryCategorySource;
use crate::listing::{PageUrl, Pagination};
use crate::models::{load_dataset, load_lang_strings, ExportDataset};
use crate::orchestrator::export_view::{CategoryExportView, ExportSummary};
use crate::services::{HtmlOutputRenderer, HtmlStringFormatter, LangStrings, RenderContext};
use crate::utils::logging::{log_context_rows, log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    dataset: ExportDataset,
    strings: LangStrings,
}

impl App {
    /// 初始化应用：校验配置，加载分类数据和语言包
    pub async fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;
        log_startup(&config);

        let dataset = load_dataset(Path::new(&config.data_file)).await?;
        let strings = load_lang_strings(config.lang_file.as_deref().map(Path::new)).await?;

        Ok(Self {
            config,
            dataset,
            strings,
        })
    }

    /// 直接使用已加载的数据（测试或嵌入调用）
    pub fn with_dataset(config: Config, dataset: ExportDataset, strings: LangStrings) -> Self {
        Self {
            config,
            dataset,
            strings,
        }
    }

    /// 渲染页面并返回 HTML 与统计信息
    pub fn render(&self) -> AppResult<(String, ExportSummary)> {
        if self.dataset.contexts.is_empty() {
            warn!("⚠️ 数据中没有任何上下文，输出为空");
        }

        let pagination = Pagination::new(
            self.config.page,
            self.config.page_length,
            self.config.page_param_name.clone(),
            PageUrl::parse(&self.config.page_url)?,
        );
        let source = InMemoryCategorySource::new(self.dataset.categories.clone());
        let view = CategoryExportView::initialize(pagination, &self.dataset.contexts, &source)?;

        if self.config.verbose_logging {
            for state in view.lists() {
                log_context_rows(state.context(), state.nested.top_level_count(), state.cursor_out());
            }
        }

        let formatter = HtmlStringFormatter::new();
        let output = HtmlOutputRenderer;
        let render = RenderContext::new(&formatter, &output, &self.strings);

        let html = view.output_edit_lists(&render);
        let summary = view.summary(&render);
        Ok((html, summary))
    }

    /// 运行应用主逻辑：渲染并写出文件
    pub async fn run(&self) -> AppResult<ExportSummary> {
        let (html, summary) = self.render()?;

        fs::write(&self.config.output_html_file, &html)
            .await
            .map_err(|e| AppError::file_write_failed(&self.config.output_html_file, e))?;
        info!("✓ HTML 已写入: {}", self.config.output_html_file);

        if let Some(summary_file) = &self.config.summary_file {
            let json = serde_json::to_string_pretty(&summary)?;
            fs::write(summary_file, json)
                .await
                .map_err(|e| AppError::file_write_failed(summary_file, e))?;
            info!("✓ 统计信息已写入: {}", summary_file);
        }

        print_final_stats(&summary, &self.config.output_html_file);
        Ok(summary)
    }
}
