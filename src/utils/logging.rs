//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::{debug, info};

use crate::config::Config;
use crate::listing::PageCursor;
use crate::models::QuestionContext;
use crate::orchestrator::ExportSummary;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目分类导出页面");
    info!("📁 数据文件: {}", config.data_file);
    info!(
        "📄 当前页: {} (每页 {} 个, 参数名 {})",
        config.page, config.page_length, config.page_param_name
    );
    info!("{}", "=".repeat(60));
}

/// 记录单个上下文的分页结果
///
/// # 参数
/// - `context`: 上下文
/// - `top_level`: 顶层分类数量
/// - `cursor`: 该列表结束时的游标
pub fn log_context_rows(context: &QuestionContext, top_level: usize, cursor: PageCursor) {
    debug!(
        "[{}] 顶层分类 {} 个, 结束位置 {}, 已分页: {}",
        truncate_text(&context.display_name(), 40),
        top_level,
        cursor.count,
        cursor.paged
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 渲染统计
/// - `output_path`: 输出文件路径
pub fn print_final_stats(summary: &ExportSummary, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 渲染完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "✅ 显示上下文: {}/{}",
        summary.rendered_contexts, summary.contexts
    );
    info!("📂 分类数量: {}", summary.categories);
    info!("📄 页码: {}/{}", summary.page, summary.page_count);
    info!("{}", "=".repeat(60));
    info!("\n页面已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_chars() {
        assert_eq!(truncate_text("分类导出页面", 2), "分类...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
