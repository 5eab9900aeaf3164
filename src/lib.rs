//! # Question Category Export
//!
//! 渲染"导出题目"页面上的题目分类列表：按上下文分组、树形嵌套、跨上下文连续分页。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 分类数据源，只暴露"按上下文取分类"的能力
//! - `SortSpec` - 排序规则（parent, sortorder, name）
//!
//! ### ② 列表引擎（Listing）
//! - `listing/` - 扁平记录 → 树形列表，分页窗口，页码导航
//!
//! ### ③ 业务能力层（Services）
//! - `StringFormatter` - 文本格式化与转义
//! - `OutputRenderer` - 盒子与标题
//! - `LangStrings` - 界面字符串
//!
//! ### ④ 流程层（Workflow）
//! - `CategoryList` - 单个上下文的分类列表
//! - `CategoryRowRenderer` - 单行渲染
//!
//! ### ⑤ 编排层（Orchestration）
//! - `CategoryExportView` - 构建 → 分页 → 渲染
//! - `App` - 命令行运行器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod listing;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, QUESTION_PAGE_LENGTH};
pub use error::{AppError, AppResult};
pub use infrastructure::{CategorySource, InMemoryCategorySource, SortSpec};
pub use listing::{NestedList, PageCursor, PageUrl, Pagination};
pub use models::{Category, ContextLevel, ExportDataset, QuestionContext};
pub use orchestrator::{App, CategoryExportView, ExportSummary};
pub use services::{HtmlOutputRenderer, HtmlStringFormatter, LangStrings, RenderContext};
pub use workflow::{CategoryList, CategoryRowRenderer};
