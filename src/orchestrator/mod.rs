//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `export_view` - 分类导出页面
//! - 每个上下文建立一个列表
//! - 依次分页，游标在列表之间传递
//! - 组装盒子、标题和页码导航
//!
//! ### `app` - 命令行运行器
//! - 加载数据和语言包
//! - 渲染并写出 HTML / 统计信息
//!
//! ## 层次关系
//!
//! ```text
//! app (加载 / 写文件)
//!     ↓
//! export_view (处理 Vec<QuestionContext>)
//!     ↓
//! workflow::CategoryList / CategoryRowRenderer (单个上下文 / 单行)
//!     ↓
//! listing (组装 + 分页 + 渲染)      services (格式化 / 布局)
//!     ↓
//! infrastructure (CategorySource)
//! ```

pub mod app;
pub mod export_view;

pub use app::App;
pub use export_view::{CategoryExportView, ContextListState, ExportSummary};
