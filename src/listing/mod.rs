//! 树形分页列表引擎
//!
//! 只提供"组装 + 分页 + 渲染"的通用能力；具体一行长什么样由 [`ItemRenderer`] 决定，
//! 取哪些记录、怎么排序由调用方决定。

pub mod nested;
pub mod pagination;
pub mod record;

pub use nested::{ListItem, NestedList};
pub use pagination::{PageCursor, PageUrl, Pagination};
pub use record::{ItemRenderer, ListRecord};
