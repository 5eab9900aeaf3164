//! 树形列表
//!
//! 把按顺序排列的扁平记录组装成父子结构，并按分页窗口标记顶层条目是否显示

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::listing::pagination::{PageCursor, Pagination};
use crate::listing::record::{ItemRenderer, ListRecord};

/// 列表中的一个条目
#[derive(Debug, Clone)]
pub struct ListItem<T> {
    record: T,
    display: bool,
    children: Vec<ListItem<T>>,
}

impl<T> ListItem<T> {
    pub fn record(&self) -> &T {
        &self.record
    }

    /// 顶层条目在当前页之外时为 false
    pub fn is_displayed(&self) -> bool {
        self.display
    }

    pub fn children(&self) -> &[ListItem<T>] {
        &self.children
    }
}

/// 一个上下文的树形列表
#[derive(Debug, Clone)]
pub struct NestedList<T> {
    items: Vec<ListItem<T>>,
    start: PageCursor,
    end: PageCursor,
}

impl<T: ListRecord> NestedList<T> {
    /// 从已排序的记录构建列表
    ///
    /// `cursor` 为上一个列表结束时的游标；返回的列表通过 [`NestedList::end_cursor`]
    /// 给出下一个列表的起点。
    pub fn from_records(records: Vec<T>, pagination: &Pagination, cursor: PageCursor) -> Self {
        let ids: HashSet<u64> = records.iter().map(|r| r.id()).collect();

        // 父 id -> 子记录下标，保持记录原有顺序
        let mut children_of: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut top_level = Vec::new();
        for (idx, record) in records.iter().enumerate() {
            if ids.contains(&record.parent()) {
                children_of.entry(record.parent()).or_default().push(idx);
            } else {
                top_level.push(idx);
            }
        }

        let mut slots: Vec<Option<T>> = records.into_iter().map(Some).collect();
        let mut items = Vec::with_capacity(top_level.len());
        let mut end = cursor;

        for idx in top_level {
            let Some(record) = slots[idx].take() else {
                continue;
            };
            let display = pagination.contains(end.count);
            let children = if display {
                build_children(&mut slots, &children_of, record.id())
            } else {
                // 不在当前页的条目不展开子节点
                end.paged = true;
                Vec::new()
            };
            items.push(ListItem {
                record,
                display,
                children,
            });
            end.count += 1;
        }

        Self {
            items,
            start: cursor,
            end,
        }
    }
}

impl<T> NestedList<T> {
    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    pub fn top_level_count(&self) -> usize {
        self.items.len()
    }

    /// 当前页内显示的顶层条目数量
    pub fn displayed_count(&self) -> usize {
        self.items.iter().filter(|i| i.display).count()
    }

    pub fn start_cursor(&self) -> PageCursor {
        self.start
    }

    pub fn end_cursor(&self) -> PageCursor {
        self.end
    }

    /// 渲染为嵌套的 `<ul>`；没有可显示的条目时返回空字符串
    pub fn to_html<R>(&self, indent: usize, renderer: &R) -> String
    where
        R: ItemRenderer<T> + ?Sized,
    {
        render_items(&self.items, indent, renderer)
    }
}

fn build_children<T: ListRecord>(
    slots: &mut [Option<T>],
    children_of: &HashMap<u64, Vec<usize>>,
    parent_id: u64,
) -> Vec<ListItem<T>> {
    let Some(indices) = children_of.get(&parent_id) else {
        return Vec::new();
    };

    let mut items = Vec::with_capacity(indices.len());
    for &idx in indices {
        let Some(record) = slots[idx].take() else {
            warn!("记录已在列表中出现过，跳过 (父节点 {})", parent_id);
            continue;
        };
        let children = build_children(slots, children_of, record.id());
        items.push(ListItem {
            record,
            display: true,
            children,
        });
    }
    items
}

fn render_items<T, R>(items: &[ListItem<T>], indent: usize, renderer: &R) -> String
where
    R: ItemRenderer<T> + ?Sized,
{
    let tabs = "\t".repeat(indent);
    let mut html = String::new();
    for item in items {
        let item_html = render_item(item, indent + 1, renderer);
        if !item_html.is_empty() {
            html.push_str(&format!("{}\t<li>{}</li>\n", tabs, item_html));
        }
    }

    if html.is_empty() {
        return html;
    }
    format!("{}<ul>\n{}{}</ul>\n", tabs, html, tabs)
}

fn render_item<T, R>(item: &ListItem<T>, indent: usize, renderer: &R) -> String
where
    R: ItemRenderer<T> + ?Sized,
{
    if !item.display {
        return String::new();
    }

    let children_html = render_items(&item.children, indent + 1, renderer);
    let mut html = renderer.render_item(&item.record);
    html.push_str("&nbsp;");
    if !children_html.is_empty() {
        html.push('\n');
        html.push_str(&children_html);
    }
    html
}
