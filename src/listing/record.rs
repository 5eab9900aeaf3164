use crate::models::Category;

/// 可以组成树形列表的记录
pub trait ListRecord {
    fn id(&self) -> u64;
    /// 父记录 id；列表中找不到该 id 的记录即为顶层
    fn parent(&self) -> u64;
}

impl ListRecord for Category {
    fn id(&self) -> u64 {
        self.id
    }

    fn parent(&self) -> u64 {
        self.parent
    }
}

/// 单行渲染回调，只负责这一行自身的 HTML（不含子节点）
pub trait ItemRenderer<T> {
    fn render_item(&self, record: &T) -> String;
}

impl<T, F> ItemRenderer<T> for F
where
    F: Fn(&T) -> String,
{
    fn render_item(&self, record: &T) -> String {
        self(record)
    }
}
