pub mod category_item;
pub mod category_list;

pub use category_item::CategoryRowRenderer;
pub use category_list::CategoryList;
