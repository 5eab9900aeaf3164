pub mod category_source;
pub mod sort_spec;

pub use category_source::{CategorySource, InMemoryCategorySource};
pub use sort_spec::{SortField, SortKey, SortSpec};
