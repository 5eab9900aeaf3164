pub mod category;
pub mod context;
pub mod dataset;
pub mod loaders;

pub use category::Category;
pub use context::{ContextLevel, QuestionContext};
pub use dataset::ExportDataset;
pub use loaders::{load_dataset, load_lang_strings};
