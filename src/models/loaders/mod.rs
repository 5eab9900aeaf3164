pub mod json_loader;
pub mod toml_loader;

use crate::error::{AppResult, FileError};
use crate::models::dataset::ExportDataset;
use crate::services::strings::LangStrings;
use std::path::Path;

pub use json_loader::load_json_dataset;
pub use toml_loader::{load_toml_dataset, load_toml_lang_strings};

/// 按扩展名加载导出数据（.toml / .json）
pub async fn load_dataset(path: &Path) -> AppResult<ExportDataset> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let dataset = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => load_toml_dataset(path).await?,
        Some("json") => load_json_dataset(path).await?,
        _ => {
            return Err(FileError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into())
        }
    };

    tracing::info!(
        "成功加载 {} 个上下文, {} 个分类",
        dataset.contexts.len(),
        dataset.categories.len()
    );

    Ok(dataset)
}

/// 加载语言包；未指定文件时返回内置字符串
pub async fn load_lang_strings(path: Option<&Path>) -> AppResult<LangStrings> {
    match path {
        Some(path) => {
            let strings = load_toml_lang_strings(path).await?;
            tracing::info!("已加载语言包: {}", path.display());
            Ok(strings)
        }
        None => Ok(LangStrings::default()),
    }
}
