use crate::error::{AppError, AppResult};
use crate::models::dataset::ExportDataset;
use crate::services::strings::LangStrings;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载导出数据
///
/// 文件格式：
/// ```toml
/// [[contexts]]
/// id = 15
/// name = "Algebra I"
/// level = 50
///
/// [[categories]]
/// id = 1
/// name = "Default for Algebra I"
/// context_id = 15
/// question_count = 12
/// ```
pub async fn load_toml_dataset(toml_file_path: &Path) -> AppResult<ExportDataset> {
    let path_str = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let dataset: ExportDataset =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path_str, e))?;

    Ok(dataset.with_file_path(path_str))
}

/// 从 TOML 文件加载语言包，缺失的键使用内置默认值
pub async fn load_toml_lang_strings(toml_file_path: &Path) -> AppResult<LangStrings> {
    let path_str = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path_str, e))
}
