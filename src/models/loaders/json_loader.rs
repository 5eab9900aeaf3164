use crate::error::{AppError, AppResult};
use crate::models::dataset::ExportDataset;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载导出数据，结构与 TOML 版本一致
pub async fn load_json_dataset(json_file_path: &Path) -> AppResult<ExportDataset> {
    let path_str = json_file_path.display().to_string();
    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let dataset: ExportDataset = serde_json::from_str(&content)
        .map_err(|e| AppError::json_parse_failed(&path_str, e))?;

    Ok(dataset.with_file_path(path_str))
}
