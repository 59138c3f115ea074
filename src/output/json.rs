use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ComparisonRecord;
use crate::error::AppError;

/// Pretty JSON (two-space indent, trailing newline). Key order follows the
/// record's field order, so the same record always yields the same bytes.
pub(crate) fn record_to_json(record: &ComparisonRecord) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(record).map_err(AppError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Write `record` to `path`, creating missing parent directories and
/// replacing whatever was there before.
///
/// The bytes go to a sibling temporary file that is renamed over `path`, so
/// a failed write never leaves a truncated record behind.
pub(crate) fn save_record(record: &ComparisonRecord, path: &Path) -> Result<(), AppError> {
    let json = record_to_json(record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::io("create directory", parent, e))?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(e) = fs::write(&tmp_path, json) {
        let _ = fs::remove_file(&tmp_path);
        return Err(AppError::io("write", path, e));
    }
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        AppError::io("write", path, e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Read a record written by [`save_record`]
pub(crate) fn load_record(path: &Path) -> Result<ComparisonRecord, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io("read", path, e))?;
    serde_json::from_str(&content).map_err(|source| AppError::InvalidRecord {
        path: path.to_path_buf(),
        source,
    })
}
