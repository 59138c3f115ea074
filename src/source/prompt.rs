use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::AppError;

/// Read the system prompt sent with every traditional request
pub(crate) fn load_system_prompt(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::PromptNotFound {
            path: path.to_path_buf(),
        },
        _ => AppError::io("read", path, e),
    })
}
