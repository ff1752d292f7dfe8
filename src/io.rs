use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn map_io_error(error: std::io::Error, path: &Path) -> AppError {
    AppError::Io(format!("I/O error at path '{}': {}", path.display(), error))
}

fn temp_path_for(fpath: &Path) -> PathBuf {
    let mut name = fpath
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "catalog".into());
    name.push(".tmp");
    fpath.with_file_name(name)
}

fn write_file(fpath: &Path, data: &[u8]) -> AppResult<()> {
    let mut file = File::create(fpath).map_err(|e| map_io_error(e, fpath))?;
    file.write_all(data).map_err(|e| map_io_error(e, fpath))?;
    file.sync_all().map_err(|e| map_io_error(e, fpath))?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(fpath: &Path) -> AppResult<T> {
    let content = fs::read_to_string(fpath).map_err(|e| map_io_error(e, fpath))?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::SerdeParse(format!("'{}': {}", fpath.display(), e))
    })
}

/// Writes `data` next to `fpath` and renames it into place, so readers never
/// observe a half-written file.
pub fn save_json<T: Serialize>(fpath: &Path, data: &T, log_ctx: &str) -> AppResult<()> {
    let json_bytes = serde_json::to_vec_pretty(data).map_err(|e| {
        log(
            LogLevel::Error,
            &format!(
                "Save JSON ({}) FAIL - Serialize Error: {}. File: '{}'",
                log_ctx,
                e,
                fpath.display()
            ),
        );
        AppError::from(e)
    })?;

    let tmp_path = temp_path_for(fpath);
    let result = write_file(&tmp_path, &json_bytes)
        .and_then(|_| fs::rename(&tmp_path, fpath).map_err(|e| map_io_error(e, fpath)));

    if let Err(e) = result {
        log(
            LogLevel::Error,
            &format!(
                "Save JSON ({}) FAIL - Write Error: {}. File: '{}'",
                log_ctx,
                e,
                fpath.display()
            ),
        );
        if tmp_path.exists() {
            let _ = fs::remove_file(&tmp_path);
        }
        return Err(e);
    }
    Ok(())
}
