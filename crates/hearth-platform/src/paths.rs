use std::path::PathBuf;

use hearth_common::StorageError;

const APP_NAME: &str = "hearth";

/// Returns the platform-specific data directory for Hearth.
///
/// - macOS: `~/Library/Application Support/hearth`
/// - Linux: `$XDG_DATA_HOME/hearth` (defaults to `~/.local/share/hearth`)
/// - Windows: `%APPDATA%\hearth`
pub fn data_dir() -> Result<PathBuf, StorageError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| StorageError::PathError("could not determine data directory".into()))
}

/// Returns the path to the persistent key-value storage file.
///
/// Located at `data_dir()/storage.json`.
pub fn storage_file() -> Result<PathBuf, StorageError> {
    Ok(data_dir()?.join("storage.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_file_is_under_data_dir() {
        if let (Ok(data), Ok(file)) = (data_dir(), storage_file()) {
            assert!(file.starts_with(&data));
            assert!(file.ends_with("storage.json"));
        }
    }

    #[test]
    fn data_dir_is_namespaced() {
        if let Ok(dir) = data_dir() {
            assert!(dir.ends_with("hearth"));
        }
    }
}
