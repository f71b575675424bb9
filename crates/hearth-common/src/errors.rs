use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage path error: {0}")]
    PathError(String),

    #[error("storage read error: {0}")]
    ReadError(String),

    #[error("storage write error: {0}")]
    WriteError(String),

    #[error("storage corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("pacing.max_ms = 0".into());
        assert_eq!(err.to_string(), "config validation error: pacing.max_ms = 0");
    }

    #[test]
    fn storage_error_display() {
        let err = StorageError::ReadError("permission denied".into());
        assert_eq!(err.to_string(), "storage read error: permission denied");

        let err = StorageError::Corrupt("expected object".into());
        assert_eq!(err.to_string(), "storage corrupt: expected object");
    }

    #[test]
    fn hearth_error_from_storage() {
        let err: HearthError = StorageError::WriteError("disk full".into()).into();
        assert!(matches!(err, HearthError::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn hearth_error_from_config() {
        let err: HearthError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, HearthError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn hearth_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HearthError = io_err.into();
        assert!(matches!(err, HearthError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn hearth_error_network_display() {
        let err = HearthError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
