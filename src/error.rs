use std::fmt;
use std::path::PathBuf;

/// Custom error type for profile store operations
#[derive(Debug)]
pub enum ConfigError {
    /// Config file read/write/mkdir failure
    Io(std::io::Error),
    /// Persisted config content did not parse
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Stored server URL could not be parsed
    Url(url::ParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O failed: {}", e),
            ConfigError::Parse { path, source } => {
                write!(f, "parsing {}: {}", path.display(), source)
            }
            ConfigError::Url(e) => write!(f, "invalid server URL: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Url(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::Url(err)
    }
}

/// Result type alias for profile store operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::Io(io_err);
        assert!(err.to_string().contains("config file I/O failed"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("/home/user/.muster/cli.json"),
            source,
        };
        assert!(err.to_string().contains("/home/user/.muster/cli.json"));
        assert!(err.to_string().starts_with("parsing"));
    }

    #[test]
    fn test_url_error_display() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::Url(parse_err);
        assert!(err.to_string().contains("invalid server URL"));
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("cli.json"),
            source,
        };
        assert!(err.source().is_some());

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(ConfigError::Io(io_err).source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        match err {
            ConfigError::Io(e) => assert!(e.to_string().contains("file not found")),
            _ => panic!("Expected ConfigError::Io"),
        }
    }

    #[test]
    fn test_from_url_parse_error() {
        let parse_err = url::Url::parse("://missing-scheme").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Url(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
