//! Profile store file I/O

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ConfigError, Result};
use crate::models::Config;

/// Directory under the home directory holding CLI state
pub const CONFIG_DIR_NAME: &str = ".muster";

/// Profile store file name
pub const CONFIG_FILE_NAME: &str = "cli.json";

/// Default config file path (~/.muster/cli.json)
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Load a config from the given file path. A missing file is the
    /// fresh, unconfigured state and yields an empty config, not an
    /// error; any other read failure is propagated.
    pub fn load_from_path(path: impl Into<PathBuf>) -> Result<Config> {
        let path = path.into();

        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, starting empty", path.display());
                return Ok(Config {
                    path,
                    ..Config::default()
                });
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let mut config: Config =
            serde_json::from_slice(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        // The file is not trusted to know where it lives; a config
        // copied to a new location self-corrects on the next save.
        config.path = path;

        Ok(config)
    }

    /// Save the config back to the path it was loaded from, creating
    /// missing parent directories owner-only first. The write is a plain
    /// create/truncate; concurrent writers against the same path are
    /// last-writer-wins.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            create_private_dir(parent)?;
        }

        info!("saving config to {}", self.path.display());

        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::from)?;

        Ok(())
    }
}

/// Create `dir` and any missing parents, readable by the owner only
fn create_private_dir(dir: &Path) -> io::Result<()> {
    // a bare file name has an empty parent
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(dir)
}
