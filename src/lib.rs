//! muster-config - Server profile storage for the Muster CLI
//!
//! Persists per-user connection profiles for the management servers the
//! CLI talks to: API keys, the focused project, CA bundles, and derived
//! Kubernetes access material. Profiles live in a single JSON file
//! (`~/.muster/cli.json` by default) that is read once per invocation
//! and written back on an explicit save.
//!
//! # Example
//!
//! ```no_run
//! use muster_config::{default_config_path, Config};
//!
//! # fn main() -> muster_config::Result<()> {
//! let config = Config::load_from_path(default_config_path())?;
//! if let Some(server) = config.focused_server() {
//!     println!("endpoint: {}", server.environment_url()?);
//! }
//! config.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! Concurrent invocations against the same file are not coordinated:
//! the last writer wins. The store does no locking.

pub mod error;
pub mod models;
pub mod store;

pub use error::{ConfigError, Result};
pub use models::{Config, ExecCredential, KubeConfig, ServerConfig};
pub use store::{default_config_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
