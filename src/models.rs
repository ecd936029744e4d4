//! Server profile data models

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Credential produced by an external helper process (`kind`, `spec`,
/// expiry and so on). The store keeps it verbatim and never looks inside.
pub type ExecCredential = serde_json::Value;

/// Kubernetes client configuration captured for a downstream cluster.
/// Opaque to the store.
pub type KubeConfig = serde_json::Value;

/// Top-level profile configuration for the user
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Map of server name to connection profile
    #[serde(rename = "Servers", default)]
    pub servers: BTreeMap<String, ServerConfig>,
    /// Where the config was loaded from and will be saved to. The
    /// location is not part of the content, so it is never serialized.
    #[serde(skip)]
    pub path: PathBuf,
    /// Name of the server the user has in focus. May be empty or name a
    /// server that no longer exists.
    #[serde(rename = "CurrentServer", default)]
    pub current_server: String,
}

/// Connection profile for one remote server the user has set up.
///
/// The serialized field names are a stable on-disk contract; files
/// written by earlier releases must keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(rename = "accessKey")]
    pub access_key: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    #[serde(rename = "tokenKey")]
    pub token_key: String,
    /// Base connection URL, possibly with an API version suffix
    pub url: String,
    /// Composite `<cluster-id>:<project-id>` identifier
    pub project: String,
    /// PEM bundle for the server's certificate authority
    #[serde(rename = "cacert")]
    pub ca_certs: String,
    #[serde(rename = "kubeCredentials")]
    pub kube_credentials: BTreeMap<String, ExecCredential>,
    #[serde(rename = "kubeConfigs")]
    pub kube_configs: BTreeMap<String, KubeConfig>,
}

impl Config {
    /// Profile named by `current_server`. Absence is a normal outcome:
    /// nothing ties the focused name to an existing entry.
    pub fn focused_server(&self) -> Option<&ServerConfig> {
        self.servers.get(&self.current_server)
    }
}

impl ServerConfig {
    /// Cluster id part of the composite project identifier. An empty or
    /// colon-free project comes back unchanged.
    pub fn focused_cluster(&self) -> &str {
        self.project.split(':').next().unwrap_or_default()
    }

    /// Stored credential under `key`, if any
    pub fn kube_token(&self, key: &str) -> Option<&ExecCredential> {
        self.kube_credentials.get(key)
    }

    /// Base API endpoint for the server, with any `/v3` suffix stripped
    pub fn environment_url(&self) -> Result<String> {
        base_url(&self.url)
    }
}

/// Strip the API version from a connection URL. When the URL contains
/// `/v3` the prefix before its last occurrence is returned as-is, with
/// no further parsing. Otherwise the URL is parsed and rebuilt as
/// `scheme://host[:port]`, dropping path, query and fragment.
fn base_url(full_url: &str) -> Result<String> {
    match full_url.rfind("/v3") {
        Some(idx) => Ok(full_url[..idx].to_string()),
        None => {
            let parsed = Url::parse(full_url)?;
            let mut base = format!("{}://{}", parsed.scheme(), parsed.host_str().unwrap_or(""));
            if let Some(port) = parsed.port() {
                base.push_str(&format!(":{}", port));
            }
            Ok(base)
        }
    }
}
