//! Configuration management for nextkit scaffolding.
//!
//! This module defines the `Config` struct that controls file extensions,
//! where the shared API utilities live, overwrite behaviour and template
//! overrides. The configuration can be loaded from a YAML or TOML file,
//! discovered from the workspace, or created programmatically.
//!
//! # Examples
//!
//! ```no_run
//! use nextkit_core::config::Config;
//!
//! # async fn example() -> nextkit_core::Result<()> {
//! // Defaults match a TypeScript Next.js project
//! let config = Config::default();
//! assert_eq!(config.module_extension, "ts");
//!
//! // Or load from a config file
//! let config = Config::from_file("nextkit.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// File names looked up in the workspace root, in order
pub const WORKSPACE_CONFIG_FILES: &[&str] = &["nextkit.yaml", "nextkit.toml"];

/// Configuration for nextkit scaffolding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extension of component and page files
    #[serde(default = "default_component_extension")]
    pub component_extension: String,

    /// Extension of route, handler and utility modules
    #[serde(default = "default_module_extension")]
    pub module_extension: String,

    /// Directory of the shared API utilities, relative to the workspace root
    #[serde(default = "default_api_utils_dir")]
    pub api_utils_dir: String,

    /// File stem of the shared API utilities module
    #[serde(default = "default_api_utils_filename")]
    pub api_utils_filename: String,

    /// Description used when the user keeps the default page metadata
    #[serde(default = "default_page_description")]
    pub default_page_description: String,

    /// Whether existing component and page files may be overwritten
    #[serde(default)]
    pub overwrite: bool,

    /// Optional directory with `.tera` files overriding the built-in templates
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Editor command used to open generated files
    #[serde(default)]
    pub editor: Option<String>,

    /// Whether to open the main generated file after scaffolding
    #[serde(default)]
    pub open_in_editor: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            component_extension: default_component_extension(),
            module_extension: default_module_extension(),
            api_utils_dir: default_api_utils_dir(),
            api_utils_filename: default_api_utils_filename(),
            default_page_description: default_page_description(),
            overwrite: false,
            templates_dir: None,
            editor: None,
            open_in_editor: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML or TOML file (by extension)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| crate::Error::fs(path, e))?;
        let config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a YAML or TOML file (by extension)
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::Error::config(format!("Failed to serialize config: {}", e)))?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content)
            .await
            .map_err(|e| crate::Error::fs(path, e))?;
        Ok(())
    }

    /// Resolve the configuration for a workspace.
    ///
    /// An explicit path must exist. Otherwise the first of
    /// `<workspace>/nextkit.yaml`, `<workspace>/nextkit.toml` and
    /// `<config dir>/nextkit/config.yaml` that exists is loaded, falling back
    /// to defaults.
    pub async fn discover(workspace_root: &Path, explicit: Option<&Path>) -> crate::Result<Self> {
        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            return Self::from_file(path).await;
        }

        for candidate in Self::candidates(workspace_root) {
            if fs::try_exists(&candidate).await.unwrap_or(false) {
                log::debug!("Loading config from {}", candidate.display());
                return Self::from_file(&candidate).await;
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn candidates(workspace_root: &Path) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = WORKSPACE_CONFIG_FILES
            .iter()
            .map(|name| workspace_root.join(name))
            .collect();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("nextkit").join("config.yaml"));
        }
        candidates
    }

    /// Full path of the shared API utilities module
    pub fn api_utils_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.api_utils_dir).join(format!(
            "{}.{}",
            self.api_utils_filename, self.module_extension
        ))
    }

    /// Import specifier of the shared API utilities module.
    ///
    /// Uses the `@/` alias for `src/`, so `src/lib/api` with `nextApiUtils`
    /// becomes `@/lib/api/nextApiUtils`.
    pub fn api_utils_import(&self) -> String {
        let dir = self.api_utils_dir.replace('\\', "/");
        let dir = dir.trim_start_matches("./").trim_matches('/');
        let dir = dir
            .strip_prefix("src/")
            .or_else(|| (dir == "src").then_some(""))
            .unwrap_or(dir);
        if dir.is_empty() {
            format!("@/{}", self.api_utils_filename)
        } else {
            format!("@/{}/{}", dir, self.api_utils_filename)
        }
    }

    /// Custom template directory, resolved against the workspace root
    pub fn templates_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.templates_dir
            .as_ref()
            .map(|dir| workspace_root.join(dir))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}

fn default_component_extension() -> String {
    "tsx".to_string()
}

fn default_module_extension() -> String {
    "ts".to_string()
}

fn default_api_utils_dir() -> String {
    "src/utils".to_string()
}

fn default_api_utils_filename() -> String {
    "nextApiUtils".to_string()
}

fn default_page_description() -> String {
    "Next.JS Page".to_string()
}
