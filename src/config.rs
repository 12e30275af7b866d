use crate::input::{DEFAULT_ENCODINGS, Encoding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Project layout: where documents, data files and images live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Base directory for relative paths and image resolution (default: current dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            docs_dir: default_docs_dir(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Section display options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Truncate displayed sections to this many characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Hide image lines and figure captions in terminal output (default: true)
    #[serde(default = "default_hide_figures")]
    pub hide_figures: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            hide_figures: default_hide_figures(),
        }
    }
}

fn default_hide_figures() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Encodings tried in order when decoding a file
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            encodings: default_encodings(),
        }
    }
}

fn default_encodings() -> Vec<String> {
    DEFAULT_ENCODINGS
        .iter()
        .map(|encoding| encoding.name().to_string())
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// File names listed before all others, in this order
    #[serde(default)]
    pub priority: Vec<String>,
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdexplorer/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdexplorer").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdexplorer/config.toml
    /// - Linux: ~/.config/mdexplorer/config.toml
    /// - Windows: %APPDATA%/mdexplorer/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdexplorer").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/mdexplorer first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Prefer XDG-style path on macOS for CLI tools
            if let Some(xdg_path) = Self::xdg_config_path() {
                if xdg_path.is_file() {
                    return Self::load_or_default(&xdg_path);
                }
            }
        }

        // Fall back to platform-specific path
        Self::config_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default()
    }

    fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring config file");
            Self::default()
        })
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the platform config path
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(write_error)?;

        Ok(())
    }

    /// Project root, falling back to the current directory
    pub fn project_root(&self) -> PathBuf {
        self.paths
            .project_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
    }

    /// Directory scanned for markdown documents
    pub fn docs_dir(&self) -> PathBuf {
        self.project_root().join(&self.paths.docs_dir)
    }

    /// Directory scanned for CSV data files
    pub fn data_dir(&self) -> PathBuf {
        self.project_root().join(&self.paths.data_dir)
    }

    /// Configured encodings in order; unknown names are skipped with a warning.
    ///
    /// Falls back to the default order when nothing usable is configured.
    pub fn encodings(&self) -> Vec<Encoding> {
        let encodings: Vec<Encoding> = self
            .loader
            .encodings
            .iter()
            .filter_map(|name| match name.parse::<Encoding>() {
                Ok(encoding) => Some(encoding),
                Err(err) => {
                    tracing::warn!(%err, "skipping configured encoding");
                    None
                }
            })
            .collect();

        if encodings.is_empty() {
            DEFAULT_ENCODINGS.to_vec()
        } else {
            encodings
        }
    }
}
