//! Site configuration management for `nobelium.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── catalog    # [catalog]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::{BuildConfig, CatalogConfig, PostListStyle, SiteInfoConfig, ThemeConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nobelium.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// `init` targets `<cwd>/<config>`. Every other command searches upward
    /// from cwd; `build` requires a config file, `filter` and `spy` fall back
    /// to defaults rooted at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if cli.is_init() {
            let mut config = Self::default();
            config.config_path = cwd.join(&cli.config);
            config.set_root(&cwd);
            return Ok(config);
        }

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config.set_root(&root);
                config
            }
            None if cli.is_build() => {
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.set_root(&cwd);
                config
            }
        };

        config.apply_command_options(cli);
        config.sync_path_prefix_from_url();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (mut config, _) = Self::parse_with_ignored(content)?;
        config.sync_path_prefix_from_url();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.catalog.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Derive `build.path_prefix` from `site.url`.
    ///
    /// `https://example.github.io/blog` → `/blog`.
    fn sync_path_prefix_from_url(&mut self) {
        self.build.path_prefix = self
            .site
            .url
            .as_deref()
            .and_then(extract_url_path)
            .filter(|path| !path.is_empty())
            .map(|path| format!("/{path}"))
            .unwrap_or_default();
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Filter { args } => {
                Self::update_option(&mut self.build.data, args.data.as_ref());
            }
            Commands::Init { .. } | Commands::Spy { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.data, args.data.as_ref());
        self.build.clean |= args.clean;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // paths and links
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.build.output)
    }

    /// Absolute path of the site data file.
    pub fn data_path(&self) -> PathBuf {
        self.root_join(&self.build.data)
    }

    /// Absolute directory for embedded assets.
    pub fn assets_dir(&self) -> PathBuf {
        self.output_dir().join(&self.build.assets)
    }

    /// Site-absolute URL for a path, with the path prefix applied.
    ///
    /// `url_for("/tag/rust")` → `/blog/tag/rust` when `site.url` ends in `/blog`.
    pub fn url_for(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        format!("{}{}", self.build.path_prefix, path)
    }

    /// URL of an embedded asset by filename.
    pub fn asset_url(&self, filename: &str) -> String {
        self.url_for(&format!("{}/{}", self.build.assets, filename))
    }
}

#[cfg(test)]
mod tests;
