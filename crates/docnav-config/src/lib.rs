//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.url`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebar declaration path.
    pub sidebar_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Page file extensions accepted when none are configured.
const DEFAULT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata. Passed through to the renderer, only sanity-checked here.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Production URL (scheme and host).
    pub url: Option<String>,
    /// Path prefix the site is served under.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            url: None,
            base_url: "/".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_path: Option<String>,
    extensions: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for page files.
    pub source_dir: PathBuf,
    /// Sidebar declaration file.
    pub sidebar_path: PathBuf,
    /// Page file extensions (without leading dot).
    pub extensions: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else {
            let cwd = std::env::current_dir().unwrap_or_default();
            Self::discover_from(&cwd)?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebar_path) = &settings.sidebar_path {
            self.docs_resolved.sidebar_path.clone_from(sidebar_path);
        }
    }

    /// Load the nearest config file at or above `start`, or defaults
    /// relative to `start` when there is none.
    fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::discover_config(start) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default_with_base(start)),
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebar_path: base.join("sidebars.yaml"),
                extensions: default_extensions(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        Ok(())
    }

    /// Validate site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        if let Some(ref url) = self.site.url {
            require_non_empty(url, "site.url")?;
            require_http_url(url, "site.url")?;
        }

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start and end with '/', got \"{base_url}\""
            )));
        }

        Ok(())
    }

    /// Validate docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        let extensions = &self.docs_resolved.extensions;
        if extensions.is_empty() {
            return Err(ConfigError::Validation(
                "docs.extensions cannot be empty".to_owned(),
            ));
        }
        for extension in extensions {
            require_non_empty(extension, "docs.extensions entry")?;
            if extension.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "docs.extensions entries must not start with '.', got \"{extension}\""
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        if let Some(ref url) = self.site.url {
            self.site.url = Some(expand::expand_env(url, "site.url")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(self.docs.sidebar_path.as_deref(), "sidebars.yaml"),
            extensions: self
                .docs
                .extensions
                .clone()
                .unwrap_or_else(default_extensions),
        };
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.base_url, "/");
        assert!(config.site.url.is_none());
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/test/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.extensions, vec!["md", "mdx"]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.base_url, "/");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "OpenAPI MCP Codegen"
url = "https://cnoe-io.github.io"
base_url = "/openapi-mcp-codegen/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "OpenAPI MCP Codegen");
        assert_eq!(config.site.url.as_deref(), Some("https://cnoe-io.github.io"));
        assert_eq!(config.site.base_url, "/openapi-mcp-codegen/");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "documentation"
sidebar_path = "nav/sidebars.yaml"
extensions = ["md"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/project/nav/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.extensions, vec!["md"]);
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/project/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.extensions, vec!["md", "mdx"]);
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/test/sidebars.yaml")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_sidebar_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            sidebar_path: Some(PathBuf::from("/custom/nav.yaml")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/custom/nav.yaml")
        );
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let config_before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(
            config.docs_resolved.source_dir,
            config_before.docs_resolved.source_dir
        );
        assert_eq!(
            config.docs_resolved.sidebar_path,
            config_before.docs_resolved.sidebar_path
        );
    }

    #[test]
    fn test_expand_env_vars_site() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_SITE_URL", "https://docs.test.com");
            std::env::remove_var("DOCNAV_TEST_BASE_URL");
        }

        let toml = r#"
[site]
url = "${DOCNAV_TEST_SITE_URL}"
base_url = "${DOCNAV_TEST_BASE_URL:-/docs/}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.url.as_deref(), Some("https://docs.test.com"));
        assert_eq!(config.site.base_url, "/docs/");

        unsafe {
            std::env::remove_var("DOCNAV_TEST_SITE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_DOCNAV_CONFIG_TEST");
        }

        let toml = r#"
[site]
url = "${MISSING_VAR_DOCNAV_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let result = config.expand_env_vars();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_DOCNAV_CONFIG_TEST"));
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(
            &path,
            "[site]\ntitle = \"Guide\"\n\n[docs]\nsource_dir = \"content\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Guide");
        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("content"));
        assert_eq!(
            config.docs_resolved.sidebar_path,
            temp_dir.path().join("sidebars.yaml")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings_last() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, "[docs]\nsource_dir = \"content\"\n").unwrap();
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/override")),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/override"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/docnav.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, "[site]\ntitle = \"Guide\"\n").unwrap();
        let nested = temp_dir.path().join("docs/getting-started");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config(&nested), Some(path.clone()));

        let config = Config::discover_from(&nested).unwrap();
        assert_eq!(config.site.title, "Guide");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("docs"));
    }

    #[test]
    fn test_discover_prefers_nearest_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("docnav.toml"), "").unwrap();
        let nested = temp_dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("docnav.toml"), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(nested.join("docnav.toml"))
        );
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::discover_from(&nested).unwrap();

        assert_eq!(config.config_path, None);
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.docs_resolved.source_dir, nested.join("docs"));
        assert_eq!(config.docs_resolved.sidebar_path, nested.join("sidebars.yaml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("docnav.toml");
        std::fs::write(&path, "[site\ntitle = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_site_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = String::new();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_site_url_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.url = Some("ftp://docs.example.com".to_owned());
        assert_validation_error(&config, &["site.url", "http"]);
    }

    #[test]
    fn test_validate_site_url_valid_https() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.url = Some("https://cnoe-io.github.io".to_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_missing_slashes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "openapi-mcp-codegen".to_owned();
        assert_validation_error(&config, &["site.base_url", "'/'"]);

        config.site.base_url = "/openapi-mcp-codegen".to_owned();
        assert_validation_error(&config, &["site.base_url"]);
    }

    #[test]
    fn test_validate_extensions_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.extensions = Vec::new();
        assert_validation_error(&config, &["docs.extensions", "empty"]);
    }

    #[test]
    fn test_validate_extensions_leading_dot() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.extensions = vec![".md".to_owned()];
        assert_validation_error(&config, &["docs.extensions", ".md"]);
    }
}
