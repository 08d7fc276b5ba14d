use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Embedded defaults, checked by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: String,
    /// Prefix for site-absolute `href` and `src` URLs.
    pub base_path: String,
}

/// Shape of `default_config.toml`; every key is required there.
#[derive(Deserialize)]
struct EmbeddedDefaults {
    page: EmbeddedPage,
}

#[derive(Deserialize)]
struct EmbeddedPage {
    template: String,
    base_path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        match toml::from_str::<EmbeddedDefaults>(DEFAULT_CONFIG) {
            Ok(defaults) => Self {
                template: defaults.page.template,
                base_path: defaults.page.base_path,
            },
            // Unreachable once build.rs has accepted the embedded file
            Err(_) => Self {
                template: CONTENT_PLACEHOLDER.to_string(),
                base_path: "/".to_string(),
            },
        }
    }
}

impl PageConfig {
    /// Move a site-absolute URL under `base_path`.
    ///
    /// Returns `None` when the URL is left as is: a base of `/`, relative
    /// and external URLs, and protocol-relative `//host` URLs.
    pub fn rebase_url(&self, url: &str) -> Option<String> {
        if self.base_path.is_empty() || self.base_path == "/" {
            return None;
        }
        if !url.starts_with('/') || url.starts_with("//") {
            return None;
        }
        let base = self.base_path.trim_end_matches('/');
        Some(format!("{base}{url}"))
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::compiled_default()
            }),
            Err(_) => Self::compiled_default(),
        }
    }

    /// The defaults shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        Self::default()
    }
}
