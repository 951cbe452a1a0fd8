use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::platform::VERSION_SEPARATOR;
use crate::runtime::Runtime;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "release.json";

/// Subdirectory of the user config directory
pub const APP_DIR_NAME: &str = "sbml2matlab-dist";

/// Static release metadata. Everything except the platform tag is constant
/// across builds, so this is what a config file overrides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    pub name: String,
    pub base_version: String,
    pub description: String,
    pub authors: Vec<String>,
    pub author_emails: Vec<String>,
    pub url: String,
    pub packages: Vec<String>,
    /// Glob patterns of files bundled next to the extension module
    pub package_data: Vec<String>,
    /// Force a platform-specific (non-pure) distribution
    pub binary_distribution: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            name: "sbml2matlab".to_string(),
            base_version: "1.2.3".to_string(),
            description: "An SBML to MATLAB translator".to_string(),
            authors: vec!["Stanley Gu".to_string(), "Lucian Smith".to_string()],
            author_emails: vec![
                "stanleygu@gmail.com".to_string(),
                "lucianoelsmitho@gmail.com".to_string(),
            ],
            url: "https://github.com/stanleygu/sbml2matlab".to_string(),
            packages: vec!["sbml2matlab".to_string()],
            // dll globs are harmless on unix, nothing matches there
            package_data: ["_sbml2matlab.pyd", "*.dll", "*.txt", "*.lib", "*.so"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            binary_distribution: true,
        }
    }
}

impl ReleaseConfig {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read release config {}", path.display()))?;
        let config: ReleaseConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid release config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base version, e.g. from a command-line override
    pub fn with_base_version(mut self, base_version: impl Into<String>) -> Result<Self> {
        self.base_version = base_version.into();
        validate_base_version(&self.base_version)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Release name must not be empty");
        }
        if self.packages.is_empty() {
            bail!("At least one package must be listed");
        }
        validate_base_version(&self.base_version)?;
        for pattern in &self.package_data {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid package data pattern '{}'", pattern))?;
        }
        Ok(())
    }
}

/// A base version is dot-separated numbers. The platform separator is not allowed
/// since the full version is `<base>-<tag>`.
fn validate_base_version(version: &str) -> Result<()> {
    if version.is_empty() {
        bail!("Base version must not be empty");
    }
    if version.contains(VERSION_SEPARATOR) {
        bail!(
            "Base version '{}' must not contain '{}', it separates the platform tag",
            version,
            VERSION_SEPARATOR
        );
    }
    let valid = version
        .split('.')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if !valid {
        bail!(
            "Base version '{}' must be dot-separated numbers, like 1.2.3",
            version
        );
    }
    Ok(())
}

/// Find the config file to use.
///
/// An explicit path must exist. Otherwise `release.json` in the current
/// directory wins over the one in the user config directory. `None` means the
/// built-in defaults apply.
#[tracing::instrument(skip(runtime))]
pub fn locate_config<R: Runtime>(runtime: &R, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !runtime.is_file(path) {
            bail!("Release config {} does not exist", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = runtime.current_dir()?.join(CONFIG_FILE_NAME);
    if runtime.is_file(&local) {
        return Ok(Some(local));
    }

    if let Some(config_dir) = runtime.config_dir() {
        let user = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        if runtime.is_file(&user) {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

/// Locate and load the release config, falling back to the built-in defaults.
#[tracing::instrument(skip(runtime))]
pub fn load_config<R: Runtime>(runtime: &R, explicit: Option<&Path>) -> Result<ReleaseConfig> {
    match locate_config(runtime, explicit)? {
        Some(path) => {
            info!("Using release config {}", path.display());
            ReleaseConfig::load(runtime, &path)
        }
        None => {
            debug!("No release config found, using built-in defaults");
            Ok(ReleaseConfig::default())
        }
    }
}
