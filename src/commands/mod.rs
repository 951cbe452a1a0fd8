use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    platform::{PlatformTag, classify},
    release::{ReleaseConfig, load_config},
    runtime::Runtime,
};

mod describe;
mod manifest;
mod tag;

pub use describe::describe;
pub use manifest::manifest;
pub use tag::{tag, version};

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Explicit release config file
    pub config: Option<PathBuf>,
    /// OS name to classify instead of the host's
    pub os: Option<String>,
    /// Architecture descriptor to classify instead of the host's
    pub arch: Option<String>,
    /// Overrides the configured base version
    pub base_version: Option<String>,
}

/// Classify the target platform, preferring explicit overrides to host values.
#[tracing::instrument(skip(runtime))]
pub fn resolve_platform<R: Runtime>(runtime: &R, settings: &Settings) -> Result<PlatformTag> {
    let os = match &settings.os {
        Some(os) => os.clone(),
        None => runtime.host_os(),
    };
    let arch = match &settings.arch {
        Some(arch) => arch.clone(),
        None => runtime.host_architecture(),
    };

    debug!("Classifying os={:?} arch={:?}", os, arch);
    let tag = classify(&os, &arch)?;
    debug!("Platform tag: {}", tag);
    Ok(tag)
}

/// Load the release config and apply the base version override.
#[tracing::instrument(skip(runtime))]
pub fn resolve_config<R: Runtime>(runtime: &R, settings: &Settings) -> Result<ReleaseConfig> {
    let config = load_config(runtime, settings.config.as_deref())?;
    match &settings.base_version {
        Some(version) => config.with_base_version(version.clone()),
        None => Ok(config),
    }
}
