use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use super::{Settings, resolve_config, resolve_platform};
use crate::{
    release::{ReleaseDescriptor, resolve_manifest},
    runtime::Runtime,
};

/// Print the release descriptor as JSON, or write it to `output`
#[tracing::instrument(skip(runtime))]
pub fn describe<R: Runtime>(
    runtime: R,
    settings: &Settings,
    package_dir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let descriptor = build_descriptor(&runtime, settings, package_dir.as_deref())?;
    let json = descriptor.to_json()?;

    match output {
        Some(path) => {
            write_descriptor(&runtime, &path, &json)?;
            info!("Wrote release descriptor for {} to {}", descriptor.version, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub(crate) fn build_descriptor<R: Runtime>(
    runtime: &R,
    settings: &Settings,
    package_dir: Option<&Path>,
) -> Result<ReleaseDescriptor> {
    let tag = resolve_platform(runtime, settings)?;
    let config = resolve_config(runtime, settings)?;
    let descriptor = ReleaseDescriptor::new(&config, tag);

    match package_dir {
        Some(dir) => {
            let manifest = resolve_manifest(runtime, dir, &config.package_data, tag)?;
            Ok(descriptor.with_manifest(&manifest))
        }
        None => Ok(descriptor),
    }
}

fn write_descriptor<R: Runtime>(runtime: &R, path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !runtime.exists(parent) {
            runtime.create_dir_all(parent)?;
        }
    }
    runtime
        .write(path, json.as_bytes())
        .with_context(|| format!("Failed to write release descriptor {}", path.display()))
}
