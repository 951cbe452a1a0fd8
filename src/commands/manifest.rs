use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use super::{Settings, resolve_config, resolve_platform};
use crate::{
    release::{ResolvedManifest, resolve_manifest},
    runtime::Runtime,
};

/// Print the files that would be bundled from `package_dir`
#[tracing::instrument(skip(runtime))]
pub fn manifest<R: Runtime>(
    runtime: R,
    settings: &Settings,
    package_dir: PathBuf,
    strict: bool,
) -> Result<()> {
    let resolved = resolve(&runtime, settings, &package_dir, strict)?;
    for file in &resolved.files {
        println!("{}", file);
    }
    Ok(())
}

fn resolve<R: Runtime>(
    runtime: &R,
    settings: &Settings,
    package_dir: &Path,
    strict: bool,
) -> Result<ResolvedManifest> {
    let tag = resolve_platform(runtime, settings)?;
    let config = resolve_config(runtime, settings)?;
    let resolved = resolve_manifest(runtime, package_dir, &config.package_data, tag)?;

    if strict {
        if resolved.is_empty() {
            bail!("No files in {} match the package data patterns", package_dir.display());
        }
        if !resolved.foreign.is_empty() {
            bail!(
                "Artifacts not built for {}: {}",
                tag,
                resolved.foreign.join(", ")
            );
        }
    }
    Ok(resolved)
}
