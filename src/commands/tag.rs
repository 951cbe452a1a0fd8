use anyhow::Result;

use super::{Settings, resolve_config, resolve_platform};
use crate::runtime::Runtime;

/// Print the platform tag
#[tracing::instrument(skip(runtime))]
pub fn tag<R: Runtime>(runtime: R, settings: &Settings) -> Result<()> {
    let tag = resolve_platform(&runtime, settings)?;
    println!("{}", tag);
    Ok(())
}

/// Print the platform-qualified version string
#[tracing::instrument(skip(runtime))]
pub fn version<R: Runtime>(runtime: R, settings: &Settings) -> Result<()> {
    println!("{}", full_version(&runtime, settings)?);
    Ok(())
}

fn full_version<R: Runtime>(runtime: &R, settings: &Settings) -> Result<String> {
    // classify first so an unsupported host fails before any config is read
    let tag = resolve_platform(runtime, settings)?;
    let config = resolve_config(runtime, settings)?;
    Ok(tag.qualify_version(&config.base_version))
}
