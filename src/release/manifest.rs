use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use std::path::Path;

use crate::platform::{OsTag, PlatformTag};
use crate::runtime::Runtime;

/// Files selected for bundling from a staged package directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedManifest {
    /// File names matching at least one pattern, sorted
    pub files: Vec<String>,
    /// Patterns that matched nothing
    pub unmatched: Vec<String>,
    /// Bundled files built for a different platform family
    pub foreign: Vec<String>,
}

impl ResolvedManifest {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Platforms a binary artifact can run on, judged by its extension.
///
/// Returns `None` for portable files (text, licenses, ...).
pub fn artifact_platforms(file_name: &str) -> Option<&'static [OsTag]> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase();

    match ext.as_str() {
        "pyd" | "dll" | "lib" => Some(&[OsTag::Win]),
        "so" => Some(&[OsTag::Linux, OsTag::MacOsx]),
        "dylib" => Some(&[OsTag::MacOsx]),
        _ => None,
    }
}

fn is_foreign(file_name: &str, tag: PlatformTag) -> bool {
    artifact_platforms(file_name).is_some_and(|oses| !oses.contains(&tag.os()))
}

/// Windows file names are case-insensitive, so are its patterns
fn match_options(tag: PlatformTag) -> glob::MatchOptions {
    glob::MatchOptions {
        case_sensitive: tag.os() != OsTag::Win,
        ..Default::default()
    }
}

/// Match the package data patterns against the files directly inside `dir`.
#[tracing::instrument(skip(runtime, patterns))]
pub fn resolve_manifest<R: Runtime>(
    runtime: &R,
    dir: &Path,
    patterns: &[String],
    tag: PlatformTag,
) -> Result<ResolvedManifest> {
    if !runtime.is_dir(dir) {
        bail!("Package directory {} does not exist", dir.display());
    }

    let compiled = patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p)
                .with_context(|| format!("Invalid package data pattern '{}'", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut names: Vec<String> = runtime
        .read_dir(dir)?
        .into_iter()
        .filter(|path| runtime.is_file(path))
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();

    debug!("Found {} file(s) in {}", names.len(), dir.display());

    let options = match_options(tag);
    let mut manifest = ResolvedManifest::default();
    let mut hits = vec![false; compiled.len()];

    for name in names {
        let mut bundled = false;
        for (i, pattern) in compiled.iter().enumerate() {
            if pattern.matches_with(&name, options) {
                hits[i] = true;
                bundled = true;
            }
        }
        if !bundled {
            continue;
        }
        if is_foreign(&name, tag) {
            manifest.foreign.push(name.clone());
        }
        manifest.files.push(name);
    }

    manifest.unmatched = patterns
        .iter()
        .zip(hits)
        .filter(|(_, hit)| !hit)
        .map(|(p, _)| p.clone())
        .collect();

    for pattern in &manifest.unmatched {
        info!("Pattern '{}' matched no files in {}", pattern, dir.display());
    }
    for name in &manifest.foreign {
        warn!("{} does not look like a {} artifact", name, tag);
    }

    Ok(manifest)
}
