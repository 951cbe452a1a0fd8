//! Release metadata
//!
//! - `config` - static metadata with built-in defaults and JSON overrides
//! - `descriptor` - the assembled per-build record
//! - `manifest` - resolution of bundled-file patterns against a staged directory

mod config;
mod descriptor;
mod manifest;

pub use config::{APP_DIR_NAME, CONFIG_FILE_NAME, ReleaseConfig, load_config, locate_config};
pub use descriptor::ReleaseDescriptor;
pub use manifest::{ResolvedManifest, artifact_platforms, resolve_manifest};
