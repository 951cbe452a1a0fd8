use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{ReleaseConfig, ResolvedManifest};
use crate::platform::PlatformTag;

/// Everything the packaging pipeline needs to know about one build.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReleaseDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_email: String,
    pub url: String,
    pub packages: Vec<String>,
    pub package_data: BTreeMap<String, Vec<String>>,
    pub binary_distribution: bool,
    pub platform_tag: PlatformTag,
    /// Files resolved from a staged package directory, if one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

impl ReleaseDescriptor {
    pub fn new(config: &ReleaseConfig, platform_tag: PlatformTag) -> Self {
        let mut package_data = BTreeMap::new();
        if let Some(package) = config.packages.first() {
            package_data.insert(package.clone(), config.package_data.clone());
        }

        ReleaseDescriptor {
            name: config.name.clone(),
            version: platform_tag.qualify_version(&config.base_version),
            description: config.description.clone(),
            author: config.authors.join(", "),
            author_email: config.author_emails.join(", "),
            url: config.url.clone(),
            packages: config.packages.clone(),
            package_data,
            binary_distribution: config.binary_distribution,
            platform_tag,
            files: None,
        }
    }

    pub fn with_manifest(mut self, manifest: &ResolvedManifest) -> Self {
        self.files = Some(manifest.files.clone());
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
