use serde::{Serialize, Serializer};
use std::fmt;

use super::PlatformError;

/// Separator between the base version and the platform tag.
pub const VERSION_SEPARATOR: char = '-';

/// Operating system segment of a platform tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsTag {
    MacOsx,
    Linux,
    Win,
}

impl OsTag {
    /// Classify an OS name as reported by the host.
    ///
    /// Matching is by lower-cased prefix, checked in the order darwin, linux, win.
    pub fn parse(os_name: &str) -> Result<Self, PlatformError> {
        let os = os_name.to_lowercase();

        if os.starts_with("darwin") {
            Ok(OsTag::MacOsx)
        } else if os.starts_with("linux") {
            Ok(OsTag::Linux)
        } else if os.starts_with("win") {
            Ok(OsTag::Win)
        } else {
            Err(PlatformError::UnsupportedPlatform { os })
        }
    }

    /// macOS and Linux share the bit-width architecture rule
    pub fn is_unix(&self) -> bool {
        matches!(self, OsTag::MacOsx | OsTag::Linux)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OsTag::MacOsx => "macosx",
            OsTag::Linux => "linux",
            OsTag::Win => "win",
        }
    }
}

impl fmt::Display for OsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architecture segment of a platform tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchTag {
    X86_64,
    I386,
    /// Windows builds are always 32-bit
    Win32,
}

impl ArchTag {
    /// Pick the architecture for `os` from a bit-width descriptor such as "64bit".
    ///
    /// Windows ignores the descriptor entirely. A Unix host must report a
    /// descriptor starting with "64" or "32".
    pub fn from_descriptor(os: OsTag, arch_desc: &str) -> Result<Self, PlatformError> {
        if !os.is_unix() {
            return Ok(ArchTag::Win32);
        }

        if arch_desc.starts_with("64") {
            Ok(ArchTag::X86_64)
        } else if arch_desc.starts_with("32") {
            Ok(ArchTag::I386)
        } else {
            Err(PlatformError::UnknownArchitecture {
                os: os.as_str().to_string(),
                arch: arch_desc.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchTag::X86_64 => "x86_64",
            ArchTag::I386 => "i386",
            ArchTag::Win32 => "32",
        }
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized `<os>_<arch>` tag of the host a release is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformTag {
    os: OsTag,
    arch: ArchTag,
}

impl PlatformTag {
    pub fn os(&self) -> OsTag {
        self.os
    }

    pub fn arch(&self) -> ArchTag {
        self.arch
    }

    /// Qualify a base version with this tag, e.g. "1.2.3" -> "1.2.3-linux_x86_64"
    pub fn qualify_version(&self, base_version: &str) -> String {
        format!("{}{}{}", base_version, VERSION_SEPARATOR, self)
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.os, self.arch)
    }
}

impl Serialize for PlatformTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Map the host's raw OS name and architecture descriptor to a platform tag.
///
/// This is a pure function; callers supply the strings (see
/// [`crate::runtime::Runtime::host_os`]).
#[tracing::instrument]
pub fn classify(os_name: &str, arch_desc: &str) -> Result<PlatformTag, PlatformError> {
    let os = OsTag::parse(os_name)?;
    let arch = ArchTag::from_descriptor(os, arch_desc)?;
    Ok(PlatformTag { os, arch })
}
