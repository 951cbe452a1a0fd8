/// Human-readable list of the hosts a release can be built for.
pub const SUPPORTED_PLATFORMS: &str = "macOS x86_64, Linux i386/x86_64, Windows 32-bit";

/// Errors raised while classifying the build host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The OS name matches none of the known prefixes
    UnsupportedPlatform { os: String },
    /// A Unix host reported an architecture that is neither 64- nor 32-bit x86
    UnknownArchitecture { os: String, arch: String },
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::UnsupportedPlatform { os } => {
                write!(
                    f,
                    "Don't know how to package for '{}', only know {}",
                    os, SUPPORTED_PLATFORMS
                )
            }
            PlatformError::UnknownArchitecture { os, arch } => {
                write!(
                    f,
                    "Unrecognized architecture '{}' on '{}', only know {}",
                    arch, os, SUPPORTED_PLATFORMS
                )
            }
        }
    }
}

impl std::error::Error for PlatformError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message_lists_supported_set() {
        let err = PlatformError::UnsupportedPlatform {
            os: "freebsd".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("freebsd"));
        assert!(msg.contains("macOS x86_64"));
        assert!(msg.contains("Linux i386/x86_64"));
        assert!(msg.contains("Windows 32-bit"));
    }

    #[test]
    fn test_unknown_architecture_message() {
        let err = PlatformError::UnknownArchitecture {
            os: "linux".into(),
            arch: "armv7l".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("armv7l"));
        assert!(msg.contains("linux"));
    }

    #[test]
    fn test_platform_error_converts_to_anyhow() {
        let err: anyhow::Error = PlatformError::UnsupportedPlatform { os: "aix".into() }.into();
        assert!(err.downcast_ref::<PlatformError>().is_some());
    }
}
