//! Platform classification
//!
//! This module maps the OS name and architecture descriptor reported by the
//! build host to a normalized platform tag (`macosx_x86_64`, `linux_i386`,
//! `win_32`, ...). The tag qualifies the release version and decides which
//! bundled binaries belong to a release.

mod error;
mod tag;

pub use error::{PlatformError, SUPPORTED_PLATFORMS};
pub use tag::{ArchTag, OsTag, PlatformTag, VERSION_SEPARATOR, classify};
