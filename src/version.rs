use crate::error::{Result, VersionBumpError};
use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

/// Represents the type of semantic version bump to apply.
///
/// Derived from commit message analysis; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        };
        write!(f, "{}", s)
    }
}

/// Computes the next version for a bump.
///
/// A non-empty `override_version` is returned verbatim, regardless of level.
/// Otherwise `old_version` is parsed as a semantic version and incremented:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// A pre-release on the component being bumped is finalized instead of
/// incremented past: `1.0.1-SNAPSHOT` patch-bumps to `1.0.1`, `1.3.0-rc.1`
/// minor-bumps to `1.3.0`. This matches node-semver's `inc` behavior, which
/// Maven `-SNAPSHOT` workflows rely on. Pre-release and build metadata are
/// always cleared from the result.
///
/// # Returns
/// * `Ok(version)` - The new version string
/// * `Err` - If `old_version` is not a valid semantic version
pub fn next_version(old_version: &str, level: BumpLevel, override_version: &str) -> Result<String> {
    if !override_version.is_empty() {
        return Ok(override_version.to_string());
    }

    let mut version = Version::parse(old_version.trim()).map_err(|e| {
        VersionBumpError::version(format!(
            "Failed to find new version from {} given {}: {}",
            old_version, level, e
        ))
    })?;

    let pre_release = !version.pre.is_empty();

    match level {
        BumpLevel::Major => {
            if !(pre_release && version.minor == 0 && version.patch == 0) {
                version.major += 1;
            }
            version.minor = 0;
            version.patch = 0;
        }
        BumpLevel::Minor => {
            if !(pre_release && version.patch == 0) {
                version.minor += 1;
            }
            version.patch = 0;
        }
        BumpLevel::Patch => {
            if !pre_release {
                version.patch += 1;
            }
        }
    }
    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;

    Ok(version.to_string())
}
