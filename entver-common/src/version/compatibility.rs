// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::version::EntityVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compatibility policy: accept versions within [min_version, max_version], where
/// max_version is supplied by the checker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompatibilityPolicy {
    /// Minimum supported version
    pub min_version: EntityVersion,

    /// Whether pre-release versions are accepted at all
    pub allow_pre_release: bool,
}

impl CompatibilityPolicy {
    pub fn new(min_version: EntityVersion) -> Self {
        Self {
            min_version,
            allow_pre_release: false,
        }
    }

    pub fn with_pre_release(mut self, allow: bool) -> Self {
        self.allow_pre_release = allow;
        self
    }
}

impl Default for CompatibilityPolicy {
    fn default() -> Self {
        Self::new(EntityVersion::new(0, 1, 0))
    }
}

impl fmt::Display for CompatibilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range(min: {}, pre-release: {})",
            self.min_version,
            if self.allow_pre_release { "allowed" } else { "rejected" }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityResult {
    Compatible,

    Incompatible(IncompatibilityReason),
}

impl CompatibilityResult {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    pub fn is_incompatible(&self) -> bool {
        matches!(self, Self::Incompatible(_))
    }

    pub fn reason(&self) -> Option<&IncompatibilityReason> {
        match self {
            Self::Compatible => None,
            Self::Incompatible(reason) => Some(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncompatibilityReason {
    /// Below the policy minimum
    VersionTooOld {
        required: EntityVersion,
        actual: EntityVersion,
    },

    /// Above the newest version the checker supports
    VersionTooNew {
        max_supported: EntityVersion,
        actual: EntityVersion,
    },

    /// Policy does not accept pre-release versions
    PreReleaseNotAllowed { actual: EntityVersion },
}

impl fmt::Display for IncompatibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VersionTooOld { required, actual } => {
                write!(
                    f,
                    "Version too old: required >= {}, actual {}",
                    required, actual
                )
            }
            Self::VersionTooNew {
                max_supported,
                actual,
            } => {
                write!(
                    f,
                    "Version too new: max supported {}, actual {}",
                    max_supported, actual
                )
            }
            Self::PreReleaseNotAllowed { actual } => {
                write!(f, "Pre-release version {} is not allowed", actual)
            }
        }
    }
}

impl IncompatibilityReason {
    /// Get a suggestion message for how to fix the incompatibility
    pub fn suggestion(&self) -> String {
        match self {
            Self::VersionTooOld { required, .. } => {
                format!("Please upgrade to version {} or later", required)
            }
            Self::VersionTooNew { max_supported, .. } => {
                format!(
                    "Please raise the supported maximum, or downgrade to {}",
                    max_supported
                )
            }
            Self::PreReleaseNotAllowed { actual } => {
                format!(
                    "Please use a release build of {}.{}.{}, or enable allow_pre_release",
                    actual.major(),
                    actual.minor(),
                    actual.build()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_result() {
        let compatible = CompatibilityResult::Compatible;
        assert!(compatible.is_compatible());
        assert!(!compatible.is_incompatible());
        assert!(compatible.reason().is_none());

        let incompatible =
            CompatibilityResult::Incompatible(IncompatibilityReason::VersionTooOld {
                required: EntityVersion::new(2, 0, 0),
                actual: EntityVersion::new(1, 9, 0),
            });
        assert!(!incompatible.is_compatible());
        assert!(incompatible.is_incompatible());
        assert!(incompatible.reason().is_some());
    }

    #[test]
    fn test_incompatibility_reason_display() {
        let reason = IncompatibilityReason::VersionTooOld {
            required: EntityVersion::new(2, 0, 0),
            actual: EntityVersion::new(1, 9, 0),
        };
        assert_eq!(
            reason.to_string(),
            "Version too old: required >= 2.0.0, actual 1.9.0"
        );
        assert!(reason.suggestion().contains("2.0.0"));

        let reason = IncompatibilityReason::PreReleaseNotAllowed {
            actual: EntityVersion::new(2, 1, 0).with_pre_release("rc").with_revision(1),
        };
        assert_eq!(
            reason.to_string(),
            "Pre-release version 2.1.0-rc.1 is not allowed"
        );
        assert!(reason.suggestion().contains("2.1.0"));
    }

    #[test]
    fn test_default_policy() {
        let policy = CompatibilityPolicy::default();
        assert_eq!(policy.min_version, EntityVersion::new(0, 1, 0));
        assert!(!policy.allow_pre_release);
        assert_eq!(policy.to_string(), "Range(min: 0.1.0, pre-release: rejected)");
    }
}
