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


use crate::version::{
    CompatibilityPolicy, CompatibilityResult, EntityVersion, IncompatibilityReason,
};
use log::warn;

/// Version compatibility checker with range-based policy:
/// Compatible range: [min_version, max_version]
#[derive(Debug, Clone)]
pub struct VersionChecker {
    max_version: EntityVersion,
    policy: CompatibilityPolicy,
}

impl VersionChecker {
    pub fn new(max_version: EntityVersion, policy: CompatibilityPolicy) -> Self {
        Self {
            max_version,
            policy,
        }
    }

    /// Rule: min_version <= version <= max_version, and pre-releases only when the
    /// policy allows them.
    pub fn check_compatibility(&self, version: &EntityVersion) -> CompatibilityResult {
        let result = self.evaluate(version);
        if let CompatibilityResult::Incompatible(reason) = &result {
            warn!("{}: {}", reason, reason.suggestion());
        }
        result
    }

    fn evaluate(&self, version: &EntityVersion) -> CompatibilityResult {
        if version.is_pre_release() && !self.policy.allow_pre_release {
            return CompatibilityResult::Incompatible(
                IncompatibilityReason::PreReleaseNotAllowed {
                    actual: version.clone(),
                },
            );
        }

        if version < &self.policy.min_version {
            return CompatibilityResult::Incompatible(IncompatibilityReason::VersionTooOld {
                required: self.policy.min_version.clone(),
                actual: version.clone(),
            });
        }

        if version > &self.max_version {
            return CompatibilityResult::Incompatible(IncompatibilityReason::VersionTooNew {
                max_supported: self.max_version.clone(),
                actual: version.clone(),
            });
        }

        CompatibilityResult::Compatible
    }

    /// The greatest candidate that passes the policy.
    pub fn newest_compatible<'a>(
        &self,
        candidates: &'a [EntityVersion],
    ) -> Option<&'a EntityVersion> {
        candidates
            .iter()
            .filter(|v| self.evaluate(v).is_compatible())
            .max()
    }

    pub fn max_version(&self) -> &EntityVersion {
        &self.max_version
    }

    pub fn policy(&self) -> &CompatibilityPolicy {
        &self.policy
    }
}
