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


use crate::version::{CompatibilityPolicy, EntityVersion, VersionChecker, VERSION};
use entver_base::{err_box, CommonResult};
use serde::{Deserialize, Serialize};

/// Version compatibility configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConf {
    // Oldest accepted version
    #[serde(skip)]
    pub min_version: EntityVersion,
    #[serde(alias = "min_version")]
    pub min_version_str: String,

    // Newest accepted version, defaults to the running tool's own version
    #[serde(skip)]
    pub max_version: EntityVersion,
    #[serde(alias = "max_version")]
    pub max_version_str: String,

    pub allow_pre_release: bool,
}

impl CompatConf {
    pub fn init(&mut self) -> CommonResult<()> {
        self.min_version = EntityVersion::parse(&self.min_version_str)?;
        self.max_version = EntityVersion::parse(&self.max_version_str)?;

        if self.min_version > self.max_version {
            return err_box!(
                "invalid compat range: min_version {} is newer than max_version {}",
                self.min_version,
                self.max_version
            );
        }
        Ok(())
    }

    pub fn policy(&self) -> CompatibilityPolicy {
        CompatibilityPolicy::new(self.min_version.clone()).with_pre_release(self.allow_pre_release)
    }

    pub fn checker(&self) -> VersionChecker {
        VersionChecker::new(self.max_version.clone(), self.policy())
    }
}

impl Default for CompatConf {
    fn default() -> Self {
        let (_, max_version) = EntityVersion::try_parse(VERSION);
        Self {
            min_version: EntityVersion::new(0, 1, 0),
            min_version_str: "0.1.0".to_string(),

            max_version_str: max_version.to_string(),
            max_version,

            allow_pre_release: false,
        }
    }
}
