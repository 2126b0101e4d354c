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


use clap::Args;
use entver_base::{err_box, CommonResult};
use entver_common::conf::EntverConf;
use entver_common::version::{CompatibilityResult, EntityVersion};

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Versions to check against the [compat] section of the config
    #[arg(required = true)]
    versions: Vec<String>,
}

impl CheckCommand {
    pub fn execute(self, conf: &EntverConf) -> CommonResult<()> {
        let checker = conf.compat.checker();
        println!(
            "policy: {}, max: {}",
            checker.policy(),
            checker.max_version()
        );

        let mut versions = Vec::with_capacity(self.versions.len());
        for input in &self.versions {
            versions.push(EntityVersion::parse(input)?);
        }

        let mut incompatible = 0;
        for version in &versions {
            match checker.check_compatibility(version) {
                CompatibilityResult::Compatible => println!("{}: compatible", version),
                CompatibilityResult::Incompatible(reason) => {
                    incompatible += 1;
                    println!("{}: {}. {}", version, reason, reason.suggestion());
                }
            }
        }

        if let Some(newest) = checker.newest_compatible(&versions) {
            println!("newest compatible: {}", newest);
        }

        if incompatible > 0 {
            return err_box!(
                "{} of {} versions are incompatible",
                incompatible,
                versions.len()
            );
        }
        Ok(())
    }
}
