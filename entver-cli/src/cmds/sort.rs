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
use entver_base::CommonResult;
use entver_common::version::EntityVersion;
use log::warn;

#[derive(Args, Debug)]
pub struct SortCommand {
    /// Versions to sort; invalid ones are skipped
    #[arg(required = true)]
    versions: Vec<String>,

    /// Newest first
    #[arg(short, long)]
    reverse: bool,
}

impl SortCommand {
    pub fn execute(self) -> CommonResult<()> {
        for v in &self.sorted() {
            println!("{}", v);
        }
        Ok(())
    }

    /// Valid inputs in version order; invalid ones are logged and dropped.
    fn sorted(&self) -> Vec<EntityVersion> {
        let mut versions = Vec::with_capacity(self.versions.len());
        for input in &self.versions {
            match EntityVersion::parse(input) {
                Ok(v) => versions.push(v),
                Err(e) => warn!("skip {}: {}", input, e),
            }
        }

        versions.sort();
        if self.reverse {
            versions.reverse();
        }
        versions
    }
}
