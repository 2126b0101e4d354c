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
use entver_base::{err_box, err_msg, CommonResult};
use entver_common::version::EntityVersion;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ParseCommand {
    /// Version strings, e.g. 1.2.5 or 1.2.5-alpha.2
    #[arg(required = true)]
    versions: Vec<String>,

    /// Print every field as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct VersionReport<'a> {
    input: &'a str,
    major: u32,
    minor: u32,
    build: u32,
    revision: u32,
    pre_release_label: Option<&'a str>,
    is_release: bool,
    canonical: String,
}

impl<'a> VersionReport<'a> {
    fn new(input: &'a str, version: &'a EntityVersion) -> Self {
        Self {
            input,
            major: version.major(),
            minor: version.minor(),
            build: version.build(),
            revision: version.revision(),
            pre_release_label: version.pre_release_label(),
            is_release: version.is_release(),
            canonical: version.to_string(),
        }
    }
}

impl ParseCommand {
    pub fn execute(self) -> CommonResult<()> {
        let mut failed = 0;
        for input in &self.versions {
            let version = match EntityVersion::parse(input) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("{}: {}", input, e);
                    failed += 1;
                    continue;
                }
            };

            if self.json {
                let report = VersionReport::new(input, &version);
                let line = serde_json::to_string(&report)
                    .map_err(|e| err_msg!("failed to encode {}: {}", input, e))?;
                println!("{}", line);
            } else {
                println!("{}", version);
            }
        }

        if failed > 0 {
            return err_box!(
                "{} of {} versions failed to parse",
                failed,
                self.versions.len()
            );
        }
        Ok(())
    }
}
