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
use std::cmp::Ordering;

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Left-hand version
    left: String,

    /// Right-hand version
    right: String,
}

impl CompareCommand {
    pub fn execute(self) -> CommonResult<()> {
        let left = EntityVersion::parse(&self.left)?;
        let right = EntityVersion::parse(&self.right)?;

        let op = match left.cmp(&right) {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        println!("{} {} {}", left, op, right);
        Ok(())
    }
}
