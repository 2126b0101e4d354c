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


use crate::cmds::{CheckCommand, CompareCommand, ParseCommand, SortCommand};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse version strings and print their canonical form
    Parse(ParseCommand),

    /// Compare two versions
    Compare(CompareCommand),

    /// Sort versions from oldest to newest
    Sort(SortCommand),

    /// Check versions against the configured compatibility range
    Check(CheckCommand),

    /// Show version information
    Version,
}
