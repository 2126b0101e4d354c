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


//! Version parsing and comparison for entver
//!
//! # Version Format
//!
//! - `major.minor.build`, e.g. "1.2.5"
//! - `major.minor.build.revision`, e.g. "1.2.5.3"
//! - `major.minor.build-label.revision`, e.g. "1.2.5-alpha.2"
//!
//! This is a restricted format, not full Semantic Versioning 2.0.
//!
//! # Example
//!
//! ```rust
//! use entver_common::version::{CompatibilityPolicy, EntityVersion, VersionChecker};
//!
//! let max_version = EntityVersion::parse("2.5.0").unwrap();
//! let policy = CompatibilityPolicy::new(EntityVersion::parse("2.0.0").unwrap());
//! let checker = VersionChecker::new(max_version, policy);
//!
//! let (ok, version) = EntityVersion::try_parse("2.3.0");
//! assert!(ok);
//! assert!(checker.check_compatibility(&version).is_compatible());
//! ```

mod checker;
mod compatibility;
mod error;
pub mod parser;
mod types;

pub use checker::VersionChecker;
pub use compatibility::{CompatibilityPolicy, CompatibilityResult, IncompatibilityReason};
pub use error::{ParseError, ParseErrorKind, Segment};
pub use types::EntityVersion;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
