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


use crate::version::{parser, ParseError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A version number with an optional pre-release label.
///
/// Text form: `major.minor.build`, `major.minor.build.revision` or
/// `major.minor.build-label.revision`, e.g. "1.2.5-alpha.2".
///
/// Ordering compares `(major, minor, build)` first. When those are equal a release
/// sorts after any pre-release and two pre-releases compare their labels ordinally.
/// The revision breaks the remaining ties, so `1.2.5-alpha.2 < 1.2.5-beta.1 < 1.2.5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityVersion {
    major: u32,
    minor: u32,
    build: u32,
    revision: u32,
    pre_release_label: Option<String>,
}

impl EntityVersion {
    /// Sentinel returned by [`EntityVersion::try_parse`] on failure.
    pub const EMPTY: EntityVersion = EntityVersion::new(0, 0, 0);

    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision: 0,
            pre_release_label: None,
        }
    }

    /// An empty label is treated as no label.
    pub fn from_parts(
        major: u32,
        minor: u32,
        build: u32,
        pre_release_label: Option<String>,
        revision: u32,
    ) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
            pre_release_label: pre_release_label.filter(|label| !label.is_empty()),
        }
    }

    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }

    pub fn with_pre_release(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.pre_release_label = if label.is_empty() { None } else { Some(label) };
        self
    }

    /// Parse a version string, returning the reason on failure.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse_version(text)
    }

    /// Parse a version string without reporting why it failed.
    ///
    /// `None`, empty and malformed input all yield `(false, EntityVersion::EMPTY)`.
    pub fn try_parse<'a>(text: impl Into<Option<&'a str>>) -> (bool, Self) {
        parser::try_parse_version(text.into())
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// The pre-release label, stored without the leading hyphen.
    pub fn pre_release_label(&self) -> Option<&str> {
        self.pre_release_label.as_deref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release_label.is_some()
    }

    pub fn is_release(&self) -> bool {
        self.pre_release_label.is_none()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// `(major, minor, build, revision)`
    pub fn numeric(&self) -> (u32, u32, u32, u32) {
        (self.major, self.minor, self.build, self.revision)
    }
}

impl Default for EntityVersion {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for EntityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)?;
        match &self.pre_release_label {
            Some(label) => write!(f, "-{}.{}", label, self.revision),
            None if self.revision > 0 => write!(f, ".{}", self.revision),
            None => Ok(()),
        }
    }
}

impl PartialOrd for EntityVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let core = (self.major, self.minor, self.build);
        let other_core = (other.major, other.minor, other.build);

        core.cmp(&other_core)
            .then_with(|| match (&self.pre_release_label, &other.pre_release_label) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()),
            })
            .then_with(|| self.revision.cmp(&other.revision))
    }
}

impl FromStr for EntityVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityVersion {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityVersion> for String {
    fn from(value: EntityVersion) -> Self {
        value.to_string()
    }
}
