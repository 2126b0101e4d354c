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


use entver_base::CommonError;
use std::fmt;

/// The part of a version string a parse failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Major,
    Minor,
    Build,
    Label,
    Revision,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Build => "build",
            Segment::Label => "label",
            Segment::Revision => "revision",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The text does not follow the accepted grammar.
    Format,
    /// A segment boundary could not be derived from the delimiter positions.
    Range,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid version '{input}': expected at least 'major.minor.build'")]
    MissingSeparator { input: String },

    #[error("invalid {segment} segment: non-digit character '{found}' at offset {offset}")]
    InvalidDigit {
        segment: Segment,
        found: char,
        offset: usize,
    },

    #[error("invalid {segment} segment: value does not fit in u32")]
    Overflow { segment: Segment },

    #[error("invalid label segment: pre-release label is empty")]
    EmptyLabel,

    #[error("{segment} segment out of range: start {start}, end {}", display_end(.end))]
    OutOfRange {
        segment: Segment,
        start: usize,
        end: Option<usize>,
    },
}

fn display_end(end: &Option<usize>) -> String {
    match end {
        Some(end) => end.to_string(),
        None => "<missing delimiter>".to_string(),
    }
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::OutOfRange { .. } => ParseErrorKind::Range,
            _ => ParseErrorKind::Format,
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ParseErrorKind::Format
    }

    pub fn is_range(&self) -> bool {
        self.kind() == ParseErrorKind::Range
    }

    /// The segment the error was raised for, when it can be attributed to one.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            ParseError::MissingSeparator { .. } => None,
            ParseError::InvalidDigit { segment, .. } => Some(*segment),
            ParseError::Overflow { segment } => Some(*segment),
            ParseError::EmptyLabel => Some(Segment::Label),
            ParseError::OutOfRange { segment, .. } => Some(*segment),
        }
    }
}

impl From<ParseError> for CommonError {
    fn from(value: ParseError) -> Self {
        CommonError::boxed(value)
    }
}
