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


//! Single-pass version string parser.
//!
//! The scan records the first three `.` positions and the first `-` position, derives
//! every segment as a borrowed slice of the input, and only then decodes the numbers.
//! Nothing is allocated except the copied pre-release label.

use crate::version::{EntityVersion, ParseError, Segment};
use log::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Delimiters {
    first: Option<usize>,
    second: Option<usize>,
    third: Option<usize>,
}

impl Delimiters {
    fn scan(text: &str) -> Self {
        let mut dots = Self::default();
        for (pos, byte) in text.bytes().enumerate() {
            if byte != b'.' {
                continue;
            }

            if dots.first.is_none() {
                dots.first = Some(pos);
            } else if dots.second.is_none() {
                dots.second = Some(pos);
            } else {
                // Anything after the third dot belongs to the revision text.
                dots.third = Some(pos);
                break;
            }
        }
        dots
    }
}

/// A segment of the input together with its byte offset.
#[derive(Debug, Clone, Copy)]
struct Span<'a> {
    text: &'a str,
    start: usize,
}

#[derive(Debug)]
struct Segments<'a> {
    major: Span<'a>,
    minor: Span<'a>,
    build: Span<'a>,
    label: Option<Span<'a>>,
    revision: Option<Span<'a>>,
}

fn slice(
    text: &str,
    segment: Segment,
    start: usize,
    end: Option<usize>,
) -> Result<Span<'_>, ParseError> {
    match end {
        Some(end) if start <= end && end <= text.len() => Ok(Span {
            text: &text[start..end],
            start,
        }),
        _ => Err(ParseError::OutOfRange {
            segment,
            start,
            end,
        }),
    }
}

fn missing(segment: Segment, start: usize) -> ParseError {
    ParseError::OutOfRange {
        segment,
        start,
        end: None,
    }
}

fn split(text: &str) -> Result<Segments<'_>, ParseError> {
    let dots = Delimiters::scan(text);
    let first = dots.first.ok_or_else(|| ParseError::MissingSeparator {
        input: text.to_string(),
    })?;

    let major = slice(text, Segment::Major, 0, Some(first))?;
    let second = dots.second.ok_or_else(|| missing(Segment::Minor, first + 1))?;
    let minor = slice(text, Segment::Minor, first + 1, Some(second))?;

    // A hyphen at the very start is a sign, not a label separator.
    let hyphen = text.find('-').filter(|&pos| pos > 0);
    let len = text.len();

    let (build, label, revision) = match (hyphen, dots.third) {
        (Some(hyphen), third) => {
            let third = third.ok_or_else(|| missing(Segment::Label, hyphen + 1))?;
            let label = slice(text, Segment::Label, hyphen + 1, Some(third))?;
            let build = slice(text, Segment::Build, second + 1, Some(hyphen))?;
            let revision = slice(text, Segment::Revision, third + 1, Some(len))?;
            (build, Some(label), Some(revision))
        }
        (None, None) => (slice(text, Segment::Build, second + 1, Some(len))?, None, None),
        (None, Some(third)) => {
            let build = slice(text, Segment::Build, second + 1, Some(third))?;
            let revision = slice(text, Segment::Revision, third + 1, Some(len))?;
            (build, None, Some(revision))
        }
    };

    Ok(Segments {
        major,
        minor,
        build,
        label,
        revision,
    })
}

fn decode(segment: Segment, span: Span<'_>) -> Result<u32, ParseError> {
    span.text.char_indices().try_fold(0u32, |acc, (pos, c)| {
        let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit {
            segment,
            found: c,
            offset: span.start + pos,
        })?;

        acc.checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ParseError::Overflow { segment })
    })
}

/// Decode an all-digit decimal segment. Empty input decodes to 0.
pub fn decode_segment(segment: Segment, text: &str) -> Result<u32, ParseError> {
    decode(segment, Span { text, start: 0 })
}

/// Parse `major.minor.build`, `major.minor.build.revision` or
/// `major.minor.build-label.revision`.
pub fn parse_version(text: &str) -> Result<EntityVersion, ParseError> {
    let segments = split(text)?;

    let major = decode(Segment::Major, segments.major)?;
    let minor = decode(Segment::Minor, segments.minor)?;
    let build = decode(Segment::Build, segments.build)?;
    let revision = match segments.revision {
        Some(span) => decode(Segment::Revision, span)?,
        None => 0,
    };

    let label = match segments.label {
        Some(span) if span.text.is_empty() => return Err(ParseError::EmptyLabel),
        Some(span) => Some(span.text.to_string()),
        None => None,
    };

    Ok(EntityVersion::from_parts(major, minor, build, label, revision))
}

/// Parse without reporting the cause; failures yield `(false, EntityVersion::EMPTY)`.
pub fn try_parse_version(text: Option<&str>) -> (bool, EntityVersion) {
    let Some(text) = text else {
        return (false, EntityVersion::EMPTY);
    };

    match parse_version(text) {
        Ok(version) => (true, version),
        Err(e) => {
            debug!("rejected version '{}': {}", text, e);
            (false, EntityVersion::EMPTY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::ParseErrorKind;

    fn version(major: u32, minor: u32, build: u32) -> EntityVersion {
        EntityVersion::new(major, minor, build)
    }

    #[test]
    fn test_scan_delimiters() {
        let dots = Delimiters::scan("1.2.3.4.5");
        assert_eq!(dots.first, Some(1));
        assert_eq!(dots.second, Some(3));
        assert_eq!(dots.third, Some(5));

        assert_eq!(Delimiters::scan("123"), Delimiters::default());
    }

    #[test]
    fn test_parse_release() {
        let v = parse_version("1.2.5").unwrap();
        assert_eq!(v.numeric(), (1, 2, 5, 0));
        assert!(v.is_release());
        assert_eq!(v.to_string(), "1.2.5");
    }

    #[test]
    fn test_parse_with_revision() {
        let v = parse_version("1.2.5.3").unwrap();
        assert_eq!(v.numeric(), (1, 2, 5, 3));
        assert_eq!(v.to_string(), "1.2.5.3");

        // A zero revision is not rendered.
        assert_eq!(parse_version("1.2.5.0").unwrap().to_string(), "1.2.5");
    }

    #[test]
    fn test_parse_tagged() {
        let v = parse_version("1.2.5-alpha.2").unwrap();
        assert_eq!(v.numeric(), (1, 2, 5, 2));
        assert_eq!(v.pre_release_label(), Some("alpha"));
        assert!(v.is_pre_release());
        assert_eq!(v.to_string(), "1.2.5-alpha.2");

        let v = parse_version("10.20.30-rc-1.4").unwrap();
        assert_eq!(v.pre_release_label(), Some("rc-1"));
        assert_eq!(v.revision(), 4);

        let v = parse_version("1.0.0-βeta.1").unwrap();
        assert_eq!(v.pre_release_label(), Some("βeta"));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse_version(""),
            Err(ParseError::MissingSeparator {
                input: String::new()
            })
        );
        assert!(matches!(
            parse_version("125"),
            Err(ParseError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_single_dot_is_range_error() {
        let err = parse_version("1.2").unwrap_err();
        assert_eq!(
            err,
            ParseError::OutOfRange {
                segment: Segment::Minor,
                start: 2,
                end: None,
            }
        );
        assert_eq!(err.kind(), ParseErrorKind::Range);
    }

    #[test]
    fn test_tag_without_revision() {
        assert_eq!(
            parse_version("1.2.3-rc"),
            Err(ParseError::OutOfRange {
                segment: Segment::Label,
                start: 6,
                end: None,
            })
        );
    }

    #[test]
    fn test_hyphen_after_third_dot() {
        assert_eq!(
            parse_version("1.2.3.4-rc"),
            Err(ParseError::OutOfRange {
                segment: Segment::Label,
                start: 8,
                end: Some(5),
            })
        );
    }

    #[test]
    fn test_hyphen_before_build() {
        let err = parse_version("1.2-3.4.5").unwrap_err();
        assert_eq!(
            err,
            ParseError::OutOfRange {
                segment: Segment::Build,
                start: 6,
                end: Some(3),
            }
        );
    }

    #[test]
    fn test_range_error_reported_before_digit_error() {
        // "x" would fail the major decode, but the missing revision dot is found first.
        let err = parse_version("x.2.3-rc").unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_non_digit_segments() {
        assert_eq!(
            parse_version("a.b.c"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Major,
                found: 'a',
                offset: 0,
            })
        );
        assert_eq!(
            parse_version("1.2.3+build"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Build,
                found: '+',
                offset: 5,
            })
        );
        assert!(matches!(
            parse_version(" 1.2.3"),
            Err(ParseError::InvalidDigit { found: ' ', .. })
        ));
        assert!(matches!(
            parse_version("1.٣.3"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Minor,
                found: '٣',
                ..
            })
        ));
    }

    #[test]
    fn test_leading_hyphen_is_not_a_label() {
        assert_eq!(
            parse_version("-1.2.3"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Major,
                found: '-',
                offset: 0,
            })
        );
    }

    #[test]
    fn test_extra_dots_end_up_in_revision() {
        assert_eq!(
            parse_version("1.2.3.4.5"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Revision,
                found: '.',
                offset: 7,
            })
        );
        assert_eq!(
            parse_version("1.2.3-rc.1.2"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Revision,
                found: '.',
                offset: 10,
            })
        );
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(parse_version("1.2.3-.4"), Err(ParseError::EmptyLabel));
    }

    #[test]
    fn test_empty_numeric_segments_decode_to_zero() {
        assert_eq!(parse_version("1.2.").unwrap(), version(1, 2, 0));
        assert_eq!(parse_version("1..3").unwrap(), version(1, 0, 3));
        assert_eq!(parse_version("..").unwrap(), EntityVersion::EMPTY);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            parse_version("4294967295.0.0").unwrap().major(),
            u32::MAX
        );
        assert_eq!(
            parse_version("4294967296.0.0"),
            Err(ParseError::Overflow {
                segment: Segment::Major
            })
        );
        assert_eq!(
            parse_version("1.2.3.99999999999"),
            Err(ParseError::Overflow {
                segment: Segment::Revision
            })
        );
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment(Segment::Build, ""), Ok(0));
        assert_eq!(decode_segment(Segment::Build, "007"), Ok(7));
        assert_eq!(decode_segment(Segment::Build, "1234"), Ok(1234));
        assert_eq!(
            decode_segment(Segment::Build, "12a"),
            Err(ParseError::InvalidDigit {
                segment: Segment::Build,
                found: 'a',
                offset: 2,
            })
        );
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(try_parse_version(Some("1.2.5")), (true, version(1, 2, 5)));
        assert_eq!(try_parse_version(Some("")), (false, EntityVersion::EMPTY));
        assert_eq!(try_parse_version(None), (false, EntityVersion::EMPTY));
        assert_eq!(try_parse_version(Some("a.b.c")), (false, EntityVersion::EMPTY));
        assert_eq!(try_parse_version(Some("1.2")), (false, EntityVersion::EMPTY));
    }

    #[test]
    fn test_parse_is_idempotent() {
        for text in ["1.2.5", "1.2.5-alpha.2", "1.2", "a.b.c"] {
            assert_eq!(parse_version(text), parse_version(text));
            assert_eq!(try_parse_version(Some(text)), try_parse_version(Some(text)));
        }
    }
}
