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


use crate::value::RangeError;
use std::fmt;

/// An IPv4 network prefix length in `8..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubnetMask(u8);

impl SubnetMask {
    pub const MIN: u8 = 8;
    pub const MAX: u8 = 32;

    pub fn from_raw(value: i64) -> Result<Self, RangeError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RangeError::new("subnet mask", value as f64, Self::MIN, Self::MAX))
        }
    }

    pub fn to_raw(self) -> u8 {
        self.0
    }

    /// The netmask as a 32-bit value, e.g. `/24` is `0xffff_ff00`.
    pub fn netmask(self) -> u32 {
        u32::MAX << (32 - self.0 as u32)
    }
}

impl TryFrom<i64> for SubnetMask {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl TryFrom<u8> for SubnetMask {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(value as i64)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(SubnetMask::from_raw(8).unwrap().to_raw(), 8);
        assert_eq!(SubnetMask::from_raw(32).unwrap().to_raw(), 32);
        assert!(SubnetMask::from_raw(7).is_err());
        assert!(SubnetMask::from_raw(33).is_err());
        assert!(SubnetMask::from_raw(-1).is_err());
    }

    #[test]
    fn test_range_error() {
        let err = SubnetMask::try_from(40u8).unwrap_err();
        assert_eq!(err.to_string(), "subnet mask must be between 8 and 32, got 40");
    }

    #[test]
    fn test_netmask() {
        assert_eq!(SubnetMask::from_raw(24).unwrap().netmask(), 0xffff_ff00);
        assert_eq!(SubnetMask::from_raw(32).unwrap().netmask(), u32::MAX);
        assert_eq!(SubnetMask::from_raw(8).unwrap().netmask(), 0xff00_0000);
        assert_eq!(SubnetMask::from_raw(16).unwrap().to_string(), "/16");
    }
}
