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

/// A volume level in decibels, `0.0..=150.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VolumeLevel(f64);

impl VolumeLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 150.0;

    /// NaN is rejected along with out-of-range values.
    pub fn from_raw(value: f64) -> Result<Self, RangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RangeError::new("volume level", value, Self::MIN, Self::MAX))
        }
    }

    pub fn to_raw(self) -> f64 {
        self.0
    }

    /// Mean of the given levels; `None` when there are none.
    pub fn average(levels: &[VolumeLevel]) -> Option<VolumeLevel> {
        if levels.is_empty() {
            return None;
        }
        let sum: f64 = levels.iter().map(|v| v.0).sum();
        // The mean of in-range values stays in range.
        Some(Self(sum / levels.len() as f64))
    }
}

impl TryFrom<f64> for VolumeLevel {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dB", self.0)
    }
}
