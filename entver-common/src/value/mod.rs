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


//! Validated wrappers around primitive values.
//!
//! Each wrapper can only be built through `from_raw`/`TryFrom`, and the primitive is
//! only reachable through `to_raw`. There is no implicit conversion in either direction.

mod subnet_mask;
mod volume_level;

pub use subnet_mask::SubnetMask;
pub use volume_level::VolumeLevel;

use entver_base::CommonError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{name} must be between {min} and {max}, got {value}")]
pub struct RangeError {
    pub name: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl RangeError {
    pub fn new(
        name: &'static str,
        value: impl Into<f64>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Self {
        Self {
            name,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl From<RangeError> for CommonError {
    fn from(value: RangeError) -> Self {
        CommonError::boxed(value)
    }
}
