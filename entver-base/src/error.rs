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


use std::error::Error;
use std::io;

#[derive(thiserror::Error, Debug)]
pub enum CommonError {
    #[error("{0}")]
    Message(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Boxed(Box<dyn Error + Send + Sync + 'static>),
}

impl CommonError {
    pub fn boxed<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Boxed(Box::new(error))
    }

    /// The wrapped domain error, if this error carries one of type `E`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Boxed(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<String> for CommonError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for CommonError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err_box, CommonResult};

    #[derive(thiserror::Error, Debug, PartialEq)]
    #[error("bad segment")]
    struct SegmentError;

    fn fail(code: u32) -> CommonResult<()> {
        err_box!("failed with code {}", code)
    }

    #[test]
    fn test_err_box_message() {
        let err = fail(7).unwrap_err();
        assert_eq!(err.to_string(), "failed with code 7");
        assert!(matches!(err, CommonError::Message(_)));
    }

    #[test]
    fn test_boxed_downcast() {
        let err = CommonError::boxed(SegmentError);
        assert_eq!(err.to_string(), "bad segment");
        assert_eq!(err.downcast_ref::<SegmentError>(), Some(&SegmentError));

        let msg = CommonError::from("plain");
        assert!(msg.downcast_ref::<SegmentError>().is_none());
    }

    #[test]
    fn test_io_conversion() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing.toml");
        let err: CommonError = io.into();
        assert!(err.to_string().starts_with("io error"));
    }
}
