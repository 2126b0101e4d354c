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


use crate::conf::CompatConf;
use entver_base::common::LogConf;
use entver_base::{err_msg, CommonResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntverConf {
    pub compat: CompatConf,
    pub log: LogConf,
}

impl EntverConf {
    pub const ENV_CONF_FILE: &'static str = "ENTVER_CONF_FILE";

    pub fn from_toml(text: &str) -> CommonResult<Self> {
        let mut conf: Self =
            toml::from_str(text).map_err(|e| err_msg!("invalid config: {}", e))?;
        conf.init()?;
        Ok(conf)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CommonResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| err_msg!("failed to read config {}: {}", path.display(), e))?;
        let conf = Self::from_toml(&text)?;
        info!("loaded config from {}", path.display());
        Ok(conf)
    }

    /// Load from `path`, then from `ENTVER_CONF_FILE`, and fall back to defaults.
    pub fn load(path: Option<&str>) -> CommonResult<Self> {
        let path = path
            .map(|p| p.to_string())
            .or_else(|| std::env::var(Self::ENV_CONF_FILE).ok());

        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn init(&mut self) -> CommonResult<()> {
        self.compat.init()?;
        Ok(())
    }
}
