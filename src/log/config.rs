//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::core::{ZiCLogLevel, ZiCLogRecord};

/// Configuration for a consumer's `ZiCLogger`.
///
/// Observed logs are always collected in memory; the console handler
/// additionally echoes records to stdout when enabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiCLogConfig {
    pub default_level: String,
    pub console_enabled: bool,
    pub json_format_console: bool,
}

impl Default for ZiCLogConfig {
    fn default() -> Self {
        ZiCLogConfig {
            default_level: "DEBUG".to_string(),
            console_enabled: false,
            json_format_console: false,
        }
    }
}

impl ZiCLogConfig {
    #[allow(non_snake_case)]
    pub fn ZiFShouldLog(&self, record: &ZiCLogRecord) -> bool {
        record.level >= self.ZiFThreshold()
    }

    #[allow(non_snake_case)]
    pub fn ZiFThreshold(&self) -> ZiCLogLevel {
        ZiCLogLevel::ZiFParse(&self.default_level)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZiCLogConfigBuilder {
    pub default_level: Option<String>,
    pub console_enabled: Option<bool>,
    pub json_format_console: Option<bool>,
}

impl ZiCLogConfigBuilder {
    #[allow(non_snake_case)]
    pub fn ZiFBuild(self) -> ZiCLogConfig {
        let base = ZiCLogConfig::default();
        ZiCLogConfig {
            default_level: self.default_level.unwrap_or(base.default_level),
            console_enabled: self.console_enabled.unwrap_or(base.console_enabled),
            json_format_console: self
                .json_format_console
                .unwrap_or(base.json_format_console),
        }
    }

    /// Builds a configuration from a JSON blob, defaulting missing or
    /// malformed fields.
    #[allow(non_snake_case)]
    pub fn ZiFFromJson(value: &Value) -> ZiCLogConfig {
        let builder: ZiCLogConfigBuilder = serde_json::from_value(value.clone())
            .unwrap_or_else(|_| ZiCLogConfigBuilder::default());
        builder.ZiFBuild()
    }
}
