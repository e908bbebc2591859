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

//! # Filter Configuration
//!
//! Condition lists of the filter component. A telemetry item matching any
//! condition of its list is dropped by the engine.
//!
//! ```yaml
//! error_mode: ignore
//! traces:
//!   span:
//!     - kind == SPAN_KIND_INTERNAL
//! logs:
//!   log_record:
//!     - severity_number < SEVERITY_NUMBER_INFO
//! ```
//!
//! Conditions are not grouped into statements, so filter configurations
//! cannot be stepped through by the debugger.

use serde::{Deserialize, Serialize};

use crate::config::transform::ZiCErrorMode;
use crate::config::ZiCConfig;
use crate::errors::{Result, ZiCError};
use crate::signal::ZiCSignalKind;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiCFilterTraces {
    pub span: Vec<String>,
    pub spanevent: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiCFilterMetrics {
    pub metric: Vec<String>,
    pub datapoint: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiCFilterLogs {
    pub log_record: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiCFilterProfiles {
    pub profile: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZiCFilterConfig {
    pub error_mode: ZiCErrorMode,
    pub traces: ZiCFilterTraces,
    pub metrics: ZiCFilterMetrics,
    pub logs: ZiCFilterLogs,
    pub profiles: ZiCFilterProfiles,
}

impl ZiCFilterConfig {
    /// Condition lists applying to `kind`, each with its dotted path.
    #[allow(non_snake_case)]
    pub fn ZiFConditions(&self, kind: ZiCSignalKind) -> Vec<(&'static str, &[String])> {
        match kind {
            ZiCSignalKind::Traces => vec![
                ("traces.span", &self.traces.span[..]),
                ("traces.spanevent", &self.traces.spanevent[..]),
            ],
            ZiCSignalKind::Metrics => vec![
                ("metrics.metric", &self.metrics.metric[..]),
                ("metrics.datapoint", &self.metrics.datapoint[..]),
            ],
            ZiCSignalKind::Logs => vec![("logs.log_record", &self.logs.log_record[..])],
            ZiCSignalKind::Profiles => vec![("profiles.profile", &self.profiles.profile[..])],
        }
    }

    pub fn is_empty(&self) -> bool {
        ZiCSignalKind::ALL.iter().all(|kind| {
            self.ZiFConditions(*kind)
                .iter()
                .all(|(_, conditions)| conditions.is_empty())
        })
    }
}

impl ZiCConfig for ZiCFilterConfig {
    fn validate(&self) -> Result<()> {
        for kind in ZiCSignalKind::ALL {
            for (path, conditions) in self.ZiFConditions(kind) {
                if let Some(index) = conditions.iter().position(|c| c.trim().is_empty()) {
                    return Err(ZiCError::validation(format!(
                        "{}[{}]: empty condition",
                        path, index
                    )));
                }
            }
        }
        Ok(())
    }
}
