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

//! # Execution Result
//!
//! Value returned by normal executions and by every debugger step.
//!
//! ## JSON Shape
//!
//! ```json
//! {"value": "...", "executionTime": 3, "logs": "...", "debug": false, "line": 0}
//! ```
//!
//! `json` and `error` are omitted when absent.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::ZiCConfigCloner;
use crate::errors::Result;
use crate::log::ZiCObservedLogs;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZiCExecutionResult {
    /// Transformed output.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
    /// Accumulated wall-clock milliseconds.
    #[serde(rename = "executionTime")]
    pub execution_time: i64,
    /// Empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub logs: String,
    pub debug: bool,
    /// Source line of the last statement run; 0 outside the debugger.
    pub line: i64,
    #[serde(skip)]
    start: Option<Instant>,
}

impl ZiCExecutionResult {
    #[allow(non_snake_case)]
    pub fn ZiFNew() -> Self {
        Self::default()
    }

    /// Error result carrying the logs captured so far.
    #[allow(non_snake_case)]
    pub fn ZiFError(message: impl Into<String>, logs: impl Into<String>) -> Self {
        ZiCExecutionResult {
            error: message.into(),
            logs: logs.into(),
            ..Self::default()
        }
    }

    /// Starts (or resumes) the timer. Time already accumulated in
    /// `execution_time` is kept.
    pub fn start_timer(&mut self) {
        let now = Instant::now();
        let accumulated = Duration::from_millis(self.execution_time.max(0) as u64);
        self.start = Some(now.checked_sub(accumulated).unwrap_or(now));
    }

    /// Stores the milliseconds elapsed since the matching `start_timer`.
    pub fn stop_timer(&mut self) {
        if let Some(start) = self.start.take() {
            self.execution_time = i64::try_from(start.elapsed().as_millis()).unwrap_or(i64::MAX);
        }
    }

    /// Times `command`; the timer is stopped whether it succeeds or not.
    #[allow(non_snake_case)]
    pub fn ZiFWithTimer<F>(&mut self, command: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        self.start_timer();
        let outcome = command();
        self.stop_timer();
        outcome
    }

    /// Raw JSON object form of the result.
    #[allow(non_snake_case)]
    pub fn ZiFAsRaw(&self) -> Map<String, Value> {
        match ZiCConfigCloner::ZiFToStringMap(self) {
            Ok(map) => map,
            Err(err) => {
                let mut map = Map::new();
                map.insert(
                    "error".into(),
                    json!(format!("failed to convert result {:?} into raw map: {}", self, err)),
                );
                map
            }
        }
    }
}

/// Runs `command` under a timer and builds a result from its output.
///
/// The output is rendered with `marshal`; the observed logs are drained into
/// the result.
#[allow(non_snake_case)]
pub fn ZiFNewExecutionResult<T, M, F>(
    observed: &ZiCObservedLogs,
    marshal: M,
    command: F,
) -> Result<ZiCExecutionResult>
where
    M: FnOnce(&T) -> Result<String>,
    F: FnOnce() -> Result<T>,
{
    let mut result = ZiCExecutionResult::ZiFNew();
    let mut output = None;
    result.ZiFWithTimer(|| {
        output = Some(command()?);
        Ok(())
    })?;

    if let Some(output) = output {
        result.value = marshal(&output)?;
    }
    result.logs = observed.take_all_string();
    Ok(result)
}
