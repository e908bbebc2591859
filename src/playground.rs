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

//! # Playground Registry
//!
//! Fixed set of executors keyed by metadata id, plus the entry points the
//! front end calls. Every failure is turned into an error result; nothing
//! here returns `Err` or panics on bad input.

use std::collections::HashMap;

use serde_json::Value;

use crate::dsl::{ZiCCompletionContext, ZiCCompletionContextAnalyzer};
use crate::executor::ZiCPlaygroundExecutor;
use crate::result::ZiCExecutionResult;
use crate::signal::ZiCSignalKind;

pub struct ZiCPlayground {
    executors: Vec<Box<dyn ZiCPlaygroundExecutor>>,
    lookup: HashMap<String, usize>,
}

impl ZiCPlayground {
    /// Registers `executors`, listed by name. A later executor with an id
    /// already registered replaces the earlier one in lookups.
    #[allow(non_snake_case)]
    pub fn ZiFNew(mut executors: Vec<Box<dyn ZiCPlaygroundExecutor>>) -> Self {
        executors.sort_by(|a, b| a.metadata().name.cmp(&b.metadata().name));
        let lookup = executors
            .iter()
            .enumerate()
            .map(|(index, executor)| (executor.metadata().id.clone(), index))
            .collect();
        ZiCPlayground { executors, lookup }
    }

    #[allow(non_snake_case)]
    pub fn ZiFExecutor(&self, id: &str) -> Option<&dyn ZiCPlaygroundExecutor> {
        self.lookup.get(id).map(|&index| self.executors[index].as_ref())
    }

    /// Runs (or debugs) `config` against `payload` with the executor `executor_id`.
    #[allow(non_snake_case)]
    pub fn ZiFExecute(
        &self,
        config: &str,
        signal: &str,
        payload: &str,
        executor_id: &str,
        debug: bool,
    ) -> ZiCExecutionResult {
        let executor = match self.ZiFExecutor(executor_id) {
            Some(executor) => executor,
            None => {
                return ZiCExecutionResult::ZiFError(
                    format!("unsupported executor {}", executor_id),
                    "",
                )
            }
        };

        let kind = match ZiCSignalKind::ZiFParse(signal) {
            Ok(kind) => kind,
            Err(_) => {
                return ZiCExecutionResult::ZiFError(
                    format!("unsupported signal type {}", signal),
                    "",
                )
            }
        };

        let outcome = if debug {
            match executor.debugger() {
                Some(debugger) => debugger.debug(kind, config, payload),
                None => {
                    return ZiCExecutionResult::ZiFError(
                        format!("executor \"{}\" does not support debugging", executor_id),
                        "",
                    )
                }
            }
        } else {
            executor.execute(kind, config, payload)
        };

        outcome.unwrap_or_else(|err| {
            ZiCExecutionResult::ZiFError(
                format!("unable to run {} configuration. Error: {}", signal, err),
                executor.observed_logs().take_all_string(),
            )
        })
    }

    /// Metadata of every executor, in listing order.
    #[allow(non_snake_case)]
    pub fn ZiFExecutors(&self) -> Vec<Value> {
        self.executors
            .iter()
            .filter_map(|executor| serde_json::to_value(executor.metadata()).ok())
            .collect()
    }

    #[allow(non_snake_case)]
    pub fn ZiFCompletionContext(&self, statement: &str) -> ZiCCompletionContext {
        ZiCCompletionContextAnalyzer::ZiFAnalyze(statement)
    }
}
