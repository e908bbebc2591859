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

//! # Statement Debugger
//!
//! Re-runs a configuration once per statement with a growing prefix of its
//! statement list, always against the original input, and attributes every
//! step to the source line of its last statement.
//!
//! ## Step Order
//!
//! Steps are ordered by configuration key (first appearance in the text),
//! then by statement group, then by statement index. For a group
//! `[s0, s1, s2]` the engine receives `[s0]`, `[s0, s1]` and `[s0, s1, s2]`.
//! Only the group being stepped through is kept in the step configuration.
//! A bare statement entry keeps the bare entries directly before it as well,
//! so a flat list `[s0, s1]` also runs as `[s0]` then `[s0, s1]`.
//!
//! ## Output
//!
//! The top-level result has `debug = true` and its `value` is a JSON array of
//! per-step results (`value`, `executionTime`, `logs`, `debug`, `line`).
//! Any failure fails the whole call; no partial step list is returned.

use std::sync::Arc;

use crate::config::{
    ZiCConfigCloner, ZiCConfigParser, ZiCParsedConfig, ZiCStatementsConfig, ZiCYamlPositionIndex,
};
use crate::consumer::{ZiFConsumeSignal, ZiCSignalConsumer};
use crate::errors::{Result, ZiCError};
use crate::log::ZiCObservedLogs;
use crate::result::{ZiCExecutionResult, ZiFNewExecutionResult};
use crate::signal::{ZiCSignalBatch, ZiCSignalKind};

/// Statement-level debugging of one signal-processing component.
pub trait ZiCDebugger: Send + Sync {
    fn debug(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult>;

    fn observed_logs(&self) -> &ZiCObservedLogs;
}

/// One planned prefix execution.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiCDebugStep<T> {
    pub key: String,
    pub group: usize,
    pub statement: usize,
    pub line: i64,
    pub config: T,
}

pub struct ZiCStatementDebugger<C: ZiCSignalConsumer> {
    consumer: Arc<C>,
    parser: ZiCConfigParser,
}

impl<C> ZiCStatementDebugger<C>
where
    C: ZiCSignalConsumer,
    C::Config: ZiCStatementsConfig,
{
    #[allow(non_snake_case)]
    pub fn ZiFNew(consumer: Arc<C>) -> Self {
        let parser = ZiCConfigParser::ZiFNew(consumer.component_id().clone());
        ZiCStatementDebugger { consumer, parser }
    }

    #[allow(non_snake_case)]
    pub fn ZiFDebugLogs(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFDebug(ZiCSignalKind::Logs, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFDebugTraces(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFDebug(ZiCSignalKind::Traces, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFDebugMetrics(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFDebug(ZiCSignalKind::Metrics, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFDebugProfiles(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFDebug(ZiCSignalKind::Profiles, config, input)
    }

    /// Debugs the `kind` statements of every configuration in `config`
    /// against the JSON `input` batch.
    #[allow(non_snake_case)]
    pub fn ZiFDebug(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        let configs = self
            .parser
            .ZiFParse(config, || self.consumer.create_default_config())?;
        let batch = ZiCSignalBatch::ZiFDecode(kind, input)?;

        let mut steps = Vec::new();
        let has_statements = configs
            .iter()
            .any(|parsed| !parsed.value.statement_groups(kind).is_empty());
        if has_statements {
            let positions = ZiCYamlPositionIndex::ZiFParse(config)
                .map_err(|err| ZiCError::locate(kind.statements_field(), err))?;

            for parsed in &configs {
                let planned = self.ZiFPlanSteps(kind, &positions, parsed)?;
                ::log::debug!(
                    "[debugger] {} step(s) planned for configuration '{}'",
                    planned.len(),
                    parsed.key
                );

                for step in planned {
                    let input = batch.clone();
                    let consumer = self.consumer.as_ref();
                    let mut result = ZiFNewExecutionResult(
                        consumer.observed_logs(),
                        |output: &ZiCSignalBatch| output.ZiFEncode(),
                        || ZiFConsumeSignal(consumer, &step.config, input),
                    )?;
                    result.line = step.line;
                    result.debug = true;
                    steps.push(result);
                }
            }
        }

        let mut result = ZiCExecutionResult::ZiFNew();
        result.debug = true;
        result.value = serde_json::to_string(&steps)?;
        Ok(result)
    }

    /// Builds the prefix configurations of one parsed configuration, in
    /// execution order. `positions` indexes the text `parsed` came from.
    #[allow(non_snake_case)]
    pub fn ZiFPlanSteps(
        &self,
        kind: ZiCSignalKind,
        positions: &ZiCYamlPositionIndex,
        parsed: &ZiCParsedConfig<C::Config>,
    ) -> Result<Vec<ZiCDebugStep<C::Config>>> {
        let field = kind.statements_field();
        let list = if parsed.key.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", parsed.key, field)
        };

        let groups = parsed.value.statement_groups(kind);
        let mut steps = Vec::new();
        // First group of the run of bare statements ending at the current one.
        let mut flat_start = 0;
        for (group_index, group) in groups.iter().enumerate() {
            let sequence = positions
                .ZiFLocate(&parsed.key, field, group_index)
                .map_err(|err| ZiCError::locate(list.clone(), err))?;
            if !sequence.flat {
                flat_start = group_index + 1;
            }

            for statement_index in 0..group.statements.len() {
                let line = sequence
                    .ZiFLine(statement_index)
                    .map_err(|err| ZiCError::locate(list.clone(), err))?;

                let mut truncated = group.clone();
                truncated.statements.truncate(statement_index + 1);

                let mut prefix = if sequence.flat {
                    groups[flat_start..group_index].to_vec()
                } else {
                    Vec::new()
                };
                prefix.push(truncated);

                let mut config = ZiCConfigCloner::ZiFClone(&parsed.value)?;
                config.set_statement_groups(kind, prefix);

                steps.push(ZiCDebugStep {
                    key: parsed.key.clone(),
                    group: group_index,
                    statement: statement_index,
                    line: line as i64,
                    config,
                });
            }
        }
        Ok(steps)
    }
}

impl<C> ZiCDebugger for ZiCStatementDebugger<C>
where
    C: ZiCSignalConsumer,
    C::Config: ZiCStatementsConfig,
{
    fn debug(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFDebug(kind, config, input)
    }

    fn observed_logs(&self) -> &ZiCObservedLogs {
        self.consumer.observed_logs()
    }
}
