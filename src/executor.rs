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

//! # Playground Executors
//!
//! An executor runs a whole configuration document against a JSON payload.
//! Named configurations run in the order their keys appear in the text, each
//! one consuming the output of the previous one.

use std::sync::Arc;

use crate::config::{ZiCConfigParser, ZiCStatementsConfig};
use crate::consumer::{ZiFConsumeSignal, ZiCSignalConsumer};
use crate::debugger::{ZiCDebugger, ZiCStatementDebugger};
use crate::errors::Result;
use crate::log::ZiCObservedLogs;
use crate::metadata::ZiCMetadata;
use crate::result::{ZiCExecutionResult, ZiFNewExecutionResult};
use crate::signal::{ZiCSignalBatch, ZiCSignalKind};

/// Object-safe view of an executor, as held by the playground registry.
pub trait ZiCPlaygroundExecutor: Send + Sync {
    fn execute(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult>;

    /// Statement debugger, when the executor supports debugging.
    fn debugger(&self) -> Option<&dyn ZiCDebugger>;

    fn metadata(&self) -> &ZiCMetadata;

    fn observed_logs(&self) -> &ZiCObservedLogs;
}

/// Executor exchanging payloads in the engine's native JSON encoding.
pub struct ZiCJsonExecutor<C: ZiCSignalConsumer> {
    consumer: Arc<C>,
    parser: ZiCConfigParser,
    metadata: ZiCMetadata,
    debugger: Option<Box<dyn ZiCDebugger>>,
}

impl<C: ZiCSignalConsumer> ZiCJsonExecutor<C> {
    #[allow(non_snake_case)]
    pub fn ZiFNew(consumer: Arc<C>, metadata: ZiCMetadata) -> Self {
        let parser = ZiCConfigParser::ZiFNew(consumer.component_id().clone());
        ZiCJsonExecutor {
            consumer,
            parser,
            metadata,
            debugger: None,
        }
    }

    pub fn consumer(&self) -> &Arc<C> {
        &self.consumer
    }

    #[allow(non_snake_case)]
    pub fn ZiFExecuteLogs(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFExecute(ZiCSignalKind::Logs, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFExecuteTraces(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFExecute(ZiCSignalKind::Traces, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFExecuteMetrics(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFExecute(ZiCSignalKind::Metrics, config, input)
    }

    #[allow(non_snake_case)]
    pub fn ZiFExecuteProfiles(&self, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFExecute(ZiCSignalKind::Profiles, config, input)
    }

    /// Runs every configuration of `config` in key order, chaining outputs,
    /// under a single timer.
    #[allow(non_snake_case)]
    pub fn ZiFExecute(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        let batch = ZiCSignalBatch::ZiFDecode(kind, input)?;
        let configs = self
            .parser
            .ZiFParse(config, || self.consumer.create_default_config())?;

        let consumer = self.consumer.as_ref();
        ZiFNewExecutionResult(
            consumer.observed_logs(),
            |output: &ZiCSignalBatch| output.ZiFEncode(),
            || {
                let mut transformed = batch;
                for parsed in &configs {
                    if configs.len() > 1 {
                        consumer.logger().ZiFDebug(
                            "playground",
                            &format!("[playground] Running configuration: {}", parsed.key),
                        );
                    }
                    transformed = ZiFConsumeSignal(consumer, &parsed.value, transformed)?;
                }
                Ok(transformed)
            },
        )
    }
}

impl<C> ZiCJsonExecutor<C>
where
    C: ZiCSignalConsumer + 'static,
    C::Config: ZiCStatementsConfig,
{
    /// Attaches a statement debugger over the same consumer and marks the
    /// executor as debuggable.
    #[allow(non_snake_case)]
    pub fn ZiFWithDebugger(mut self) -> Self {
        self.metadata.debuggable = true;
        self.debugger = Some(Box::new(ZiCStatementDebugger::ZiFNew(Arc::clone(
            &self.consumer,
        ))));
        self
    }
}

impl<C: ZiCSignalConsumer> ZiCPlaygroundExecutor for ZiCJsonExecutor<C> {
    fn execute(&self, kind: ZiCSignalKind, config: &str, input: &str) -> Result<ZiCExecutionResult> {
        self.ZiFExecute(kind, config, input)
    }

    fn debugger(&self) -> Option<&dyn ZiCDebugger> {
        self.debugger.as_deref()
    }

    fn metadata(&self) -> &ZiCMetadata {
        &self.metadata
    }

    fn observed_logs(&self) -> &ZiCObservedLogs {
        self.consumer.observed_logs()
    }
}
