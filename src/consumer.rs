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

//! # Signal Consumer Contract
//!
//! The transformation engine itself lives outside this crate. A host plugs it
//! in by implementing [`ZiCSignalConsumer`] once per component; executors and
//! the debugger only ever talk to it through this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ZiCConfig;
use crate::errors::{Result, ZiCError};
use crate::log::{ZiCLogger, ZiCObservedLogs};
use crate::signal::{ZiCComponentId, ZiCSignalBatch, ZiCSignalKind};

/// A signal-processing component able to transform telemetry batches.
pub trait ZiCSignalConsumer: Send + Sync {
    type Config: ZiCConfig + Serialize + DeserializeOwned;

    /// Identifier of the component. Its type prefixes the keys of
    /// multi-configuration documents.
    fn component_id(&self) -> &ZiCComponentId;

    fn create_default_config(&self) -> Self::Config;

    /// Runs `input` through the component configured with `config`.
    fn consume(&self, config: &Self::Config, input: ZiCSignalBatch) -> Result<ZiCSignalBatch>;

    /// Logger handed to the engine. Its observed sink is drained once per
    /// execution.
    fn logger(&self) -> &ZiCLogger;

    fn observed_logs(&self) -> &ZiCObservedLogs {
        self.logger().ZiFObserved()
    }

    /// Whether the component handles batches of `kind`.
    fn supports(&self, _kind: ZiCSignalKind) -> bool {
        true
    }
}

/// Invokes `consumer` on `input`, attributing any failure to the batch's
/// signal kind.
#[allow(non_snake_case)]
pub fn ZiFConsumeSignal<C>(consumer: &C, config: &C::Config, input: ZiCSignalBatch) -> Result<ZiCSignalBatch>
where
    C: ZiCSignalConsumer + ?Sized,
{
    let kind = input.kind;
    if !consumer.supports(kind) {
        return Err(ZiCError::engine(
            kind,
            format!("{} are not supported by component {}", kind, consumer.component_id()),
        ));
    }

    match consumer.consume(config, input) {
        Ok(output) => Ok(output),
        Err(err @ ZiCError::Engine { .. }) => Err(err),
        Err(err) => Err(ZiCError::engine(kind, err.to_string())),
    }
}
