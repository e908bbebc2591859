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

//! # Zi Playground Core Library
//!
//! This is the main library entry point for the Zi statement playground.
//! It lets a front end run a transformation component over a telemetry
//! payload, step through its statements one at a time, and ask where the
//! cursor of a half-typed statement sits.
//!
//! ## Module Overview
//!
//! - **config**: Configuration parsing, deep cloning and source positions
//! - **consumer**: The contract an external transformation engine implements
//! - **debugger**: Statement-level prefix execution with line attribution
//! - **dsl**: Statement tokenizer and completion-context analysis
//! - **executor**: Whole-configuration execution for one component
//! - **playground**: Registry of executors and front-end dispatch
//! - **result**: The execution result returned by every run
//! - **metadata**: Executor descriptions shown by the front end
//! - **signal**: Signal kinds, component ids and payload batches
//! - **log**: Instance-owned structured logging with an in-memory sink
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use zi_playground::{ZiCJsonExecutor, ZiCMetadata, ZiCComponentType, ZiCPlayground};
//!
//! let consumer = Arc::new(MyTransformConsumer::new());
//! let metadata = ZiCMetadata::ZiFNew(
//!     ZiCComponentType::Processor,
//!     "transform_processor",
//!     "Transform processor",
//!     "processor/transform",
//!     "https://example.invalid/docs",
//!     Vec::new(),
//! );
//! let executor = ZiCJsonExecutor::ZiFNew(consumer, metadata).ZiFWithDebugger();
//! let playground = ZiCPlayground::ZiFNew(vec![Box::new(executor)]);
//!
//! let result = playground.ZiFExecute(config, "logs", payload, "transform_processor", true);
//! ```
//!
//! ## Error Handling
//!
//! Library operations return `Result<T, ZiCError>`. The playground entry
//! points convert every error into an error [`ZiCExecutionResult`].

#![allow(non_snake_case)]

pub mod config;
pub mod consumer;
pub mod debugger;
pub mod dsl;
pub mod errors;
pub mod executor;
pub mod log;
pub mod metadata;
pub mod playground;
pub mod result;
pub mod signal;

pub use errors::{Result, ZiCError, ZiCLocateError};

pub use config::{
    ZiCConfig, ZiCConfigCloner, ZiCConfigParser, ZiCContextStatements, ZiCErrorMode,
    ZiCFilterConfig, ZiCParsedConfig, ZiCSourcePosition, ZiCStatementSequence, ZiCStatementsConfig,
    ZiCTransformConfig, ZiCYamlPositionIndex,
};
pub use consumer::{ZiFConsumeSignal, ZiCSignalConsumer};
pub use debugger::{ZiCDebugStep, ZiCDebugger, ZiCStatementDebugger};
pub use dsl::{ZiCCompletionContext, ZiCCompletionContextAnalyzer};
pub use executor::{ZiCJsonExecutor, ZiCPlaygroundExecutor};
pub use log::{ZiCLogConfig, ZiCLogLevel, ZiCLogger, ZiCObservedLogs};
pub use metadata::{
    ZiCComponentType, ZiCConfigExample, ZiCExamples, ZiCMetadata, ZiCMetadataOption,
    ZiCPayloadExample, ZiCResultViewConfig, ZiFFilterProcessorMetadata,
};
pub use playground::ZiCPlayground;
pub use result::{ZiCExecutionResult, ZiFNewExecutionResult};
pub use signal::{ZiCComponentId, ZiCSignalBatch, ZiCSignalKind};
