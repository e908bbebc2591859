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

//! # Observed Logs Module
//!
//! Structured, instance-owned logging for signal consumers. Every record that
//! passes the configured threshold is kept in memory by [`ZiCObservedLogs`]
//! so an execution can drain "the logs emitted since the last drain" into its
//! result.
//!
//! - **core**: levels, records and the [`ZiCLogger`] itself
//! - **config**: threshold and console settings, with a JSON builder
//! - **formatters**: console and JSON encodings
//! - **handlers**: stdout echo and the observed-logs sink
//! - **observer**: the drainable in-memory buffer
//!
//! Crate diagnostics do not go through this module; they use the `log`
//! facade directly.

pub mod config;
pub mod core;
pub mod formatters;
pub mod handlers;
pub mod observer;

pub use self::config::{ZiCLogConfig, ZiCLogConfigBuilder};
pub use self::core::{ZiCLogLevel, ZiCLogRecord, ZiCLogger};
pub use self::formatters::{ZiCJsonFormatter, ZiCTextFormatter};
pub use self::handlers::{ZiCLogHandler, ZiCStdoutHandler};
pub use self::observer::{ZiCLoggedEntry, ZiCObservedLogs};
