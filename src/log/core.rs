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

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::log::config::ZiCLogConfig;
use crate::log::handlers::{ZiCLogHandler, ZiCStdoutHandler};
use crate::log::observer::ZiCObservedLogs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZiCLogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl ZiCLogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiCLogLevel::Debug => "DEBUG",
            ZiCLogLevel::Info => "INFO",
            ZiCLogLevel::Warning => "WARNING",
            ZiCLogLevel::Error => "ERROR",
        }
    }

    /// Parses a level name, falling back to `Info` for unknown names.
    #[allow(non_snake_case)]
    pub fn ZiFParse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => ZiCLogLevel::Debug,
            "WARN" | "WARNING" => ZiCLogLevel::Warning,
            "ERROR" => ZiCLogLevel::Error,
            _ => ZiCLogLevel::Info,
        }
    }
}

impl fmt::Display for ZiCLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct ZiCLogRecord {
    pub level: ZiCLogLevel,
    pub event: String,
    pub message: String,
    pub fields: Map<String, Value>,
    pub timestamp: SystemTime,
}

impl ZiCLogRecord {
    #[allow(non_snake_case)]
    pub fn ZiFToJson(&self) -> Value {
        let ts = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();

        let mut data = Map::new();
        data.insert("level".into(), json!(self.level.as_str()));
        data.insert("event".into(), json!(self.event));
        data.insert("message".into(), json!(self.message));
        data.insert("timestamp_ms".into(), json!(ts));
        data.insert("fields".into(), Value::Object(self.fields.clone()));

        Value::Object(data)
    }
}

/// Structured logger handed to a signal consumer.
///
/// Each logger owns its handlers, so two consumers never share a sink. The
/// observed-logs handler is always installed; the console handler only when
/// enabled by configuration.
#[derive(Clone)]
pub struct ZiCLogger {
    config: ZiCLogConfig,
    threshold: ZiCLogLevel,
    observed: ZiCObservedLogs,
    handlers: Arc<Vec<Box<dyn ZiCLogHandler + Send + Sync>>>,
}

impl fmt::Debug for ZiCLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZiCLogger")
            .field("config", &self.config)
            .field("observed", &self.observed.len())
            .finish()
    }
}

impl Default for ZiCLogger {
    fn default() -> Self {
        ZiCLogger::ZiFNew(ZiCLogConfig::default())
    }
}

impl ZiCLogger {
    #[allow(non_snake_case)]
    pub fn ZiFNew(config: ZiCLogConfig) -> Self {
        let observed = ZiCObservedLogs::default();
        let mut handlers: Vec<Box<dyn ZiCLogHandler + Send + Sync>> = Vec::new();
        handlers.push(Box::new(observed.clone()));
        if config.console_enabled {
            handlers.push(Box::new(ZiCStdoutHandler::ZiFNew(config.json_format_console)));
        }

        ZiCLogger {
            threshold: config.ZiFThreshold(),
            config,
            observed,
            handlers: Arc::new(handlers),
        }
    }

    /// The in-memory sink every record passing the threshold lands in.
    #[allow(non_snake_case)]
    pub fn ZiFObserved(&self) -> &ZiCObservedLogs {
        &self.observed
    }

    #[allow(non_snake_case)]
    pub fn ZiFConfig(&self) -> &ZiCLogConfig {
        &self.config
    }

    /// Emit a structured log event.
    #[allow(non_snake_case)]
    pub fn ZiFEvent<L>(&self, level: ZiCLogLevel, event: &str, message: &str, fields: L)
    where
        L: IntoIterator<Item = (String, Value)>,
    {
        if level < self.threshold {
            return;
        }

        let record = ZiCLogRecord {
            level,
            event: event.to_string(),
            message: message.to_string(),
            fields: fields.into_iter().collect(),
            timestamp: SystemTime::now(),
        };
        for h in self.handlers.iter() {
            h.handle(&record);
        }
    }

    #[allow(non_snake_case)]
    pub fn ZiFDebug(&self, event: &str, message: &str) {
        self.ZiFEvent(ZiCLogLevel::Debug, event, message, Vec::new());
    }

    #[allow(non_snake_case)]
    pub fn ZiFInfo(&self, event: &str, message: &str) {
        self.ZiFEvent(ZiCLogLevel::Info, event, message, Vec::new());
    }

    #[allow(non_snake_case)]
    pub fn ZiFWarn(&self, event: &str, message: &str) {
        self.ZiFEvent(ZiCLogLevel::Warning, event, message, Vec::new());
    }

    #[allow(non_snake_case)]
    pub fn ZiFError(&self, event: &str, message: &str) {
        self.ZiFEvent(ZiCLogLevel::Error, event, message, Vec::new());
    }
}
