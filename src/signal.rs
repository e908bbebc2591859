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

//! # Signal Module
//!
//! Telemetry signal kinds, component identifiers and the opaque signal batch
//! exchanged with the external transformation engine.
//!
//! Batches are kept in their native JSON encoding: this crate only decodes
//! and encodes them, it never looks inside.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiCError};

/// Telemetry record category handled by a consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiCSignalKind {
    Logs,
    Traces,
    Metrics,
    Profiles,
}

impl ZiCSignalKind {
    pub const ALL: [ZiCSignalKind; 4] = [
        ZiCSignalKind::Logs,
        ZiCSignalKind::Traces,
        ZiCSignalKind::Metrics,
        ZiCSignalKind::Profiles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZiCSignalKind::Logs => "logs",
            ZiCSignalKind::Traces => "traces",
            ZiCSignalKind::Metrics => "metrics",
            ZiCSignalKind::Profiles => "profiles",
        }
    }

    /// Resolves a signal name as sent by the playground front end.
    #[allow(non_snake_case)]
    pub fn ZiFParse(name: &str) -> Result<Self> {
        ZiCSignalKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ZiCError::unsupported(format!("unsupported signal: {}", name)))
    }

    /// Name of the statement-list field governing this kind.
    pub fn statements_field(&self) -> &'static str {
        match self {
            ZiCSignalKind::Logs => "log_statements",
            ZiCSignalKind::Traces => "trace_statements",
            ZiCSignalKind::Metrics => "metric_statements",
            ZiCSignalKind::Profiles => "profile_statements",
        }
    }
}

impl fmt::Display for ZiCSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a signal-processing component, `type[/name]`.
///
/// The type is also the prefix that marks the top-level keys of a
/// multi-configuration document (`transform`, `transform/a`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZiCComponentId {
    kind: String,
    name: Option<String>,
}

impl ZiCComponentId {
    #[allow(non_snake_case)]
    pub fn ZiFNew(kind: impl Into<String>) -> Self {
        ZiCComponentId {
            kind: kind.into(),
            name: None,
        }
    }

    #[allow(non_snake_case)]
    pub fn ZiFWithName(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ZiCComponentId {
            kind: kind.into(),
            name: Some(name.into()),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for ZiCComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}/{}", self.kind, name),
            None => f.write_str(&self.kind),
        }
    }
}

/// A batch of telemetry records of one kind in native JSON encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiCSignalBatch {
    pub kind: ZiCSignalKind,
    pub data: Value,
}

impl ZiCSignalBatch {
    #[allow(non_snake_case)]
    pub fn ZiFNew(kind: ZiCSignalKind, data: Value) -> Self {
        ZiCSignalBatch { kind, data }
    }

    /// Decodes a JSON payload. The payload root must be an object.
    #[allow(non_snake_case)]
    pub fn ZiFDecode(kind: ZiCSignalKind, payload: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(payload).map_err(|err| {
            ZiCError::parse(format!("failed to decode {} payload: {}", kind, err))
        })?;
        if !data.is_object() {
            return Err(ZiCError::parse(format!(
                "failed to decode {} payload: expected a JSON object",
                kind
            )));
        }
        Ok(ZiCSignalBatch { kind, data })
    }

    #[allow(non_snake_case)]
    pub fn ZiFEncode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }
}
