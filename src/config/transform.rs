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

//! Statement configuration of the `transform` component.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ZiCConfig, ZiCStatementsConfig};
use crate::errors::{Result, ZiCError};
use crate::signal::ZiCSignalKind;

/// How statement evaluation errors are handled by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiCErrorMode {
    Ignore,
    Silent,
    #[default]
    Propagate,
}

impl fmt::Display for ZiCErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZiCErrorMode::Ignore => "ignore",
            ZiCErrorMode::Silent => "silent",
            ZiCErrorMode::Propagate => "propagate",
        };
        f.write_str(name)
    }
}

/// Statements sharing one evaluation context.
///
/// A bare string in a statement list decodes to a group holding only that
/// statement, with the context left for the engine to infer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ZiCRawContextStatements")]
pub struct ZiCContextStatements {
    pub context: String,
    pub conditions: Vec<String>,
    pub statements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_mode: Option<ZiCErrorMode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ZiCRawContextStatements {
    Flat(String),
    Grouped(ZiCRawGroup),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ZiCRawGroup {
    #[serde(default)]
    context: String,
    #[serde(default)]
    conditions: Vec<String>,
    #[serde(default)]
    statements: Vec<String>,
    #[serde(default)]
    error_mode: Option<ZiCErrorMode>,
}

impl From<ZiCRawContextStatements> for ZiCContextStatements {
    fn from(raw: ZiCRawContextStatements) -> Self {
        match raw {
            ZiCRawContextStatements::Flat(statement) => ZiCContextStatements {
                statements: vec![statement],
                ..ZiCContextStatements::default()
            },
            ZiCRawContextStatements::Grouped(group) => ZiCContextStatements {
                context: group.context,
                conditions: group.conditions,
                statements: group.statements,
                error_mode: group.error_mode,
            },
        }
    }
}

/// Unknown keys are rejected, so a misspelt list name fails to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiCTransformConfig {
    #[serde(default)]
    pub error_mode: ZiCErrorMode,
    #[serde(default)]
    pub trace_statements: Vec<ZiCContextStatements>,
    #[serde(default)]
    pub metric_statements: Vec<ZiCContextStatements>,
    #[serde(default)]
    pub log_statements: Vec<ZiCContextStatements>,
    #[serde(default)]
    pub profile_statements: Vec<ZiCContextStatements>,
}

/// Evaluation contexts accepted in the statement lists of each signal kind.
/// The empty context lets the engine infer it from the statement paths.
#[allow(non_snake_case)]
pub fn ZiFContextsFor(kind: ZiCSignalKind) -> &'static [&'static str] {
    match kind {
        ZiCSignalKind::Traces => &["", "resource", "scope", "span", "spanevent"],
        ZiCSignalKind::Metrics => &["", "resource", "scope", "metric", "datapoint"],
        ZiCSignalKind::Logs => &["", "resource", "scope", "log"],
        ZiCSignalKind::Profiles => &["", "resource", "scope", "profile"],
    }
}

impl ZiCConfig for ZiCTransformConfig {
    fn validate(&self) -> Result<()> {
        for kind in ZiCSignalKind::ALL {
            let contexts = ZiFContextsFor(kind);
            for (index, group) in self.statement_groups(kind).iter().enumerate() {
                if !contexts.contains(&group.context.as_str()) {
                    return Err(ZiCError::validation(format!(
                        "{}[{}]: unknown context '{}'",
                        kind.statements_field(),
                        index,
                        group.context
                    )));
                }
                if group.statements.is_empty() {
                    return Err(ZiCError::validation(format!(
                        "{}[{}]: no statements",
                        kind.statements_field(),
                        index
                    )));
                }
            }
        }
        Ok(())
    }
}

impl ZiCStatementsConfig for ZiCTransformConfig {
    fn statement_groups(&self, kind: ZiCSignalKind) -> &[ZiCContextStatements] {
        match kind {
            ZiCSignalKind::Logs => &self.log_statements,
            ZiCSignalKind::Traces => &self.trace_statements,
            ZiCSignalKind::Metrics => &self.metric_statements,
            ZiCSignalKind::Profiles => &self.profile_statements,
        }
    }

    fn set_statement_groups(&mut self, kind: ZiCSignalKind, groups: Vec<ZiCContextStatements>) {
        match kind {
            ZiCSignalKind::Logs => self.log_statements = groups,
            ZiCSignalKind::Traces => self.trace_statements = groups,
            ZiCSignalKind::Metrics => self.metric_statements = groups,
            ZiCSignalKind::Profiles => self.profile_statements = groups,
        }
    }
}
