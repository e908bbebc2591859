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

use chrono::{DateTime, SecondsFormat, Utc};

use crate::log::core::ZiCLogRecord;

pub struct ZiCJsonFormatter;

impl ZiCJsonFormatter {
    #[allow(non_snake_case)]
    pub fn ZiFFormat(record: &ZiCLogRecord) -> String {
        record.ZiFToJson().to_string()
    }
}

/// Console encoding of a record, tab separated and newline terminated:
/// `timestamp  LEVEL  event  message  {fields}`.
pub struct ZiCTextFormatter;

impl ZiCTextFormatter {
    #[allow(non_snake_case)]
    pub fn ZiFFormat(record: &ZiCLogRecord) -> String {
        let ts: DateTime<Utc> = record.timestamp.into();
        let mut line = format!(
            "{}\t{}\t{}\t{}",
            ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level.as_str(),
            record.event,
            record.message
        );
        if !record.fields.is_empty() {
            line.push('\t');
            line.push_str(&serde_json::Value::Object(record.fields.clone()).to_string());
        }
        line.push('\n');
        line
    }
}
