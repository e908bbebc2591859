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

//! In-memory sink for the log entries an engine emits during one execution.

use std::sync::{Arc, PoisonError, RwLock};

use crate::log::core::ZiCLogRecord;

#[derive(Clone, Debug)]
pub struct ZiCLoggedEntry {
    record: ZiCLogRecord,
    console_encoded: String,
}

impl ZiCLoggedEntry {
    #[allow(non_snake_case)]
    pub fn ZiFNew(record: ZiCLogRecord, console_encoded: String) -> Self {
        ZiCLoggedEntry {
            record,
            console_encoded,
        }
    }

    pub fn record(&self) -> &ZiCLogRecord {
        &self.record
    }

    pub fn console_encoded(&self) -> &str {
        &self.console_encoded
    }
}

/// Shared handle over the collected entries. Clones point at the same buffer.
#[derive(Clone, Debug, Default)]
pub struct ZiCObservedLogs {
    logs: Arc<RwLock<Vec<ZiCLoggedEntry>>>,
}

impl ZiCObservedLogs {
    pub fn len(&self) -> usize {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the collected entries without draining them.
    pub fn all(&self) -> Vec<ZiCLoggedEntry> {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains every collected entry.
    pub fn take_all(&self) -> Vec<ZiCLoggedEntry> {
        let mut guard = self.logs.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    /// Drains every collected entry and concatenates their console encodings.
    pub fn take_all_string(&self) -> String {
        self.take_all()
            .iter()
            .map(ZiCLoggedEntry::console_encoded)
            .collect()
    }

    pub(crate) fn add(&self, entry: ZiCLoggedEntry) {
        self.logs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
