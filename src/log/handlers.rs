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

use crate::log::core::ZiCLogRecord;
use crate::log::formatters::{ZiCJsonFormatter, ZiCTextFormatter};
use crate::log::observer::{ZiCLoggedEntry, ZiCObservedLogs};

pub trait ZiCLogHandler {
    fn handle(&self, record: &ZiCLogRecord);
}

pub struct ZiCStdoutHandler {
    json: bool,
}

impl ZiCStdoutHandler {
    #[allow(non_snake_case)]
    pub fn ZiFNew(json: bool) -> Self {
        ZiCStdoutHandler { json }
    }
}

impl ZiCLogHandler for ZiCStdoutHandler {
    fn handle(&self, record: &ZiCLogRecord) {
        if self.json {
            println!("{}", ZiCJsonFormatter::ZiFFormat(record));
        } else {
            print!("{}", ZiCTextFormatter::ZiFFormat(record));
        }
    }
}

impl ZiCLogHandler for ZiCObservedLogs {
    fn handle(&self, record: &ZiCLogRecord) {
        let encoded = ZiCTextFormatter::ZiFFormat(record);
        self.add(ZiCLoggedEntry::ZiFNew(record.clone(), encoded));
    }
}
