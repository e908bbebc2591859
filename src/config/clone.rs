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

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{Result, ZiCError};

/// Deep copies values by re-decoding them from a string-keyed map.
///
/// The copy shares no allocation with its source, whatever the value's own
/// `Clone` implementation (if any) would do.
pub struct ZiCConfigCloner;

impl ZiCConfigCloner {
    #[allow(non_snake_case)]
    pub fn ZiFClone<T>(value: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let intermediate = Self::ZiFToStringMap(value)?;
        serde_json::from_value(Value::Object(intermediate))
            .map_err(|err| ZiCError::clone_failure(format!("failed to decode config: {}", err)))
    }

    /// Encodes a value into its string-keyed map form.
    ///
    /// A value encoding to `null` yields an empty map.
    #[allow(non_snake_case)]
    pub fn ZiFToStringMap<T>(value: &T) -> Result<Map<String, Value>>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_value(value)
            .map_err(|err| ZiCError::clone_failure(format!("failed to encode config: {}", err)))?;
        match encoded {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(ZiCError::clone_failure(format!(
                "failed to unmarshal value into a string map: expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
