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

//! # Configuration Parser
//!
//! Decoding runs in two phases. The YAML document is first lowered into a
//! plain JSON tree, where every string leaf has its `$$` sequences collapsed
//! to `$`. The tree is then merged over the JSON form of a fresh default
//! configuration and decoded into the target type, which validates itself.
//!
//! A document is a *multi-configuration* document when it is non-empty and
//! every top-level key starts with the component type (`transform`,
//! `transform/a`, ...). Each sub-document then becomes one configuration,
//! returned in the order the keys appear in the text.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::clone::ZiCConfigCloner;
use crate::config::ZiCConfig;
use crate::errors::{Result, ZiCError};
use crate::signal::ZiCComponentId;

/// One decoded configuration and the key it was found under.
///
/// The key is empty for the single, unnamed configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiCParsedConfig<T> {
    pub key: String,
    pub value: T,
}

impl<T> ZiCParsedConfig<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Independent deep copy of the configuration value.
    #[allow(non_snake_case)]
    pub fn ZiFClone(&self) -> Result<T> {
        ZiCConfigCloner::ZiFClone(&self.value)
    }
}

#[derive(Clone, Debug)]
pub struct ZiCConfigParser {
    component: ZiCComponentId,
}

impl ZiCConfigParser {
    #[allow(non_snake_case)]
    pub fn ZiFNew(component: ZiCComponentId) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &ZiCComponentId {
        &self.component
    }

    /// Parse configuration text into an ordered list of validated configs.
    ///
    /// `default_factory` is invoked once per configuration; decoded fields
    /// overlay the fresh default. Any failure fails the whole call.
    #[allow(non_snake_case)]
    pub fn ZiFParse<T, F>(&self, source: &str, default_factory: F) -> Result<Vec<ZiCParsedConfig<T>>>
    where
        T: ZiCConfig + Serialize + DeserializeOwned,
        F: Fn() -> T,
    {
        let root = load_document(source)?;

        if self.is_multi_config(&root) {
            let mut configs = Vec::with_capacity(root.len());
            for (key, sub) in root {
                let overlay = match sub {
                    Value::Null => Map::new(),
                    Value::Object(map) => map,
                    _ => {
                        return Err(ZiCError::parse(format!(
                            "configuration '{}' must be a mapping",
                            key
                        )))
                    }
                };
                let value = decode_valid(overlay, default_factory())
                    .map_err(|err| err.ZiFWithConfigKey(&key))?;
                configs.push(ZiCParsedConfig { key, value });
            }
            return Ok(configs);
        }

        let value = decode_valid(root.into_iter().collect(), default_factory())?;
        Ok(vec![ZiCParsedConfig {
            key: String::new(),
            value,
        }])
    }

    #[allow(non_snake_case)]
    pub fn ZiFParseFile<T, F, P>(&self, path: P, default_factory: F) -> Result<Vec<ZiCParsedConfig<T>>>
    where
        T: ZiCConfig + Serialize + DeserializeOwned,
        F: Fn() -> T,
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path.as_ref())?;
        self.ZiFParse(&content, default_factory)
    }

    fn is_multi_config(&self, root: &[(String, Value)]) -> bool {
        !root.is_empty()
            && root
                .iter()
                .all(|(key, _)| key.starts_with(self.component.kind()))
    }
}

/// Loads a YAML document as its top-level entries, in the order the keys
/// appear in the text. An empty document has no entries.
pub(crate) fn load_document(source: &str) -> Result<Vec<(String, Value)>> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(source)
        .map_err(|err| ZiCError::parse(format!("error unmarshalling YAML configuration: {}", err)))?;

    match yaml {
        serde_yaml::Value::Null => Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(k, v)| Ok((mapping_key(k)?, yaml_to_json(v)?)))
            .collect(),
        _ => Err(ZiCError::parse(
            "expected configuration root to be a mapping node",
        )),
    }
}

fn mapping_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(ZiCError::parse(format!(
            "unsupported mapping key: {:?}",
            other
        ))),
    }
}

fn mapping_to_json(mapping: serde_yaml::Mapping) -> Result<Map<String, Value>> {
    let mut obj = Map::new();
    for (k, v) in mapping {
        obj.insert(mapping_key(k)?, yaml_to_json(v)?);
    }
    Ok(obj)
}

fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                let number = n
                    .as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .ok_or_else(|| {
                        ZiCError::parse(format!("unsupported non-finite number: {}", n))
                    })?;
                Value::Number(number)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => Value::Object(mapping_to_json(map)?),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

/// Collapses every `$$` in string leaves to `$`, through arrays and objects.
///
/// Object keys are left untouched.
#[allow(non_snake_case)]
pub fn ZiFEscapeDollarSigns(value: &mut Value) {
    match value {
        Value::String(s) => {
            if s.contains("$$") {
                *s = s.replace("$$", "$");
            }
        }
        Value::Array(items) => items.iter_mut().for_each(ZiFEscapeDollarSigns),
        Value::Object(map) => map.values_mut().for_each(ZiFEscapeDollarSigns),
        _ => {}
    }
}

fn merge_overlay(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (k, v) in overlay_map {
                match base_map.get_mut(&k) {
                    Some(existing) => merge_overlay(existing, v),
                    None => {
                        base_map.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

fn decode_valid<T>(overlay: Map<String, Value>, default: T) -> Result<T>
where
    T: ZiCConfig + Serialize + DeserializeOwned,
{
    let mut overlay = Value::Object(overlay);
    ZiFEscapeDollarSigns(&mut overlay);

    let mut merged = serde_json::to_value(&default)?;
    merge_overlay(&mut merged, overlay);

    let value: T = serde_json::from_value(merged)
        .map_err(|err| ZiCError::parse(format!("failed to decode configuration: {}", err)))?;
    value.validate()?;
    Ok(value)
}
