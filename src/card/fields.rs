//! Typed field lookups over a JSON object
//!
//! Each stored record is read key by key so a missing or mistyped field
//! produces an error naming it. Input may use the camelCase spelling of a
//! key; output always uses snake_case.

use serde_json::{Map, Value};

use super::error::{CardError, Result};

/// camelCase spelling accepted on input for a snake_case key
fn alias(key: &str) -> Option<&'static str> {
    match key {
        "creature_class" => Some("creatureClass"),
        "is_titan" => Some("isTitan"),
        "image_path" => Some("imagePath"),
        "energy_costs" => Some("energyCosts"),
        _ => None,
    }
}

pub(crate) struct Fields<'a> {
    record: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'static str, value: &'a Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            CardError::Malformed(format!("{record} must be a JSON object"))
        })?;
        Ok(Self { record, map })
    }

    pub fn get(&self, key: &'static str) -> Option<&'a Value> {
        self.map
            .get(key)
            .or_else(|| alias(key).and_then(|camel| self.map.get(camel)))
    }

    fn require(&self, key: &'static str) -> Result<&'a Value> {
        self.get(key).ok_or(CardError::MissingField {
            record: self.record,
            field: key,
        })
    }

    pub fn invalid(&self, key: &'static str, expected: &'static str) -> CardError {
        CardError::InvalidField {
            record: self.record,
            field: key,
            expected,
        }
    }

    fn as_string(&self, key: &'static str, value: &Value) -> Result<String> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    fn as_int(&self, key: &'static str, value: &Value) -> Result<i64> {
        value.as_i64().ok_or_else(|| self.invalid(key, "an integer"))
    }

    pub fn string(&self, key: &'static str) -> Result<String> {
        self.as_string(key, self.require(key)?)
    }

    pub fn string_or_default(&self, key: &'static str) -> Result<String> {
        match self.get(key) {
            Some(value) => self.as_string(key, value),
            None => Ok(String::new()),
        }
    }

    pub fn int(&self, key: &'static str) -> Result<i64> {
        self.as_int(key, self.require(key)?)
    }

    pub fn bool_or_default(&self, key: &'static str) -> Result<bool> {
        match self.get(key) {
            Some(value) => value.as_bool().ok_or_else(|| self.invalid(key, "a boolean")),
            None => Ok(false),
        }
    }

    pub fn array_or_empty(&self, key: &'static str) -> Result<&'a [Value]> {
        match self.get(key) {
            Some(value) => value
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| self.invalid(key, "an array")),
            None => Ok(&[]),
        }
    }
}
