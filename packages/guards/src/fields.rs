//! Field access for entity guards.

use serde_json::{Map, Value};

/// A JSON object being checked against a named schema.
///
/// Every failed field check is logged at `trace` level with the schema and
/// field name; the guards themselves only ever return `bool`.
pub(crate) struct Fields<'a> {
    schema: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Start checking `value`, or `None` if it is not an object.
    pub(crate) fn of(schema: &'static str, value: &'a Value) -> Option<Self> {
        match value.as_object() {
            Some(map) => Some(Self { schema, map }),
            None => {
                tracing::trace!(schema, "not an object");
                None
            }
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// The key must be present and pass `check`.
    pub(crate) fn required(&self, key: &str, check: impl Fn(&Value) -> bool) -> bool {
        match self.map.get(key) {
            Some(value) if check(value) => true,
            Some(_) => self.reject(key, "invalid"),
            None => self.reject(key, "missing"),
        }
    }

    /// The key may be absent; if present it must pass `check`.
    pub(crate) fn optional(&self, key: &str, check: impl Fn(&Value) -> bool) -> bool {
        match self.map.get(key) {
            None => true,
            Some(value) if check(value) => true,
            Some(_) => self.reject(key, "invalid"),
        }
    }

    /// The key may be absent or `null`; otherwise it must pass `check`.
    pub(crate) fn nullable(&self, key: &str, check: impl Fn(&Value) -> bool) -> bool {
        match self.map.get(key) {
            None | Some(Value::Null) => true,
            Some(value) if check(value) => true,
            Some(_) => self.reject(key, "invalid"),
        }
    }

    /// The key must hold exactly the string `expected`.
    pub(crate) fn literal(&self, key: &str, expected: &str) -> bool {
        match self.map.get(key).and_then(Value::as_str) {
            Some(found) if found == expected => true,
            _ => self.reject(key, "wrong discriminator"),
        }
    }

    fn reject(&self, field: &str, reason: &'static str) -> bool {
        tracing::trace!(schema = self.schema, field, reason, "field rejected");
        false
    }
}
