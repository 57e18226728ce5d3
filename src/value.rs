//! The dynamic rendition of the fill-if-unset rule, over JSON objects.

use serde_json::{Map, Value};

use crate::eq::eq;

/// Fill unset keys of `dest` from `sources`, left to right.
///
/// A destination that isn't an object is replaced by a fresh empty one before
/// merging. `Null` sources are skipped; other non-object sources carry no
/// enumerable keys and are no-ops.
///
/// A key is considered unset if it is absent from the destination or its
/// current value is the `Null` sentinel. Once a key holds a non-`Null` value,
/// no later source may overwrite it, so earlier sources win and repeated
/// application changes nothing.
///
/// ```
/// use serde_json::json;
/// use struct_defaults::defaults;
///
/// let mut options = json!({ "a": 1 });
/// defaults(&mut options, &[json!({ "b": 2 }), json!({ "a": 3 })]);
/// assert_eq!(options, json!({ "a": 1, "b": 2 }));
/// ```
pub fn defaults(dest: &mut Value, sources: &[Value]) {
    if !dest.is_object() {
        *dest = Value::Object(Map::new());
    }

    if let Value::Object(map) = dest {
        for source in sources {
            apply_source(map, source);
        }
    }
}

/// By-value variant of [defaults], returning the (possibly coerced)
/// destination for chaining.
pub fn with_defaults(dest: Value, sources: &[Value]) -> Value {
    let mut dest = dest;
    defaults(&mut dest, sources);
    dest
}

/// Fill `dest`'s unset keys from a single source value.
fn apply_source(dest: &mut Map<String, Value>, source: &Value) {
    let entries = match source {
        Value::Object(entries) => entries,
        // Null sources are skipped; other primitives enumerate no keys.
        _ => return,
    };

    for (key, value) in entries {
        let unset = match dest.get(key) {
            None => true,
            Some(current) => eq(current, &Value::Null),
        };
        if unset {
            dest.insert(key.clone(), value.clone());
        }
    }
}
