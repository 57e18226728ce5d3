mod structs;

use serde_json::json;
use struct_defaults::{defaults, with_defaults, StructDefaults, StructDefaultsRef};

use crate::structs::*;

fn main() {
    fill_unset();
    keep_set();
    layering();
    nested_options();
    value_defaults();
}

/// Unset fields are filled, everything else stays untouched.
fn fill_unset() {
    let mut base = Base::new();
    assert_eq!(base.optional, None);

    base.defaults_ref(&Identical::new());
    assert_eq!(base.plain, "base".to_string());
    assert_eq!(base.optional, Some("identical".to_string()));
}

/// A field that already holds a value is never overwritten.
fn keep_set() {
    let mut base = Base::new();
    base.optional = Some("set".to_string());

    base.defaults_ref(&Identical::new());
    assert_eq!(base.optional, Some("set".to_string()));

    base.defaults(Mixed::new());
    assert_eq!(base.optional, Some("set".to_string()));
}

/// Sources are layered through successive calls; the first one to fill a
/// field wins.
fn layering() {
    let mut base = Base::new();

    base.defaults_ref(&Optional::new());
    base.defaults_ref(&Identical::new());
    assert_eq!(base.optional, Some("optional".to_string()));

    // Applying the same layers again changes nothing.
    base.defaults(Optional::new());
    base.defaults(Identical::new());
    assert_eq!(base.plain, "base".to_string());
    assert_eq!(base.optional, Some("optional".to_string()));
}

/// `Option<Option<T>>` sources only count as set when the outer layer is
/// `Some`; an inner `None` fills nothing and leaves the field refillable.
fn nested_options() {
    let mut base = Base::new();

    let mut source = Optional::new();
    source.optional = None;
    base.defaults_ref(&source);
    assert_eq!(base.optional, None);

    let mut source = Mixed::new();
    source.optional = Some(None);
    base.defaults(source);
    assert_eq!(base.optional, None);

    base.defaults(Identical::new());
    assert_eq!(base.optional, Some("identical".to_string()));
}

/// The dynamic merger follows the same rules over JSON objects.
fn value_defaults() {
    let mut options = json!({ "a": 1 });
    defaults(&mut options, &[json!({ "b": 2 }), json!({ "a": 3 })]);
    assert_eq!(options, json!({ "a": 1, "b": 2 }));

    let mut options = json!({ "a": null });
    defaults(&mut options, &[json!({ "a": 1 }), json!({ "a": 2 })]);
    assert_eq!(options, json!({ "a": 1 }));

    let merged = with_defaults(json!(null), &[json!(null), json!({ "a": 1 })]);
    assert_eq!(merged, json!({ "a": 1 }));
}
