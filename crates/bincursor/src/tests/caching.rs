use core::cell::Cell;
use std::{collections::hash_map::DefaultHasher, hash::BuildHasherDefault};

use crate::{Cache, CacheRegistry, Int, Memoized, Value};

#[test]
fn get_derives_suffix_from_enclosing_entry() {
    let mut cache = Cache::new("#Strings");
    cache.put(100, Value::from("HELLOWORLD"));
    cache.put(300, Value::from("SECOND"));

    assert_eq!(cache.get(103), Some(&Value::from("LOWORLD")));
    // The derived suffix is now a direct entry of its own.
    assert!(cache.contains_key(103));
    assert_eq!(cache.get(103), Some(&Value::from("LOWORLD")));
    assert_eq!(cache.len(), 3);
}

#[test]
fn aliasing_needs_at_least_two_sliceable_entries() {
    let mut cache = Cache::new("sparse");
    cache.put(100, Value::from("HELLOWORLD"));
    assert_eq!(cache.get(103), None);
}

#[test]
fn byte_values_alias_like_strings() {
    let mut cache = Cache::new("#Blob");
    cache.put(10, Value::from(&b"ABCDEF"[..]));
    cache.put(50, Value::from(&b"XY"[..]));
    assert_eq!(cache.get(13), Some(&Value::from(&b"DEF"[..])));
}

#[test]
fn suffix_must_fall_strictly_inside_the_stored_value() {
    let mut cache = Cache::new("bounds");
    cache.put(100, Value::from("HI"));
    cache.put(200, Value::from("YO"));
    // Offset equal to the stored length is past the value, not inside it.
    assert_eq!(cache.get(102), None);
    assert_eq!(cache.get(150), None);
}

#[test]
fn scalar_entries_never_join_the_offset_index() {
    let mut cache = Cache::new("mixed");
    cache.put(100, Value::Int(7));
    cache.put(200, Value::from("AB"));
    cache.put(300, Value::from("CD"));
    // No sliceable entry at or below 101, so nothing to derive from.
    assert_eq!(cache.get(101), None);
}

#[test]
fn string_slices_respect_utf8_boundaries() {
    let mut cache = Cache::new("unicode");
    cache.put(100, Value::from("a\u{E9}x"));
    cache.put(900, Value::from("z"));
    // Offset 2 lands inside the two-byte code point.
    assert_eq!(cache.get(102), None);
    assert_eq!(cache.get(101), Some(&Value::from("\u{E9}x")));
}

#[test]
fn overwriting_a_key_keeps_one_index_entry() {
    let mut cache = Cache::new("overwrite");
    cache.put(100, Value::from("AAAA"));
    cache.put(100, Value::from("BBBB"));
    cache.put(200, Value::from("X"));
    assert_eq!(cache.get(102), Some(&Value::from("BB")));
}

#[test]
fn registry_returns_the_same_instance_per_name() {
    let mut registry = CacheRegistry::new();
    registry.cache("x").put(1, Value::Int(9));

    // A second lookup by the same name sees the earlier mutation.
    assert_eq!(registry.cache("x").get(1), Some(&Value::Int(9)));
    assert_eq!(registry.cache("x").name(), "x");
    assert_eq!(registry.len(), 1);

    registry.cache("y");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.cache("y").get(1), None);
}

#[test]
fn memoized_invokes_operation_only_on_miss() {
    let calls = Cell::new(0u32);
    let mut decode = Memoized::new("parse_row", &["table", "2"], |args: &(u64, u64)| {
        calls.set(calls.get() + 1);
        Value::Int(Int::from(args.0 + args.1))
    });
    let mut registry = CacheRegistry::new();

    assert_eq!(decode.cache_name(), "parse_row#table#2");
    assert_eq!(decode.call(&mut registry, &(1, 2)), Value::Int(3));
    assert_eq!(decode.call(&mut registry, &(1, 2)), Value::Int(3));
    assert_eq!(calls.get(), 1);

    assert_eq!(decode.call(&mut registry, &(2, 2)), Value::Int(4));
    assert_eq!(calls.get(), 2);

    // The memo cache is an ordinary named cache in the registry.
    assert_eq!(registry.cache("parse_row#table#2").len(), 2);
}

#[test]
fn memoized_accepts_a_custom_hasher() {
    let mut registry = CacheRegistry::new();
    let mut op = Memoized::with_hasher(
        "lookup",
        &[],
        |name: &&str| Value::from(*name),
        BuildHasherDefault::<DefaultHasher>::default(),
    );
    assert_eq!(op.cache_name(), "lookup");
    assert_eq!(op.call(&mut registry, &"entry"), Value::from("entry"));
    assert_eq!(op.call(&mut registry, &"entry"), Value::from("entry"));
    assert_eq!(registry.cache("lookup").len(), 1);
}
