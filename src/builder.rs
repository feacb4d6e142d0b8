//! Keyword map builder.
//!
//! Turns a flat alternating key/value list (the overrides) plus an optional
//! flat default list into a key -> value map. Defaults are applied first,
//! overrides on top, so a key in both resolves to the override.
//!
//! Validation order:
//! 1. Default list length, then override list length
//! 2. Default pairs, key before value
//! 3. Override pairs, key before value
//!
//! Any violation aborts the call.

use std::collections::HashMap;

use crate::error::{ArgList, KwargsError, Result};
use crate::kind::KwType;
use crate::value::Value;

/// Result of a build: key -> value.
pub type KwMap<T> = HashMap<String, T>;

/// Build a keyword map whose values are all of type `T`.
///
/// Pass `Value` as `T` to accept heterogeneous values.
pub fn build<T: KwType>(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<T>> {
    check_even(ArgList::Defaults, defaults)?;
    check_even(ArgList::Overrides, overrides)?;

    let mut map = HashMap::with_capacity((defaults.len() + overrides.len()) / 2);
    apply(&mut map, ArgList::Defaults, defaults)?;
    apply(&mut map, ArgList::Overrides, overrides)?;

    tracing::debug!(
        variant = std::any::type_name::<T>(),
        defaults = defaults.len() / 2,
        overrides = overrides.len() / 2,
        keys = map.len(),
        "built keyword map"
    );
    Ok(map)
}

/// Ensure a list alternates key, value, key, value.
fn check_even(list: ArgList, entries: &[Value]) -> Result<()> {
    match entries.last() {
        Some(last) if entries.len() % 2 != 0 => Err(KwargsError::MalformedArgumentList {
            list,
            key: last.clone(),
        }),
        _ => Ok(()),
    }
}

/// Validate and insert each pair of `entries`, later pairs overwriting earlier ones.
fn apply<T: KwType>(map: &mut KwMap<T>, list: ArgList, entries: &[Value]) -> Result<()> {
    for (pair_idx, pair) in entries.chunks_exact(2).enumerate() {
        let index = pair_idx * 2;

        let key = match &pair[0] {
            Value::Str(key) => key.clone(),
            other => {
                return Err(KwargsError::InvalidKeyType {
                    list,
                    index,
                    key: other.clone(),
                    found: other.kind(),
                })
            }
        };

        let value = match T::from_value(pair[1].clone()) {
            Ok(v) => v,
            Err(value) => {
                let found = value.kind();
                return Err(KwargsError::InvalidValueType {
                    list,
                    index: index + 1,
                    value,
                    found,
                    // KwType is sealed: only typed variants reject, and they set KIND
                    expected: T::KIND.unwrap_or(found),
                });
            }
        };

        if map.insert(key, value).is_some() {
            tracing::trace!(list = %list, index, key = %pair[0], "replaced earlier value");
        }
    }
    Ok(())
}

/// Generic variant: any value kind accepted.
pub fn kw(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<Value>> {
    build(overrides, defaults)
}

pub fn kw_string(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<String>> {
    build(overrides, defaults)
}

/// 32-bit signed integers.
pub fn kw_integer(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<i32>> {
    build(overrides, defaults)
}

/// Double-precision floats.
pub fn kw_double(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<f64>> {
    build(overrides, defaults)
}

/// Single-precision floats.
pub fn kw_float(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<f32>> {
    build(overrides, defaults)
}

pub fn kw_boolean(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<bool>> {
    build(overrides, defaults)
}

pub fn kw_char(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<char>> {
    build(overrides, defaults)
}

/// 8-bit signed integers.
pub fn kw_byte(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<i8>> {
    build(overrides, defaults)
}

/// 16-bit signed integers.
pub fn kw_short(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<i16>> {
    build(overrides, defaults)
}

/// 64-bit signed integers.
pub fn kw_long(overrides: &[Value], defaults: &[Value]) -> Result<KwMap<i64>> {
    build(overrides, defaults)
}
