//! Value types accepted by the typed builders.

use crate::value::{Value, ValueKind};

mod sealed {
    pub trait Sealed {}
}

/// A value type a keyword map can be built for.
///
/// Typed variants accept exactly one [`ValueKind`]; the generic variant
/// (`Value` itself) accepts any kind and leaves downcasting to the caller.
/// The set of variants is closed:
///
/// ```compile_fail
/// use kwmap::{KwType, Value, ValueKind};
///
/// struct Anything;
///
/// impl KwType for Anything {
///     const KIND: Option<ValueKind> = None;
///
///     fn from_value(value: Value) -> Result<Self, Value> {
///         Err(value)
///     }
/// }
/// ```
pub trait KwType: sealed::Sealed + Sized {
    /// Kind enforced on every value, or None if any kind is accepted.
    const KIND: Option<ValueKind>;

    /// Extract `Self` from a value, handing the value back on mismatch.
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl sealed::Sealed for Value {}

impl KwType for Value {
    const KIND: Option<ValueKind> = None;

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

macro_rules! impl_kw_type {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl KwType for $ty {
            const KIND: Option<ValueKind> = Some(ValueKind::$variant);

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

impl_kw_type!(String, Str);
impl_kw_type!(i32, Int);
impl_kw_type!(f64, Double);
impl_kw_type!(f32, Float);
impl_kw_type!(bool, Bool);
impl_kw_type!(char, Char);
impl_kw_type!(i8, Byte);
impl_kw_type!(i16, Short);
impl_kw_type!(i64, Long);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_accepts_any_kind() {
        assert_eq!(<Value as KwType>::KIND, None);
        assert_eq!(Value::from_value(Value::Char('x')), Ok(Value::Char('x')));
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(i32::from_value(Value::Int(3)), Ok(3));
        // No widening from Int to Long or Double
        assert_eq!(i64::from_value(Value::Int(3)), Err(Value::Int(3)));
        assert_eq!(f64::from_value(Value::Int(3)), Err(Value::Int(3)));
        assert_eq!(f32::from_value(Value::Double(1.0)), Err(Value::Double(1.0)));
    }

    fn assert_rejects_other_kinds<T: KwType>() {
        let expected = T::KIND.unwrap();
        let samples = [
            Value::from("s"),
            Value::Int(1),
            Value::Double(1.0),
            Value::Float(1.0),
            Value::Bool(true),
            Value::Char('c'),
            Value::Byte(1),
            Value::Short(1),
            Value::Long(1),
        ];
        for sample in samples {
            let kind = sample.kind();
            assert_eq!(T::from_value(sample).is_ok(), kind == expected, "{:?}", kind);
        }
    }

    #[test]
    fn test_typed_variants_accept_only_their_kind() {
        assert_rejects_other_kinds::<String>();
        assert_rejects_other_kinds::<i32>();
        assert_rejects_other_kinds::<f64>();
        assert_rejects_other_kinds::<f32>();
        assert_rejects_other_kinds::<bool>();
        assert_rejects_other_kinds::<char>();
        assert_rejects_other_kinds::<i8>();
        assert_rejects_other_kinds::<i16>();
        assert_rejects_other_kinds::<i64>();
    }

    #[test]
    fn test_declared_kinds() {
        assert_eq!(String::KIND, Some(ValueKind::Str));
        assert_eq!(i8::KIND, Some(ValueKind::Byte));
        assert_eq!(i16::KIND, Some(ValueKind::Short));
        assert_eq!(bool::KIND, Some(ValueKind::Bool));
    }
}
