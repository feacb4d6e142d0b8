//! Call-site helper for writing entry lists.

/// Build an entry list from a flat comma-separated list of scalars.
///
/// ```
/// use kwmap::{entries, kw_integer};
///
/// let map = kw_integer(&entries!["num", 6, "min", 2, "max", 7], &[]).unwrap();
/// assert_eq!(map["max"], 7);
/// ```
#[macro_export]
macro_rules! entries {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_entries_converts_each_item() {
        let list = entries!["name", "kw", "count", 3, "verbose", true];
        assert_eq!(
            list,
            vec![
                Value::from("name"),
                Value::from("kw"),
                Value::from("count"),
                Value::Int(3),
                Value::from("verbose"),
                Value::Bool(true),
            ]
        );
    }

    #[test]
    fn test_entries_empty_and_trailing_comma() {
        assert!(entries![].is_empty());
        assert_eq!(entries!["a", 'b',].len(), 2);
    }
}
