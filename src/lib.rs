//! Keyword arguments for positional call sites.
//!
//! A caller passes a flat list alternating keys and values, optionally with
//! a flat list of defaults, and gets back a map from key to value. Typed
//! builders enforce a single value type across both lists; the generic
//! builder accepts any [`Value`] and leaves downcasting to the caller.

mod builder;
mod error;
mod kind;
mod macros;
pub mod source;
mod value;

pub use builder::{
    build, kw, kw_boolean, kw_byte, kw_char, kw_double, kw_float, kw_integer, kw_long, kw_short,
    kw_string, KwMap,
};
pub use error::{ArgList, KwargsError, Result};
pub use kind::KwType;
pub use source::SourceError;
pub use value::{Value, ValueKind};
