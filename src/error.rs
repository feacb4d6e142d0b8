//! Error types for keyword map construction.

use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which input list an error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgList {
    Overrides,
    Defaults,
}

impl ArgList {
    /// Subject of a key error message.
    fn key_label(self) -> &'static str {
        match self {
            Self::Overrides => "Key",
            Self::Defaults => "Default argument with key",
        }
    }

    /// Subject of a value error message.
    fn value_label(self) -> &'static str {
        match self {
            Self::Overrides => "Value",
            Self::Defaults => "Default argument with value",
        }
    }
}

impl fmt::Display for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overrides => write!(f, "overrides"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Contract violations raised while building a keyword map.
///
/// Every variant aborts the whole call; no partial map is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KwargsError {
    /// The list has odd length, so its final key has no value.
    #[error("{} '{key}' has no matching value", .list.key_label())]
    MalformedArgumentList { list: ArgList, key: Value },

    /// An element in key position is not a string.
    #[error("{} '{key}' of type {found} is not a String", .list.key_label())]
    InvalidKeyType {
        list: ArgList,
        index: usize,
        key: Value,
        found: ValueKind,
    },

    /// An element in value position is not of the variant's type.
    #[error(
        "{} '{value}' of type {found} not allowed in kwargs of type {expected}",
        .list.value_label()
    )]
    InvalidValueType {
        list: ArgList,
        index: usize,
        value: Value,
        found: ValueKind,
        expected: ValueKind,
    },
}

impl KwargsError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedArgumentList { .. } => "MALFORMED_ARGUMENT_LIST",
            Self::InvalidKeyType { .. } => "INVALID_KEY_TYPE",
            Self::InvalidValueType { .. } => "INVALID_VALUE_TYPE",
        }
    }

    /// The list the violation was found in.
    pub fn list(&self) -> ArgList {
        match self {
            Self::MalformedArgumentList { list, .. }
            | Self::InvalidKeyType { list, .. }
            | Self::InvalidValueType { list, .. } => *list,
        }
    }
}

pub type Result<T> = std::result::Result<T, KwargsError>;
