use std::fmt;

/// Which lookup failed, together with the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// A member name passed to `from_name` / `FromStr`.
    Name(String),
    /// A raw value passed to `from_value` / `TryFrom`, rendered with `Display`.
    Value(String),
}

impl LookupKey {
    /// The offending input as the caller supplied it.
    pub fn as_str(&self) -> &str {
        match self {
            LookupKey::Name(s) | LookupKey::Value(s) => s,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            LookupKey::Name(_) => "name",
            LookupKey::Value(_) => "value",
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All errors that can be returned by an `EnhancedEnum` lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// No member matched the lookup key.
    #[error("{key} is not a valid member {kind} of {type_name}", kind = .key.kind())]
    NotFound {
        type_name: &'static str,
        key: LookupKey,
    },
}

impl EnumError {
    pub(crate) fn unknown_name(type_name: &'static str, name: &str) -> Self {
        EnumError::NotFound {
            type_name,
            key: LookupKey::Name(name.to_string()),
        }
    }

    pub(crate) fn unknown_value<V: fmt::Display>(type_name: &'static str, value: V) -> Self {
        EnumError::NotFound {
            type_name,
            key: LookupKey::Value(value.to_string()),
        }
    }

    /// The offending name or value.
    ///
    /// Values are stored in their `Display` form, so for string-valued
    /// enums a failed value lookup and a failed name lookup can carry the
    /// same text. Use [`is_name`](Self::is_name) / [`is_value`](Self::is_value)
    /// or match on [`LookupKey`] to tell them apart.
    pub fn key(&self) -> &str {
        match self {
            EnumError::NotFound { key, .. } => key.as_str(),
        }
    }

    /// The enumeration type the lookup ran against.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumError::NotFound { type_name, .. } => type_name,
        }
    }

    pub fn is_name(&self) -> bool {
        matches!(
            self,
            EnumError::NotFound {
                key: LookupKey::Name(_),
                ..
            }
        )
    }

    pub fn is_value(&self) -> bool {
        matches!(
            self,
            EnumError::NotFound {
                key: LookupKey::Value(_),
                ..
            }
        )
    }
}
