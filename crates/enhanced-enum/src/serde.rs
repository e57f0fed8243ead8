//! `#[serde(with = "...")]` adapters for `EnhancedEnum` fields.
//!
//! - [`by_name`] writes the member name and reads it back with `from_name`.
//! - [`by_value`] writes the underlying value and reads it back with
//!   `from_value`.
//!
//! Unknown names or values fail deserialization with the `NotFound` message.

/// Serialize a member as its name.
pub mod by_name {
    use ::serde::de::Error as _;
    use ::serde::{Deserialize, Deserializer, Serializer};

    use crate::EnhancedEnum;

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: EnhancedEnum,
        S: Serializer,
    {
        serializer.serialize_str(member.name())
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: EnhancedEnum,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        E::from_name(&name).map_err(D::Error::custom)
    }
}

/// Serialize a member as its underlying value.
pub mod by_value {
    use ::serde::de::Error as _;
    use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::EnhancedEnum;

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: EnhancedEnum,
        E::Value: Serialize,
        S: Serializer,
    {
        member.value().serialize(serializer)
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: EnhancedEnum,
        E::Value: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let value = <E::Value as Deserialize<'de>>::deserialize(deserializer)?;
        E::from_value(value).map_err(D::Error::custom)
    }
}
