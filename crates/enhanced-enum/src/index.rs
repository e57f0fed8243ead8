use std::collections::HashMap;

use crate::traits::EnhancedEnum;

/// Value-to-member map for one enumeration type.
///
/// Built once from `E::MEMBERS`. When several members share a value the
/// first-declared member is stored and each later one is recorded as an
/// alias of it.
#[derive(Debug, Clone)]
pub struct ValueIndex<E: EnhancedEnum> {
    by_value: HashMap<E::Value, E>,
    aliases: Vec<(E, E)>,
}

impl<E: EnhancedEnum> ValueIndex<E> {
    pub fn build() -> Self {
        let mut by_value = HashMap::with_capacity(E::MEMBERS.len());
        let mut aliases = Vec::new();

        for &member in E::MEMBERS {
            let canonical = *by_value.entry(member.value()).or_insert(member);
            if canonical != member {
                tracing::warn!(
                    type_name = E::TYPE_NAME,
                    alias = member.name(),
                    canonical = canonical.name(),
                    value = %member.value(),
                    "duplicate member value; lookups resolve to the first declared member"
                );
                aliases.push((member, canonical));
            }
        }

        tracing::debug!(
            type_name = E::TYPE_NAME,
            members = E::MEMBERS.len(),
            distinct_values = by_value.len(),
            "built value index"
        );

        Self { by_value, aliases }
    }

    pub fn get(&self, value: E::Value) -> Option<E> {
        self.by_value.get(&value).copied()
    }

    pub fn contains(&self, value: E::Value) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// `(alias, canonical)` pairs in declaration order of the alias.
    pub fn aliases(&self) -> &[(E, E)] {
        &self.aliases
    }
}
