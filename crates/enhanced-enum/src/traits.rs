use std::fmt;
use std::hash::Hash;
use std::iter::Copied;
use std::slice;

use crate::error::EnumError;

/// The capability set for closed, ordered enumerations.
///
/// A concrete enumeration supplies its declaration-ordered member slice and
/// the `name` / `value` of each member. Everything else (listing, validation,
/// cyclic navigation and lookup) is provided, and every provided operation
/// returns the concrete type itself.
///
/// ## Member sequence
///
/// `MEMBERS` is the declaration order and must be non-empty. Values need not
/// be contiguous or monotonic. Names must be unique.
///
/// ## Duplicate values
///
/// If two members share an underlying value, the member declared first wins:
/// `from_value` returns it and later members are treated as aliases.
///
/// ## Overriding lookups
///
/// `ordinal`, `lookup_name` and `lookup_value` default to linear scans over
/// `MEMBERS`. Implementations generated by [`enhanced_enum!`](crate::enhanced_enum)
/// override them with a discriminant cast and a cached
/// [`ValueIndex`](crate::ValueIndex), which keeps `validate` and `from_value`
/// O(1).
pub trait EnhancedEnum:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The underlying scalar each member carries.
    type Value: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The member's name, exactly as declared.
    fn name(self) -> &'static str;

    /// The member's underlying value.
    fn value(self) -> Self::Value;

    /// Position of the member in declaration order.
    fn ordinal(self) -> usize {
        let position = Self::MEMBERS.iter().position(|m| *m == self);
        debug_assert!(
            position.is_some(),
            "{:?} is missing from {}::MEMBERS",
            self,
            Self::TYPE_NAME
        );
        position.unwrap_or_default()
    }

    /// Exact, case-sensitive name match. `None` if no member has `name`.
    fn lookup_name(name: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.name() == name)
    }

    /// First member in declaration order whose value equals `value`.
    fn lookup_value(value: Self::Value) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.value() == value)
    }

    // ── Listing ──────────────────────────────────────────────────────────────

    /// All members in declaration order, as an owned list.
    fn list_all() -> Vec<Self> {
        Self::MEMBERS.to_vec()
    }

    /// All members in declaration order, as an immutable fixed-length slice.
    fn as_slice() -> &'static [Self] {
        Self::MEMBERS
    }

    fn iter() -> Copied<slice::Iter<'static, Self>> {
        Self::MEMBERS.iter().copied()
    }

    /// Member names in declaration order.
    fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }

    fn count() -> usize {
        Self::MEMBERS.len()
    }

    /// # Panics
    ///
    /// If `MEMBERS` is empty.
    fn first() -> Self {
        Self::MEMBERS[0]
    }

    /// # Panics
    ///
    /// If `MEMBERS` is empty.
    fn last() -> Self {
        Self::MEMBERS[Self::MEMBERS.len() - 1]
    }

    // ── Validation ───────────────────────────────────────────────────────────

    /// Whether `value` is the underlying value of some member.
    fn validate(value: Self::Value) -> bool {
        Self::lookup_value(value).is_some()
    }

    // ── Cyclic navigation ────────────────────────────────────────────────────

    /// The member after this one; the last member wraps to the first.
    fn next(self) -> Self {
        self.nth_next(1)
    }

    /// The member before this one; the first member wraps to the last.
    fn previous(self) -> Self {
        self.nth_previous(1)
    }

    /// The member `n` steps forward, wrapping as often as needed.
    fn nth_next(self, n: usize) -> Self {
        let len = Self::MEMBERS.len();
        Self::MEMBERS[(self.ordinal() + n % len) % len]
    }

    /// The member `n` steps backward, wrapping as often as needed.
    fn nth_previous(self, n: usize) -> Self {
        let len = Self::MEMBERS.len();
        Self::MEMBERS[(self.ordinal() + len - n % len) % len]
    }

    /// Endless iterator starting at this member and following `next`.
    fn cycle(self) -> Cycle<Self> {
        Cycle { current: self }
    }

    // ── Construction ─────────────────────────────────────────────────────────

    /// The member named exactly `name`.
    ///
    /// Returns `Err(EnumError::NotFound)` carrying `name` when no member
    /// matches. There is no case-insensitive or partial fallback.
    fn from_name(name: &str) -> Result<Self, EnumError> {
        Self::lookup_name(name).ok_or_else(|| {
            tracing::debug!(type_name = Self::TYPE_NAME, name, "member name lookup failed");
            EnumError::unknown_name(Self::TYPE_NAME, name)
        })
    }

    /// The first member in declaration order whose value equals `value`.
    ///
    /// Returns `Err(EnumError::NotFound)` carrying `value` when no member
    /// matches.
    fn from_value(value: Self::Value) -> Result<Self, EnumError> {
        Self::lookup_value(value).ok_or_else(|| {
            tracing::debug!(
                type_name = Self::TYPE_NAME,
                value = %value,
                "member value lookup failed"
            );
            EnumError::unknown_value(Self::TYPE_NAME, value)
        })
    }
}

/// Iterator returned by [`EnhancedEnum::cycle`]. Never ends.
#[derive(Debug, Clone)]
pub struct Cycle<E> {
    current: E,
}

impl<E: EnhancedEnum> Iterator for Cycle<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let item = self.current;
        self.current = EnhancedEnum::next(item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-written impl relying on every default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Suit {
        Clubs,
        Diamonds,
        Hearts,
        Spades,
    }

    impl fmt::Display for Suit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl EnhancedEnum for Suit {
        type Value = char;
        const TYPE_NAME: &'static str = "Suit";
        const MEMBERS: &'static [Self] = &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

        fn name(self) -> &'static str {
            match self {
                Suit::Clubs => "Clubs",
                Suit::Diamonds => "Diamonds",
                Suit::Hearts => "Hearts",
                Suit::Spades => "Spades",
            }
        }

        fn value(self) -> char {
            match self {
                Suit::Clubs => 'c',
                Suit::Diamonds => 'd',
                Suit::Hearts => 'h',
                Suit::Spades => 's',
            }
        }
    }

    // Leaves `Hearts` out of MEMBERS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Partial {
        Clubs,
        Hearts,
    }

    impl fmt::Display for Partial {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl EnhancedEnum for Partial {
        type Value = u8;
        const TYPE_NAME: &'static str = "Partial";
        const MEMBERS: &'static [Self] = &[Partial::Clubs];

        fn name(self) -> &'static str {
            match self {
                Partial::Clubs => "Clubs",
                Partial::Hearts => "Hearts",
            }
        }

        fn value(self) -> u8 {
            self as u8
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Hearts is missing from Partial::MEMBERS")]
    fn test_ordinal_of_undeclared_member_asserts() {
        let _ = Partial::Hearts.ordinal();
    }

    #[test]
    fn test_ordinal_of_declared_member() {
        assert_eq!(Partial::Clubs.ordinal(), 0);
    }

    #[test]
    fn test_default_ordinal_follows_members() {
        for (i, suit) in Suit::iter().enumerate() {
            assert_eq!(suit.ordinal(), i);
        }
    }

    #[test]
    fn test_default_navigation_wraps() {
        assert_eq!(Suit::Spades.next(), Suit::Clubs);
        assert_eq!(Suit::Clubs.previous(), Suit::Spades);
        assert_eq!(Suit::Hearts.next(), Suit::Spades);
        assert_eq!(Suit::Diamonds.previous(), Suit::Clubs);
    }

    #[test]
    fn test_nth_steps_are_modular() {
        assert_eq!(Suit::Clubs.nth_next(0), Suit::Clubs);
        assert_eq!(Suit::Clubs.nth_next(4), Suit::Clubs);
        assert_eq!(Suit::Clubs.nth_next(6), Suit::Hearts);
        assert_eq!(Suit::Clubs.nth_previous(1), Suit::Spades);
        assert_eq!(Suit::Clubs.nth_previous(9), Suit::Spades);
        // usize::MAX % 4 == 3
        assert_eq!(Suit::Hearts.nth_previous(usize::MAX), Suit::Spades);
        assert_eq!(Suit::Hearts.nth_next(usize::MAX), Suit::Diamonds);
    }

    #[test]
    fn test_cycle_wraps_forever() {
        let seen: Vec<_> = Suit::Hearts.cycle().take(6).collect();
        assert_eq!(
            seen,
            vec![
                Suit::Hearts,
                Suit::Spades,
                Suit::Clubs,
                Suit::Diamonds,
                Suit::Hearts,
                Suit::Spades
            ]
        );
    }

    #[test]
    fn test_default_lookups() {
        assert_eq!(Suit::from_name("Hearts"), Ok(Suit::Hearts));
        assert!(Suit::from_name("hearts").is_err());
        assert_eq!(Suit::from_value('s'), Ok(Suit::Spades));
        assert!(Suit::validate('d'));
        assert!(!Suit::validate('x'));
        let err = Suit::from_value('x').unwrap_err();
        assert_eq!(err.to_string(), "x is not a valid member value of Suit");
    }

    #[test]
    fn test_listing_helpers() {
        assert_eq!(Suit::count(), 4);
        assert_eq!(Suit::first(), Suit::Clubs);
        assert_eq!(Suit::last(), Suit::Spades);
        assert_eq!(Suit::names(), vec!["Clubs", "Diamonds", "Hearts", "Spades"]);
        assert_eq!(Suit::list_all(), Suit::as_slice().to_vec());
    }
}
