/// Define a fieldless enum and implement [`EnhancedEnum`](crate::EnhancedEnum) for it.
///
/// Each variant carries an underlying value of the declared value type and,
/// optionally, a member name that differs from the variant identifier.
///
/// ```
/// use enhanced_enum::{enhanced_enum, EnhancedEnum};
///
/// enhanced_enum! {
///     pub enum Color: i32 {
///         Red as "RED" = 1,
///         Green as "GREEN" = 2,
///         Blue as "BLUE" = 3,
///     }
/// }
///
/// assert_eq!(Color::Red.to_string(), "RED");
/// assert_eq!(Color::from_value(3), Ok(Color::Blue));
/// assert_eq!(Color::Red.previous(), Color::Blue);
/// assert!(Color::from_name("YELLOW").is_err());
/// ```
///
/// The generated enum always derives `Debug, Clone, Copy, PartialEq, Eq, Hash`;
/// extra attributes (including further derives such as `PartialOrd`) are passed
/// through. Besides `EnhancedEnum` the macro implements `Display` (the member
/// name), `FromStr` and `TryFrom<Value>` (both failing with
/// [`EnumError`](crate::EnumError)), and `From<Enum> for Value`.
///
/// Member names must be unique; a clash is a compile-time error:
///
/// ```compile_fail
/// use enhanced_enum::enhanced_enum;
///
/// enhanced_enum! {
///     enum Clash: u8 {
///         A as "B" = 1,
///         B = 2,
///     }
/// }
/// ```
///
/// Value lookups go through a [`ValueIndex`](crate::ValueIndex) built on first
/// use and shared for the rest of the process.
#[macro_export]
macro_rules! enhanced_enum {
    (@name $variant:ident $member_name:literal) => {
        $member_name
    };
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $value_ty:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $member_name:literal)? = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        const _: () = assert!(
            $crate::__private::names_unique(&[
                $($crate::enhanced_enum!(@name $variant $($member_name)?)),+
            ]),
            "enhanced_enum!: two members share a name",
        );

        impl $crate::EnhancedEnum for $name {
            type Value = $value_ty;

            const TYPE_NAME: &'static str = stringify!($name);

            const MEMBERS: &'static [Self] = &[$($name::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $crate::enhanced_enum!(@name $variant $($member_name)?),)+
                }
            }

            fn value(self) -> $value_ty {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }

            fn lookup_name(name: &str) -> Option<Self> {
                match name {
                    $($crate::enhanced_enum!(@name $variant $($member_name)?) => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn lookup_value(value: $value_ty) -> Option<Self> {
                static INDEX: $crate::__private::OnceLock<$crate::ValueIndex<$name>> =
                    $crate::__private::OnceLock::new();
                INDEX.get_or_init($crate::ValueIndex::<$name>::build).get(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::EnhancedEnum::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::EnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::EnhancedEnum>::from_name(s)
            }
        }

        impl ::std::convert::TryFrom<$value_ty> for $name {
            type Error = $crate::EnumError;

            fn try_from(value: $value_ty) -> ::std::result::Result<Self, Self::Error> {
                <$name as $crate::EnhancedEnum>::from_value(value)
            }
        }

        impl ::std::convert::From<$name> for $value_ty {
            fn from(member: $name) -> Self {
                $crate::EnhancedEnum::value(member)
            }
        }
    };
}

#[doc(hidden)]
pub const fn names_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Generate one `#[test]` per conformance category for an `EnhancedEnum` type.
///
/// The tests live in a module named by the first argument so the macro can be
/// invoked once per type in the same file:
///
/// ```ignore
/// enum_conformance_tests!(color_conformance: Color);
/// enum_conformance_tests!(planet_conformance: Planet);
/// ```
#[macro_export]
macro_rules! enum_conformance_tests {
    ($module:ident : $ty:ty) => {
        mod $module {
            #[allow(unused_imports)]
            use super::*;

            fn check(category: $crate::conformance::Category) {
                let report = $crate::conformance::run_category::<$ty>(category);
                assert!(report.failed == 0, "{}", report);
                assert!(report.total > 0, "no {} checks ran", category);
            }

            #[test]
            fn conformance_listing() {
                check($crate::conformance::Category::Listing);
            }

            #[test]
            fn conformance_display() {
                check($crate::conformance::Category::Display);
            }

            #[test]
            fn conformance_navigation() {
                check($crate::conformance::Category::Navigation);
            }

            #[test]
            fn conformance_lookup() {
                check($crate::conformance::Category::Lookup);
            }

            #[test]
            fn conformance_validate() {
                check($crate::conformance::Category::Validate);
            }
        }
    };
}
