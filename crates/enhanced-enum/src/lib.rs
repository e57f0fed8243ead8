//! enhanced-enum: a capability set for closed, ordered enumerations.
//!
//! [`EnhancedEnum`] adds display, listing, validation, cyclic navigation and
//! name/value lookup to any fieldless enum. Every operation returns the
//! concrete enum type. [`enhanced_enum!`] defines an enum and implements the
//! trait for it; the [`conformance`] module checks any implementation.
//!
//! ```
//! use enhanced_enum::{enhanced_enum, EnhancedEnum};
//!
//! enhanced_enum! {
//!     pub enum Weekday: u8 {
//!         Monday = 1,
//!         Tuesday = 2,
//!         Wednesday = 3,
//!         Thursday = 4,
//!         Friday = 5,
//!         Saturday = 6,
//!         Sunday = 7,
//!     }
//! }
//!
//! assert_eq!(Weekday::Sunday.next(), Weekday::Monday);
//! assert_eq!("Friday".parse::<Weekday>(), Ok(Weekday::Friday));
//! assert!(!Weekday::validate(0));
//! ```

pub mod conformance;
mod error;
mod index;
mod macros;
#[cfg(feature = "serde")]
pub mod serde;
mod traits;

pub use error::{EnumError, LookupKey};
pub use index::ValueIndex;
pub use traits::{Cycle, EnhancedEnum};

#[doc(hidden)]
pub mod __private {
    pub use crate::macros::names_unique;
    pub use std::sync::OnceLock;
}
