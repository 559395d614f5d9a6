//! Classifications emitted alongside vault & registry change events

use core::fmt::{self, Display, Formatter};

use alloy_primitives::U256;

/// Error returned when a raw value does not name a variant of a change type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownValue {
    /// The name of the change type being decoded
    pub kind: &'static str,
    /// The raw value that failed to decode
    pub value: u8,
}

impl Display for UnknownValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {}", self.kind, self.value)
    }
}

impl core::error::Error for UnknownValue {}

/// Declares a closed change-type enum with conversions to and from its
/// on-chain numeric value
macro_rules! change_type {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The numeric value emitted on-chain
            pub const fn value(self) -> u8 {
                self as u8
            }

            /// The numeric value as a `uint256`. Use this or `.into()`;
            /// `U256::from` resolves to ruint's inherent constructor
            pub fn to_u256(self) -> U256 {
                U256::from(self.value())
            }
        }

        impl From<$name> for u8 {
            fn from(change: $name) -> u8 {
                change.value()
            }
        }

        impl From<$name> for U256 {
            fn from(change: $name) -> U256 {
                change.to_u256()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownValue;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(UnknownValue { kind: stringify!($name), value }),
                }
            }
        }
    };
}

change_type! {
    /// Whether a strategy was added to or revoked from a vault
    StrategyChangeType {
        /// The strategy was added
        Added = 1,
        /// The strategy was revoked
        Revoked = 2,
    }
}

change_type! {
    /// Whether a role was opened to everyone or closed again
    RoleStatusChange {
        /// The role was opened
        Opened = 1,
        /// The role was closed
        Closed = 2,
    }
}

change_type! {
    /// Whether an entry was added to or removed from a registry
    ChangeType {
        /// The entry was added
        Added = 1,
        /// The entry was removed
        Removed = 2,
    }
}
