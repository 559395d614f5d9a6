//! Role permissions granted on a vault.
//!
//! Each role is a single bit in a `uint256` bitmask on the vault. Roles are
//! combined with bitwise OR, and [`Roles::ALL`] is the union of every role.

use core::{
    fmt::{self, Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use alloy_primitives::U256;

/// A set of vault roles, represented as a bitmask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Roles(u16);

impl Roles {
    /// Can add strategies to the vault
    pub const ADD_STRATEGY_MANAGER: Roles = Roles(1 << 0);
    /// Can remove strategies from the vault
    pub const REVOKE_STRATEGY_MANAGER: Roles = Roles(1 << 1);
    /// Can force remove a strategy causing a loss
    pub const FORCE_REVOKE_MANAGER: Roles = Roles(1 << 2);
    /// Can set the accountant that assesses fees
    pub const ACCOUNTANT_MANAGER: Roles = Roles(1 << 3);
    /// Can set the default withdrawal queue
    pub const QUEUE_MANAGER: Roles = Roles(1 << 4);
    /// Calls report for strategies
    pub const REPORTING_MANAGER: Roles = Roles(1 << 5);
    /// Adds and removes debt from strategies
    pub const DEBT_MANAGER: Roles = Roles(1 << 6);
    /// Can set the max debt for a strategy
    pub const MAX_DEBT_MANAGER: Roles = Roles(1 << 7);
    /// Sets deposit limit and module for the vault
    pub const DEPOSIT_LIMIT_MANAGER: Roles = Roles(1 << 8);
    /// Sets the withdraw limit module
    pub const WITHDRAW_LIMIT_MANAGER: Roles = Roles(1 << 9);
    /// Sets the minimum total idle the vault should keep
    pub const MINIMUM_IDLE_MANAGER: Roles = Roles(1 << 10);
    /// Sets the profit unlock duration
    pub const PROFIT_UNLOCK_MANAGER: Roles = Roles(1 << 11);
    /// Can purchase bad debt from the vault
    pub const DEBT_PURCHASER: Roles = Roles(1 << 12);
    /// Can shutdown the vault in an emergency
    pub const EMERGENCY_MANAGER: Roles = Roles(1 << 13);

    /// Every named role, in bit order
    pub const NAMED: [(&'static str, Roles); 14] = [
        ("ADD_STRATEGY_MANAGER", Self::ADD_STRATEGY_MANAGER),
        ("REVOKE_STRATEGY_MANAGER", Self::REVOKE_STRATEGY_MANAGER),
        ("FORCE_REVOKE_MANAGER", Self::FORCE_REVOKE_MANAGER),
        ("ACCOUNTANT_MANAGER", Self::ACCOUNTANT_MANAGER),
        ("QUEUE_MANAGER", Self::QUEUE_MANAGER),
        ("REPORTING_MANAGER", Self::REPORTING_MANAGER),
        ("DEBT_MANAGER", Self::DEBT_MANAGER),
        ("MAX_DEBT_MANAGER", Self::MAX_DEBT_MANAGER),
        ("DEPOSIT_LIMIT_MANAGER", Self::DEPOSIT_LIMIT_MANAGER),
        ("WITHDRAW_LIMIT_MANAGER", Self::WITHDRAW_LIMIT_MANAGER),
        ("MINIMUM_IDLE_MANAGER", Self::MINIMUM_IDLE_MANAGER),
        ("PROFIT_UNLOCK_MANAGER", Self::PROFIT_UNLOCK_MANAGER),
        ("DEBT_PURCHASER", Self::DEBT_PURCHASER),
        ("EMERGENCY_MANAGER", Self::EMERGENCY_MANAGER),
    ];

    /// The union of every named role
    pub const ALL: Roles = Self::union_of(&Self::NAMED);

    /// The empty role set
    pub const EMPTY: Roles = Roles(0);

    /// Fold a list of named roles into their union
    const fn union_of(named: &[(&'static str, Roles)]) -> Roles {
        let mut bits = 0;
        let mut i = 0;
        while i < named.len() {
            bits |= named[i].1 .0;
            i += 1;
        }

        Roles(bits)
    }

    /// The raw bitmask
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Construct a role set from a raw bitmask, returning `None` if any bit
    /// does not correspond to a named role
    pub const fn from_bits(bits: u16) -> Option<Roles> {
        if bits & !Self::ALL.0 != 0 {
            None
        } else {
            Some(Roles(bits))
        }
    }

    /// Construct a role set from a raw bitmask, dropping unknown bits
    pub const fn from_bits_truncate(bits: u16) -> Roles {
        Roles(bits & Self::ALL.0)
    }

    /// Construct a role set from a vault's `uint256` role mask, returning
    /// `None` if any bit does not correspond to a named role
    pub fn from_u256(value: U256) -> Option<Roles> {
        let bits: u16 = value.try_into().ok()?;
        Self::from_bits(bits)
    }

    /// The role set as the `uint256` expected by the vault.
    ///
    /// Use this or `.into()`; `U256::from(roles)` resolves to ruint's inherent
    /// `Uint::from` and does not accept a role set.
    pub fn to_u256(self) -> U256 {
        U256::from(self.0)
    }

    /// Whether every role in `other` is also in `self`
    pub const fn contains(self, other: Roles) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the set holds no roles
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The roles in either set
    pub const fn union(self, other: Roles) -> Roles {
        Roles(self.0 | other.0)
    }

    /// The roles in both sets
    pub const fn intersection(self, other: Roles) -> Roles {
        Roles(self.0 & other.0)
    }

    /// The roles in `self` that are not in `other`
    pub const fn difference(self, other: Roles) -> Roles {
        Roles(self.0 & !other.0)
    }

    /// Iterate over the named roles contained in the set, in bit order
    pub fn iter(self) -> impl Iterator<Item = (&'static str, Roles)> {
        Self::NAMED
            .into_iter()
            .filter(move |(_, role)| self.contains(*role))
    }
}

impl BitOr for Roles {
    type Output = Roles;

    fn bitor(self, rhs: Roles) -> Roles {
        self.union(rhs)
    }
}

impl BitOrAssign for Roles {
    fn bitor_assign(&mut self, rhs: Roles) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Roles {
    type Output = Roles;

    fn bitand(self, rhs: Roles) -> Roles {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Roles {
    fn bitand_assign(&mut self, rhs: Roles) {
        *self = self.intersection(rhs);
    }
}

/// Enables `let mask: U256 = roles.into()`
impl From<Roles> for U256 {
    fn from(roles: Roles) -> Self {
        roles.to_u256()
    }
}

impl Display for Roles {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        if *self == Self::ALL {
            return write!(f, "ALL");
        }

        for (i, (name, _)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{name}")?;
        }

        Ok(())
    }
}
