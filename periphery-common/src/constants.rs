//! Protocol-wide numeric constants

use alloy_primitives::{Address, U256};

/// The number of seconds in a day
pub const DAY: u64 = 86_400;

/// The number of seconds in a week
pub const WEEK: u64 = 7 * DAY;

/// The number of seconds in a year, the same value used in the vault
pub const YEAR: u64 = 31_556_952;

/// The maximum value of a `uint256`
pub const MAX_INT: U256 = U256::MAX;

/// The zero address
pub const ZERO_ADDRESS: Address = Address::ZERO;

/// The number of basis points in 100%
pub const MAX_BPS: u64 = 10_000;

/// The number of bytes in a 256-bit word
pub const NUM_BYTES_WORD: usize = 32;

/// The number of bytes it takes to represent an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_int() {
        let expected = (U256::from(1) << 255) - U256::from(1) + (U256::from(1) << 255);
        assert_eq!(MAX_INT, expected);
    }

    #[test]
    fn test_durations() {
        assert_eq!(WEEK, 604_800);
        // The vault uses the average Gregorian year, slightly longer than 365 days
        assert!(YEAR > 365 * DAY && YEAR < 366 * DAY);
    }
}
