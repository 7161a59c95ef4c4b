use anchor_lang::prelude::*;
use arrayref::array_refs;

use crate::{constants::BASIS_POINTS, error::LotteryError};

/// A 256-bit big-endian random value as delivered by the oracle.
pub type RandomWord = [u8; 32];

/// Share of `amount` taken by a fee of `percent` basis points, rounded down.
pub fn calculate_fee(amount: u64, percent: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(percent as u128)
        .ok_or(LotteryError::Overflow)?
        / BASIS_POINTS as u128;
    u64::try_from(fee).map_err(|_| error!(LotteryError::Overflow))
}

/// Size of the draw space once the no-winner share is added on top of the sold tickets.
///
/// The scale factor is computed with integer division before it is applied, so
/// percentages that do not divide 10000 evenly round the no-winner odds down.
pub fn inflated_ticket_count(tickets: u64, no_winner_percent: u16) -> Result<u64> {
    require!(
        no_winner_percent < BASIS_POINTS,
        LotteryError::NoWinnerPercentTooHigh
    );
    let scale = (BASIS_POINTS / (BASIS_POINTS - no_winner_percent)) as u64;
    tickets
        .checked_mul(scale)
        .ok_or_else(|| error!(LotteryError::Overflow))
}

/// Exact `word mod modulus` over the full 256-bit value.
pub fn reduce_random_word(word: &RandomWord, modulus: u64) -> Result<u64> {
    require_gt!(modulus, 0, LotteryError::EmptyDrawRange);

    let (l0, l1, l2, l3) = array_refs![word, 8, 8, 8, 8];
    let modulus = modulus as u128;
    let mut acc: u128 = 0;
    for limb in [l0, l1, l2, l3] {
        // acc < modulus < 2^64, so the shift cannot overflow
        acc = ((acc << 64) | u64::from_be_bytes(*limb) as u128) % modulus;
    }

    u64::try_from(acc).map_err(|_| error!(LotteryError::Overflow))
}

#[cfg(test)]
pub(crate) fn word_from_u64(value: u64) -> RandomWord {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_rounds_down() {
        assert_eq!(calculate_fee(500, 0).unwrap(), 0);
        assert_eq!(calculate_fee(1_000, 250).unwrap(), 25);
        assert_eq!(calculate_fee(999, 100).unwrap(), 9);
        assert_eq!(
            calculate_fee(u64::MAX, 9_999).unwrap() as u128,
            u64::MAX as u128 * 9_999 / 10_000
        );
    }

    #[test]
    fn fee_never_exceeds_amount() {
        for amount in [0u64, 1, 7, 10_000, 123_456_789, u64::MAX] {
            assert!(calculate_fee(amount, 9_999).unwrap() <= amount);
        }
    }

    #[test]
    fn inflation_uses_integer_scale_factor() {
        assert_eq!(inflated_ticket_count(5, 0).unwrap(), 5);
        assert_eq!(inflated_ticket_count(5, 5_000).unwrap(), 10);
        // 10000 / 7000 == 1, so 30% collapses to no inflation at all
        assert_eq!(inflated_ticket_count(5, 3_000).unwrap(), 5);
        assert_eq!(inflated_ticket_count(5, 9_999).unwrap(), 50_000);
        assert_eq!(inflated_ticket_count(0, 5_000).unwrap(), 0);
    }

    #[test]
    fn inflation_rejects_full_no_winner_share() {
        assert_eq!(
            inflated_ticket_count(5, 10_000).unwrap_err(),
            LotteryError::NoWinnerPercentTooHigh.into()
        );
    }

    #[test]
    fn inflation_overflow_fails_loudly() {
        assert_eq!(
            inflated_ticket_count(u64::MAX, 5_000).unwrap_err(),
            LotteryError::Overflow.into()
        );
    }

    #[test]
    fn reduces_small_words() {
        assert_eq!(reduce_random_word(&word_from_u64(4), 5).unwrap(), 4);
        assert_eq!(reduce_random_word(&word_from_u64(12), 5).unwrap(), 2);
        assert_eq!(reduce_random_word(&word_from_u64(u64::MAX), 1).unwrap(), 0);
    }

    #[test]
    fn reduces_across_limbs() {
        // 2^64 mod 1000 == 616
        let mut word = [0u8; 32];
        word[23] = 1;
        assert_eq!(reduce_random_word(&word, 1_000).unwrap(), 616);

        // (2^256 - 1) mod 10 == 5
        assert_eq!(reduce_random_word(&[0xff; 32], 10).unwrap(), 5);
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert_eq!(
            reduce_random_word(&word_from_u64(1), 0).unwrap_err(),
            LotteryError::EmptyDrawRange.into()
        );
    }
}
