/// `(a * b) >> 64` without a 256-bit intermediate.
fn mul_shr_64(a: u128, b: u128) -> Option<u128> {
    const LO: u128 = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & LO);
    let (b_hi, b_lo) = (b >> 64, b & LO);

    let high = a_hi.checked_mul(b_hi)?.checked_mul(1u128 << 64)?;
    let cross = (a_hi * b_lo).checked_add(a_lo * b_hi)?;
    let low = (a_lo * b_lo) >> 64;

    high.checked_add(cross)?.checked_add(low)
}

/// Tokens earned by `liquidity` while reward growth moved from `checkpoint_then`
/// to `checkpoint_now`.
///
/// Growth counters are Q64.64 and wrap, so the delta is taken modulo 2^128.
/// Returns `None` when the result does not fit in a `u64`.
pub fn accrued_reward(liquidity: u128, checkpoint_now: u128, checkpoint_then: u128) -> Option<u64> {
    let delta = checkpoint_now.wrapping_sub(checkpoint_then);
    u64::try_from(mul_shr_64(liquidity, delta)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 1 << 64;

    #[test]
    fn test_no_growth_accrues_nothing() {
        assert_eq!(accrued_reward(1_000_000, 5 * ONE, 5 * ONE), Some(0));
    }

    #[test]
    fn test_whole_unit_growth() {
        // Growth of 3 tokens per unit of liquidity.
        assert_eq!(accrued_reward(1_000, 7 * ONE, 4 * ONE), Some(3_000));
    }

    #[test]
    fn test_fractional_growth_rounds_down() {
        // 0.5 per unit over 3 units of liquidity.
        assert_eq!(accrued_reward(3, ONE / 2, 0), Some(1));
    }

    #[test]
    fn test_wrapping_delta() {
        let then = u128::MAX - ONE + 1;
        let now = ONE;
        // delta = 2 * ONE modulo 2^128
        assert_eq!(accrued_reward(10, now, then), Some(20));
    }

    #[test]
    fn test_large_operands_match_wide_product() {
        let liquidity = (1u128 << 80) + 12345;
        let delta = (1u128 << 20) + 999;
        let expected = (liquidity * delta) >> 64;
        assert_eq!(mul_shr_64(liquidity, delta), Some(expected));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(accrued_reward(u128::MAX, u128::MAX, 0), None);
        assert_eq!(accrued_reward(1u128 << 127, 4 * ONE, 0), None);
    }
}
