mod hash;

pub use hash::Hash;

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// computes `value * numerator / denominator` rounded down, using 256-bit intermediate precision
/// to protect against overflow
///
/// ## Panics
/// - if `denominator` is zero
/// - if the result does not fit into u128, which cannot happen when `numerator <= denominator`
pub fn mul_div(value: u128, numerator: u128, denominator: u128) -> u128 {
    (U256::from(value) * U256::from(numerator) / U256::from(denominator)).as_u128()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mul_div_rounds_down() {
        assert_eq!(mul_div(1000, 1, 3), 333);
        assert_eq!(mul_div(2000, 3_000_000, 5000), 1_200_000);
    }

    #[test]
    fn mul_div_does_not_overflow_intermediate_product() {
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX), u128::MAX);
        assert_eq!(mul_div(u128::MAX / 2, 500, 10_000), u128::MAX / 2 / 20);
    }
}
