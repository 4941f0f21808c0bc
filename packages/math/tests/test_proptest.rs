// Property-Based Testing with Proptest
// Run with: cargo test -p mintswap-math --test test_proptest

use mintswap_math::*;
use proptest::prelude::*;
use soroban_sdk::Env;

const MAX_RESERVE: i128 = 1_000_000_000_000_000_000_000_000_000; // 10^9 tokens at 18 decimals

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: s = isqrt(a*b) satisfies s^2 <= a*b < (s+1)^2
    #[test]
    fn prop_sqrt_product_bounds(a in 1i128..u64::MAX as i128, b in 1i128..u64::MAX as i128) {
        let env = Env::default();
        let s = sqrt_product(&env, a, b).unwrap();
        let n = wide_product(&env, a, b).unwrap();
        let lo = wide_product(&env, s, s).unwrap();
        let hi = wide_product(&env, s + 1, s + 1).unwrap();
        prop_assert!(lo <= n);
        prop_assert!(n < hi);
    }

    /// Property: swaps never decrease reserve_in * reserve_out
    #[test]
    fn prop_swap_product_non_decreasing(
        reserve_in in 1i128..MAX_RESERVE,
        reserve_out in 1i128..MAX_RESERVE,
        amount_in in 1i128..MAX_RESERVE,
        fee_bps in 0u32..=MAX_FEE_BPS,
    ) {
        let env = Env::default();
        let out = get_amount_out(&env, amount_in, reserve_in, reserve_out, fee_bps).unwrap();
        prop_assert!(out < reserve_out);

        let (new_in, new_out) =
            reserves_after_swap(reserve_in, reserve_out, amount_in, out).unwrap();
        let before = wide_product(&env, reserve_in, reserve_out).unwrap();
        let after = wide_product(&env, new_in, new_out).unwrap();
        prop_assert!(after >= before);
    }

    /// Property: more input never yields less output
    #[test]
    fn prop_amount_out_monotonic(
        reserve_in in 1i128..MAX_RESERVE,
        reserve_out in 1i128..MAX_RESERVE,
        amount_in in 1i128..MAX_RESERVE,
        extra in 0i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let small = get_amount_out(&env, amount_in, reserve_in, reserve_out, 0).unwrap();
        let large = get_amount_out(&env, amount_in + extra, reserve_in, reserve_out, 0).unwrap();
        prop_assert!(large >= small);
    }

    /// Property: redeeming freshly minted shares never returns more than was deposited
    #[test]
    fn prop_deposit_then_redeem_not_profitable(
        reserve_a in 1i128..MAX_RESERVE,
        reserve_b in 1i128..MAX_RESERVE,
        total in 1i128..MAX_RESERVE,
        amount_a in 1i128..MAX_RESERVE,
        amount_b in 1i128..MAX_RESERVE,
    ) {
        let env = Env::default();
        let minted =
            proportional_shares(&env, amount_a, amount_b, reserve_a, reserve_b, total).unwrap();
        let (out_a, out_b) = amounts_for_shares(
            &env,
            minted,
            reserve_a + amount_a,
            reserve_b + amount_b,
            total + minted,
        ).unwrap();
        prop_assert!(out_a <= amount_a);
        prop_assert!(out_b <= amount_b);
    }
}
