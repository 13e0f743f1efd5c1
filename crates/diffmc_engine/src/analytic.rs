//! Closed-form reference prices.
//!
//! This module provides the analytic fast path of the engine:
//!
//! - [`black_scholes_price`]: vanilla European price, generic over dual
//!   numbers so the sensitivity driver can differentiate through it
//! - [`down_and_in_call`] / [`down_and_out_call`]: continuously monitored
//!   barrier prices (Rubinstein–Reiner), used as the bias reference for
//!   discrete-monitoring tests
//!
//! # References
//!
//! - Black, F. & Scholes, M. (1973). "The Pricing of Options and Corporate
//!   Liabilities". Journal of Political Economy.
//! - Rubinstein, M. & Reiner, E. (1991). "Breaking Down the Barriers".
//!   Risk Magazine.

use diffmc_core::math::distributions::norm_cdf;
use diffmc_core::types::{MarketParams, OptionKind};
use num_dual::DualNum;

/// Black–Scholes price of a vanilla European option.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
/// d2 = d1 - σ√T
/// call = S·Φ(d1) - K·e^(-rT)·Φ(d2)
/// put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
/// ```
///
/// Generic over `D: DualNum<f64>`: instantiate with `f64` for plain
/// pricing, or seed a dual part on any input to obtain the corresponding
/// exact sensitivity. Inputs are assumed validated
/// ([`MarketParams`] enforces this for the `f64` path).
///
/// # Examples
///
/// ```rust
/// use diffmc_core::types::OptionKind;
/// use diffmc_engine::analytic::black_scholes_price;
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.2, 0.05, OptionKind::Call);
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_price<D: DualNum<f64> + Copy>(
    spot: D,
    strike: D,
    expiry: D,
    volatility: D,
    rate: D,
    kind: OptionKind,
) -> D {
    let sqrt_t = expiry.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;

    let d1 = ((spot / strike).ln() + (rate + volatility * volatility * 0.5) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let discounted_strike = strike * (-(rate * expiry)).exp();

    match kind {
        OptionKind::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionKind::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black–Scholes price from validated market parameters.
#[inline]
pub fn black_scholes(params: MarketParams, kind: OptionKind) -> f64 {
    black_scholes_price(
        params.spot(),
        params.strike(),
        params.expiry(),
        params.volatility(),
        params.rate(),
        kind,
    )
}

/// Continuously monitored down-and-in call (Rubinstein–Reiner).
///
/// Valid for a barrier at or below the strike. A barrier at or above the
/// spot means the option is already knocked in, so the vanilla price is
/// returned.
pub fn down_and_in_call(params: MarketParams, barrier_level: f64) -> f64 {
    let spot = params.spot();
    if barrier_level >= spot {
        return black_scholes(params, OptionKind::Call);
    }

    let strike = params.strike();
    let expiry = params.expiry();
    let vol = params.volatility();
    let rate = params.rate();

    let vol_sqrt_t = vol * expiry.sqrt();
    let lambda = (rate + 0.5 * vol * vol) / (vol * vol);
    let y = (barrier_level * barrier_level / (spot * strike)).ln() / vol_sqrt_t
        + lambda * vol_sqrt_t;

    let barrier_ratio = barrier_level / spot;
    let discount = (-rate * expiry).exp();

    spot * barrier_ratio.powf(2.0 * lambda) * norm_cdf(y)
        - strike * discount * barrier_ratio.powf(2.0 * lambda - 2.0) * norm_cdf(y - vol_sqrt_t)
}

/// Continuously monitored down-and-out call (Rubinstein–Reiner).
///
/// Computed through in–out parity, `out = vanilla - in`, clamped at zero
/// against floating-point cancellation. A barrier at or above the spot is
/// an immediate knock-out and prices to zero.
pub fn down_and_out_call(params: MarketParams, barrier_level: f64) -> f64 {
    if barrier_level >= params.spot() {
        return 0.0;
    }
    let vanilla = black_scholes(params, OptionKind::Call);
    (vanilla - down_and_in_call(params, barrier_level)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_call_reference_value() {
        // Canonical scenario: S=100, K=100, T=1, σ=0.2, r=0.05
        let call = black_scholes_price(100.0, 100.0, 1.0, 0.2, 0.05, OptionKind::Call);
        assert_relative_eq!(call, 10.450584, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        let params = MarketParams::new(100.0, 110.0, 2.0, 0.2, 0.03).unwrap();
        let call = black_scholes(params, OptionKind::Call);
        let put = black_scholes(params, OptionKind::Put);
        let forward = params.spot() - params.strike() * (-0.03_f64 * 2.0).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-9);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward() {
        let call = black_scholes_price(100.0, 1.0, 1.0, 0.2, 0.05, OptionKind::Call);
        let forward = 100.0 - 1.0 * (-0.05_f64).exp();
        assert_relative_eq!(call, forward, epsilon = 1e-6);
    }

    #[test]
    fn test_down_and_out_reference_value() {
        // S=100, K=100, T=1, σ=0.2, r=0.05, B=90
        let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
        let doc = down_and_out_call(params, 90.0);
        assert_relative_eq!(doc, 8.666, epsilon = 2e-3);
    }

    #[test]
    fn test_in_out_parity() {
        let params = MarketParams::new(100.0, 110.0, 2.0, 0.2, 0.03).unwrap();
        let vanilla = black_scholes(params, OptionKind::Call);
        let sum = down_and_out_call(params, 90.0) + down_and_in_call(params, 90.0);
        assert_relative_eq!(sum, vanilla, epsilon = 1e-9);
    }

    #[test]
    fn test_barrier_at_spot_is_knocked_out() {
        let params = MarketParams::new(100.0, 110.0, 2.0, 0.2, 0.03).unwrap();
        assert_eq!(down_and_out_call(params, 100.0), 0.0);
        assert_relative_eq!(
            down_and_in_call(params, 100.0),
            black_scholes(params, OptionKind::Call),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_distant_barrier_recovers_vanilla() {
        let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
        let doc = down_and_out_call(params, 1.0);
        assert_relative_eq!(doc, black_scholes(params, OptionKind::Call), epsilon = 1e-6);
    }

    #[test]
    fn test_dual_instantiation_value_matches_f64() {
        use diffmc_core::types::dual::Dual64;

        let call_f64 = black_scholes_price(100.0, 101.0, 1.0, 0.3, 0.01, OptionKind::Call);
        let call_dual = black_scholes_price(
            Dual64::new(100.0, 1.0),
            Dual64::from(101.0),
            Dual64::from(1.0),
            Dual64::from(0.3),
            Dual64::from(0.01),
            OptionKind::Call,
        );
        assert_relative_eq!(call_dual.re, call_f64, epsilon = 1e-12);
        // Delta of a call lies strictly inside (0, 1)
        assert!(call_dual.eps > 0.0 && call_dual.eps < 1.0);
    }

    proptest! {
        #[test]
        fn prop_call_increases_in_volatility(
            vol in 0.05_f64..0.8,
            bump in 0.01_f64..0.2,
        ) {
            let low = black_scholes_price(100.0, 100.0, 1.0, vol, 0.05, OptionKind::Call);
            let high = black_scholes_price(100.0, 100.0, 1.0, vol + bump, 0.05, OptionKind::Call);
            prop_assert!(high > low);
        }

        #[test]
        fn prop_down_and_out_below_vanilla(barrier in 10.0_f64..99.0) {
            let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
            let doc = down_and_out_call(params, barrier);
            let vanilla = black_scholes(params, OptionKind::Call);
            prop_assert!(doc >= 0.0);
            prop_assert!(doc <= vanilla + 1e-12);
        }

        #[test]
        fn prop_out_price_decreases_as_barrier_rises(barrier in 20.0_f64..95.0) {
            let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
            let lower = down_and_out_call(params, barrier);
            let higher = down_and_out_call(params, barrier + 4.0);
            prop_assert!(higher <= lower + 1e-12);
        }
    }
}
