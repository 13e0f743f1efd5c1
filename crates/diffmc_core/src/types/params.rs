//! Validated market and contract parameter types.
//!
//! This module provides the immutable inputs to the pricing engine:
//! [`MarketParams`] (spot, strike, expiry, volatility, rate), [`OptionKind`]
//! (call/put), and [`Barrier`] (level plus crossing direction).
//!
//! All invariants are enforced at construction. A successfully constructed
//! value is valid for the lifetime of the pricing call, so the engine never
//! re-validates per path or per step.

use super::error::InputError;

/// Option exercise payoff kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call: pays max(S_T - K, 0) at expiry.
    Call,
    /// Put: pays max(K - S_T, 0) at expiry.
    Put,
}

/// Direction from which a barrier is crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Down barrier: knocked when the path minimum reaches the level.
    Down,
    /// Up barrier: knocked when the path maximum reaches the level.
    Up,
}

/// Single knock-out barrier specification.
///
/// A down-and-out call conventionally has `level < spot`; this is documented
/// rather than enforced because the relationship involves two independently
/// constructed values.
///
/// # Examples
///
/// ```rust
/// use diffmc_core::types::{Barrier, BarrierDirection};
///
/// let barrier = Barrier::new(90.0, BarrierDirection::Down).unwrap();
/// assert_eq!(barrier.level(), 90.0);
///
/// assert!(Barrier::new(-1.0, BarrierDirection::Down).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier {
    level: f64,
    direction: BarrierDirection,
}

impl Barrier {
    /// Creates a validated barrier.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidBarrierLevel`] if `level` is not positive
    /// and finite.
    pub fn new(level: f64, direction: BarrierDirection) -> Result<Self, InputError> {
        if !(level > 0.0 && level.is_finite()) {
            return Err(InputError::InvalidBarrierLevel { level });
        }
        Ok(Self { level, direction })
    }

    /// Returns the barrier level.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Returns the crossing direction.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    /// Returns a copy with the level replaced, re-validated.
    ///
    /// Used by bump-and-revalue sensitivity computation.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidBarrierLevel`] if the new level is not
    /// positive and finite.
    pub fn with_level(&self, level: f64) -> Result<Self, InputError> {
        Self::new(level, self.direction)
    }
}

/// Immutable market and contract parameters.
///
/// Holds the five scalar inputs of the Black–Scholes world: initial spot
/// price, strike, expiry as a year fraction, annualised volatility, and the
/// continuously compounded risk-free rate.
///
/// # Invariants
///
/// - `spot, strike, expiry, volatility` are positive and finite
/// - `rate` is finite (negative rates are allowed)
///
/// # Examples
///
/// ```rust
/// use diffmc_core::types::MarketParams;
///
/// let params = MarketParams::new(100.0, 110.0, 2.0, 0.2, 0.03).unwrap();
/// assert_eq!(params.strike(), 110.0);
///
/// // Bumped copies for finite-difference sensitivities
/// let bumped = params.with_spot(101.0).unwrap();
/// assert_eq!(bumped.spot(), 101.0);
/// assert_eq!(bumped.strike(), params.strike());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial spot price (S₀), positive
    /// * `strike` - Strike price (K), positive
    /// * `expiry` - Time to expiry in years (T), positive
    /// * `volatility` - Annualised volatility (σ), positive
    /// * `rate` - Continuously compounded risk-free rate (r), any finite real
    ///
    /// # Errors
    ///
    /// Returns the [`InputError`] variant naming the first parameter that
    /// fails validation.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
        rate: f64,
    ) -> Result<Self, InputError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(InputError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(InputError::InvalidStrike { strike });
        }
        if !(expiry > 0.0 && expiry.is_finite()) {
            return Err(InputError::InvalidExpiry { expiry });
        }
        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(InputError::InvalidVolatility { volatility });
        }
        if !rate.is_finite() {
            return Err(InputError::InvalidRate { rate });
        }
        Ok(Self {
            spot,
            strike,
            expiry,
            volatility,
            rate,
        })
    }

    /// Returns the initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns a copy with the spot replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidSpot`] if the new spot is not positive
    /// and finite.
    pub fn with_spot(&self, spot: f64) -> Result<Self, InputError> {
        Self::new(spot, self.strike, self.expiry, self.volatility, self.rate)
    }

    /// Returns a copy with the volatility replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidVolatility`] if the new volatility is not
    /// positive and finite.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, InputError> {
        Self::new(self.spot, self.strike, self.expiry, volatility, self.rate)
    }

    /// Returns a copy with the rate replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRate`] if the new rate is not finite.
    pub fn with_rate(&self, rate: f64) -> Result<Self, InputError> {
        Self::new(self.spot, self.strike, self.expiry, self.volatility, rate)
    }
}
