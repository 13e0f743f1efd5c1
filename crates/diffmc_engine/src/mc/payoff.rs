//! Terminal payoff evaluation.
//!
//! Payoffs are exact clamps, `max(intrinsic, 0)`, not smooth
//! approximations: the engine differentiates by bump-and-revalue, so the
//! kink at the strike needs no softening and no negative payoff can reach
//! the reduction stage.

use diffmc_core::types::OptionKind;

/// Exact terminal payoff of a vanilla option.
#[inline]
pub fn terminal_payoff(terminal: f64, strike: f64, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => (terminal - strike).max(0.0),
        OptionKind::Put => (strike - terminal).max(0.0),
    }
}

/// Writes the terminal payoff of every path into the payoff buffer.
///
/// `paths` is the row-major path buffer; the terminal price of path `i`
/// sits at the end of its row.
pub fn compute_terminal_payoffs(
    paths: &[f64],
    payoffs: &mut [f64],
    n_steps: usize,
    strike: f64,
    kind: OptionKind,
) {
    for (row, payoff) in paths.chunks(n_steps + 1).zip(payoffs.iter_mut()) {
        *payoff = terminal_payoff(row[n_steps], strike, kind);
    }
}

/// Applies a knock-out survival mask to the payoff buffer in place.
///
/// Knocked-out paths contribute zero to the estimate but stay in the
/// sample, so the divisor of the mean remains the full path count.
pub fn apply_knockout(payoffs: &mut [f64], mask: &[f64]) {
    for (payoff, weight) in payoffs.iter_mut().zip(mask) {
        *payoff *= weight;
    }
}
