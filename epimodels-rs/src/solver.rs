//! Fixed-step integration shared by every compartmental model.
//!
//! A step is split in two phases: a forward Euler update computed from a
//! single snapshot of the derivatives, then an optional floor clamp on one
//! compartment.
use crate::prelude::Real;

/// Advance `state` by one explicit Euler step: `y' = y + dy * dt`.
///
/// `derivs` must have been evaluated on the pre-step state as a whole, never
/// on partially updated values.
#[inline]
pub fn euler_step<const N: usize>(state: &mut [Real; N], derivs: &[Real; N], dt: Real) {
    for (y, dy) in state.iter_mut().zip(derivs.iter()) {
        *y += dy * dt;
    }
}

/// Raise compartment `target` to `floor` if it fell below it.
///
/// Each of the two `absorbers` receives half of the deficit
/// `(floor - state[target]) / 2`. Return this half, or 0.0 if the clamp was
/// not triggered.
pub fn floor_clamp<const N: usize>(
    state: &mut [Real; N],
    target: usize,
    absorbers: (usize, usize),
    floor: Real,
) -> Real {
    let value = state[target];
    if value < floor {
        let adjustment = (floor - value) / 2.0;
        state[absorbers.0] += adjustment;
        state[absorbers.1] += adjustment;
        state[target] = floor;
        return adjustment;
    }
    return 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn euler_uses_given_derivatives() {
        let mut y = [10.0, 5.0, 0.0];
        euler_step(&mut y, &[-1.0, 0.5, 0.5], 2.0);
        assert_eq!(y, [8.0, 6.0, 1.0]);
    }

    #[test]
    fn euler_zero_step_is_identity() {
        let mut y = [10.0, 5.0, 0.0];
        euler_step(&mut y, &[-1.0, 0.5, 0.5], 0.0);
        assert_eq!(y, [10.0, 5.0, 0.0]);
    }

    #[test]
    fn clamp_splits_deficit() {
        let mut y = [1.0, 2.0, 0.4, 3.0];
        let adj = floor_clamp(&mut y, 2, (1, 3), 1.0);
        assert_approx_eq!(adj, 0.3);
        assert_eq!(y[2], 1.0);
        assert_approx_eq!(y[1], 2.3);
        assert_approx_eq!(y[3], 3.3);
        assert_eq!(y[0], 1.0);
    }

    #[test]
    fn clamp_inactive_above_floor() {
        let mut y = [1.0, 2.0, 3.0];
        assert_eq!(floor_clamp(&mut y, 1, (0, 2), 2.0), 0.0);
        assert_eq!(y, [1.0, 2.0, 3.0]);
    }
}
