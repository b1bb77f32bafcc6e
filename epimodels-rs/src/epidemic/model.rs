use crate::{error::Result, prelude::Real};
use std::fmt::Debug;

/// Basic trait for all compartment-like epidemic models. This includes all the
/// SIR family of models.
///
/// An implementation is a set of rate parameters together with the
/// derivatives of a system of N coupled ODEs. The state itself is owned by
/// [`Compartmental`](super::Compartmental), which integrates any EpiModel
/// with the same explicit Euler + floor clamp policy.
pub trait EpiModel<const N: usize>: Clone + Debug {
    /// Names of compartments, in state order. Also used as CSV headers.
    const LABELS: [&'static str; N];

    /// Index of the susceptible compartment.
    const S: usize;

    /// Index of the infectious compartment. This is the compartment protected
    /// by the floor clamp.
    const I: usize;

    /// Index of the removed compartment.
    const R: usize;

    /// Pair of compartments that receive, in equal parts, the deficit filled
    /// by the floor clamp.
    const ABSORBERS: (usize, usize);

    /// Compute all derivatives from a single state snapshot and the total
    /// population.
    fn derivatives(&self, state: &[Real; N], population: Real) -> [Real; N];

    /// Transmission rate.
    fn beta(&self) -> Real;

    /// Set transmission rate. No validation is performed.
    fn set_beta(&mut self, value: Real) -> &mut Self;

    /// Removal rate (inverse of the mean infectious period).
    fn gamma(&self) -> Real;

    /// Set removal rate. No validation is performed.
    fn set_gamma(&mut self, value: Real) -> &mut Self;

    /// Minimum number of infectious individuals sustained by the clamp.
    fn i_threshold(&self) -> Real;

    /// Set the infectious floor.
    fn set_i_threshold(&mut self, value: Real) -> &mut Self;

    /// Check rates and threshold. Called once when a model is constructed.
    fn validate(&self) -> Result<()>;

    /// Basic reproduction number. Always derived from beta and gamma, never
    /// stored.
    fn r0(&self) -> Real {
        self.beta() / self.gamma()
    }

    /// Set beta so that r0() == value under the current gamma.
    fn set_r0(&mut self, value: Real) -> &mut Self {
        let beta = value * self.gamma();
        self.set_beta(beta)
    }
}
