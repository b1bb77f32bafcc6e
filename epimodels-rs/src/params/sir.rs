use super::constants as cte;
use crate::{
    epidemic::EpiModel,
    error::{check_non_negative, check_rate, Result},
    prelude::Real,
};
use paste::paste;
use serde::{Deserialize, Serialize};

/// Parameters of the SIR model.
///
/// `beta` is the transmission rate and `gamma` the removal rate. The
/// `i_threshold` is a floor for the infectious compartment: the integrator
/// never lets it decay below that value, which sustains low-level endemic
/// transmission. The default floor is zero, i.e., no clamp.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SIRParams {
    pub(crate) beta: Real,
    pub(crate) gamma: Real,
    pub(crate) i_threshold: Real,
}

impl SIRParams {
    pub fn new(beta: Real, gamma: Real) -> Self {
        SIRParams {
            beta,
            gamma,
            i_threshold: 0.0,
        }
    }

    /// Create params from the basic reproduction number and the removal
    /// rate, with beta = r0 * gamma.
    pub fn from_r0(r0: Real, gamma: Real) -> Self {
        Self::new(r0 * gamma, gamma)
    }

    /// Return a copy with the given infectious floor.
    pub fn with_i_threshold(mut self, value: Real) -> Self {
        self.i_threshold = value;
        return self;
    }
}

impl Default for SIRParams {
    fn default() -> Self {
        Self::from_r0(cte::BASIC_REPRODUCTION_NUMBER, cte::GAMMA)
    }
}

impl EpiModel<3> for SIRParams {
    const LABELS: [&'static str; 3] = ["S", "I", "R"];
    const S: usize = 0;
    const I: usize = 1;
    const R: usize = 2;
    const ABSORBERS: (usize, usize) = (Self::S, Self::R);

    fn derivatives(&self, state: &[Real; 3], population: Real) -> [Real; 3] {
        let [s, i, _] = *state;
        let infections = self.beta * s * i / population;
        let removals = self.gamma * i;
        [-infections, infections - removals, removals]
    }

    epi_param_methods!(by_field: { beta, gamma, i_threshold });

    fn validate(&self) -> Result<()> {
        check_rate("beta", self.beta)?;
        check_rate("gamma", self.gamma)?;
        check_non_negative("i_threshold", self.i_threshold)
    }
}
