use super::constants as cte;
use crate::{
    epidemic::EpiModel,
    error::{check_non_negative, check_rate, Result},
    prelude::Real,
};
use getset::{CopyGetters, Setters};
use paste::paste;
use serde::{Deserialize, Serialize};

/// Parameters of the SEIR model.
///
/// Same as SIRParams plus `sigma`, the inverse of the mean latent period
/// (Exposed -> Infectious rate). Sigma does not enter R0.
#[derive(CopyGetters, Setters, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SEIRParams {
    pub(crate) beta: Real,
    pub(crate) gamma: Real,
    #[getset(get_copy = "pub", set = "pub")]
    pub(crate) sigma: Real,
    pub(crate) i_threshold: Real,
}

impl SEIRParams {
    pub fn new(beta: Real, gamma: Real, sigma: Real) -> Self {
        SEIRParams {
            beta,
            gamma,
            sigma,
            i_threshold: 0.0,
        }
    }

    /// Create params from the basic reproduction number, with
    /// beta = r0 * gamma.
    pub fn from_r0(r0: Real, gamma: Real, sigma: Real) -> Self {
        Self::new(r0 * gamma, gamma, sigma)
    }

    /// Return a copy with the given infectious floor.
    pub fn with_i_threshold(mut self, value: Real) -> Self {
        self.i_threshold = value;
        return self;
    }

    /// Mean latent period, 1 / sigma.
    pub fn latent_period(&self) -> Real {
        1.0 / self.sigma
    }
}

impl Default for SEIRParams {
    fn default() -> Self {
        Self::from_r0(cte::BASIC_REPRODUCTION_NUMBER, cte::GAMMA, cte::SIGMA)
    }
}

impl EpiModel<4> for SEIRParams {
    const LABELS: [&'static str; 4] = ["S", "E", "I", "R"];
    const S: usize = 0;
    const I: usize = 2;
    const R: usize = 3;

    // Exposed, not Susceptible, feeds the infectious compartment.
    const ABSORBERS: (usize, usize) = (1, Self::R);

    fn derivatives(&self, state: &[Real; 4], population: Real) -> [Real; 4] {
        let [s, e, i, _] = *state;
        let infections = self.beta * s * i / population;
        let onsets = self.sigma * e;
        let removals = self.gamma * i;
        [
            -infections,
            infections - onsets,
            onsets - removals,
            removals,
        ]
    }

    epi_param_methods!(by_field: { beta, gamma, i_threshold });

    fn validate(&self) -> Result<()> {
        check_rate("beta", self.beta)?;
        check_rate("gamma", self.gamma)?;
        check_rate("sigma", self.sigma)?;
        check_non_negative("i_threshold", self.i_threshold)
    }
}
