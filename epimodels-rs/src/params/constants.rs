use crate::prelude::Real;

///////////////////////////////////////////////////////////////////////////////
// Default param for COVID-19
///////////////////////////////////////////////////////////////////////////////

/// Basic reproduction number at the start of an outbreak.
pub const BASIC_REPRODUCTION_NUMBER: Real = 3.03;

/// Mean duration of infectiousness, in days (1 / gamma).
pub const INFECTIOUS_PERIOD: Real = 10.0;

/// Mean latent period, in days (1 / sigma).
pub const LATENT_PERIOD: Real = 2.5;

/// Fraction of removed individuals that died.
pub const MORTALITY_RATIO: Real = 0.007;

/// Removal rate implied by INFECTIOUS_PERIOD.
pub const GAMMA: Real = 1.0 / INFECTIOUS_PERIOD;

/// Incubation rate implied by LATENT_PERIOD.
pub const SIGMA: Real = 1.0 / LATENT_PERIOD;
