//! The classical SIR model.
//!
//! ```text
//! dS/dt = -beta * S * I / N
//! dI/dt =  beta * S * I / N - gamma * I
//! dR/dt =  gamma * I
//! ```
//!
//! The floor clamp on I takes the deficit in equal parts from S and R.
//!
//! ```
//! use epimodels::prelude::*;
//!
//! let mut model = SIR::new([95.0, 5.0, 0.0], SIRParams::new(1.0 / 3.0, 1.0 / 14.0)).unwrap();
//! model.step(1.0);
//! assert!((model.s() - 93.4167).abs() < 1e-3);
//! ```
use crate::{epidemic::Compartmental, params::SIRParams};

/// Type alias for the Susceptible, Infectious, Removed model.
pub type SIR = Compartmental<SIRParams, 3>;
