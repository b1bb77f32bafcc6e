//! Deterministic compartmental epidemic models (SIR and SEIR) integrated with
//! the explicit Euler method.
//!
//! Both models are instances of a single generic integrator,
//! [`Compartmental`](epidemic::Compartmental), parameterized by the set of
//! derivatives exposed by an [`EpiModel`](epidemic::EpiModel) implementation.
//! Parameters may be reassigned between steps to model interventions.
pub mod config;
pub mod epidemic;
pub mod error;
pub mod models;
pub mod params;
pub mod prelude;
pub mod sim;
pub mod solver;
pub mod utils;

pub use crate::error::{ModelError, Result};
pub use crate::prelude::{Real, Time};
