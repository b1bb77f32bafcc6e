//! Driver layer: everything that calls into a model once per step.
//!
//! Models know nothing about schedules, time series or parallel runs. Those
//! live here and only use the public stepping/reparameterization interface.
mod epicurve;
mod schedule;
mod simulation;
mod sweep;
pub use epicurve::*;
pub use schedule::*;
pub use simulation::*;
pub use sweep::*;
