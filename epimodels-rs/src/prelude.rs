pub use crate::epidemic::*;
pub use crate::error::{ModelError, Result};
pub use crate::models::*;
pub use crate::params::*;
pub use crate::sim::{AnySimulation, Epicurve, RegimeChange, Schedule, Simulation};

/// Basic representation of time. This crate usually assumes time is measured
/// in days, but steps do not need to be integer.
pub type Time = f64;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;
