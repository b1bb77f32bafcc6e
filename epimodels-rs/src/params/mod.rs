//! Rate parameters for the SIR family of models.
//!
//! Each parameter struct also implements [`EpiModel`](crate::epidemic::EpiModel),
//! i.e., it carries the derivatives of its system of ODEs. Parameters are
//! plain Copy values and may be reassigned between steps.
#[macro_use]
mod macros;
mod constants;
mod seir;
mod sir;

pub use constants::*;
pub use seir::*;
pub use sir::*;
