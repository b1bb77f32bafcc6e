use super::Simulation;
use crate::{
    epidemic::EpiModel,
    error::Result,
    prelude::{Real, Time},
};
use rayon::prelude::*;
use serde::Serialize;

/// Build one simulation per value and run all of them in parallel for
/// num_iter steps.
///
/// Each run owns its own model, so no synchronization is involved. Results
/// are returned in the same order as values.
pub fn sweep<M, F, const N: usize>(
    values: &[Real],
    num_iter: usize,
    build: F,
) -> Vec<Result<Simulation<M, N>>>
where
    M: EpiModel<N> + Send,
    F: Fn(Real) -> Result<Simulation<M, N>> + Sync,
{
    values
        .par_iter()
        .map(|&value| {
            let mut sim = build(value)?;
            sim.run(num_iter)?;
            Ok(sim)
        })
        .collect()
}

/// Key figures of a single run in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    /// Swept value used to build the simulation.
    pub value: Real,
    /// R0 at the end of the run.
    pub r0: Real,
    pub peak_time: Time,
    pub peak_infectious: Real,
    pub final_susceptible: Real,
    pub final_removed: Real,
}

impl SweepSummary {
    pub fn from_simulation<M, const N: usize>(value: Real, sim: &Simulation<M, N>) -> Self
    where
        M: EpiModel<N>,
    {
        let (peak_time, peak_infectious) = sim.peak_infectious().unwrap_or((0.0, 0.0));
        SweepSummary {
            value,
            r0: sim.model().r0(),
            peak_time,
            peak_infectious,
            final_susceptible: sim.model().state()[M::S],
            final_removed: sim.model().state()[M::R],
        }
    }
}

/// Like sweep(), but only keep a summary of each run. Fails on the first
/// failed run.
pub fn sweep_summary<M, F, const N: usize>(
    values: &[Real],
    num_iter: usize,
    build: F,
) -> Result<Vec<SweepSummary>>
where
    M: EpiModel<N> + Send,
    F: Fn(Real) -> Result<Simulation<M, N>> + Sync,
{
    sweep(values, num_iter, build)
        .into_iter()
        .zip(values.iter())
        .map(|(res, &value)| res.map(|sim| SweepSummary::from_simulation(value, &sim)))
        .collect()
}
