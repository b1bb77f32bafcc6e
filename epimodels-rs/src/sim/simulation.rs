use super::{Epicurve, Schedule};
use crate::{
    epidemic::{Compartmental, EpiModel},
    error::{ModelError, Result},
    params::{SEIRParams, SIRParams},
    prelude::{Real, Time},
};
use getset::{CopyGetters, Getters, MutGetters};
use log::*;
use std::path::Path;

/// Simulation drives a model with a fixed time step, applies an optional
/// schedule of R0 changes and records every step into an epicurve.
#[derive(Debug, Clone, Getters, CopyGetters, MutGetters)]
pub struct Simulation<M, const N: usize> {
    #[getset(get = "pub", get_mut = "pub")]
    model: Compartmental<M, N>,

    #[getset(get = "pub")]
    schedule: Schedule,

    /// Initial state followed by the state after each step.
    #[getset(get = "pub")]
    epicurve: Epicurve<N>,

    #[getset(get_copy = "pub")]
    dt: Real,

    /// Number of steps executed so far.
    #[getset(get_copy = "pub")]
    n_iter: usize,
}

impl<M: EpiModel<N>, const N: usize> Simulation<M, N> {
    /// Create new simulation from model and time step. The initial state is
    /// recorded as the first row of the epicurve.
    pub fn new(model: Compartmental<M, N>, dt: Real) -> Self {
        let mut epicurve = Epicurve::new(M::LABELS);
        epicurve.push(model.time(), *model.state());
        Simulation {
            model,
            schedule: Schedule::new(),
            epicurve,
            dt,
            n_iter: 0,
        }
    }

    /// Attach a schedule of R0 changes. An entry for day 0 is applied
    /// immediately.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        schedule.apply(0, &mut self.model);
        self.schedule = schedule;
        return self;
    }

    /// Execute a single step.
    ///
    /// Fails with NonFinite if the model state is no longer a finite number.
    /// The offending state is still recorded, so the epicurve always holds
    /// n_iter + 1 rows.
    pub fn step(&mut self) -> Result<()> {
        self.schedule.apply(self.n_iter + 1, &mut self.model);
        self.model.step(self.dt);
        self.n_iter += 1;
        self.epicurve.push(self.model.time(), *self.model.state());

        if !self.model.is_finite() {
            let time = self.model.time();
            warn!("step [{}]: non-finite state {:?}", self.n_iter, self.model.state());
            return Err(ModelError::NonFinite { time });
        }
        Ok(())
    }

    /// Run simulation for the given number of steps.
    pub fn run(&mut self, n_steps: usize) -> Result<&mut Self> {
        for _ in 0..n_steps {
            self.step()?;
        }
        debug!(
            "step [{}]: t = {}, R0 = {:.2}, state = {:?}",
            self.n_iter,
            self.model.time(),
            self.model.r0(),
            self.model.state()
        );
        Ok(self)
    }

    /// Curve of the infectious compartment.
    pub fn infectious_curve(&self) -> Vec<Real> {
        self.epicurve.col(M::I).unwrap_or_default()
    }

    /// Time and value of the infectious peak.
    pub fn peak_infectious(&self) -> Option<(Time, Real)> {
        let (k, value) = self.epicurve.peak(M::I)?;
        Some((self.epicurve.times()[k], value))
    }

    /// Cumulated number of cases, I + R, at each recorded step.
    pub fn cumulative_cases(&self) -> Vec<Real> {
        self.epicurve.cumulative(&[M::I, M::R])
    }

    /// Fatalities estimated as a fixed fraction of R.
    pub fn fatalities(&self, mortality_ratio: Real) -> Vec<Real> {
        self.epicurve.fatalities(M::R, mortality_ratio)
    }

    /// Render the epicurve for the current simulation
    pub fn render_epicurve_csv(&self) -> Result<String> {
        self.epicurve.render_csv()
    }
}

/// A simulation of either a SIR or a SEIR model. Used by drivers that only
/// know the kind of model at runtime (e.g., from a config file).
#[derive(Debug, Clone)]
pub enum AnySimulation {
    Sir(Simulation<SIRParams, 3>),
    Seir(Simulation<SEIRParams, 4>),
}

macro_rules! dispatch {
    ($self:expr, $sim:ident => $e:expr) => {
        match $self {
            AnySimulation::Sir($sim) => $e,
            AnySimulation::Seir($sim) => $e,
        }
    };
}

impl AnySimulation {
    /// Run simulation for the given number of steps.
    pub fn run(&mut self, n_steps: usize) -> Result<()> {
        dispatch!(self, sim => sim.run(n_steps).map(|_| ()))
    }

    pub fn n_iter(&self) -> usize {
        dispatch!(self, sim => sim.n_iter())
    }

    pub fn time(&self) -> Time {
        dispatch!(self, sim => sim.model().time())
    }

    pub fn population(&self) -> Real {
        dispatch!(self, sim => sim.model().population())
    }

    pub fn r0(&self) -> Real {
        dispatch!(self, sim => sim.model().r0())
    }

    pub fn schedule(&self) -> &Schedule {
        dispatch!(self, sim => sim.schedule())
    }

    /// Compartment labels, in state order.
    pub fn labels(&self) -> Vec<&'static str> {
        dispatch!(self, sim => sim.epicurve().labels().to_vec())
    }

    /// Current value of all compartments.
    pub fn state(&self) -> Vec<Real> {
        dispatch!(self, sim => sim.model().state().to_vec())
    }

    pub fn infectious_curve(&self) -> Vec<Real> {
        dispatch!(self, sim => sim.infectious_curve())
    }

    pub fn peak_infectious(&self) -> Option<(Time, Real)> {
        dispatch!(self, sim => sim.peak_infectious())
    }

    pub fn cumulative_cases(&self) -> Vec<Real> {
        dispatch!(self, sim => sim.cumulative_cases())
    }

    pub fn fatalities(&self, mortality_ratio: Real) -> Vec<Real> {
        dispatch!(self, sim => sim.fatalities(mortality_ratio))
    }

    pub fn render_csv(&self) -> Result<String> {
        dispatch!(self, sim => sim.render_epicurve_csv())
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        dispatch!(self, sim => sim.epicurve().write_csv(path))
    }
}

impl From<Simulation<SIRParams, 3>> for AnySimulation {
    fn from(sim: Simulation<SIRParams, 3>) -> Self {
        AnySimulation::Sir(sim)
    }
}

impl From<Simulation<SEIRParams, 4>> for AnySimulation {
    fn from(sim: Simulation<SEIRParams, 4>) -> Self {
        AnySimulation::Seir(sim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use assert_approx_eq::assert_approx_eq;

    fn seir() -> Simulation<SEIRParams, 4> {
        let params = SEIRParams::from_r0(3.03, 0.1, 0.4).with_i_threshold(10.0);
        let model = SEIR::new([54960.0, 20.0, 20.0, 0.0], params).unwrap();
        Simulation::new(model, 1.0)
    }

    #[test]
    fn records_initial_state_and_each_step() {
        let mut sim = seir();
        sim.run(30).unwrap();
        assert_eq!(sim.n_iter(), 30);
        assert_eq!(sim.epicurve().len(), 31);
        assert_eq!(sim.epicurve().row(0), Some([54960.0, 20.0, 20.0, 0.0]));
        assert_eq!(sim.epicurve().tip(), Some(*sim.model().state()));
        assert_eq!(sim.epicurve().times()[30], 30.0);
    }

    #[test]
    fn schedule_changes_r0_at_given_day() {
        let schedule: Schedule = vec![
            RegimeChange { day: 0, r0: 2.0 },
            RegimeChange { day: 5, r0: 0.5 },
        ]
        .into_iter()
        .collect();
        let mut sim = seir().with_schedule(schedule);
        assert_approx_eq!(sim.model().r0(), 2.0);
        sim.run(4).unwrap();
        assert_approx_eq!(sim.model().r0(), 2.0);
        sim.run(1).unwrap();
        assert_approx_eq!(sim.model().r0(), 0.5);
    }

    #[test]
    fn schedule_matches_manual_reparameterization() {
        let mut schedule = Schedule::new();
        schedule.insert(3, 0.8);
        let mut sim = seir().with_schedule(schedule);
        sim.run(6).unwrap();

        let mut manual = seir().model().clone();
        manual.advance(2, 1.0);
        manual.set_r0(0.8);
        manual.advance(4, 1.0);
        assert_eq!(sim.model().state(), manual.state());
    }

    #[test]
    fn non_finite_state_is_reported() {
        let model = SIR::new([95.0, 5.0, 0.0], SIRParams::new(0.3, 0.1)).unwrap();
        let mut sim = Simulation::new(model, 1.0);
        sim.model_mut().set_beta(Real::NAN);
        let res = sim.run(3);
        assert!(matches!(res, Err(ModelError::NonFinite { .. })));
        assert_eq!(sim.n_iter(), 1);
        assert_eq!(sim.epicurve().len(), 2);
        assert!(sim.epicurve().tip().unwrap()[0].is_nan());
    }

    #[test]
    fn derived_curves() {
        let mut sim = seir();
        sim.run(200).unwrap();
        let (t, peak) = sim.peak_infectious().unwrap();
        assert!(t > 0.0);
        assert!(peak > 20.0);
        let cases = sim.cumulative_cases();
        let last = sim.epicurve().tip().unwrap();
        assert_approx_eq!(cases[200], last[2] + last[3]);
        assert_approx_eq!(sim.fatalities(0.007)[200], last[3] * 0.007);
        assert_eq!(sim.infectious_curve().len(), 201);
    }

    #[test]
    fn any_simulation_dispatch() {
        let model = SIR::new([95.0, 5.0, 0.0], SIRParams::new(1.0 / 3.0, 1.0 / 14.0)).unwrap();
        let mut sim: AnySimulation = Simulation::new(model, 1.0).into();
        sim.run(1).unwrap();
        assert_eq!(sim.labels(), vec!["S", "I", "R"]);
        assert_eq!(sim.n_iter(), 1);
        assert_eq!(sim.time(), 1.0);
        assert_eq!(sim.population(), 100.0);
        let state = sim.state();
        assert_approx_eq!(state[0], 93.416667, 1e-5);
        let csv = sim.render_csv().unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("time,S,I,R\n0,95,5,0\n"));

        let mut sim: AnySimulation = seir().into();
        sim.run(10).unwrap();
        assert_eq!(sim.labels(), vec!["S", "E", "I", "R"]);
        assert_eq!(sim.infectious_curve().len(), 11);
    }
}
