//! TOML configuration for the simulation binaries.
//!
//! Every field has a default, so partial files (or no file at all) are valid.
//! Defaults describe a small community of 55,000 people at the start of the
//! COVID-19 outbreak.
use crate::{
    error::{check_rate, Result},
    models::{SEIR, SIR},
    params::{self as cte, SEIRParams, SIRParams},
    prelude::Real,
    sim::{AnySimulation, RegimeChange, Schedule, Simulation},
};
use getset::{CopyGetters, Getters, MutGetters, Setters};
use log::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Which compartmental model to simulate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Sir,
    Seir,
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Seir
    }
}

/// Initial compartments. Susceptible is whatever remains of the population.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, CopyGetters, Setters)]
#[serde(default)]
#[getset(get_copy = "pub", set = "pub")]
pub struct InitialState {
    population: Real,
    exposed: Real,
    infectious: Real,
    removed: Real,
}

impl InitialState {
    /// Remaining susceptible individuals for the given model.
    pub fn susceptible(&self, model: ModelKind) -> Real {
        match model {
            ModelKind::Sir => self.population - self.infectious - self.removed,
            ModelKind::Seir => self.population - self.exposed - self.infectious - self.removed,
        }
    }
}

impl Default for InitialState {
    fn default() -> Self {
        InitialState {
            population: 55_000.0,
            exposed: 20.0,
            infectious: 20.0,
            removed: 0.0,
        }
    }
}

// Tables must come after plain values in the TOML output, so `initial` and
// `r0_schedule` are the last fields.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters, MutGetters, Setters)]
#[serde(default)]
pub struct Config {
    #[getset(get_copy = "pub", set = "pub")]
    model: ModelKind,

    /// Number of steps.
    #[getset(get_copy = "pub", set = "pub")]
    num_iter: usize,

    #[getset(get_copy = "pub", set = "pub")]
    dt: Real,

    #[getset(get_copy = "pub", set = "pub")]
    verbose: bool,

    /// Initial reproduction number. Ignored if beta is given.
    #[getset(get_copy = "pub", set = "pub")]
    r0: Real,

    #[getset(set = "pub")]
    #[serde(skip_serializing_if = "Option::is_none")]
    beta: Option<Real>,

    #[getset(get_copy = "pub", set = "pub")]
    gamma: Real,

    #[getset(get_copy = "pub", set = "pub")]
    sigma: Real,

    #[getset(get_copy = "pub", set = "pub")]
    i_threshold: Real,

    #[getset(get_copy = "pub", set = "pub")]
    mortality_ratio: Real,

    /// Path of the CSV file that receives the epicurve.
    #[getset(get = "pub", set = "pub")]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,

    /// Path of a CSV file with observed cases (columns day,cases).
    #[getset(get = "pub", set = "pub")]
    #[serde(skip_serializing_if = "Option::is_none")]
    cases: Option<String>,

    #[getset(get = "pub", get_mut = "pub")]
    initial: InitialState,

    #[getset(get = "pub", get_mut = "pub")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    r0_schedule: Vec<RegimeChange>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelKind::default(),
            num_iter: 365,
            dt: 1.0,
            verbose: false,
            r0: cte::BASIC_REPRODUCTION_NUMBER,
            beta: None,
            gamma: cte::GAMMA,
            sigma: cte::SIGMA,
            i_threshold: 0.0,
            mortality_ratio: cte::MORTALITY_RATIO,
            output: None,
            cases: None,
            initial: InitialState::default(),
            r0_schedule: vec![],
        }
    }
}

impl Config {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Read config from path, or use the default config if the file does not
    /// exist.
    pub fn from_path_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_path(path);
        }
        info!("{} not found, using default config", path.display());
        Ok(Self::default())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Transmission rate: the explicit beta, if given, or r0 * gamma.
    pub fn beta(&self) -> Real {
        self.beta.unwrap_or(self.r0 * self.gamma)
    }

    pub fn sir_params(&self) -> SIRParams {
        SIRParams::new(self.beta(), self.gamma).with_i_threshold(self.i_threshold)
    }

    pub fn seir_params(&self) -> SEIRParams {
        SEIRParams::new(self.beta(), self.gamma, self.sigma).with_i_threshold(self.i_threshold)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::from(self.r0_schedule.as_slice())
    }

    /// Build the simulation described by this config.
    pub fn build(&self) -> Result<AnySimulation> {
        check_rate("dt", self.dt)?;
        let init = &self.initial;
        let s = init.susceptible(self.model);

        let sim: AnySimulation = match self.model {
            ModelKind::Sir => {
                if init.exposed > 0.0 {
                    warn!("SIR model ignores {} exposed individuals", init.exposed);
                }
                let state = [s, init.infectious, init.removed];
                let model = SIR::with_population(state, init.population, self.sir_params())?;
                Simulation::new(model, self.dt)
                    .with_schedule(self.schedule())
                    .into()
            }
            ModelKind::Seir => {
                let state = [s, init.exposed, init.infectious, init.removed];
                let model = SEIR::with_population(state, init.population, self.seir_params())?;
                Simulation::new(model, self.dt)
                    .with_schedule(self.schedule())
                    .into()
            }
        };
        return Ok(sim);
    }
}
