use super::EpiModel;
use crate::{
    error::{check_non_negative, ModelError, Result},
    prelude::{Real, Time},
    solver,
};
use getset::{CopyGetters, Getters, MutGetters};
use log::*;
use paste::paste;

/// Generic compartmental integrator.
///
/// Stores the N compartments, the total population fixed at construction,
/// the elapsed time and the rate parameters M, which also define the
/// derivatives of the system. Concrete models are type aliases, e.g.,
/// `SIR = Compartmental<SIRParams, 3>`.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, MutGetters)]
pub struct Compartmental<M, const N: usize> {
    /// Current value of each compartment, in M::LABELS order.
    #[getset(get = "pub")]
    state: [Real; N],

    /// Total population. Computed once and never updated.
    #[getset(get_copy = "pub")]
    population: Real,

    /// Time elapsed since construction.
    #[getset(get_copy = "pub")]
    time: Time,

    #[getset(get = "pub", get_mut = "pub")]
    params: M,
}

/// Delegate parameter accessors to the EpiModel implementation.
macro_rules! delegate_params {
    ($($name:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = "Current value of `" $name "`."]
                pub fn $name(&self) -> Real {
                    self.params.$name()
                }

                #[doc = "Reassign `" $name "` in place. Meant to be called between steps."]
                pub fn [<set_ $name>](&mut self, value: Real) -> &mut Self {
                    self.params.[<set_ $name>](value);
                    return self;
                }
            )*
        }
    };
}

impl<M: EpiModel<N>, const N: usize> Compartmental<M, N> {
    /// Create a new model from initial compartments. The total population is
    /// the sum of the initial values.
    pub fn new(state: [Real; N], params: M) -> Result<Self> {
        let population: Real = state.iter().sum();
        Self::with_population(state, population, params)
    }

    /// Create a new model with an explicit total population.
    ///
    /// Fails with DegenerateModel if population is not positive, and with
    /// InvalidParameter if any compartment is negative or rates are not
    /// positive. An infectious compartment starting below the clamp floor is
    /// accepted and raised to it by the first step.
    pub fn with_population(state: [Real; N], population: Real, params: M) -> Result<Self> {
        for (&name, &value) in M::LABELS.iter().zip(state.iter()) {
            check_non_negative(name, value)?;
        }
        if !(population.is_finite() && population > 0.0) {
            return Err(ModelError::DegenerateModel(population));
        }
        params.validate()?;

        Ok(Compartmental {
            state,
            population,
            time: 0.0,
            params,
        })
    }

    /// Advance model by dt using the explicit Euler method.
    ///
    /// All derivatives are evaluated on the pre-step state. The floor clamp
    /// is applied afterwards, on the updated infectious value. Hence step(0)
    /// leaves the state untouched only while I is at or above the floor.
    pub fn step(&mut self, dt: Real) {
        let derivs = self.params.derivatives(&self.state, self.population);
        solver::euler_step(&mut self.state, &derivs, dt);
        self.time += dt;

        let floor = self.params.i_threshold();
        let adjustment = solver::floor_clamp(&mut self.state, M::I, M::ABSORBERS, floor);
        if adjustment > 0.0 {
            debug!(
                "t = {}: infectious clamped to {} ({} added to {} and {})",
                self.time,
                floor,
                adjustment,
                M::LABELS[M::ABSORBERS.0],
                M::LABELS[M::ABSORBERS.1],
            );
        }
        trace!("t = {}: {:?}", self.time, self.state);
    }

    /// Execute n_steps calls to step(dt).
    pub fn advance(&mut self, n_steps: usize, dt: Real) -> &mut Self {
        for _ in 0..n_steps {
            self.step(dt);
        }
        return self;
    }

    /// Return the value of the i-th compartment.
    pub fn compartment(&self, i: usize) -> Option<Real> {
        self.state.get(i).copied()
    }

    /// Sum of all compartments. Differs from population() only by
    /// floating point drift or by mass added by the floor clamp.
    pub fn total(&self) -> Real {
        self.state.iter().sum()
    }

    /// False if any compartment became NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.state.iter().all(|x| x.is_finite())
    }

    /// Basic reproduction number, beta / gamma.
    pub fn r0(&self) -> Real {
        self.params.r0()
    }

    /// Set beta = value * gamma.
    pub fn set_r0(&mut self, value: Real) -> &mut Self {
        self.params.set_r0(value);
        return self;
    }

    delegate_params!(beta, gamma, i_threshold);
}
