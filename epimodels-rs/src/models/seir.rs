//! The SEIR model, with an Exposed (latent) compartment between S and I.
//!
//! ```text
//! dS/dt = -beta * S * I / N
//! dE/dt =  beta * S * I / N - sigma * E
//! dI/dt =  sigma * E - gamma * I
//! dR/dt =  gamma * I
//! ```
//!
//! Differently from SIR, the floor clamp on I takes the deficit from E and R,
//! since Exposed is the compartment that feeds Infectious.
use crate::{epidemic::Compartmental, params::SEIRParams, prelude::Real};

/// Type alias for the Susceptible, Exposed, Infectious, Removed model.
pub type SEIR = Compartmental<SEIRParams, 4>;

impl SEIR {
    /// Inverse of the mean latent period.
    pub fn sigma(&self) -> Real {
        self.params().sigma()
    }

    /// Reassign sigma in place. Meant to be called between steps.
    pub fn set_sigma(&mut self, value: Real) -> &mut Self {
        self.params_mut().set_sigma(value);
        return self;
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn can_construct() {
        let params = SEIRParams::new(0.5, 0.1, 0.2);
        let model = SEIR::new([90.0, 2.0, 1.0, 0.0], params).unwrap();
        assert_eq!(model.seir(), (90.0, 2.0, 1.0, 0.0));
        assert_eq!(model.population(), 93.0);
        assert_eq!(model.gamma(), 0.1);
        assert_eq!(model.sigma(), 0.2);
    }

    #[test]
    fn clamp_absorbs_into_exposed_and_removed() {
        let params = SEIRParams::new(0.5, 0.1, 0.2).with_i_threshold(1.0);
        let mut model = SEIR::new([90.0, 0.0, 1.0, 0.0], params).unwrap();
        model.step(1.0);

        // I would fall to 0.9, deficit 0.1 split between E and R.
        let infections = 0.5 * 90.0 / 91.0;
        assert_eq!(model.i(), 1.0);
        assert_approx_eq!(model.s(), 90.0 - infections, 1e-12);
        assert_approx_eq!(model.e(), infections + 0.05, 1e-12);
        assert_approx_eq!(model.r(), 0.1 + 0.05, 1e-12);
        assert_eq!(model.time(), 1.0);
    }

    #[test]
    fn update_gives_expected_trends() {
        let params = SEIRParams::from_r0(3.03, 0.1, 0.4);
        let mut model = SEIR::new([54960.0, 20.0, 20.0, 0.0], params).unwrap();
        for _ in 0..365 {
            let (s, _, _, r) = model.seir();
            model.step(1.0);
            assert!(model.s() <= s);
            assert!(model.r() >= r);
            assert_approx_eq!(model.total(), 55000.0, 1e-6);
        }
    }

    #[test]
    fn reparameterize_mid_run() {
        let params = SEIRParams::from_r0(3.0, 0.1, 0.2);
        let mut model = SEIR::new([990.0, 0.0, 10.0, 0.0], params).unwrap();
        model.advance(10, 1.0);
        model.set_r0(0.5).set_sigma(0.25);
        assert_approx_eq!(model.r0(), 0.5);
        assert_approx_eq!(model.beta(), 0.05);
        assert_eq!(model.sigma(), 0.25);
        model.set_gamma(0.2);
        assert_approx_eq!(model.r0(), 0.25);
    }

    #[test]
    fn zero_step_is_identity() {
        let params = SEIRParams::default().with_i_threshold(1.0);
        let mut model = SEIR::new([900.0, 50.0, 40.0, 10.0], params).unwrap();
        model.advance(5, 0.5);
        let before = model.clone();
        model.step(0.0);
        assert_eq!(model, before);
        assert_eq!(model.time(), 2.5);
    }

    #[test]
    fn variable_time_step() {
        let mut a = SEIR::new([990.0, 5.0, 5.0, 0.0], SEIRParams::default()).unwrap();
        a.step(0.5);
        a.step(1.5);
        assert_eq!(a.time(), 2.0);
        assert!(a.is_finite());
    }

    #[test]
    fn degenerate_population() {
        let res = SEIR::with_population([0.0; 4], 0.0, SEIRParams::default());
        assert!(matches!(res, Err(ModelError::DegenerateModel(_))));
    }
}
