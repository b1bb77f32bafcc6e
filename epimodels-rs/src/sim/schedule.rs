use crate::{epidemic::Compartmental, epidemic::EpiModel, prelude::Real};
use log::*;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, iter::FromIterator};

/// A single entry of a schedule: from `day` on, the reproduction number is
/// `r0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeChange {
    pub day: usize,
    pub r0: Real,
}

/// Changes of the reproduction number keyed by day (i.e., step index).
///
/// The entry for day `d` is applied right before the step that produces day
/// `d`, so it governs the transition from `d - 1` to `d`. An entry for day 0
/// is applied when the schedule is attached to a simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    changes: BTreeMap<usize, Real>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new R0 value for the given day. Replaces any previous
    /// value for the same day.
    pub fn insert(&mut self, day: usize, r0: Real) -> &mut Self {
        self.changes.insert(day, r0);
        return self;
    }

    /// R0 value scheduled for the given day, if any.
    pub fn get(&self, day: usize) -> Option<Real> {
        self.changes.get(&day).copied()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Iterate over all changes, in day order.
    pub fn iter(&self) -> impl Iterator<Item = RegimeChange> + '_ {
        self.changes
            .iter()
            .map(|(&day, &r0)| RegimeChange { day, r0 })
    }

    /// Set beta = r0 * gamma in model if there is a change scheduled for day.
    /// Return the applied R0.
    pub fn apply<M, const N: usize>(
        &self,
        day: usize,
        model: &mut Compartmental<M, N>,
    ) -> Option<Real>
    where
        M: EpiModel<N>,
    {
        let r0 = self.get(day)?;
        model.set_r0(r0);
        info!("Changing R0 to {} after {} days", r0, day);
        Some(r0)
    }
}

impl FromIterator<RegimeChange> for Schedule {
    fn from_iter<I: IntoIterator<Item = RegimeChange>>(iter: I) -> Self {
        let mut schedule = Schedule::new();
        for change in iter {
            schedule.insert(change.day, change.r0);
        }
        return schedule;
    }
}

impl From<&[RegimeChange]> for Schedule {
    fn from(changes: &[RegimeChange]) -> Self {
        changes.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lookup_by_day() {
        let mut schedule = Schedule::new();
        schedule.insert(27, 0.72).insert(63, 0.51).insert(27, 0.75);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.get(27), Some(0.75));
        assert_eq!(schedule.get(28), None);
        let days: Vec<_> = schedule.iter().map(|c| c.day).collect();
        assert_eq!(days, vec![27, 63]);
    }

    #[test]
    fn apply_sets_beta_from_gamma() {
        let schedule: Schedule = vec![RegimeChange { day: 3, r0: 0.9 }].into_iter().collect();
        let mut model = SIR::new([99.0, 1.0, 0.0], SIRParams::from_r0(3.0, 0.1)).unwrap();
        assert_eq!(schedule.apply(2, &mut model), None);
        assert_approx_eq!(model.r0(), 3.0);
        assert_eq!(schedule.apply(3, &mut model), Some(0.9));
        assert_approx_eq!(model.beta(), 0.09);
        assert_approx_eq!(model.r0(), 0.9);
    }
}
